use tempfile::TempDir;

use super::*;
use crate::cli::InitArgs;
use crate::config::ViewConfig;

#[test]
fn template_is_valid_config() {
    let config = ViewConfig::from_toml_str(&generate_config_template()).unwrap();
    assert_eq!(config.order.first().map(String::as_str), Some("Screen"));
    assert_eq!(config.hidden.get("Voltage"), Some(&true));
}

#[test]
fn init_writes_file() {
    let dir = TempDir::new().unwrap();
    let args = InitArgs {
        output: dir.path().join("view.toml"),
        force: false,
    };

    run_init_impl(&args).unwrap();
    let content = std::fs::read_to_string(&args.output).unwrap();
    assert!(content.contains("order"));
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("view.toml");
    std::fs::write(&output, "# mine\n").unwrap();

    let args = InitArgs {
        output: output.clone(),
        force: false,
    };
    let err = run_init_impl(&args).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "# mine\n");
}

#[test]
fn init_force_overwrites() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("view.toml");
    std::fs::write(&output, "# mine\n").unwrap();

    let args = InitArgs {
        output: output.clone(),
        force: true,
    };
    run_init_impl(&args).unwrap();
    assert!(std::fs::read_to_string(&output).unwrap().contains("[hidden]"));
}
