use std::fs;

use crate::{BarDataError, EXIT_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(BarDataError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# bar-data view configuration

# Group priority, highest first. Earlier groups get higher render indexes.
# Groups not listed here rank below all listed ones.
order = ["Screen", "Phone signal strength", "Temperature", "Voltage", "Battery level"]

# Log start time in milliseconds. Defaults to the earliest record.
# reference_ms = 0

# Merge back-to-back entries with the same value while reading the log.
merge_adjacent = false

# Passed through to the view unchanged.
# initial_selection = "Screen"
flag = false

# Groups hidden when the view opens.
[hidden]
Voltage = true
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
