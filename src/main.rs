use clap::Parser;

use bar_data::cli::{Cli, Commands};
use bar_data::commands::{run_groups, run_init, run_legend};

fn init_logging(cli: &Cli) {
    // RUST_LOG, when set, takes precedence over -v.
    let _ = env_logger::Builder::new()
        .filter_level(cli.log_level())
        .format_target(false)
        .parse_default_env()
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let exit_code = match &cli.command {
        Commands::Groups(args) => run_groups(args, cli.no_config),
        Commands::Legend(args) => run_legend(args, cli.no_config),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
