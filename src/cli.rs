use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "bar-data")]
#[command(author, version, about = "Inspect battery log bar chart groups and legends")]
#[command(long_about = "Loads a battery history log, applies a view configuration and prints \
    the visible bar chart groups or the color legend of a group.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    2 - Configuration, input or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Skip loading the configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level for the `-v` count; `RUST_LOG` may still override it.
    #[must_use]
    pub const fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List visible groups with their render index
    Groups(GroupsArgs),

    /// Print the value-to-color legend of a group
    Legend(LegendArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

/// Options shared by commands that read a log.
#[derive(Args, Debug)]
pub struct LogArgs {
    /// History log (CSV: metric,type,start_ms,end_ms,value[,opt])
    pub log: PathBuf,

    /// Path to configuration file (default: .bar-data.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log start time in milliseconds (overrides config)
    #[arg(long)]
    pub reference_ms: Option<i64>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct GroupsArgs {
    #[command(flatten)]
    pub input: LogArgs,

    /// Hide a group (repeatable, applied before --show)
    #[arg(long = "hide", value_name = "GROUP")]
    pub hide: Vec<String>,

    /// Show a group (repeatable)
    #[arg(long = "show", value_name = "GROUP")]
    pub show: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct LegendArgs {
    #[command(flatten)]
    pub input: LogArgs,

    /// Group to describe
    pub group: String,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".bar-data.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
