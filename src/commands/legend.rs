use crate::cli::LegendArgs;
use crate::{EXIT_ERROR, EXIT_SUCCESS, Result};

use super::load_bar_data;

#[must_use]
pub fn run_legend(args: &LegendArgs, no_config: bool) -> i32 {
    match run_legend_impl(args, no_config) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Render the legend of one group.
///
/// # Errors
/// Returns an error if loading or formatting fails.
pub fn run_legend_impl(args: &LegendArgs, no_config: bool) -> Result<String> {
    let data = load_bar_data(&args.input, no_config)?;
    let legend = data.legend(&args.group);
    args.input.format.formatter().format_legend(&args.group, &legend)
}

#[cfg(test)]
#[path = "legend_tests.rs"]
mod tests;
