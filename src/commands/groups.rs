use std::cell::Cell;
use std::rc::Rc;

use log::{info, warn};

use crate::cli::GroupsArgs;
use crate::{EXIT_ERROR, EXIT_SUCCESS, Result};

use super::load_bar_data;

#[must_use]
pub fn run_groups(args: &GroupsArgs, no_config: bool) -> i32 {
    match run_groups_impl(args, no_config) {
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

/// Apply `--hide` then `--show` toggles and render the visible groups.
///
/// # Errors
/// Returns an error if loading or formatting fails.
pub fn run_groups_impl(args: &GroupsArgs, no_config: bool) -> Result<String> {
    let mut data = load_bar_data(&args.input, no_config)?;

    let changes = Rc::new(Cell::new(0_usize));
    let counter = Rc::clone(&changes);
    data.register_listener(move || counter.set(counter.get() + 1));

    for name in args.hide.iter().chain(&args.show) {
        if !data.registry().contains(name) {
            warn!("Unknown group '{name}'");
        }
    }
    for name in &args.hide {
        data.remove_group(name);
    }
    for name in &args.show {
        data.add_group(name);
    }
    info!("Applied {} visibility change(s)", changes.get());

    args.input.format.formatter().format_groups(&data.data())
}

#[cfg(test)]
#[path = "groups_tests.rs"]
mod tests;
