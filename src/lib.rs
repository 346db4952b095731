//! View-state model for the bar chart of a battery history visualizer.
//!
//! [`bar_data::BarData`] tracks which metric groups are shown, assigns their
//! render indexes and derives value legends. The remaining modules feed it:
//! log ingestion, color assignment and view configuration.

pub mod bar_data;
pub mod cli;
pub mod color;
pub mod commands;
pub mod config;
pub mod error;
pub mod group;
pub mod ingest;
pub mod metric;
pub mod output;

pub use bar_data::{BarData, BarDataOptions, LegendEntry};
pub use error::{BarDataError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
