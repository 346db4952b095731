mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::bar_data::LegendEntry;
use crate::error::Result;
use crate::group::SeriesGroup;

/// Trait for rendering bar data views into various output formats.
pub trait OutputFormatter {
    /// Format the visible groups with their render indexes.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_groups(&self, groups: &[&SeriesGroup]) -> Result<String>;

    /// Format the legend of one group.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_legend(&self, group: &str, legend: &[LegendEntry]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
