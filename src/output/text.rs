use std::fmt::Write;

use crate::bar_data::LegendEntry;
use crate::error::Result;
use crate::group::SeriesGroup;

use super::OutputFormatter;

/// Plain, line-oriented output.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format_groups(&self, groups: &[&SeriesGroup]) -> Result<String> {
        let mut output = String::new();

        for group in groups {
            let series_count = group.series.len();
            let _ = writeln!(
                output,
                "[{}] {} ({} series, {} entries)",
                group.index,
                group.name,
                series_count,
                group.entry_count()
            );
        }

        let noun = if groups.len() == 1 { "group" } else { "groups" };
        let _ = writeln!(output, "{} visible {noun}", groups.len());
        Ok(output)
    }

    fn format_legend(&self, group: &str, legend: &[LegendEntry]) -> Result<String> {
        if legend.is_empty() {
            return Ok(format!("No legend for {group}\n"));
        }

        let mut output = format!("{group}\n");
        for entry in legend {
            let _ = writeln!(output, "  {}: {}", entry.value, entry.color);
        }
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
