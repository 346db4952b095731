use serde::Serialize;

use crate::color::ChartColor;
use crate::group::Series;

/// One swatch of a legend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub color: ChartColor,
    pub value: String,
}

impl LegendEntry {
    #[must_use]
    pub fn new(color: ChartColor, value: impl Into<String>) -> Self {
        Self {
            color,
            value: value.into(),
        }
    }
}

/// Serializable view of a legend entry.
#[derive(Debug, Serialize)]
pub(crate) struct LegendRow<'a> {
    pub value: &'a str,
    pub color: &'a str,
}

impl<'a> From<&'a LegendEntry> for LegendRow<'a> {
    fn from(entry: &'a LegendEntry) -> Self {
        Self {
            value: &entry.value,
            color: entry.color.to_css(),
        }
    }
}

/// Legend of one series: observed values in color-table order.
///
/// Continuous series have an empty color table and therefore no legend.
#[must_use]
pub fn series_legend(series: &Series) -> Vec<LegendEntry> {
    if !series.is_discrete() {
        return Vec::new();
    }
    let observed = series.distinct_values();
    series
        .colors
        .iter()
        .filter(|(value, _)| observed.contains(value.as_str()))
        .map(|(value, color)| LegendEntry::new(color.clone(), value.as_str()))
        .collect()
}

#[cfg(test)]
#[path = "legend_tests.rs"]
mod tests;
