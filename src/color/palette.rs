use indexmap::IndexMap;

use crate::group::{GroupRegistry, Series};
use crate::metric::{self, MetricType, SIGNAL_STRENGTH_LEVELS};

use super::ChartColor;

/// Ordered value to color mapping attached to a series.
pub type ColorTable = IndexMap<String, ChartColor>;

/// Categorical colors handed out in turn to `on` states and open-domain values.
pub const CATEGORY_PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Colors for [`SIGNAL_STRENGTH_LEVELS`], index for index.
pub const SIGNAL_STRENGTH_COLORS: [&str; 5] = ["white", "red", "orange", "yellow", "green"];

/// Color of the `off` state of boolean metrics.
pub const OFF_COLOR: &str = "white";

/// Attaches a [`ColorTable`] to every series of a registry.
pub trait ColorAssigner {
    fn assign(&self, registry: &mut GroupRegistry);
}

/// Default assigner: fixed colors for known domains, palette rotation for the rest.
///
/// Values observed outside a fixed domain still get a palette color, after the
/// domain entries.
///
/// One palette cursor is shared across the whole registry, so neighbouring
/// series get different colors for their `on` state.
#[derive(Debug, Clone)]
pub struct PaletteColorAssigner {
    palette: Vec<ChartColor>,
}

impl PaletteColorAssigner {
    #[must_use]
    pub fn new() -> Self {
        Self::with_palette(CATEGORY_PALETTE.iter().map(|c| ChartColor::hex(c)).collect())
    }

    /// Use a custom rotation. An empty palette falls back to the default one.
    #[must_use]
    pub fn with_palette(palette: Vec<ChartColor>) -> Self {
        if palette.is_empty() {
            return Self::new();
        }
        Self { palette }
    }

    fn table_for(&self, series: &Series, cursor: &mut usize) -> ColorTable {
        let mut next_color = || {
            let color = self.palette[*cursor % self.palette.len()].clone();
            *cursor += 1;
            color
        };

        let mut table: ColorTable = if metric::is_signal_strength(&series.name) {
            SIGNAL_STRENGTH_LEVELS
                .iter()
                .zip(SIGNAL_STRENGTH_COLORS)
                .map(|(level, color)| ((*level).to_string(), ChartColor::named(color)))
                .collect()
        } else if series.metric_type == MetricType::Bool {
            let mut table = ColorTable::new();
            table.insert("off".to_string(), ChartColor::named(OFF_COLOR));
            table.insert("on".to_string(), next_color());
            table
        } else {
            ColorTable::new()
        };

        // Observed values outside the fixed domain (or every value of an
        // open domain) follow in first-appearance order.
        if series.is_discrete() {
            for value in series.distinct_values() {
                if !table.contains_key(value) {
                    table.insert(value.to_string(), next_color());
                }
            }
        }
        table
    }
}

impl Default for PaletteColorAssigner {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorAssigner for PaletteColorAssigner {
    fn assign(&self, registry: &mut GroupRegistry) {
        let mut cursor = 0;
        for group in registry.iter_mut() {
            for series in &mut group.series {
                series.colors = self.table_for(series, &mut cursor);
            }
        }
    }
}

#[cfg(test)]
#[path = "palette_tests.rs"]
mod tests;
