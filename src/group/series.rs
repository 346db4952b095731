use indexmap::IndexSet;

use crate::color::ColorTable;
use crate::metric::{self, MetricType};

/// One logged interval of a metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub start_ms: i64,
    pub end_ms: i64,
    pub value: String,
}

impl Entry {
    #[must_use]
    pub fn new(start_ms: i64, end_ms: i64, value: impl Into<String>) -> Self {
        Self {
            start_ms,
            end_ms,
            value: value.into(),
        }
    }
}

/// Time-ordered intervals of a single metric.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub metric_type: MetricType,
    pub entries: Vec<Entry>,
    /// Value to color mapping; empty until a color assigner has run.
    pub colors: ColorTable,
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>, metric_type: MetricType) -> Self {
        Self {
            name: name.into(),
            metric_type,
            entries: Vec::new(),
            colors: ColorTable::new(),
        }
    }

    #[must_use]
    pub fn with_entries(mut self, entries: Vec<Entry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Distinct values in order of first appearance.
    #[must_use]
    pub fn distinct_values(&self) -> IndexSet<&str> {
        self.entries.iter().map(|e| e.value.as_str()).collect()
    }

    #[must_use]
    pub fn is_discrete(&self) -> bool {
        metric::is_discrete(&self.name, self.metric_type)
    }
}

#[cfg(test)]
#[path = "series_tests.rs"]
mod tests;
