use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::bar_data::BarDataOptions;
use crate::error::{BarDataError, Result};
use crate::ingest::IngestOptions;

/// Bar chart view configuration, usually read from `.bar-data.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ViewConfig {
    /// Opaque selection hint handed to the bar data as-is.
    #[serde(default)]
    pub initial_selection: Option<String>,

    /// Opaque flag handed to the bar data as-is.
    #[serde(default)]
    pub flag: bool,

    /// Groups that start hidden (`true` = hidden).
    #[serde(default)]
    pub hidden: HashMap<String, bool>,

    /// Group priority, highest first.
    #[serde(default)]
    pub order: Vec<String>,

    /// Log start time in milliseconds. Defaults to the earliest record.
    #[serde(default)]
    pub reference_ms: Option<i64>,

    /// Merge adjacent entries with equal values during ingestion.
    #[serde(default)]
    pub merge_adjacent: bool,
}

impl ViewConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    /// Returns an error if the TOML is invalid or fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns a `Config` error if a group appears twice in `order`.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for name in &self.order {
            if !seen.insert(name.as_str()) {
                return Err(BarDataError::Config(format!(
                    "Group '{name}' appears more than once in order"
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn bar_data_options(&self) -> BarDataOptions {
        BarDataOptions {
            initial_selection: self.initial_selection.clone(),
            flag: self.flag,
        }
    }

    #[must_use]
    pub const fn ingest_options(&self) -> IngestOptions {
        IngestOptions {
            merge_adjacent: self.merge_adjacent,
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
