use std::fs;

use log::info;

use crate::bar_data::BarData;
use crate::cli::LogArgs;
use crate::color::{ColorAssigner, PaletteColorAssigner};
use crate::config::{ConfigLoader, FileConfigLoader, ViewConfig};
use crate::error::{BarDataError, Result};
use crate::ingest::{ingest, parse_records};

fn load_config(input: &LogArgs, no_config: bool) -> Result<ViewConfig> {
    if no_config {
        return Ok(ViewConfig::default());
    }
    let loader = FileConfigLoader::new();
    match &input.config {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

/// Read the log and configuration named by `input` and build the bar data.
///
/// The reference time is, in order of precedence: `--reference-ms`, the
/// config's `reference_ms`, the earliest record start.
///
/// # Errors
/// Returns an error if the config or the log cannot be read or parsed.
pub fn load_bar_data(input: &LogArgs, no_config: bool) -> Result<BarData> {
    let config = load_config(input, no_config)?;

    let text = fs::read_to_string(&input.log).map_err(|source| BarDataError::FileRead {
        path: input.log.clone(),
        source,
    })?;
    let records = parse_records(&text)?;

    let reference_ms = input
        .reference_ms
        .or(config.reference_ms)
        .unwrap_or_else(|| records.iter().map(|r| r.start_ms).min().unwrap_or(0));

    let parsed = ingest(&records, reference_ms, &config.ingest_options());
    let mut registry = parsed.name_to_bar_group;
    PaletteColorAssigner::new().assign(&mut registry);
    info!(
        "Loaded {} records into {} groups from {}",
        records.len(),
        registry.len(),
        input.log.display()
    );

    Ok(BarData::new(
        registry,
        &config.hidden,
        config.order.iter().cloned(),
        config.bar_data_options(),
    ))
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
