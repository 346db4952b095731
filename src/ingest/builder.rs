use log::warn;

use crate::group::{Entry, GroupRegistry, Series, SeriesGroup};
use crate::metric;

use super::LogRecord;

/// Ingestion knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestOptions {
    /// Fold an entry into its predecessor when it continues it with the same value.
    pub merge_adjacent: bool,
}

/// Result of ingesting a history log.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLog {
    /// Log start time; no entry begins before it.
    pub reference_ms: i64,
    /// One group per metric, in order of first appearance.
    pub name_to_bar_group: GroupRegistry,
}

/// Group records by metric into series.
///
/// Entries ending before `reference_ms` are dropped and entries starting
/// before it are clamped to it. The first record of a metric fixes its type;
/// later records that disagree are skipped.
#[must_use]
pub fn ingest(records: &[LogRecord], reference_ms: i64, options: &IngestOptions) -> ParsedLog {
    let mut registry = GroupRegistry::new();

    for record in records {
        if record.end_ms < reference_ms {
            continue;
        }

        if !registry.contains(&record.metric) {
            registry.insert(
                SeriesGroup::new(record.metric.as_str())
                    .with_series(Series::new(record.metric.as_str(), record.metric_type)),
            );
        }
        let Some(series) = registry
            .get_mut(&record.metric)
            .and_then(|g| g.series.first_mut())
        else {
            continue;
        };

        if series.metric_type != record.metric_type {
            warn!(
                "Skipping {} record for metric '{}' declared as {}",
                record.metric_type, record.metric, series.metric_type
            );
            continue;
        }

        let value = metric::normalize_value(&record.metric, record.metric_type, &record.value);
        let entry = Entry::new(record.start_ms.max(reference_ms), record.end_ms, value);
        push_entry(series, entry, options.merge_adjacent);
    }

    ParsedLog {
        reference_ms,
        name_to_bar_group: registry,
    }
}

fn push_entry(series: &mut Series, entry: Entry, merge_adjacent: bool) {
    if merge_adjacent
        && let Some(last) = series.entries.last_mut()
        && last.end_ms == entry.start_ms
        && last.value == entry.value
    {
        last.end_ms = entry.end_ms;
        return;
    }
    series.push(entry);
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
