use serde::Serialize;

use crate::bar_data::{LegendEntry, LegendRow};
use crate::error::Result;
use crate::group::{Entry, SeriesGroup};

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct GroupsOutput<'a> {
    visible: usize,
    groups: Vec<GroupRow<'a>>,
}

#[derive(Serialize)]
struct GroupRow<'a> {
    name: &'a str,
    index: usize,
    series: Vec<SeriesRow<'a>>,
}

#[derive(Serialize)]
struct SeriesRow<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    metric_type: &'static str,
    entries: Vec<EntryRow<'a>>,
}

#[derive(Serialize)]
struct EntryRow<'a> {
    start_ms: i64,
    end_ms: i64,
    value: &'a str,
}

#[derive(Serialize)]
struct LegendOutput<'a> {
    group: &'a str,
    legend: Vec<LegendRow<'a>>,
}

fn convert_entry(entry: &Entry) -> EntryRow<'_> {
    EntryRow {
        start_ms: entry.start_ms,
        end_ms: entry.end_ms,
        value: &entry.value,
    }
}

fn convert_group<'a>(group: &'a SeriesGroup) -> GroupRow<'a> {
    GroupRow {
        name: &group.name,
        index: group.index,
        series: group
            .series
            .iter()
            .map(|s| SeriesRow {
                name: &s.name,
                metric_type: s.metric_type.as_str(),
                entries: s.entries.iter().map(convert_entry).collect(),
            })
            .collect(),
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_groups(&self, groups: &[&SeriesGroup]) -> Result<String> {
        let output = GroupsOutput {
            visible: groups.len(),
            groups: groups.iter().map(|g| convert_group(g)).collect(),
        };
        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }

    fn format_legend(&self, group: &str, legend: &[LegendEntry]) -> Result<String> {
        let output = LegendOutput {
            group,
            legend: legend.iter().map(LegendRow::from).collect(),
        };
        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
