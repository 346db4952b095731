use crate::error::{BarDataError, Result};
use crate::metric::MetricType;

const FIELD_COUNT: usize = 6;
const HEADER_FIRST_FIELD: &str = "metric";

/// One raw line of a history log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub metric: String,
    pub metric_type: MetricType,
    pub start_ms: i64,
    pub end_ms: i64,
    pub value: String,
    /// Trailing free-form column, kept verbatim for callers. Ingestion ignores it.
    pub opt: Option<String>,
}

fn malformed(line: usize, reason: impl Into<String>) -> BarDataError {
    BarDataError::MalformedRecord {
        line,
        reason: reason.into(),
    }
}

fn parse_time(field: &str, name: &str, line: usize) -> Result<i64> {
    field
        .trim()
        .parse::<i64>()
        .map_err(|_| malformed(line, format!("invalid {name} '{}'", field.trim())))
}

/// Parse a single record. `line` is 1-based and only used for error messages.
///
/// # Errors
/// Returns `MalformedRecord` if a field is missing, a time is not an integer,
/// the type is unknown, or the interval ends before it starts.
pub fn parse_record(text: &str, line: usize) -> Result<LogRecord> {
    // The last column swallows any remaining commas.
    let mut fields = text.splitn(FIELD_COUNT, ',');
    let mut next = |name: &str| {
        fields
            .next()
            .ok_or_else(|| malformed(line, format!("missing {name}")))
    };

    let metric = next("metric")?.trim();
    if metric.is_empty() {
        return Err(malformed(line, "empty metric name"));
    }
    let metric_type = next("type")?
        .parse::<MetricType>()
        .map_err(|e| malformed(line, e))?;
    let start_ms = parse_time(next("start time")?, "start time", line)?;
    let end_ms = parse_time(next("end time")?, "end time", line)?;
    let value = next("value")?.trim().to_string();
    let opt = fields
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);

    if end_ms < start_ms {
        return Err(malformed(
            line,
            format!("end time {end_ms} is before start time {start_ms}"),
        ));
    }

    Ok(LogRecord {
        metric: metric.to_string(),
        metric_type,
        start_ms,
        end_ms,
        value,
        opt,
    })
}

/// Parse every record of a log, skipping blank lines and the header.
///
/// # Errors
/// Returns the first `MalformedRecord` encountered.
pub fn parse_records(text: &str) -> Result<Vec<LogRecord>> {
    let mut records = Vec::new();
    let mut header_checked = false;

    for (idx, raw) in text.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        // Only the first non-blank line may be a header.
        let may_be_header = !std::mem::replace(&mut header_checked, true);
        if may_be_header
            && trimmed
                .split(',')
                .next()
                .is_some_and(|f| f.trim().eq_ignore_ascii_case(HEADER_FIRST_FIELD))
        {
            continue;
        }
        records.push(parse_record(trimmed, idx + 1)?);
    }

    Ok(records)
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
