use serde::{Deserialize, Serialize};

/// Value kind of a metric, as declared by the type column of a history log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    Bool,
    Int,
    #[default]
    String,
}

impl MetricType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::String => "string",
        }
    }
}

impl std::str::FromStr for MetricType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bool" => Ok(Self::Bool),
            "int" => Ok(Self::Int),
            // History logs tag service and summary rows separately; both carry string values.
            "string" | "service" | "summary" => Ok(Self::String),
            _ => Err(format!("Unknown metric type: {s}")),
        }
    }
}

impl std::fmt::Display for MetricType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signal strength levels, weakest first.
pub static SIGNAL_STRENGTH_LEVELS: [&str; 5] = ["none", "poor", "moderate", "good", "great"];

/// Boolean values, off first.
pub static BOOL_DOMAIN: [&str; 2] = ["off", "on"];

/// Whether the metric reports a signal strength level (phone, wifi, ...).
#[must_use]
pub fn is_signal_strength(metric_name: &str) -> bool {
    metric_name
        .trim()
        .to_lowercase()
        .ends_with("signal strength")
}

/// Canonical ordered domain for metrics whose values come from a fixed set.
///
/// Returns `None` for open-domain strings and continuous integers.
#[must_use]
pub fn value_domain(metric_name: &str, metric_type: MetricType) -> Option<&'static [&'static str]> {
    if is_signal_strength(metric_name) {
        Some(&SIGNAL_STRENGTH_LEVELS[..])
    } else if metric_type == MetricType::Bool {
        Some(&BOOL_DOMAIN[..])
    } else {
        None
    }
}

/// Whether values of this metric are categories rather than magnitudes.
#[must_use]
pub fn is_discrete(metric_name: &str, metric_type: MetricType) -> bool {
    value_domain(metric_name, metric_type).is_some() || metric_type != MetricType::Int
}

/// Map a raw logged value onto the metric's canonical spelling.
///
/// Booleans become `off`/`on`, numeric signal levels become their label.
/// Anything unrecognized is only trimmed.
#[must_use]
pub fn normalize_value(metric_name: &str, metric_type: MetricType, raw: &str) -> String {
    let trimmed = raw.trim();

    if is_signal_strength(metric_name) {
        if let Some(label) = trimmed
            .parse::<usize>()
            .ok()
            .and_then(|level| SIGNAL_STRENGTH_LEVELS.get(level))
        {
            return (*label).to_string();
        }
        return trimmed.to_lowercase();
    }

    if metric_type == MetricType::Bool {
        match trimmed.to_lowercase().as_str() {
            "true" | "1" | "on" => return BOOL_DOMAIN[1].to_string(),
            "false" | "0" | "off" => return BOOL_DOMAIN[0].to_string(),
            _ => {}
        }
    }

    trimmed.to_string()
}

#[cfg(test)]
#[path = "semantics_tests.rs"]
mod tests;
