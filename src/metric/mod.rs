//! Metric types and the value domains of discrete metrics.

mod semantics;

pub use semantics::{
    BOOL_DOMAIN, MetricType, SIGNAL_STRENGTH_LEVELS, is_discrete, is_signal_strength,
    normalize_value, value_domain,
};
