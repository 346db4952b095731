//! Battery history log ingestion.
//!
//! Turns `metric,type,start_ms,end_ms,value[,opt]` records into a
//! [`GroupRegistry`](crate::group::GroupRegistry) with one group per metric.

mod builder;
mod record;

pub use builder::{IngestOptions, ParsedLog, ingest};
pub use record::{LogRecord, parse_record, parse_records};
