use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BarDataError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed log record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BarDataError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
