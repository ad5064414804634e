//! Error types for the InsightLens library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for InsightLens operations.
#[derive(Debug, Error)]
pub enum InsightError {
    /// Input has no header row or no data row.
    #[error(
        "Malformed input: expected a header row and at least one data row, found {lines} non-empty line(s)"
    )]
    MalformedInput { lines: usize },

    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV writer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for InsightLens operations.
pub type Result<T> = std::result::Result<T, InsightError>;
