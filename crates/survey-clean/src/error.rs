//! Error types for the survey cleaning library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for survey cleaning operations.
#[derive(Debug, Error)]
pub enum CleanError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File extension has no known delimiter.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// File has no header row to read columns from.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Required questionnaire columns are absent from the table.
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// Result type alias for survey cleaning operations.
pub type Result<T> = std::result::Result<T, CleanError>;
