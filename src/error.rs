// error.rs - Error taxonomy for the cleaning pipeline

use std::path::Path;
use thiserror::Error;

/// Result type for mcclean operations
pub type Result<T> = std::result::Result<T, CleanError>;

/// Errors that can occur while cleaning a roster
///
/// All variants are fatal: the CLI prints the message to stderr and exits
/// non-zero. There is no retry or partial-output policy.
#[derive(Error, Debug)]
pub enum CleanError {
    /// Unreadable or unwritable file
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed delimited text (ragged rows, bad quoting, missing header)
    #[error("Parse error in '{path}': {message}")]
    Parse { path: String, message: String },

    /// An expected column is absent from a table
    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    /// A join key column is missing from one of the input tables
    #[error("Merge key column '{column}' missing from the {table} table")]
    MergeKey { column: String, table: &'static str },

    /// Invalid argument or configuration value
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CleanError {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        CleanError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    /// Build a parse error for the given path
    pub fn parse(path: &Path, message: impl Into<String>) -> Self {
        CleanError::Parse {
            path: path.display().to_string(),
            message: message.into(),
        }
    }
}

/// Map a `csv::Error` onto the taxonomy, keeping I/O failures distinct
/// from malformed-content failures.
pub fn from_csv_error(path: &Path, err: csv::Error) -> CleanError {
    let display = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(e) => CleanError::io(path, e),
        _ => CleanError::parse(path, display),
    }
}
