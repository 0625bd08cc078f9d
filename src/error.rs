//! Custom error types for the safe graph exporter
//!
//! Every failure the library can raise is a variant of [`ExportError`]. All of
//! them are fatal to the export; non-fatal findings (negative balances) are
//! reported through `tracing` instead.

use thiserror::Error;

/// The main error type for export operations
#[derive(Error, Debug)]
pub enum ExportError {
    /// Configuration-related errors, raised before any I/O happens
    #[error("Configuration error: {0}")]
    Config(String),

    /// The index database could not be reached
    #[error("Connection error: {0}")]
    Connect(String),

    /// One of the export queries failed
    #[error("Query '{query}' failed: {message}")]
    Fetch {
        query: &'static str,
        message: String,
    },

    /// A row did not have the shape its query guarantees
    #[error("Malformed row in '{query}': {message}")]
    MalformedRow {
        query: &'static str,
        message: String,
    },

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Output sink errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl ExportError {
    /// Create a fetch error for the named query
    pub fn fetch(query: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Fetch {
            query,
            message: err.to_string(),
        }
    }

    /// Create a malformed row error for the named query
    pub fn malformed_row(query: &'static str, err: impl std::fmt::Display) -> Self {
        Self::MalformedRow {
            query,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;
