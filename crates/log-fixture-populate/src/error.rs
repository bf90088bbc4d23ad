//! Error types for the fixture populator.

use thiserror::Error;

/// Errors that can occur while writing a fixture file.
#[derive(Error, Debug)]
pub enum PopulateError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
