//! Error types for jobstat.

use thiserror::Error;

/// Result type alias for jobstat operations.
pub type Result<T> = std::result::Result<T, JobstatError>;

/// Errors that can occur while collecting and reporting vacancy statistics.
#[derive(Error, Debug)]
pub enum JobstatError {
    /// Fetching vacancies from a provider failed.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Alias table is structurally invalid.
    #[error("Invalid alias table: {0}")]
    InvalidAliases(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
