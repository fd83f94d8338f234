//! Error types for odds

use thiserror::Error;

/// odds error type
#[derive(Error, Debug)]
pub enum Error {
    /// Probability requested over a sample space with zero total measure.
    #[error("sample space is empty (total weight is zero)")]
    EmptySpace,

    /// Interval bounds are reversed or unordered.
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
