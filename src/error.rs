//! Error types for Arbor
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Arbor operations
pub type ArborResult<T> = Result<T, ArborError>;

/// Main error type for Arbor operations
#[derive(Error, Debug)]
pub enum ArborError {
    /// Recursion went deeper than the configured limit, which for a
    /// parent-id graph means the hierarchy contains a cycle.
    #[error("hierarchy too deep at node '{id}' (depth {depth}) - the parent chain probably contains a cycle")]
    CycleDetected { id: String, depth: usize },

    /// Node input could not be interpreted as a collection of records
    #[error("invalid node collection: {message}")]
    InvalidNodes { message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
