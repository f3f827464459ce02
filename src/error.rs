//! Error types for configuration and tooling.
//!
//! The gesture core itself never fails: lookup misses and redundant
//! operations are silent no-ops. Errors only surface when loading or
//! validating configuration and when reading replay scripts.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring an engine
#[derive(Error, Debug)]
pub enum InteractError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A resize margin that is negative, NaN or infinite
    #[error("Invalid {name} margin: {value}")]
    InvalidMargin { name: &'static str, value: f64 },

    /// Replay script that references something it never declared
    #[error("Invalid script {path:?}: {reason}")]
    InvalidScript { path: PathBuf, reason: String },

    /// Generic error message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for configuration operations
pub type InteractResult<T> = Result<T, InteractError>;

impl From<String> for InteractError {
    fn from(s: String) -> Self {
        InteractError::Other(s)
    }
}

impl From<&str> for InteractError {
    fn from(s: &str) -> Self {
        InteractError::Other(s.to_string())
    }
}
