//! Error types for the harness
//!
//! Case failures carry the plain failure text so that the recorded
//! `error_message` matches what the test author wrote; everything else is
//! prefixed for context.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the harness
#[derive(Error, Debug)]
pub enum Error {
    // === Case Failures ===
    #[error("{0}")]
    CaseFailure(String),

    #[error("Assertion failed: {0}")]
    Assertion(String),

    // === Subject Failures ===
    #[error("Subject state reset failed: {0}")]
    SubjectReset(String),

    #[error("Subject resynchronization failed: {0}")]
    SubjectResync(String),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Report Transport Errors ===
    #[error("Report delivery failed: {0}")]
    Transport(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Internal Errors ===
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a case failure whose display text is exactly `message`
    pub fn case_failure(message: impl Into<String>) -> Self {
        Self::CaseFailure(message.into())
    }

    /// Create an assertion failure
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::Assertion(message.into())
    }

    /// Create a report transport failure
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// True if this error was raised by case logic rather than the harness
    pub fn is_case_failure(&self) -> bool {
        matches!(self, Self::CaseFailure(_) | Self::Assertion(_))
    }
}
