//! Error types for the contact form server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation failures are not errors here; they travel as data in
//! [`ErrorRecord`](crate::models::ErrorRecord).

use thiserror::Error;

/// Alert shown to the user when a submission fails for any reason.
pub const SUBMIT_FAILURE_ALERT: &str = "送信中にエラーが発生しました。もう一度お試しください。";

/// Errors that can occur while submitting a validated contact record.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The submitter could not deliver the record
    #[error("Submission failed: {0}")]
    Delivery(String),

    /// Failed to encode the record
    #[error("JSON encode error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl SubmitError {
    /// The generic, non-field-specific text to show the user.
    pub fn user_message(&self) -> &'static str {
        SUBMIT_FAILURE_ALERT
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with SubmitError
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
