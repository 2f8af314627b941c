//! Error types for the contact relay.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while submitting a contact message.
///
/// Every variant is recovered at the submitter boundary: each ends in a
/// user-visible notification and a restored submit control, never an
/// unhandled fault.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// Local input failed validation; no network call was made
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The request exceeded the configured deadline
    #[error("request timed out")]
    Timeout,

    /// Transport-level failure (connection refused, DNS, TLS)
    #[error("network error: {0}")]
    Network(String),

    /// The server was reachable but declined the message
    #[error("server rejected the message (status {status}): {message}")]
    Rejected {
        /// HTTP status of the declining response
        status: u16,
        /// Server-supplied message, or a generic one naming the status
        message: String,
    },
}

impl SubmitError {
    /// Notification text shown to the person filling in the form.
    ///
    /// `Display` keeps the diagnostic detail for logs; this is the short
    /// wording each failure kind surfaces in the UI.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Timeout => "The server took too long to respond. Please try again.".to_string(),
            Self::Network(_) => "Could not connect to the server.".to_string(),
            Self::Rejected { message, .. } => message.clone(),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with SubmitError
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
