//! Domain validation errors.

use std::fmt;

/// Errors that can occur while validating contact form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required form field is empty or whitespace-only.
    EmptyField(&'static str),

    /// The provided email address is invalid.
    InvalidEmail(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "The {} field is required", field),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
        }
    }
}

impl std::error::Error for ValidationError {}
