//! Contact Relay - the submission engine behind a portfolio website's contact form.
//!
//! This library owns the end-to-end lifecycle of one contact form submission:
//! read fields, validate, detect bot traffic, warm up a possibly cold backend,
//! POST the message as JSON with a timeout, interpret the response, and report
//! the outcome to the embedding UI shell.
//!
//! # Architecture
//!
//! - **models**: Contact message, wire payload, and server reply shapes
//! - **domain**: Validated value objects (email address)
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration from environment variables and host rules
//! - **client**: HTTP transport for the contact backend
//! - **submit**: Submission orchestration and UI callbacks
//! - **metrics**: Request counters for the transport layer

// Re-export commonly used types
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod submit;

pub use client::{AsyncContactApi, AsyncContactClient, ContactClient};
pub use config::{Config, EndpointRules};
pub use domain::{EmailAddress, ValidationError};
pub use error::{ConfigError, SubmitError, SubmitResult};
pub use metrics::Metrics;
pub use models::{ContactMessage, ContactPayload, ServerReply};
pub use submit::{ContactSubmitter, FormSurface, SubmitOutcome};
