//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts like
//! email addresses. These value objects provide validation at
//! construction time and prevent invalid data from being represented in
//! the system.

pub mod email;
pub mod errors;

pub use email::EmailAddress;
pub use errors::ValidationError;
