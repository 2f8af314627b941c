//! Data models for the contact submission pipeline.
//!
//! This module contains the data structures representing a contact form
//! submission, its validated wire shape, and the backend's reply.

pub mod message;
pub mod reply;

pub use message::{ContactMessage, ContactPayload};
pub use reply::ServerReply;
