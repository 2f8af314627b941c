//! Async wrapper around the synchronous ContactClient.
//!
//! This module provides an async interface to the synchronous ContactClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime while a request is in flight.

use crate::client::ContactClient;
use crate::error::{SubmitError, SubmitResult};
use crate::models::ContactPayload;
use async_trait::async_trait;
use std::sync::Arc;

/// Async interface to the contact backend.
///
/// The submitter depends only on this trait; tests substitute their own
/// implementations to drive the submission flow without a network.
#[async_trait]
pub trait AsyncContactApi: Send + Sync {
    /// Submit a validated contact message.
    async fn send_message(&self, payload: ContactPayload) -> SubmitResult<()>;

    /// Best-effort health probe with its own short deadline.
    async fn warm_up(&self) -> SubmitResult<()>;
}

/// Async wrapper around the synchronous ContactClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP operations
/// on a dedicated thread pool.
#[derive(Clone)]
pub struct AsyncContactClient {
    client: Arc<ContactClient>,
}

impl AsyncContactClient {
    pub fn new(client: ContactClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncContactApi for AsyncContactClient {
    async fn send_message(&self, payload: ContactPayload) -> SubmitResult<()> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.send_message(&payload))
            .await
            .map_err(|e| SubmitError::Network(format!("task join error: {}", e)))?
    }

    async fn warm_up(&self) -> SubmitResult<()> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.warm_up())
            .await
            .map_err(|e| SubmitError::Network(format!("task join error: {}", e)))?
    }
}
