//! HTTP transport for the contact backend.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles timeout configuration, error
//! mapping, and response interpretation for the contact endpoint.

mod async_wrapper;
pub use async_wrapper::{AsyncContactApi, AsyncContactClient};

use crate::config::Config;
use crate::error::{SubmitError, SubmitResult};
use crate::metrics::Metrics;
use crate::models::{ContactPayload, ServerReply};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// HTTP client for the contact backend.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`. It holds two
/// agents: one with the main request deadline and one with the short
/// warm-up deadline, so a cold backend cannot stall the probe path.
#[derive(Clone)]
pub struct ContactClient {
    /// Backend base URL
    base_url: String,

    /// Agent for the main submission request
    agent: Arc<ureq::Agent>,

    /// Agent for the warm-up probe
    warmup_agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ContactClient {
    /// Create a new ContactClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_timeouts(
            config.api_base_url.clone(),
            config.request_timeout_ms,
            config.warmup_timeout_ms,
        )
    }

    /// Create a ContactClient with explicit timeouts (useful for testing).
    #[doc(hidden)]
    pub fn with_timeouts(base_url: String, request_timeout_ms: u64, warmup_timeout_ms: u64) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_millis(request_timeout_ms))
            .build();

        let warmup_agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_millis(warmup_timeout_ms))
            .build();

        Self {
            base_url,
            agent: Arc::new(agent),
            warmup_agent: Arc::new(warmup_agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Submit a validated contact message to `/api/contact`.
    ///
    /// Success requires both an HTTP success status and a success-shaped
    /// body; a 2xx answer whose body does not signal success is still a
    /// rejection.
    pub fn send_message(&self, payload: &ContactPayload) -> SubmitResult<()> {
        let start = Instant::now();
        let url = self.build_url("/api/contact");

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_json(payload)
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        self.metrics.record_http_request(duration);

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("POST {} failed: {}", url, e);
                self.metrics.record_http_error();
                return Err(e);
            }
        };

        let status = response.status();
        let body = response.into_string().unwrap_or_default();
        let reply = ServerReply::parse(&body);

        if reply.indicates_success() {
            tracing::debug!("POST {} accepted (status {})", url, status);
            self.metrics.record_message_sent();
            Ok(())
        } else {
            tracing::warn!("POST {} declined (status {})", url, status);
            self.metrics.record_http_error();
            Err(Self::rejection(status, &reply))
        }
    }

    /// Probe the backend's `/health` endpoint.
    ///
    /// Best effort: callers ignore the outcome. Runs on the warm-up agent
    /// with its own short deadline.
    pub fn warm_up(&self) -> SubmitResult<()> {
        let url = self.build_url("/health");

        tracing::debug!("GET {}", url);

        self.warmup_agent
            .get(&url)
            .call()
            .map_err(|e| self.map_error(e))?;

        Ok(())
    }

    /// Rejection error for a response that did not signal success.
    fn rejection(status: u16, reply: &ServerReply) -> SubmitError {
        let message = reply
            .error_message()
            .map(str::to_string)
            .unwrap_or_else(|| format!("The message could not be sent (HTTP {}).", status));

        SubmitError::Rejected { status, message }
    }

    /// Map a ureq error to a SubmitError.
    fn map_error(&self, error: ureq::Error) -> SubmitError {
        match error {
            ureq::Error::Status(code, response) => {
                // Non-2xx still carries a body worth mining for a message
                let body = response.into_string().unwrap_or_default();
                Self::rejection(code, &ServerReply::parse(&body))
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::Io {
                    SubmitError::Timeout
                } else {
                    SubmitError::Network(transport.to_string())
                }
            }
        }
    }
}
