//! Configuration management for the contact relay.
//!
//! The backend base URL is resolved exactly once at startup, either from
//! an explicit environment override or from the host the site is served
//! on, and injected into the client from then on. Nothing else in the
//! crate inspects the environment.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Maps the host a page is served from to the backend it should talk to.
///
/// Development hosts and anything unrecognized route to the local
/// backend; only explicitly recognized production hosts route to the
/// deployed one, so a misconfigured page never posts test traffic at the
/// production backend.
#[derive(Debug, Clone)]
pub struct EndpointRules {
    /// Backend for development and unrecognized hosts
    pub local_base: String,

    /// Backend for recognized production hosts
    pub production_base: String,

    /// Host prefixes treated as development (e.g. "127.0.0.1", "localhost")
    pub dev_prefixes: Vec<String>,

    /// Hostname suffixes treated as production (e.g. "github.io")
    pub production_suffixes: Vec<String>,
}

impl Default for EndpointRules {
    fn default() -> Self {
        EndpointRules {
            local_base: "http://127.0.0.1:4000".to_string(),
            production_base: "https://portfolio-contact-backend.onrender.com".to_string(),
            dev_prefixes: vec!["127.0.0.1".to_string(), "localhost".to_string()],
            production_suffixes: vec!["github.io".to_string()],
        }
    }
}

impl EndpointRules {
    /// Choose the endpoint base for the given site host.
    ///
    /// `host` may carry a port ("localhost:5500"); the port is ignored
    /// for production suffix matching.
    pub fn base_for_host(&self, host: &str) -> &str {
        if self
            .dev_prefixes
            .iter()
            .any(|prefix| host.starts_with(prefix.as_str()))
        {
            return &self.local_base;
        }

        let hostname = host.split(':').next().unwrap_or(host);
        if self
            .production_suffixes
            .iter()
            .any(|suffix| hostname.ends_with(suffix.as_str()))
        {
            return &self.production_base;
        }

        &self.local_base
    }
}

/// Configuration for the contact relay.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL
    pub api_base_url: String,

    /// Main request timeout in milliseconds (default: 15000)
    pub request_timeout_ms: u64,

    /// Warm-up probe timeout in milliseconds (default: 4000)
    pub warmup_timeout_ms: u64,

    /// Whether to probe /health alongside a submission (default: true)
    pub warm_up: bool,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `CONTACT_API_BASE_URL` sets the backend explicitly. Without it,
    /// `CONTACT_SITE_HOST` picks the backend through the default
    /// [`EndpointRules`]. One of the two must be present.
    ///
    /// Optional environment variables:
    /// - `CONTACT_REQUEST_TIMEOUT_MS`: Main request timeout (default: 15000)
    /// - `CONTACT_WARMUP_TIMEOUT_MS`: Warm-up probe timeout (default: 4000)
    /// - `CONTACT_WARM_UP`: Probe /health alongside a submission (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let api_base_url = match env::var("CONTACT_API_BASE_URL") {
            Ok(url) => url,
            Err(_) => {
                let host = env::var("CONTACT_SITE_HOST")
                    .map_err(|_| ConfigError::MissingVar("CONTACT_API_BASE_URL".to_string()))?;
                EndpointRules::default().base_for_host(&host).to_string()
            }
        };

        // Validate base URL format
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout_ms = Self::parse_env_u64("CONTACT_REQUEST_TIMEOUT_MS", 15_000)?;
        let warmup_timeout_ms = Self::parse_env_u64("CONTACT_WARMUP_TIMEOUT_MS", 4_000)?;
        let warm_up = Self::parse_env_bool("CONTACT_WARM_UP", true)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            api_base_url,
            request_timeout_ms,
            warmup_timeout_ms,
            warm_up,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => val.parse::<bool>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be true or false, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: String::new(),
            request_timeout_ms: 15_000,
            warmup_timeout_ms: 4_000,
            warm_up: true,
            log_level: "info".to_string(),
        }
    }
}
