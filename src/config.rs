//! Client session configuration.
//!
//! A [`ClientConfig`] is assembled once at startup (from literals, a
//! deserialized config file section, or environment variables) and handed to
//! [`GatewayClient::new`](crate::GatewayClient::new). It is never mutated
//! afterwards.

use std::env;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{GatewayError, Result};

/// Production API host.
const PRODUCTION_API_BASE: &str = "https://api.paygate.io";
/// Sandbox API host. Sandbox traffic is currently routed through the same
/// host as production; the flag is kept so the two can diverge without an
/// API change.
const SANDBOX_API_BASE: &str = "https://api.paygate.io";
/// API version segment appended to the base host.
const API_VERSION: &str = "v1";

/// Minimum accepted API key length. Real Gateway keys are 40+ characters;
/// anything shorter is a paste error.
const MIN_API_KEY_LEN: usize = 32;

/// Configuration for a [`GatewayClient`](crate::GatewayClient) session.
///
/// Deserializable from a config-file section, with defaults for every field
/// except the API key:
///
/// ```
/// let config: paygate::ClientConfig = serde_json::from_str(
///     r#"{"api_key": "sk_test_0123456789abcdef0123456789abcdef", "sandbox": true}"#,
/// ).unwrap();
/// assert_eq!(config.timeout_ms, 30_000);
/// assert_eq!(config.max_retries, 3);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Opaque bearer credential for the Gateway.
    pub api_key: String,

    /// Route calls to the sandbox environment.
    #[serde(default)]
    pub sandbox: bool,

    /// Read timeout per request, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Connection-establishment timeout, in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Transport-level retries after the initial attempt.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Emit a structured log record for every outbound call and response.
    #[serde(default)]
    pub debug: bool,

    /// Override for the API base URL, used to point the client at a test
    /// double. `None` selects the sandbox/production host.
    #[serde(default)]
    pub api_base_override: Option<String>,
}

impl ClientConfig {
    /// Creates a configuration with the given key and default knobs.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            sandbox: false,
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            max_retries: default_max_retries(),
            debug: false,
            api_base_override: None,
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// Reads `PAYGATE_API_KEY` (required), `PAYGATE_SANDBOX`,
    /// `PAYGATE_DEBUG` (`1`/`true`), `PAYGATE_TIMEOUT_MS`,
    /// `PAYGATE_CONNECT_TIMEOUT_MS` and `PAYGATE_MAX_RETRIES`. A `.env` file
    /// in the working directory is honored when present.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Authentication`] when the key is missing or
    /// too short, [`GatewayError::Validation`] when a numeric knob fails to
    /// parse.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("PAYGATE_API_KEY")
            .map_err(|_| GatewayError::authentication("PAYGATE_API_KEY is not set"))?;

        let mut config = Self::new(api_key);
        config.sandbox = env_flag("PAYGATE_SANDBOX");
        config.debug = env_flag("PAYGATE_DEBUG");
        if let Some(ms) = env_number("PAYGATE_TIMEOUT_MS")? {
            config.timeout_ms = ms;
        }
        if let Some(ms) = env_number("PAYGATE_CONNECT_TIMEOUT_MS")? {
            config.connect_timeout_ms = ms;
        }
        if let Some(n) = env_number("PAYGATE_MAX_RETRIES")? {
            config.max_retries = u32::try_from(n)
                .map_err(|_| GatewayError::validation("PAYGATE_MAX_RETRIES is out of range"))?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Builder: route calls to the sandbox environment.
    #[must_use]
    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Builder: enable per-call debug logging.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Builder: set the transport retry budget.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Builder: set custom API base URL (for testing).
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_override = Some(url.into());
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Authentication`] when the API key is empty or
    /// shorter than the minimum key length.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() || self.api_key.len() < MIN_API_KEY_LEN {
            return Err(GatewayError::authentication(format!(
                "API key must be at least {MIN_API_KEY_LEN} characters"
            )));
        }
        Ok(())
    }

    /// Fully-versioned base URL all relative endpoints are joined to.
    #[must_use]
    pub fn base_url(&self) -> String {
        let host = match &self.api_base_override {
            Some(url) => url.trim_end_matches('/'),
            None if self.sandbox => SANDBOX_API_BASE,
            None => PRODUCTION_API_BASE,
        };
        format!("{host}/{API_VERSION}")
    }

    /// Read timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Connect timeout as a [`Duration`].
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name).is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

fn env_number(name: &str) -> Result<Option<u64>> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<u64>()
            .map(Some)
            .map_err(|_| GatewayError::validation(format!("{name} must be an integer"))),
        Err(_) => Ok(None),
    }
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_connect_timeout_ms() -> u64 {
    10_000
}

fn default_max_retries() -> u32 {
    3
}
