//! Error types for PayGate operations.
//!
//! Every failure the client can produce is one [`GatewayError`] variant, so a
//! single `match` covers the whole taxonomy. Errors produced from an HTTP
//! response carry the status code and the decoded response body, letting
//! callers inspect Gateway fields the typed accessors do not cover.
//!
//! # Retry guidance
//!
//! The client never retries on an HTTP status by itself; it only attaches
//! hints. [`GatewayError::is_retryable`] and
//! [`GatewayError::suggested_retry_secs`] give callers enough to implement
//! their own policy:
//!
//! ```
//! use paygate::GatewayError;
//!
//! fn backoff_for(err: &GatewayError) -> Option<u64> {
//!     if err.is_retryable() { err.suggested_retry_secs() } else { None }
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

/// Result type alias for Gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Errors produced by the PayGate client.
///
/// Variants map one-to-one onto the response classification table: `4xx`
/// statuses become `Validation`/`Authentication`/`NotFound`/`RateLimit`,
/// `5xx` becomes `Server`, transport-level failures become `Network`, and
/// anything else (including undecodable bodies) becomes `Generic`.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Input rejected before or by the Gateway (HTTP 400, or local
    /// pre-flight validation such as an unknown HTTP verb).
    #[error("validation failed: {message}")]
    Validation {
        /// Human-readable description of what was rejected.
        message: String,
        /// HTTP status, absent for local pre-flight failures.
        http_status: Option<u16>,
        /// Decoded response body, when one was received.
        body: Option<Value>,
    },

    /// Credential problems (HTTP 401/403, or a malformed API key at
    /// construction time).
    #[error("authentication failed: {message}")]
    Authentication {
        /// Human-readable description.
        message: String,
        /// HTTP status, absent for construction-time failures.
        http_status: Option<u16>,
        /// Decoded response body, when one was received.
        body: Option<Value>,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("resource not found: {message}")]
    NotFound {
        /// Human-readable description.
        message: String,
        /// HTTP status of the response.
        http_status: Option<u16>,
        /// Decoded response body, when one was received.
        body: Option<Value>,
        /// Resource kind, attached by callers that know what they asked for.
        resource_type: Option<String>,
        /// Resource identifier, attached by callers that know what they asked for.
        resource_id: Option<String>,
    },

    /// The Gateway throttled the caller (HTTP 429).
    #[error("rate limit exceeded: {message}")]
    RateLimit {
        /// Human-readable description.
        message: String,
        /// HTTP status of the response.
        http_status: Option<u16>,
        /// Decoded response body, when one was received.
        body: Option<Value>,
        /// Quota details parsed from the rate-limit response headers.
        info: RateLimitInfo,
    },

    /// The Gateway failed internally (HTTP 500/502/503/504).
    #[error("server error (status {status}): {message}")]
    Server {
        /// Human-readable description.
        message: String,
        /// HTTP status of the response, always one of 500/502/503/504.
        status: u16,
        /// Decoded response body, when one was received.
        body: Option<Value>,
    },

    /// No HTTP response was obtained: connection, timeout, DNS, or TLS
    /// failure after the retry budget was exhausted.
    #[error("network failure: {message}")]
    Network {
        /// Message of the last transport failure.
        message: String,
        /// What kind of transport failure it was.
        kind: NetworkFailure,
    },

    /// Anything the classification table does not name: unexpected status
    /// codes and undecodable response bodies.
    #[error("gateway error: {message}")]
    Generic {
        /// Human-readable description.
        message: String,
        /// HTTP status, when a response was received.
        http_status: Option<u16>,
        /// Decoded response body, when one was decodable.
        body: Option<Value>,
    },
}

impl GatewayError {
    /// Local validation error with no HTTP context.
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into(), http_status: None, body: None }
    }

    /// Authentication error with no HTTP context (construction-time).
    pub(crate) fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication { message: message.into(), http_status: None, body: None }
    }

    /// Generic error with no HTTP context.
    pub(crate) fn generic(message: impl Into<String>) -> Self {
        Self::Generic { message: message.into(), http_status: None, body: None }
    }

    /// HTTP status code of the response this error was classified from, if any.
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Validation { http_status, .. }
            | Self::Authentication { http_status, .. }
            | Self::NotFound { http_status, .. }
            | Self::RateLimit { http_status, .. }
            | Self::Generic { http_status, .. } => *http_status,
            Self::Server { status, .. } => Some(*status),
            Self::Network { .. } => None,
        }
    }

    /// Raw decoded response body, preserved for caller inspection.
    #[must_use]
    pub fn response_body(&self) -> Option<&Value> {
        match self {
            Self::Validation { body, .. }
            | Self::Authentication { body, .. }
            | Self::NotFound { body, .. }
            | Self::RateLimit { body, .. }
            | Self::Server { body, .. }
            | Self::Generic { body, .. } => body.as_ref(),
            Self::Network { .. } => None,
        }
    }

    /// Whether retrying the whole operation may succeed.
    ///
    /// Advisory only: the client itself never retries based on an HTTP
    /// status. Server errors and rate limits are retryable; network failures
    /// are retryable unless the TLS handshake itself failed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Server { .. } | Self::RateLimit { .. } => true,
            Self::Network { kind, .. } => kind.is_retryable(),
            Self::Validation { .. }
            | Self::Authentication { .. }
            | Self::NotFound { .. }
            | Self::Generic { .. } => false,
        }
    }

    /// Recommended wait before retrying, in seconds.
    ///
    /// `None` when the error is not retryable or carries no hint.
    #[must_use]
    pub fn suggested_retry_secs(&self) -> Option<u64> {
        match self {
            Self::Server { status, .. } => Some(server_retry_delay_secs(*status)),
            Self::RateLimit { info, .. } => Some(info.suggested_wait_secs()),
            Self::Network { kind, .. } => kind.retry_delay_secs(),
            _ => None,
        }
    }

    /// Attaches resource identity to a `NotFound` error.
    ///
    /// Callers that know what they asked for (the named operations) use this
    /// so downstream handlers can report *which* order or product was
    /// missing. Any other variant passes through unchanged.
    #[must_use]
    pub fn with_resource(self, kind: &str, id: &str) -> Self {
        match self {
            Self::NotFound { message, http_status, body, .. } => Self::NotFound {
                message,
                http_status,
                body,
                resource_type: Some(kind.to_owned()),
                resource_id: Some(id.to_owned()),
            },
            other => other,
        }
    }
}

/// Recommended retry delay for a server-error status.
///
/// 503 means the Gateway told us it is down for a while; 504 is an upstream
/// timeout; 500/502 are transient faults.
fn server_retry_delay_secs(status: u16) -> u64 {
    match status {
        503 => 60,
        504 => 30,
        _ => 15,
    }
}

/// Kind of transport-level failure behind a [`GatewayError::Network`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkFailure {
    /// The request timed out before a response arrived.
    Timeout,
    /// The connection could not be established.
    Connect,
    /// The host name could not be resolved.
    Dns,
    /// The TLS handshake or certificate validation failed.
    Tls,
    /// Any other transport failure.
    Other,
}

impl NetworkFailure {
    /// Whether this failure class is worth retrying.
    ///
    /// Certificate problems do not fix themselves; everything else might.
    #[must_use]
    pub fn is_retryable(self) -> bool {
        !matches!(self, Self::Tls)
    }

    /// Recommended wait before retrying, in seconds.
    ///
    /// `None` for TLS failures, where a delay is irrelevant.
    #[must_use]
    pub fn retry_delay_secs(self) -> Option<u64> {
        match self {
            Self::Timeout | Self::Other => Some(5),
            Self::Connect => Some(10),
            Self::Dns => Some(30),
            Self::Tls => None,
        }
    }
}

/// Rate-limit details parsed from a 429 response's headers.
///
/// All fields are optional; the Gateway omits them on some endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Value of the `Retry-After` header, in seconds.
    pub retry_after_secs: Option<u64>,
    /// Total request quota for the current window (`X-RateLimit-Limit`).
    pub limit: Option<u64>,
    /// Requests remaining in the current window (`X-RateLimit-Remaining`).
    pub remaining: Option<u64>,
    /// Unix timestamp at which the window resets (`X-RateLimit-Reset`).
    pub reset_at: Option<u64>,
}

impl RateLimitInfo {
    /// Seconds to wait before retrying.
    ///
    /// Precedence: the `Retry-After` value if the Gateway sent one, else the
    /// time until the window resets (clamped to at least one second), else a
    /// fixed 60-second fallback.
    ///
    /// ```
    /// use paygate::RateLimitInfo;
    ///
    /// let info = RateLimitInfo { retry_after_secs: Some(5), ..Default::default() };
    /// assert_eq!(info.suggested_wait_secs(), 5);
    ///
    /// let info = RateLimitInfo::default();
    /// assert_eq!(info.suggested_wait_secs(), 60);
    /// ```
    #[must_use]
    pub fn suggested_wait_secs(&self) -> u64 {
        if let Some(secs) = self.retry_after_secs {
            return secs;
        }
        if let Some(reset_at) = self.reset_at {
            let now = chrono::Utc::now().timestamp();
            let remaining = i64::try_from(reset_at).unwrap_or(i64::MAX) - now;
            return u64::try_from(remaining.max(1)).unwrap_or(1);
        }
        60
    }
}
