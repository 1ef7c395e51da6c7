//! HTTP transport implementation over reqwest.
//!
//! Connection pooling and timeout enforcement live here; retry policy does
//! not (that belongs to the executor).

use std::error::Error as _;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::{Transport, TransportError, TransportRequest, TransportResponse};
use crate::request::Method;

/// Idle connections kept per host, matching the expected request fan-out of
/// a single Gateway session.
const POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Production transport backed by a pooled reqwest [`Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport enforcing the given read and connect timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Other`] if the underlying client cannot be
    /// built (TLS backend initialization failure).
    pub fn new(timeout: Duration, connect_timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| TransportError::Other(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wraps an existing reqwest client, keeping its pool and middleware.
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        request: TransportRequest<'_>,
    ) -> Result<TransportResponse, TransportError> {
        let method = reqwest_method(request.method);
        let mut builder = self.client.request(method, request.url);

        for (name, value) in request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body.to_owned());
        }

        let response = builder.send().await.map_err(classify_send_error)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (name.to_string(), value.to_str().unwrap_or_default().to_owned())
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Other(format!("failed to read response body: {e}")))?;

        Ok(TransportResponse { status, headers, body })
    }
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
        Method::Head => reqwest::Method::HEAD,
        Method::Options => reqwest::Method::OPTIONS,
    }
}

/// Maps a reqwest send failure onto the transport error taxonomy.
///
/// reqwest only distinguishes timeout and connect directly; DNS and TLS
/// causes are recovered from the error source chain.
fn classify_send_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::Timeout(err.to_string());
    }

    let chain = source_chain(&err).to_ascii_lowercase();
    if chain.contains("dns") || chain.contains("name or service not known") {
        return TransportError::Dns(err.to_string());
    }
    if chain.contains("certificate") || chain.contains("tls") || chain.contains("handshake") {
        return TransportError::Tls(err.to_string());
    }
    if err.is_connect() {
        return TransportError::Connect(err.to_string());
    }
    TransportError::Other(err.to_string())
}

/// Concatenated messages of an error and all its sources.
fn source_chain(err: &reqwest::Error) -> String {
    let mut chain = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_builds_with_timeouts() {
        let transport = HttpTransport::new(Duration::from_secs(30), Duration::from_secs(10));
        assert!(transport.is_ok());
    }

    #[test]
    fn transport_builds_with_zero_timeouts() {
        let transport = HttpTransport::new(Duration::from_secs(0), Duration::from_secs(0));
        assert!(transport.is_ok());
    }

    #[test]
    fn from_client_reuses_the_pool() {
        let client = Client::new();
        let transport = HttpTransport::from_client(client);
        let debug = format!("{transport:?}");
        assert!(debug.contains("HttpTransport"));
    }

    #[test]
    fn method_mapping_is_total() {
        for (ours, theirs) in [
            (Method::Get, reqwest::Method::GET),
            (Method::Post, reqwest::Method::POST),
            (Method::Put, reqwest::Method::PUT),
            (Method::Patch, reqwest::Method::PATCH),
            (Method::Delete, reqwest::Method::DELETE),
            (Method::Head, reqwest::Method::HEAD),
            (Method::Options, reqwest::Method::OPTIONS),
        ] {
            assert_eq!(reqwest_method(ours), theirs);
        }
    }

    #[tokio::test]
    async fn connection_refused_classifies_as_connect() {
        // Port 1 on loopback is never listening.
        let transport =
            HttpTransport::new(Duration::from_secs(5), Duration::from_secs(5)).unwrap();
        let headers = vec![];
        let request = TransportRequest {
            method: Method::Get,
            url: "http://127.0.0.1:1/unreachable",
            headers: &headers,
            body: None,
        };

        let err = transport.send(request).await.unwrap_err();
        assert!(
            matches!(err, TransportError::Connect(_) | TransportError::Other(_)),
            "unexpected classification: {err:?}"
        );
    }
}
