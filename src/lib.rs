//! PayGate: Rust client for the PayGate payment gateway HTTP API.
//!
//! This crate lets an application create orders, manage clients and
//! products, execute payments through the Gateway's payment-method backends
//! (cards, wallets, redirect-based methods), and verify asynchronous webhook
//! notifications.
//!
//! # Architecture
//!
//! ```text
//! caller
//!   │
//! ┌─▼────────────────────────────────────────────┐
//! │ GatewayClient (this crate)                   │
//! │  named operations ──► raw call surface       │
//! │       │                    │                 │
//! │       │              request builder         │
//! │       │                    │                 │
//! │       │             transport executor ◄──── retry/backoff
//! │       │                    │                 │
//! │       └──────────── response classifier      │
//! └────────────────────────────┬─────────────────┘
//!                              │ HTTPS (bearer auth)
//!                       ┌──────▼───────┐
//!                       │  the Gateway │
//!                       └──────────────┘
//! ```
//!
//! Every call is stateless: the session ([`GatewayClient`]) is built once,
//! is immutable afterwards, and can be shared freely across tasks.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use paygate::{ClientConfig, GatewayClient};
//! use serde_json::json;
//!
//! # async fn example() -> paygate::Result<()> {
//! let client = GatewayClient::new(ClientConfig::from_env()?)?;
//!
//! // Named operation: field-checked before any network activity.
//! let order = client
//!     .create_order(&json!({
//!         "amount": 1999,
//!         "currency": "EUR",
//!         "external_id": "shop-order-81",
//!     }))
//!     .await?;
//!
//! // Execute the payment at the method-specific endpoint the Gateway chose.
//! if let Some(url) = order.payment_url() {
//!     let receipt = client.execute_payment(url, &json!({"token": "tok-1"})).await?;
//!     println!("{receipt}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Raw calls
//!
//! Anything the named operations do not cover is reachable through the
//! generic surface: any of the seven verbs, any endpoint, optional payload
//! and query.
//!
//! ```rust,no_run
//! # async fn example(client: paygate::GatewayClient) -> paygate::Result<()> {
//! let listing = client.get("/orders/", &[("status", "paid")]).await?;
//! let refunds = client.request("POST", "/orders/ord-1/refunds/", None, &[]).await?;
//! # let _ = (listing, refunds);
//! # Ok(())
//! # }
//! ```
//!
//! # Error handling
//!
//! Every failure is one [`GatewayError`] variant carrying the HTTP status
//! and the decoded response body. The client retries transport-level
//! failures with exponential backoff, but never retries on an HTTP status:
//! it attaches `retryable` and suggested-delay hints and leaves the decision
//! to you.
//!
//! ```rust,no_run
//! use paygate::GatewayError;
//!
//! # async fn example(client: paygate::GatewayClient) {
//! match client.get("/orders/", &[]).await {
//!     Ok(body) => println!("{body}"),
//!     Err(GatewayError::RateLimit { info, .. }) => {
//!         eprintln!("throttled, retry in {}s", info.suggested_wait_secs());
//!     }
//!     Err(err) if err.is_retryable() => {
//!         eprintln!("transient: retry in {:?}s", err.suggested_retry_secs());
//!     }
//!     Err(err) => eprintln!("giving up: {err}"),
//! }
//! # }
//! ```
//!
//! # Webhooks
//!
//! Deliveries are authenticated with an HMAC-SHA256 over the raw body; see
//! [`webhook`]:
//!
//! ```
//! let secret = "whsec_shared_secret";
//! let body = r#"{"event":"order.paid","order_id":"ord-1"}"#;
//! let signature = paygate::webhook::sign(body, secret);
//! assert!(paygate::webhook::verify(body, &signature, secret));
//! ```
//!
//! # Module organization
//!
//! - [`client`]: session, raw call surface, retry executor
//! - [`config`]: session configuration and environment loading
//! - [`request`]: verb parsing and request construction
//! - [`transport`]: pluggable HTTP transport ([`HttpTransport`] is the
//!   reqwest-backed default)
//! - [`error`]: the error taxonomy with retry hints
//! - [`models`]: typed views over response bodies
//! - [`webhook`]: webhook signature verification

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod api;
mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod request;
#[cfg(test)]
pub(crate) mod testing;
pub mod transport;
pub mod webhook;

pub use client::GatewayClient;
pub use config::ClientConfig;
pub use error::{GatewayError, NetworkFailure, RateLimitInfo, Result};
pub use request::Method;
pub use transport::{
    HttpTransport, Transport, TransportError, TransportRequest, TransportResponse,
};
