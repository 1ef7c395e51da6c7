//! Payment execution.
//!
//! Creating an order reserves it on the Gateway; actually charging the payer
//! happens against a method-specific execution endpoint the Gateway returns
//! with the order (see [`Order::payment_url`](crate::models::Order::payment_url)).
//! That endpoint is an absolute URL, often on a different host than the API
//! base, and is called with the same session credentials.

use serde_json::Value;
use tracing::{info, instrument};

use super::require_fields;
use crate::client::GatewayClient;
use crate::error::{GatewayError, Result};

impl GatewayClient {
    /// Executes a payment at a method-specific endpoint.
    ///
    /// `execution_url` must be the absolute URL from a prior order-creation
    /// response; the payload must carry the payment-method `token`. The
    /// decoded response is returned as-is; its shape differs per payment
    /// method.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Validation`] when the URL is not absolute or
    /// the token is missing, otherwise whatever the raw call produces.
    #[instrument(skip(self, payload))]
    pub async fn execute_payment(&self, execution_url: &str, payload: &Value) -> Result<Value> {
        if !execution_url.starts_with("https://") && !execution_url.starts_with("http://") {
            return Err(GatewayError::validation(
                "payment execution endpoint must be an absolute URL",
            ));
        }
        require_fields(payload, &["token"])?;
        info!("executing payment");
        self.post(execution_url, Some(payload)).await
    }
}
