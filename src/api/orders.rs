//! Order operations.

use serde_json::Value;
use tracing::{info, instrument};

use super::require_fields;
use crate::client::GatewayClient;
use crate::error::Result;
use crate::models::{Collection, Order};

impl GatewayClient {
    /// Creates an order.
    ///
    /// The Gateway requires `amount` (minor units), `currency` (ISO 4217)
    /// and `external_id` (the caller's own order reference); everything else
    /// in the payload is passed through as-is. The returned order carries
    /// the `payment_url` to execute a payment against.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Validation`](crate::GatewayError::Validation)
    /// when a required field is missing, otherwise whatever the raw call
    /// produces.
    #[instrument(skip(self, order))]
    pub async fn create_order(&self, order: &Value) -> Result<Order> {
        require_fields(order, &["amount", "currency", "external_id"])?;
        info!("creating order");
        let body = self.post("/orders/", Some(order)).await?;
        Ok(Order::new(body))
    }

    /// Fetches one order by its Gateway identifier.
    ///
    /// # Errors
    ///
    /// A missing order surfaces as
    /// [`GatewayError::NotFound`](crate::GatewayError::NotFound) with the
    /// resource identity filled in.
    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: &str) -> Result<Order> {
        let body = self
            .get(&format!("/orders/{order_id}/"), &[])
            .await
            .map_err(|e| e.with_resource("order", order_id))?;
        Ok(Order::new(body))
    }

    /// Lists orders, optionally filtered (`status`, date ranges, ...).
    ///
    /// # Errors
    ///
    /// See [`GatewayClient::request`].
    #[instrument(skip(self, query))]
    pub async fn list_orders(&self, query: &[(&str, &str)]) -> Result<Collection> {
        let body = self.get("/orders/", query).await?;
        Ok(Collection::new(body))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::client::GatewayClient;
    use crate::config::ClientConfig;
    use crate::error::GatewayError;
    use crate::testing::ScriptedTransport;

    const TEST_KEY: &str = "sk_test_0123456789abcdef0123456789abcdef";

    fn client(transport: Arc<ScriptedTransport>) -> GatewayClient {
        GatewayClient::with_transport(ClientConfig::new(TEST_KEY), transport).unwrap()
    }

    #[tokio::test]
    async fn create_order_requires_fields() {
        let transport = ScriptedTransport::empty();
        let client = client(Arc::clone(&transport));

        let err = client
            .create_order(&json!({"amount": 100, "currency": "EUR"}))
            .await
            .unwrap_err();
        match err {
            GatewayError::Validation { message, .. } => assert!(message.contains("external_id")),
            other => panic!("expected Validation, got {other:?}"),
        }
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn create_order_posts_and_wraps() {
        let transport = ScriptedTransport::respond(
            200,
            r#"{"id": "ord-1", "status": "pending", "payment_url": "https://pay.cardnet.example/x"}"#,
        );
        let client = client(Arc::clone(&transport));

        let order = client
            .create_order(&json!({
                "amount": 100,
                "currency": "EUR",
                "external_id": "shop-1",
            }))
            .await
            .unwrap();

        assert_eq!(order.id(), Some("ord-1"));
        assert_eq!(order.payment_url(), Some("https://pay.cardnet.example/x"));
        assert_eq!(transport.last_url(), "https://api.paygate.io/v1/orders/");
    }

    #[tokio::test]
    async fn get_order_attaches_resource_identity_on_404() {
        let transport = ScriptedTransport::respond(404, "{}");
        let client = client(Arc::clone(&transport));

        match client.get_order("ord-missing").await.unwrap_err() {
            GatewayError::NotFound { resource_type, resource_id, .. } => {
                assert_eq!(resource_type.as_deref(), Some("order"));
                assert_eq!(resource_id.as_deref(), Some("ord-missing"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn list_orders_passes_the_filter_through() {
        let transport = ScriptedTransport::respond(200, r#"{"results": [], "count": 0}"#);
        let client = client(Arc::clone(&transport));

        let listing = client.list_orders(&[("status", "paid")]).await.unwrap();
        assert!(listing.is_empty());
        assert!(transport.last_url().ends_with("/orders/?status=paid"));
    }
}
