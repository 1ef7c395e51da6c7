//! Product catalog operations.

use serde_json::Value;
use tracing::{info, instrument};

use super::require_fields;
use crate::client::GatewayClient;
use crate::error::Result;
use crate::models::{Collection, Product};

impl GatewayClient {
    /// Creates a product. The Gateway requires `name` and `price`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Validation`](crate::GatewayError::Validation)
    /// when a required field is missing, otherwise whatever the raw call
    /// produces.
    #[instrument(skip(self, product))]
    pub async fn create_product(&self, product: &Value) -> Result<Product> {
        require_fields(product, &["name", "price"])?;
        info!("creating product");
        let body = self.post("/products/", Some(product)).await?;
        Ok(Product::new(body))
    }

    /// Fetches one product.
    ///
    /// # Errors
    ///
    /// A missing product surfaces as
    /// [`GatewayError::NotFound`](crate::GatewayError::NotFound) with the
    /// resource identity filled in.
    #[instrument(skip(self))]
    pub async fn get_product(&self, product_id: &str) -> Result<Product> {
        let body = self
            .get(&format!("/products/{product_id}/"), &[])
            .await
            .map_err(|e| e.with_resource("product", product_id))?;
        Ok(Product::new(body))
    }

    /// Lists products, optionally filtered.
    ///
    /// # Errors
    ///
    /// See [`GatewayClient::request`].
    #[instrument(skip(self, query))]
    pub async fn list_products(&self, query: &[(&str, &str)]) -> Result<Collection> {
        let body = self.get("/products/", query).await?;
        Ok(Collection::new(body))
    }

    /// Deletes a product from the catalog.
    ///
    /// # Errors
    ///
    /// A missing product surfaces as
    /// [`GatewayError::NotFound`](crate::GatewayError::NotFound) with the
    /// resource identity filled in.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, product_id: &str) -> Result<Value> {
        self.delete(&format!("/products/{product_id}/"), None)
            .await
            .map_err(|e| e.with_resource("product", product_id))
    }
}
