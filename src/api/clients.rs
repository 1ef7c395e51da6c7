//! Client (customer) operations.

use serde_json::Value;
use tracing::{info, instrument};

use super::require_fields;
use crate::client::GatewayClient;
use crate::error::Result;
use crate::models::ClientRecord;

impl GatewayClient {
    /// Creates a client record. The Gateway requires `email`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Validation`](crate::GatewayError::Validation)
    /// when `email` is missing, otherwise whatever the raw call produces.
    #[instrument(skip(self, client))]
    pub async fn create_client(&self, client: &Value) -> Result<ClientRecord> {
        require_fields(client, &["email"])?;
        info!("creating client");
        let body = self.post("/clients/", Some(client)).await?;
        Ok(ClientRecord::new(body))
    }

    /// Fetches one client record.
    ///
    /// # Errors
    ///
    /// A missing record surfaces as
    /// [`GatewayError::NotFound`](crate::GatewayError::NotFound) with the
    /// resource identity filled in.
    #[instrument(skip(self))]
    pub async fn get_client(&self, client_id: &str) -> Result<ClientRecord> {
        let body = self
            .get(&format!("/clients/{client_id}/"), &[])
            .await
            .map_err(|e| e.with_resource("client", client_id))?;
        Ok(ClientRecord::new(body))
    }

    /// Updates fields on an existing client record.
    ///
    /// # Errors
    ///
    /// See [`GatewayClient::request`].
    #[instrument(skip(self, fields))]
    pub async fn update_client(&self, client_id: &str, fields: &Value) -> Result<ClientRecord> {
        let body = self
            .patch(&format!("/clients/{client_id}/"), Some(fields))
            .await
            .map_err(|e| e.with_resource("client", client_id))?;
        Ok(ClientRecord::new(body))
    }
}
