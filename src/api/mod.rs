//! Named Gateway operations.
//!
//! Thin convenience methods over the raw call surface: each one checks the
//! fields the Gateway requires, delegates to
//! [`GatewayClient::request`](crate::GatewayClient::request), and wraps the
//! decoded body in its typed view. No business-state interpretation happens
//! here.

use serde_json::Value;

use crate::error::{GatewayError, Result};

mod clients;
mod orders;
mod payments;
mod products;

/// Rejects a payload that is missing (or nulls out) a required field.
fn require_fields(payload: &Value, fields: &[&str]) -> Result<()> {
    if !payload.is_object() {
        return Err(GatewayError::validation("payload must be a JSON object"));
    }
    for field in fields {
        if payload.get(field).map_or(true, Value::is_null) {
            return Err(GatewayError::validation(format!(
                "missing required field \"{field}\""
            )));
        }
    }
    Ok(())
}
