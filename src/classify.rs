//! Response classification.
//!
//! Deterministically maps an HTTP status code plus decoded JSON body onto
//! either the decoded body (success) or one [`GatewayError`]. Body decoding
//! happens first and applies to every status: a 200 with an undecodable body
//! is still an error.

use serde_json::Value;

use crate::error::{GatewayError, RateLimitInfo};
use crate::transport::TransportResponse;

pub(crate) fn classify_response(response: TransportResponse) -> Result<Value, GatewayError> {
    let body: Value = serde_json::from_str(&response.body).map_err(|e| GatewayError::Generic {
        message: format!("failed to decode response body as JSON: {e}"),
        http_status: Some(response.status),
        body: None,
    })?;

    let status = response.status;
    match status {
        200 | 201 => Ok(body),
        400 => Err(GatewayError::Validation {
            message: body_message(&body, "Invalid input"),
            http_status: Some(status),
            body: Some(body),
        }),
        401 | 403 => Err(GatewayError::Authentication {
            message: body_message(&body, "Authentication failed"),
            http_status: Some(status),
            body: Some(body),
        }),
        404 => Err(GatewayError::NotFound {
            message: body_message(&body, "Resource not found"),
            http_status: Some(status),
            body: Some(body),
            resource_type: None,
            resource_id: None,
        }),
        429 => Err(GatewayError::RateLimit {
            message: body_message(&body, "Rate limit exceeded"),
            http_status: Some(status),
            body: Some(body),
            info: rate_limit_info(&response.headers),
        }),
        500 | 502 | 503 | 504 => Err(GatewayError::Server {
            message: body_message(&body, "Server error"),
            status,
            body: Some(body),
        }),
        _ => Err(GatewayError::Generic {
            message: body_message(&body, "Unknown error"),
            http_status: Some(status),
            body: Some(body),
        }),
    }
}

/// The body's `message` field, or the status-specific fallback.
fn body_message(body: &Value, fallback: &str) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .map_or_else(|| fallback.to_owned(), str::to_owned)
}

/// Case-insensitive header lookup.
fn header_value<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(header, _)| header.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

fn header_number(headers: &[(String, String)], name: &str) -> Option<u64> {
    header_value(headers, name).and_then(|value| value.trim().parse().ok())
}

fn rate_limit_info(headers: &[(String, String)]) -> RateLimitInfo {
    RateLimitInfo {
        retry_after_secs: header_number(headers, "Retry-After"),
        limit: header_number(headers, "X-RateLimit-Limit"),
        remaining: header_number(headers, "X-RateLimit-Remaining"),
        reset_at: header_number(headers, "X-RateLimit-Reset"),
    }
}
