//! Request construction.
//!
//! Turns a logical operation (verb, endpoint, optional payload, optional
//! query) plus the session's fixed headers into a fully resolved
//! [`OutboundCall`]. Pure functions of their inputs; no I/O happens here, and
//! the transport layer never sees a base URL or an un-joined path.

use serde_json::Value;
use url::Url;

use crate::error::{GatewayError, Result};

/// HTTP verbs the Gateway accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs, reason = "variants are the verbs themselves")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    const ALLOWED: &'static str = "GET, POST, PUT, PATCH, DELETE, HEAD, OPTIONS";

    /// Parses a verb, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::Validation`] naming the rejected verb and
    /// listing the accepted ones.
    ///
    /// ```
    /// use paygate::Method;
    ///
    /// assert_eq!(Method::parse("get").unwrap(), Method::Get);
    /// assert!(Method::parse("BREW").is_err());
    /// ```
    pub fn parse(method: &str) -> Result<Self> {
        match method.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            "HEAD" => Ok(Self::Head),
            "OPTIONS" => Ok(Self::Options),
            other => Err(GatewayError::validation(format!(
                "unsupported HTTP method \"{other}\", expected one of {}",
                Self::ALLOWED
            ))),
        }
    }

    /// Upper-case wire form of the verb.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully specified request, ready for the transport.
#[derive(Debug, Clone)]
pub struct OutboundCall {
    /// Wire verb.
    pub method: Method,
    /// Absolute target URL, query string included.
    pub target: String,
    /// Headers to send, session defaults only.
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body, when the operation carries one.
    pub body: Option<String>,
}

/// Builds an [`OutboundCall`] from the session's fixed configuration and the
/// per-operation inputs.
pub(crate) fn build_call(
    base_url: &str,
    default_headers: &[(String, String)],
    method: Method,
    endpoint: &str,
    payload: Option<&Value>,
    query: &[(&str, &str)],
) -> Result<OutboundCall> {
    let target = resolve_target(base_url, endpoint)?;
    let target = append_query(&target, query)?;
    let body = payload
        .map(|value| {
            serde_json::to_string(value).map_err(|e| {
                GatewayError::generic(format!("failed to serialize request payload: {e}"))
            })
        })
        .transpose()?;

    Ok(OutboundCall { method, target, headers: default_headers.to_vec(), body })
}

/// Resolves an endpoint against the session base URL.
///
/// Absolute URLs pass through untouched: payment-method execution endpoints
/// come back from the Gateway as full URLs on other hosts. Relative paths
/// get a leading `/` forced and are appended to the base.
pub(crate) fn resolve_target(base_url: &str, endpoint: &str) -> Result<String> {
    if endpoint.is_empty() {
        return Err(GatewayError::validation("endpoint must not be empty"));
    }
    if endpoint.starts_with("https://") || endpoint.starts_with("http://") {
        return Ok(endpoint.to_owned());
    }
    if endpoint.starts_with('/') {
        Ok(format!("{base_url}{endpoint}"))
    } else {
        Ok(format!("{base_url}/{endpoint}"))
    }
}

/// Appends percent-encoded query parameters to an absolute URL.
pub(crate) fn append_query(target: &str, params: &[(&str, &str)]) -> Result<String> {
    if params.is_empty() {
        return Ok(target.to_owned());
    }
    let mut url = Url::parse(target)
        .map_err(|e| GatewayError::validation(format!("invalid target URL \"{target}\": {e}")))?;
    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
    }
    Ok(url.into())
}

/// Default header set attached to every call.
///
/// Fixed at session construction and never mutated: bearer auth, content
/// negotiation, and the SDK user agent.
pub(crate) fn default_headers(api_key: &str) -> Vec<(String, String)> {
    vec![
        ("Authorization".to_owned(), format!("Bearer {api_key}")),
        ("Accept".to_owned(), "application/json".to_owned()),
        ("Content-Type".to_owned(), "application/json; charset=utf-8".to_owned()),
        (
            "User-Agent".to_owned(),
            concat!("paygate-rust/", env!("CARGO_PKG_VERSION")).to_owned(),
        ),
    ]
}

/// Copy of a header set with the bearer token masked, for log output.
///
/// The headers actually sent are never touched.
pub(crate) fn sanitize_headers(headers: &[(String, String)]) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            if name.eq_ignore_ascii_case("authorization") {
                (name.clone(), "Bearer ********".to_owned())
            } else {
                (name.clone(), value.clone())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const BASE: &str = "https://api.paygate.io/v1";

    #[test]
    fn method_parse_is_case_insensitive() {
        for raw in ["get", "GET", "GeT"] {
            assert_eq!(Method::parse(raw).unwrap(), Method::Get);
        }
        assert_eq!(Method::parse("options").unwrap(), Method::Options);
        assert_eq!(Method::parse("head").unwrap(), Method::Head);
    }

    #[test]
    fn method_parse_rejects_unknown_verbs() {
        let err = Method::parse("BREW").unwrap_err();
        match err {
            GatewayError::Validation { message, .. } => {
                assert!(message.contains("BREW"));
                assert!(message.contains("GET, POST"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn leading_slash_is_forced() {
        let with = resolve_target(BASE, "/brands/").unwrap();
        let without = resolve_target(BASE, "brands/").unwrap();
        assert_eq!(with, without);
        assert_eq!(with, "https://api.paygate.io/v1/brands/");
    }

    #[test]
    fn empty_endpoint_rejected() {
        assert!(matches!(
            resolve_target(BASE, ""),
            Err(GatewayError::Validation { .. })
        ));
    }

    #[test]
    fn absolute_urls_pass_through() {
        let target = resolve_target(BASE, "https://pay.cardnet.example/execute/abc").unwrap();
        assert_eq!(target, "https://pay.cardnet.example/execute/abc");

        let target = resolve_target(BASE, "http://localhost:8080/execute").unwrap();
        assert_eq!(target, "http://localhost:8080/execute");
    }

    #[test]
    fn query_params_are_encoded() {
        let target =
            append_query("https://api.paygate.io/v1/orders/", &[("status", "paid")]).unwrap();
        assert_eq!(target, "https://api.paygate.io/v1/orders/?status=paid");

        let target = append_query("https://api.paygate.io/v1/products/", &[
            ("search", "gift card"),
            ("category", "books & media"),
        ])
        .unwrap();
        assert!(target.contains("search=gift+card"));
        assert!(target.contains("category=books+%26+media"));
    }

    #[test]
    fn empty_query_leaves_target_untouched() {
        let target = append_query("https://api.paygate.io/v1/orders/", &[]).unwrap();
        assert_eq!(target, "https://api.paygate.io/v1/orders/");
    }

    #[test]
    fn build_call_serializes_payload() {
        let headers = default_headers("sk_test_0123456789abcdef0123456789abcdef");
        let payload = json!({"amount": 100, "currency": "EUR"});
        let call =
            build_call(BASE, &headers, Method::Post, "/orders/", Some(&payload), &[]).unwrap();

        assert_eq!(call.method, Method::Post);
        assert_eq!(call.target, "https://api.paygate.io/v1/orders/");
        let body: Value = serde_json::from_str(call.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, payload);
    }

    #[test]
    fn build_call_without_payload_has_no_body() {
        let headers = default_headers("sk_test_0123456789abcdef0123456789abcdef");
        let call = build_call(BASE, &headers, Method::Get, "/orders/", None, &[]).unwrap();
        assert!(call.body.is_none());
    }

    #[test]
    fn default_headers_are_complete() {
        let headers = default_headers("sk_test_0123456789abcdef0123456789abcdef");
        let names: Vec<&str> = headers.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["Authorization", "Accept", "Content-Type", "User-Agent"]);

        let auth = &headers[0].1;
        assert!(auth.starts_with("Bearer sk_test_"));
        assert!(headers[2].1.contains("charset=utf-8"));
        assert!(headers[3].1.starts_with("paygate-rust/"));
    }

    #[test]
    fn sanitize_masks_only_the_bearer_token() {
        let headers = default_headers("sk_test_0123456789abcdef0123456789abcdef");
        let sanitized = sanitize_headers(&headers);

        assert_eq!(sanitized[0].1, "Bearer ********");
        assert_eq!(sanitized[1..], headers[1..]);
        // the original is untouched
        assert!(headers[0].1.contains("sk_test_"));
    }
}
