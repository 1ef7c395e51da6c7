//! Webhook signature verification.
//!
//! The Gateway signs every webhook delivery with an HMAC-SHA256 over the raw
//! request body, keyed with the endpoint's shared secret, and sends the hex
//! digest in the `X-Signature` header. Verify the signature against the raw
//! body bytes exactly as received, before any JSON parsing.
//!
//! These functions are stateless and independent of the client's network
//! machinery.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Computes the hex HMAC-SHA256 signature for a webhook body.
///
/// ```
/// use paygate::webhook;
///
/// let body = r#"{"event":"order.paid","order_id":"ord-1"}"#;
/// let signature = webhook::sign(body, "whsec_shared_secret");
///
/// assert_eq!(signature.len(), 64);
/// assert_eq!(signature, webhook::sign(body, "whsec_shared_secret"));
/// assert!(webhook::verify(body, &signature, "whsec_shared_secret"));
/// ```
#[must_use]
pub fn sign(body: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(body.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Verifies a webhook signature in constant time.
///
/// Returns `false` for any mismatch, including a truncated or padded
/// signature.
#[must_use]
pub fn verify(body: &str, signature: &str, secret: &str) -> bool {
    constant_time_eq(&sign(body, secret), signature)
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes().zip(b.bytes()).fold(0, |acc, (x, y)| acc | (x ^ y)) == 0
}
