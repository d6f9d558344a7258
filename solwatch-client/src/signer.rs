//! HMAC request signing.
//!
//! Every request to the vendor carries an `XSRF-TOKEN` header. At login that
//! header holds an HMAC-SHA256 signature over the serialized JSON body
//! concatenated with the decimal millisecond timestamp, keyed by the shared
//! secret. The function is pure; a retried request recomputes both the
//! timestamp and the signature.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Computes the request signature: lowercase hex
/// `HMAC-SHA256(secret, body + timestamp_ms)`.
pub fn sign(secret: &str, body: &str, timestamp_ms: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(body.as_bytes());
    mac.update(timestamp_ms.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

// ============================================================================
// Tests
// ============================================================================
