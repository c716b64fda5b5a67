//! Lenient JSON decoding
//!
//! The remote source is allowed to answer with an empty or non-JSON body.
//! Such bodies decode to `null` instead of failing the refresh.

use serde_json::Value;
use tracing::debug;

/// Decode a response body, falling back to [`Value::Null`]
///
/// # Example
///
/// ```
/// use apicache_providers::utils::decode_json_body;
/// use serde_json::{Value, json};
///
/// assert_eq!(decode_json_body(br#"{"a":1}"#), json!({"a": 1}));
/// assert_eq!(decode_json_body(b"<html>"), Value::Null);
/// assert_eq!(decode_json_body(b""), Value::Null);
/// ```
pub fn decode_json_body(body: &[u8]) -> Value {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            debug!("Response body is not valid JSON, decoding as null: {}", e);
            Value::Null
        }
    }
}
