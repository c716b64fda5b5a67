//! Lenient JSON decoding tests

use apicache_providers::utils::decode_json_body;
use serde_json::{Value, json};

#[test]
fn test_valid_documents() {
    assert_eq!(decode_json_body(br#"{"a":1}"#), json!({"a": 1}));
    assert_eq!(decode_json_body(b"[1,2]"), json!([1, 2]));
    assert_eq!(decode_json_body(b"\"text\""), json!("text"));
    assert_eq!(decode_json_body(b"null"), Value::Null);
}

#[test]
fn test_invalid_documents_become_null() {
    let bodies: [&[u8]; 5] = [b"", b"   \n", b"{", b"<html>", b"\xff\xfe"];
    for body in bodies {
        assert_eq!(decode_json_body(body), Value::Null);
    }
}
