//! Refresh message envelope tests

use apicache_domain::constants::REFRESH_MESSAGE_TYPE;
use apicache_domain::value_objects::{RefreshEnvelope, RefreshMessage};
use serde_json::{Value, json};

#[test]
fn test_envelope_wire_format() {
    let envelope = RefreshMessage::new("/items").to_envelope();
    let raw: Value = serde_json::from_str(&envelope.to_json().unwrap()).unwrap();

    assert_eq!(
        raw,
        json!({"type": "directus-update-endpoint", "payload": {"path": "/items"}})
    );
}

#[test]
fn test_parse_and_extract_message() {
    let envelope =
        RefreshEnvelope::parse(r#"{"type":"directus-update-endpoint","payload":{"path":"/a"}}"#)
            .unwrap();

    assert!(envelope.is_refresh());
    assert_eq!(envelope.into_message(), Some(RefreshMessage::new("/a")));
}

#[test]
fn test_envelope_without_path_yields_no_message() {
    let envelope = RefreshEnvelope::parse(r#"{"type":"directus-update-endpoint"}"#).unwrap();
    assert!(envelope.is_refresh());
    assert!(envelope.into_message().is_none());

    let envelope =
        RefreshEnvelope::parse(r#"{"type":"directus-update-endpoint","payload":{"path":""}}"#)
            .unwrap();
    assert!(envelope.into_message().is_none());
}

#[test]
fn test_other_message_types_are_not_refreshes() {
    let envelope = RefreshEnvelope::parse(r#"{"type":"other","payload":{}}"#).unwrap();
    assert!(!envelope.is_refresh());
    assert_ne!(envelope.message_type, REFRESH_MESSAGE_TYPE);
}

#[test]
fn test_parse_rejects_garbage() {
    assert!(RefreshEnvelope::parse("{").is_err());
    assert!(RefreshEnvelope::parse(r#"{"payload":{"path":"/a"}}"#).is_err());
}
