//! Error type tests

use apicache_domain::Error;
use std::error::Error as _;

#[test]
fn test_storage_unwritable_message() {
    let err = Error::storage_unwritable("/var/cache/apicache/abc");
    assert_eq!(
        err.to_string(),
        "Cache storage is not writable: /var/cache/apicache/abc"
    );
}

#[test]
fn test_network_error_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    let err = Error::network_with_source("GET /items failed", io);

    assert_eq!(err.to_string(), "Network error: GET /items failed");
    assert!(err.source().is_some());
}

#[test]
fn test_from_conversions() {
    let io: Error = std::io::Error::other("boom").into();
    assert!(matches!(io, Error::IoSimple { .. }));

    let json: Error = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    assert!(matches!(json, Error::Json { .. }));
}

#[test]
fn test_channel_and_configuration_errors() {
    assert_eq!(
        Error::channel("queue down").to_string(),
        "Channel error: queue down"
    );
    assert_eq!(
        Error::configuration("ttl must be positive").to_string(),
        "Configuration error: ttl must be positive"
    );
}
