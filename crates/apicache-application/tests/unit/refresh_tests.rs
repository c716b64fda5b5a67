//! Refresh service tests

use crate::support::{Harness, MemoryBackend, ScriptedRemote};
use apicache_domain::value_objects::{CacheKey, StalenessVerdict};
use serde_json::{Value, json};

#[tokio::test]
async fn test_refresh_fetches_and_stores() {
    let h = Harness::new(3600, MemoryBackend::new(), ScriptedRemote::returning(json!({"a": 1})));
    let key = CacheKey::new("/items");
    h.clock.set(500);

    let payload = h.refresh.refresh(&key).await;

    assert_eq!(payload, json!({"a": 1}));
    assert_eq!(h.remote.gets(), vec!["/items".to_string()]);
    let read = h.cache.read(&key).await;
    assert_eq!(read.payload, Some(json!({"a": 1})));
    assert_eq!(read.written_at, Some(500));
}

#[tokio::test]
async fn test_refresh_twice_is_idempotent() {
    let h = Harness::new(3600, MemoryBackend::new(), ScriptedRemote::returning(json!([1, 2])));
    let key = CacheKey::new("/items");

    h.clock.set(10);
    h.refresh.refresh(&key).await;
    let first = h.cache.read(&key).await;

    h.clock.set(20);
    h.refresh.refresh(&key).await;
    let second = h.cache.read(&key).await;

    assert_eq!(first.payload, second.payload);
    assert!(second.written_at >= first.written_at);
}

#[tokio::test]
async fn test_remote_failure_stores_null() {
    let h = Harness::new(3600, MemoryBackend::new(), ScriptedRemote::unreachable());
    let key = CacheKey::new("/items");

    let payload = h.refresh.refresh(&key).await;

    assert_eq!(payload, Value::Null);
    let read = h.cache.read(&key).await;
    assert_eq!(read.verdict, StalenessVerdict::Fresh);
    assert_eq!(read.payload, Some(Value::Null));
}

#[tokio::test]
async fn test_storage_failure_still_returns_payload() {
    let h = Harness::new(3600, MemoryBackend::read_only(), ScriptedRemote::returning(json!("x")));
    let key = CacheKey::new("/items");

    assert_eq!(h.refresh.refresh(&key).await, json!("x"));
    assert_eq!(h.backend.set_count(), 1);
    assert_eq!(h.cache.read(&key).await.verdict, StalenessVerdict::Missing);
}

#[tokio::test]
async fn test_post_is_forwarded_and_not_cached() {
    let h = Harness::new(3600, MemoryBackend::new(), ScriptedRemote::returning(json!({"id": 7})));

    let response = h.refresh.post("/items", &json!({"title": "new"})).await;

    assert_eq!(response, json!({"id": 7}));
    assert_eq!(
        h.remote.posts(),
        vec![("/items".to_string(), json!({"title": "new"}))]
    );
    assert_eq!(h.backend.set_count(), 0);
}

#[tokio::test]
async fn test_post_failure_yields_null() {
    let h = Harness::new(3600, MemoryBackend::new(), ScriptedRemote::unreachable());

    assert_eq!(h.refresh.post("/items", &json!({})).await, Value::Null);
}
