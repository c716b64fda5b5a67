//! Staleness cache tests

use crate::support::{FailingBackend, FixedClock, MemoryBackend};
use apicache_application::StalenessCache;
use apicache_domain::error::Error;
use apicache_domain::value_objects::{CacheKey, StalenessVerdict};
use serde_json::json;
use std::sync::Arc;

fn cache_at(now: i64, backend: Arc<MemoryBackend>) -> (StalenessCache, Arc<FixedClock>) {
    let clock = FixedClock::at(now);
    (StalenessCache::with_clock(backend, 3600, clock.clone()), clock)
}

#[tokio::test]
async fn test_write_then_read_is_fresh() {
    let (cache, _clock) = cache_at(100, MemoryBackend::new());
    let key = CacheKey::new("/items");

    let entry = cache.write(&key, json!({"a": 1})).await.unwrap();
    let read = cache.read(&key).await;

    assert_eq!(entry.written_at, 100);
    assert_eq!(read.payload, Some(json!({"a": 1})));
    assert_eq!(read.verdict, StalenessVerdict::Fresh);
    assert_eq!(read.written_at, Some(100));
}

#[tokio::test]
async fn test_write_stores_time_and_data_envelope() {
    let backend = MemoryBackend::new();
    let (cache, _clock) = cache_at(42, backend.clone());

    cache.write(&CacheKey::new("/items"), json!([1, 2])).await.unwrap();

    let raw: serde_json::Value = serde_json::from_str(&backend.raw("/items").unwrap()).unwrap();
    assert_eq!(raw, json!({"time": 42, "data": [1, 2]}));
}

#[tokio::test]
async fn test_ttl_boundary_is_stale() {
    let (cache, clock) = cache_at(0, MemoryBackend::new());
    let key = CacheKey::new("/items");
    cache.write(&key, json!(1)).await.unwrap();

    clock.set(3599);
    assert_eq!(cache.read(&key).await.verdict, StalenessVerdict::Fresh);

    clock.set(3600);
    let read = cache.read(&key).await;
    assert_eq!(read.verdict, StalenessVerdict::Stale);
    assert_eq!(read.payload, Some(json!(1)));
}

#[tokio::test]
async fn test_absent_key_is_missing() {
    let (cache, _clock) = cache_at(0, MemoryBackend::new());

    let read = cache.read(&CacheKey::new("/nothing")).await;

    assert_eq!(read.verdict, StalenessVerdict::Missing);
    assert!(read.payload.is_none());
    assert!(read.written_at.is_none());
}

#[tokio::test]
async fn test_malformed_entries_are_missing() {
    let backend = MemoryBackend::new();
    backend.insert_raw("/garbage", "not json");
    backend.insert_raw("/no-time", r#"{"data": 1}"#);
    backend.insert_raw("/scalar", "17");
    let (cache, _clock) = cache_at(0, backend);

    for key in ["/garbage", "/no-time", "/scalar"] {
        let read = cache.read(&CacheKey::new(key)).await;
        assert_eq!(read.verdict, StalenessVerdict::Missing, "key {key}");
        assert!(read.payload.is_none());
    }
}

#[tokio::test]
async fn test_backend_read_error_is_missing() {
    let cache = StalenessCache::with_clock(Arc::new(FailingBackend), 3600, FixedClock::at(0));

    let read = cache.read(&CacheKey::new("/items")).await;

    assert_eq!(read.verdict, StalenessVerdict::Missing);
}

#[tokio::test]
async fn test_unwritable_backend_write_fails_and_read_stays_missing() {
    let (cache, _clock) = cache_at(0, MemoryBackend::read_only());
    let key = CacheKey::new("/items");

    let err = cache.write(&key, json!(1)).await.unwrap_err();

    assert!(matches!(err, Error::StorageUnwritable { .. }));
    assert_eq!(cache.read(&key).await.verdict, StalenessVerdict::Missing);
}

#[tokio::test]
async fn test_filesystem_backend_round_trip() {
    let dir = tempfile::TempDir::new().unwrap();
    let backend = Arc::new(apicache_providers::cache::FilesystemCacheBackend::new(dir.path()));
    let cache = StalenessCache::with_clock(backend, 60, FixedClock::at(10));
    let key = CacheKey::new("/items?limit=1");

    cache.write(&key, json!({"ok": true})).await.unwrap();
    let read = cache.read(&key).await;

    assert_eq!(read.verdict, StalenessVerdict::Fresh);
    assert_eq!(read.payload, Some(json!({"ok": true})));
    assert_eq!(cache.backend_name(), "filesystem");
    assert_eq!(cache.ttl(), 60);
}
