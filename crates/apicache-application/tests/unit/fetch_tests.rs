//! Fetch orchestrator tests

use crate::support::{FixedClock, Harness, MemoryBackend, RecordingSink, ScriptedRemote};
use apicache_application::{
    FetchOrchestrator, RefreshAction, RefreshService, RefreshTrigger, StalenessCache,
};
use apicache_domain::value_objects::{CacheKey, StalenessVerdict};
use apicache_providers::cache::FilesystemCacheBackend;
use apicache_providers::sink::{ChannelSink, FallbackSink};
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_fresh_read_returns_without_refresh() {
    let h = Harness::new(3600, MemoryBackend::new(), ScriptedRemote::returning(json!(2)));
    let key = CacheKey::new("/items");
    h.cache.write(&key, json!(1)).await.unwrap();
    h.clock.set(10);

    let outcome = h.orchestrator.fetch_outcome(&key).await;

    assert_eq!(outcome.payload, json!(1));
    assert_eq!(outcome.verdict, StalenessVerdict::Fresh);
    assert_eq!(outcome.action, RefreshAction::None);
    assert!(h.remote.gets().is_empty());
    assert!(h.sink.keys().is_empty());
}

#[tokio::test]
async fn test_missing_read_refreshes_inline() {
    let h = Harness::new(3600, MemoryBackend::new(), ScriptedRemote::returning(json!({"a": 1})));
    let key = CacheKey::new("/items");

    let outcome = h.orchestrator.fetch_outcome(&key).await;

    assert_eq!(outcome.payload, json!({"a": 1}));
    assert_eq!(outcome.verdict, StalenessVerdict::Missing);
    assert_eq!(outcome.action, RefreshAction::RefreshInline);
    assert_eq!(h.remote.gets().len(), 1);
    assert!(h.sink.keys().is_empty());
    assert_eq!(h.cache.read(&key).await.verdict, StalenessVerdict::Fresh);
}

#[tokio::test]
async fn test_stale_read_serves_old_payload_and_schedules_once() {
    let h = Harness::new(3600, MemoryBackend::new(), ScriptedRemote::returning(json!("new")));
    let key = CacheKey::new("/items");
    h.cache.write(&key, json!("old")).await.unwrap();
    h.clock.set(3600);

    let outcome = h.orchestrator.fetch_outcome(&key).await;

    assert_eq!(outcome.payload, json!("old"));
    assert_eq!(outcome.verdict, StalenessVerdict::Stale);
    assert_eq!(outcome.action, RefreshAction::Schedule);
    assert_eq!(h.sink.keys(), vec![key]);
    assert!(h.remote.gets().is_empty());
}

#[tokio::test]
async fn test_stale_read_survives_failing_sink() {
    let backend = MemoryBackend::new();
    let clock = FixedClock::at(0);
    let cache = StalenessCache::with_clock(backend, 3600, clock.clone());
    let refresh = RefreshService::new(ScriptedRemote::returning(json!(2)), cache.clone());
    let orchestrator =
        FetchOrchestrator::new(cache.clone(), RefreshTrigger::new(RecordingSink::failing()), refresh);
    let key = CacheKey::new("/items");
    cache.write(&key, json!(1)).await.unwrap();
    clock.set(7200);

    assert_eq!(orchestrator.fetch(&key).await, json!(1));
}

#[tokio::test]
async fn test_hour_long_timeline() {
    let h = Harness::new(3600, MemoryBackend::new(), ScriptedRemote::returning(json!({"a": 2})));
    let key = CacheKey::new("/items");

    h.clock.set(0);
    h.cache.write(&key, json!({"a": 1})).await.unwrap();

    h.clock.set(1800);
    assert_eq!(h.orchestrator.fetch(&key).await, json!({"a": 1}));
    assert!(h.sink.keys().is_empty());

    h.clock.set(4000);
    assert_eq!(h.orchestrator.fetch(&key).await, json!({"a": 1}));
    assert_eq!(h.sink.keys().len(), 1);

    // the scheduled refresh runs out of band
    h.clock.set(4001);
    h.refresh.refresh(&key).await;

    h.clock.set(4100);
    let outcome = h.orchestrator.fetch_outcome(&key).await;
    assert_eq!(outcome.payload, json!({"a": 2}));
    assert_eq!(outcome.verdict, StalenessVerdict::Fresh);
    assert_eq!(h.sink.keys().len(), 1);
}

#[tokio::test]
async fn test_unwritable_storage_still_serves_refreshed_payload() {
    let h = Harness::new(3600, MemoryBackend::read_only(), ScriptedRemote::returning(json!([1])));
    let key = CacheKey::new("/items");

    assert_eq!(h.orchestrator.fetch(&key).await, json!([1]));
    assert_eq!(h.orchestrator.fetch(&key).await, json!([1]));
    assert_eq!(h.remote.gets().len(), 2);
}

#[tokio::test]
async fn test_unwritable_filesystem_directory() {
    let dir = tempfile::TempDir::new().unwrap();
    let backend = Arc::new(FilesystemCacheBackend::new(dir.path().join("absent")));
    let cache = StalenessCache::with_clock(backend, 3600, FixedClock::at(0));
    let refresh = RefreshService::new(ScriptedRemote::returning(json!({"a": 1})), cache.clone());
    let orchestrator =
        FetchOrchestrator::new(cache.clone(), RefreshTrigger::new(RecordingSink::new()), refresh);
    let key = CacheKey::new("/items");

    assert!(cache.write(&key, json!(0)).await.is_err());
    assert_eq!(cache.read(&key).await.verdict, StalenessVerdict::Missing);
    assert_eq!(orchestrator.fetch(&key).await, json!({"a": 1}));
}

#[tokio::test]
async fn test_channel_unavailable_falls_back_to_one_spawn() {
    let channel = Arc::new(apicache_providers::channel::TokioRefreshChannel::new());
    channel.close();
    let spawner = RecordingSink::new();
    let sink = Arc::new(FallbackSink::new(
        Arc::new(ChannelSink::new(channel.clone())),
        spawner.clone(),
    ));

    let backend = MemoryBackend::new();
    let clock = FixedClock::at(0);
    let cache = StalenessCache::with_clock(backend, 3600, clock.clone());
    let refresh = RefreshService::new(ScriptedRemote::returning(json!(2)), cache.clone());
    let orchestrator = FetchOrchestrator::new(cache.clone(), RefreshTrigger::new(sink), refresh);
    let key = CacheKey::new("/items");
    cache.write(&key, json!(1)).await.unwrap();
    clock.set(5000);

    assert_eq!(orchestrator.fetch(&key).await, json!(1));
    assert_eq!(spawner.keys(), vec![CacheKey::new("/items")]);
    assert_eq!(
        apicache_providers::sink::ProcessSink::refresh_arg(&spawner.keys()[0]),
        "--refresh=/items"
    );
}

#[tokio::test]
async fn test_inspect_never_refreshes() {
    let h = Harness::new(3600, MemoryBackend::new(), ScriptedRemote::returning(json!(1)));
    let key = CacheKey::new("/items");

    assert_eq!(h.orchestrator.inspect(&key).await.verdict, StalenessVerdict::Missing);
    h.cache.write(&key, json!(1)).await.unwrap();
    h.clock.set(9999);
    assert_eq!(h.orchestrator.inspect(&key).await.verdict, StalenessVerdict::Stale);

    assert!(h.remote.gets().is_empty());
    assert!(h.sink.keys().is_empty());
}

#[tokio::test]
async fn test_post_passes_through() {
    let h = Harness::new(3600, MemoryBackend::new(), ScriptedRemote::returning(json!({"ok": 1})));

    assert_eq!(h.orchestrator.post("/items", &json!({"x": 1})).await, json!({"ok": 1}));
    assert_eq!(h.remote.posts().len(), 1);
}
