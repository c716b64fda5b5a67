//! Refresh Use Case
//!
//! The synchronous refresh routine shared by inline refreshes, the worker
//! and one-shot `--refresh=<key>` processes.

use crate::domain_services::StalenessCache;
use apicache_domain::ports::providers::RemoteSource;
use apicache_domain::value_objects::CacheKey;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

/// Pulls keys from the remote source into the cache
#[derive(Clone)]
pub struct RefreshService {
    remote: Arc<dyn RemoteSource>,
    cache: StalenessCache,
}

impl RefreshService {
    /// Create a refresh service
    pub fn new(remote: Arc<dyn RemoteSource>, cache: StalenessCache) -> Self {
        Self { remote, cache }
    }

    /// Re-fetch `key` and overwrite its entry
    ///
    /// Never fails: a remote failure stores and returns `null`, a storage
    /// failure is logged and the fetched payload is still returned. Running
    /// it twice for the same key is harmless.
    pub async fn refresh(&self, key: &CacheKey) -> Value {
        info!("{} Updating {}", chrono::Utc::now().to_rfc3339(), key);

        let payload = match self.remote.get(key.as_str()).await {
            Ok(payload) => payload,
            Err(e) => {
                warn!("remote fetch of {} failed: {}", key, e);
                Value::Null
            }
        };

        if let Err(e) = self.cache.write(key, payload.clone()).await {
            warn!(
                "could not store {} in {} cache: {}",
                key,
                self.cache.backend_name(),
                e
            );
        }

        info!("{} Updated {}", chrono::Utc::now().to_rfc3339(), key);
        payload
    }

    /// Forward a POST to the remote source; the response is not cached
    pub async fn post(&self, path: &str, body: &Value) -> Value {
        match self.remote.post(path, body).await {
            Ok(payload) => payload,
            Err(e) => {
                warn!("remote POST to {} failed: {}", path, e);
                Value::Null
            }
        }
    }

    /// The cache refreshed entries are written to
    pub fn cache(&self) -> &StalenessCache {
        &self.cache
    }

    /// Base URL of the remote source
    pub fn remote_url(&self) -> &str {
        self.remote.base_url()
    }
}

impl std::fmt::Debug for RefreshService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshService")
            .field("remote", &self.remote.base_url())
            .field("cache", &self.cache)
            .finish()
    }
}
