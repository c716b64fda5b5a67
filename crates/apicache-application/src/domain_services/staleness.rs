//! Staleness-aware cache
//!
//! Wraps a [`CacheBackend`] with the `{"time", "data"}` envelope and
//! classifies every read against a single TTL.

use apicache_domain::constants::DEFAULT_CACHE_TTL_SECS;
use apicache_domain::error::Result;
use apicache_domain::ports::infrastructure::{Clock, SystemClock};
use apicache_domain::ports::providers::CacheBackend;
use apicache_domain::value_objects::{CacheEntry, CacheKey, CachedRead};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Cache that knows how old its entries are
#[derive(Debug, Clone)]
pub struct StalenessCache {
    backend: Arc<dyn CacheBackend>,
    ttl_secs: u64,
    clock: Arc<dyn Clock>,
}

impl StalenessCache {
    /// Create a cache over `backend` using the wall clock
    pub fn new(backend: Arc<dyn CacheBackend>, ttl_secs: u64) -> Self {
        Self::with_clock(backend, ttl_secs, Arc::new(SystemClock))
    }

    /// Create a cache with an explicit clock
    pub fn with_clock(backend: Arc<dyn CacheBackend>, ttl_secs: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            backend,
            ttl_secs,
            clock,
        }
    }

    /// Read and classify the entry stored under `key`
    ///
    /// Absent bytes, undecodable bytes and backend errors all read as
    /// Missing.
    pub async fn read(&self, key: &CacheKey) -> CachedRead {
        let raw = match self.backend.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("cache missing for {}", key);
                return CachedRead::missing();
            }
            Err(e) => {
                warn!("{} read failed for {}: {}", self.backend.backend_name(), key, e);
                return CachedRead::missing();
            }
        };

        let Some(entry) = CacheEntry::decode(&raw) else {
            debug!("undecodable cache entry for {}, treating as missing", key);
            return CachedRead::missing();
        };

        let read = CachedRead::from_entry(entry, self.clock.now(), self.ttl_secs);
        debug!("cache {} for {}", read.verdict, key);
        read
    }

    /// Stamp `payload` with the current time and store it
    ///
    /// # Errors
    ///
    /// Propagates the backend error, typically `Error::StorageUnwritable`.
    pub async fn write(&self, key: &CacheKey, payload: Value) -> Result<CacheEntry> {
        let entry = CacheEntry::new(payload, self.clock.now());
        self.backend.set(key, &entry.to_json()?).await?;
        Ok(entry)
    }

    /// Freshness window in seconds
    pub fn ttl(&self) -> u64 {
        self.ttl_secs
    }

    /// Current time according to the cache clock
    pub fn now(&self) -> i64 {
        self.clock.now()
    }

    /// Name of the underlying backend
    pub fn backend_name(&self) -> &str {
        self.backend.backend_name()
    }

    /// Cache over `backend` with the default one hour TTL
    pub fn with_default_ttl(backend: Arc<dyn CacheBackend>) -> Self {
        Self::new(backend, DEFAULT_CACHE_TTL_SECS)
    }
}
