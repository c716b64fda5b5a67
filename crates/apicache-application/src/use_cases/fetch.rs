//! Fetch Orchestrator Use Case
//!
//! The public read path: serve fresh data directly, serve stale data while
//! scheduling a refresh, refresh inline when nothing is cached.

use crate::domain_services::{RefreshAction, RefreshTrigger, StalenessCache};
use crate::use_cases::RefreshService;
use apicache_domain::value_objects::{CacheKey, CachedRead, StalenessVerdict};
use serde_json::Value;
use tracing::debug;

/// Result of a fetch together with how it was obtained
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    /// Payload returned to the caller
    pub payload: Value,
    /// Verdict of the initial read
    pub verdict: StalenessVerdict,
    /// Action taken because of that verdict
    pub action: RefreshAction,
}

/// Stale-while-revalidate read path
#[derive(Debug, Clone)]
pub struct FetchOrchestrator {
    cache: StalenessCache,
    trigger: RefreshTrigger,
    refresh: RefreshService,
}

impl FetchOrchestrator {
    /// Create an orchestrator
    ///
    /// `refresh` should write to the same backend as `cache`.
    pub fn new(cache: StalenessCache, trigger: RefreshTrigger, refresh: RefreshService) -> Self {
        Self {
            cache,
            trigger,
            refresh,
        }
    }

    /// Payload for `key`, refreshing as its verdict requires
    pub async fn fetch(&self, key: &CacheKey) -> Value {
        self.fetch_outcome(key).await.payload
    }

    /// Like [`fetch`](Self::fetch), also reporting the verdict and action
    pub async fn fetch_outcome(&self, key: &CacheKey) -> FetchOutcome {
        let read = self.cache.read(key).await;
        let action = RefreshAction::for_verdict(read.verdict);

        let payload = match action {
            RefreshAction::None => read.payload.unwrap_or(Value::Null),
            RefreshAction::Schedule => {
                self.trigger.schedule(key).await;
                read.payload.unwrap_or(Value::Null)
            }
            RefreshAction::RefreshInline => {
                let fetched = self.refresh.refresh(key).await;
                match self.cache.read(key).await.payload {
                    Some(payload) => payload,
                    None => {
                        debug!("{} still missing after refresh, serving fetched payload", key);
                        fetched
                    }
                }
            }
        };

        FetchOutcome {
            payload,
            verdict: read.verdict,
            action,
        }
    }

    /// Classify `key` without triggering any refresh
    pub async fn inspect(&self, key: &CacheKey) -> CachedRead {
        self.cache.read(key).await
    }

    /// Uncached POST to the remote source
    pub async fn post(&self, path: &str, body: &Value) -> Value {
        self.refresh.post(path, body).await
    }

    /// The refresh service used for inline refreshes
    pub fn refresh_service(&self) -> &RefreshService {
        &self.refresh
    }

    /// The staleness cache reads go through
    pub fn cache(&self) -> &StalenessCache {
        &self.cache
    }

    /// The trigger used for stale keys
    pub fn trigger(&self) -> &RefreshTrigger {
        &self.trigger
    }
}
