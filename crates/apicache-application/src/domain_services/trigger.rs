//! Refresh trigger
//!
//! Decides what a read verdict requires and hands out-of-band work to the
//! configured [`AsyncRefreshSink`].

use apicache_domain::ports::infrastructure::AsyncRefreshSink;
use apicache_domain::value_objects::{CacheKey, StalenessVerdict};
use std::sync::Arc;
use tracing::{debug, warn};

/// What a read requires before (or after) answering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefreshAction {
    /// Nothing to do
    None,
    /// Refresh synchronously before answering
    RefreshInline,
    /// Answer now, refresh out of band
    Schedule,
}

impl RefreshAction {
    /// Action required by `verdict`
    pub fn for_verdict(verdict: StalenessVerdict) -> Self {
        match verdict {
            StalenessVerdict::Missing => Self::RefreshInline,
            StalenessVerdict::Stale => Self::Schedule,
            StalenessVerdict::Fresh => Self::None,
        }
    }
}

/// Fire-and-forget scheduler for stale keys
#[derive(Debug, Clone)]
pub struct RefreshTrigger {
    sink: Arc<dyn AsyncRefreshSink>,
}

impl RefreshTrigger {
    /// Schedule through `sink`
    pub fn new(sink: Arc<dyn AsyncRefreshSink>) -> Self {
        Self { sink }
    }

    /// Ask for `key` to be refreshed
    ///
    /// Best effort: failures are logged and the caller is never affected.
    /// Returns whether the sink accepted the request.
    pub async fn schedule(&self, key: &CacheKey) -> bool {
        match self.sink.schedule(key).await {
            Ok(()) => {
                debug!("scheduled refresh of {} via {}", key, self.sink.sink_name());
                true
            }
            Err(e) => {
                warn!("could not schedule refresh of {}: {}", key, e);
                false
            }
        }
    }

    /// Name of the sink in use
    pub fn sink_name(&self) -> &str {
        self.sink.sink_name()
    }
}
