//! Fallback refresh sink
//!
//! Wraps a preferred sink (usually the channel) and a weaker one (usually the
//! detached process). Exactly one of them performs the schedule.

use apicache_domain::error::Result;
use apicache_domain::ports::infrastructure::AsyncRefreshSink;
use apicache_domain::value_objects::CacheKey;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

/// Primary sink with a fallback for when it is unavailable
#[derive(Debug, Clone)]
pub struct FallbackSink {
    primary: Arc<dyn AsyncRefreshSink>,
    fallback: Arc<dyn AsyncRefreshSink>,
    name: String,
}

impl FallbackSink {
    /// Create a sink trying `primary` first
    ///
    /// The sink is named `<primary>+<fallback>`, e.g. `channel+process`.
    pub fn new(primary: Arc<dyn AsyncRefreshSink>, fallback: Arc<dyn AsyncRefreshSink>) -> Self {
        let name = format!("{}+{}", primary.sink_name(), fallback.sink_name());
        Self {
            primary,
            fallback,
            name,
        }
    }
}

#[async_trait]
impl AsyncRefreshSink for FallbackSink {
    async fn schedule(&self, key: &CacheKey) -> Result<()> {
        match self.primary.schedule(key).await {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!(
                    "{} sink failed for {}, falling back to {}: {}",
                    self.primary.sink_name(),
                    key,
                    self.fallback.sink_name(),
                    e
                );
                self.fallback.schedule(key).await
            }
        }
    }

    fn sink_name(&self) -> &str {
        &self.name
    }
}
