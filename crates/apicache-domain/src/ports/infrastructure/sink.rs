//! Async Refresh Sink Port
//!
//! A single "refresh this key soon" action shared by the queue-based and
//! process-based triggers. Callers never wait for the refresh itself.

use crate::error::Result;
use crate::value_objects::CacheKey;
use async_trait::async_trait;

/// Fire-and-forget refresh scheduling
#[async_trait]
pub trait AsyncRefreshSink: Send + Sync + std::fmt::Debug {
    /// Arrange for `key` to be refreshed out of band
    async fn schedule(&self, key: &CacheKey) -> Result<()>;

    /// Short identifier of the sink (e.g. "channel", "process")
    fn sink_name(&self) -> &str;
}
