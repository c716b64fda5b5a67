//! Refresh Channel Port
//!
//! Message transport between readers that detect stale entries and the
//! refresh worker. Delivery is at-least-once; refreshes are idempotent, so
//! duplicates are harmless and losses only delay freshness until the next
//! stale read.

use crate::error::Result;
use crate::value_objects::{RefreshEnvelope, RefreshMessage};
use async_trait::async_trait;

/// Refresh channel port
#[async_trait]
pub trait RefreshChannel: Send + Sync + std::fmt::Debug {
    /// Enqueue a refresh message
    async fn publish(&self, message: &RefreshMessage) -> Result<()>;

    /// Wait for the next envelope
    ///
    /// # Returns
    /// `None` once the channel is closed and will never yield again.
    /// Distributed channels never close and keep waiting instead.
    async fn receive(&self) -> Result<Option<RefreshEnvelope>>;

    /// Short identifier of the transport (e.g. "redis", "tokio")
    fn channel_name(&self) -> &str;
}
