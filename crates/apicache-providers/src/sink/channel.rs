//! Channel-backed refresh sink

use apicache_domain::error::Result;
use apicache_domain::ports::infrastructure::{AsyncRefreshSink, RefreshChannel};
use apicache_domain::value_objects::{CacheKey, RefreshMessage};
use async_trait::async_trait;
use std::sync::Arc;

/// Schedules refreshes by publishing [`RefreshMessage`]s
#[derive(Debug, Clone)]
pub struct ChannelSink {
    channel: Arc<dyn RefreshChannel>,
}

impl ChannelSink {
    /// Create a sink publishing on `channel`
    pub fn new(channel: Arc<dyn RefreshChannel>) -> Self {
        Self { channel }
    }

    /// The underlying channel
    pub fn channel(&self) -> &Arc<dyn RefreshChannel> {
        &self.channel
    }
}

#[async_trait]
impl AsyncRefreshSink for ChannelSink {
    async fn schedule(&self, key: &CacheKey) -> Result<()> {
        self.channel.publish(&RefreshMessage::new(key.clone())).await
    }

    fn sink_name(&self) -> &str {
        "channel"
    }
}
