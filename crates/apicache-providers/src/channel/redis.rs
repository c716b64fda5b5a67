//! Redis refresh channel
//!
//! Pending refreshes are kept in a Redis set: producers `SADD` the JSON
//! envelope and the worker `SPOP`s one member at a time, sleeping for the
//! poll interval while the set is empty. Since envelopes only carry the
//! key, several stale reads of the same key before the worker catches up
//! collapse into a single refresh.
//!
//! ## Example
//!
//! ```ignore
//! use apicache_providers::channel::RedisRefreshChannel;
//!
//! let conn = backend.connection().await;
//! let channel = RedisRefreshChannel::new(conn, "apicache:refresh-queue");
//! channel.publish(&RefreshMessage::new("/items")).await?;
//! ```

use crate::constants::REDIS_QUEUE_POLL_INTERVAL_MS;
use apicache_domain::error::{Error, Result};
use apicache_domain::ports::infrastructure::RefreshChannel;
use apicache_domain::value_objects::{RefreshEnvelope, RefreshMessage};
use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;
use std::time::Duration;
use tracing::{debug, warn};

/// Redis set-backed refresh channel
#[derive(Clone)]
pub struct RedisRefreshChannel {
    connection: MultiplexedConnection,
    queue_key: String,
    poll_interval: Duration,
}

impl RedisRefreshChannel {
    /// Create a channel over an existing connection
    pub fn new<S: Into<String>>(connection: MultiplexedConnection, queue_key: S) -> Self {
        Self {
            connection,
            queue_key: queue_key.into(),
            poll_interval: Duration::from_millis(REDIS_QUEUE_POLL_INTERVAL_MS),
        }
    }

    /// Set how long `receive` sleeps while the queue is empty
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Redis key of the queue
    pub fn queue_key(&self) -> &str {
        &self.queue_key
    }

    /// Number of distinct pending envelopes
    pub async fn pending(&self) -> Result<usize> {
        let mut conn = self.connection.clone();
        conn.scard(&self.queue_key)
            .await
            .map_err(|e| Error::channel_with_source("Redis SCARD failed", e))
    }
}

impl std::fmt::Debug for RedisRefreshChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisRefreshChannel")
            .field("queue_key", &self.queue_key)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}

#[async_trait]
impl RefreshChannel for RedisRefreshChannel {
    async fn publish(&self, message: &RefreshMessage) -> Result<()> {
        let payload = message.to_envelope().to_json()?;
        let mut conn = self.connection.clone();
        conn.sadd::<_, _, ()>(&self.queue_key, payload)
            .await
            .map_err(|e| Error::channel_with_source("Redis SADD failed", e))?;
        debug!("Queued refresh for {} on {}", message.path, self.queue_key);
        Ok(())
    }

    async fn receive(&self) -> Result<Option<RefreshEnvelope>> {
        let mut conn = self.connection.clone();
        loop {
            let popped: Option<String> = conn
                .spop(&self.queue_key)
                .await
                .map_err(|e| Error::channel_with_source("Redis SPOP failed", e))?;

            match popped {
                Some(raw) => match RefreshEnvelope::parse(&raw) {
                    Ok(envelope) => return Ok(Some(envelope)),
                    Err(e) => warn!("Dropping malformed refresh envelope {:?}: {}", raw, e),
                },
                None => tokio::time::sleep(self.poll_interval).await,
            }
        }
    }

    fn channel_name(&self) -> &str {
        "redis"
    }
}
