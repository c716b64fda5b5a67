//! Redis cache backend
//!
//! Stores entries as plain Redis strings under the cache key itself. The
//! multiplexed connection is cloned per call, so request handlers and the
//! refresh worker share it without extra locking.
//!
//! ## Example
//!
//! ```ignore
//! use apicache_providers::cache::RedisCacheBackend;
//!
//! let backend = RedisCacheBackend::connect("localhost", 6379).await?;
//! // Point the same backend at another server
//! backend.configure("redis.internal", 6380).await?;
//! ```

use crate::constants::REDIS_CONNECT_TIMEOUT_SECS;
use apicache_domain::error::{Error, Result};
use apicache_domain::ports::providers::CacheBackend;
use apicache_domain::value_objects::CacheKey;
use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Live connection plus the address it points at
struct RedisState {
    address: String,
    connection: MultiplexedConnection,
}

/// Redis cache backend
pub struct RedisCacheBackend {
    state: RwLock<RedisState>,
}

impl RedisCacheBackend {
    /// Connect to `host:port`
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot be reached within the connect
    /// timeout.
    pub async fn connect(host: &str, port: u16) -> Result<Self> {
        let state = Self::open(host, port).await?;
        Ok(Self {
            state: RwLock::new(state),
        })
    }

    /// Reset the connection to point at `host:port`
    ///
    /// The previous connection is pinged and dropped first; a failure of that
    /// ping (for example because the old server is gone) is ignored. Only a
    /// failure to reach the new server is reported.
    pub async fn configure(&self, host: &str, port: u16) -> Result<()> {
        let mut state = self.state.write().await;

        let ping: redis::RedisResult<String> =
            redis::cmd("PING").query_async(&mut state.connection).await;
        if let Err(e) = ping {
            debug!("Ignoring failed ping on old Redis connection {}: {}", state.address, e);
        }

        *state = Self::open(host, port).await?;
        info!("Redis cache backend reconfigured to {}", state.address);
        Ok(())
    }

    /// Check the server answers `PING`
    pub async fn ping(&self) -> Result<()> {
        let mut conn = self.connection().await;
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map(|_| ())
            .map_err(|e| Error::cache_with_source("Redis PING failed", e))
    }

    /// Clone of the current multiplexed connection
    pub async fn connection(&self) -> MultiplexedConnection {
        self.state.read().await.connection.clone()
    }

    /// Address of the current server (`redis://host:port`)
    pub async fn address(&self) -> String {
        self.state.read().await.address.clone()
    }

    async fn open(host: &str, port: u16) -> Result<RedisState> {
        let address = format!("redis://{host}:{port}");
        let client = Client::open(address.as_str())
            .map_err(|e| Error::cache_with_source(format!("Invalid Redis address {address}"), e))?;

        let connection = tokio::time::timeout(
            Duration::from_secs(REDIS_CONNECT_TIMEOUT_SECS),
            client.get_multiplexed_async_connection(),
        )
        .await
        .map_err(|_| Error::cache(format!("Timed out connecting to Redis at {address}")))?
        .map_err(|e| Error::cache_with_source(format!("Failed to connect to Redis at {address}"), e))?;

        Ok(RedisState {
            address,
            connection,
        })
    }
}

#[async_trait]
impl CacheBackend for RedisCacheBackend {
    async fn get(&self, key: &CacheKey) -> Result<Option<String>> {
        let mut conn = self.connection().await;
        conn.get::<_, Option<String>>(key.as_str())
            .await
            .map_err(|e| Error::cache_with_source(format!("Redis GET {key} failed"), e))
    }

    async fn set(&self, key: &CacheKey, value: &str) -> Result<()> {
        let mut conn = self.connection().await;
        conn.set::<_, _, ()>(key.as_str(), value)
            .await
            .map_err(|e| {
                debug!("Redis SET {} failed: {}", key, e);
                Error::storage_unwritable(key.as_str())
            })
    }

    fn backend_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisCacheBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let address = self
            .state
            .try_read()
            .map(|s| s.address.clone())
            .unwrap_or_else(|_| "<reconfiguring>".to_string());
        f.debug_struct("RedisCacheBackend")
            .field("address", &address)
            .finish()
    }
}
