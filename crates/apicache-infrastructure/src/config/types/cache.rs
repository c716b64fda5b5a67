//! Cache storage configuration

use apicache_domain::constants::DEFAULT_CACHE_TTL_SECS;
use apicache_providers::constants::REDIS_DEFAULT_PORT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Freshness and filesystem settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Seconds an entry stays fresh
    pub ttl_secs: u64,

    /// Directory of the filesystem backend; defaults to the user cache dir
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_CACHE_TTL_SECS,
            directory: None,
        }
    }
}

/// Redis server address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    /// Host name or IP
    pub host: String,

    /// TCP port
    pub port: u16,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: REDIS_DEFAULT_PORT,
        }
    }
}
