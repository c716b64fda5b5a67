//! Application configuration root

use super::{CacheConfig, LoggingConfig, RedisConfig, RefreshConfig, SourceConfig, WorkerConfig};
use serde::{Deserialize, Serialize};

/// Complete configuration of an apicache process
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Remote API the cache fronts
    pub source: SourceConfig,

    /// Freshness window and filesystem location
    pub cache: CacheConfig,

    /// Redis server; when set and reachable it backs both the cache and the
    /// refresh queue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redis: Option<RedisConfig>,

    /// Refresh worker settings
    pub worker: WorkerConfig,

    /// Detached refresh process settings
    pub refresh: RefreshConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}
