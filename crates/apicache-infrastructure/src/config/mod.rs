//! Configuration management
//!
//! ```toml
//! [source]
//! url = "https://cms.example.com"
//! token = "secret"
//!
//! [cache]
//! ttl_secs = 3600
//!
//! [redis]
//! host = "localhost"
//! port = 6379
//! ```
//!
//! Every key can be overridden from the environment, e.g.
//! `APICACHE_SOURCE__TOKEN` or `APICACHE_REDIS__HOST`.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, CacheConfig, LoggingConfig, RedisConfig, RefreshConfig, SourceConfig, WorkerConfig,
};
