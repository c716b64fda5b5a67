//! Cache Backend Implementations
//!
//! | Backend | Type | Description |
//! |---------|------|-------------|
//! | [`FilesystemCacheBackend`] | Local | One file per key under a cache directory |
//! | [`RedisCacheBackend`] | Distributed | Redis string keys, shared across processes |
//!
//! ## Backend Selection
//!
//! The Redis backend is used whenever a Redis server is configured and
//! reachable at startup; otherwise the filesystem backend is used. The choice
//! is made once per process by `apicache-infrastructure`.

pub mod filesystem;
#[cfg(feature = "cache-redis")]
pub mod redis;

pub use filesystem::FilesystemCacheBackend;
#[cfg(feature = "cache-redis")]
pub use self::redis::RedisCacheBackend;
