//! Cache Backend Port
//!
//! Uniform get/set over a key-value surface. Backends know nothing about
//! timestamps or freshness; they persist and return the serialized
//! [`CacheEntry`](crate::value_objects::CacheEntry) envelope verbatim.
//!
//! ## Implementations
//!
//! - **Filesystem**: one file per key, named by the key's SHA-512 digest
//! - **Redis**: key used directly as the Redis key
//!
//! Implementations are shared between request handlers and the refresh worker
//! and must accept concurrent calls without external locking.

use crate::error::Result;
use crate::value_objects::CacheKey;
use async_trait::async_trait;

/// Cache backend port
#[async_trait]
pub trait CacheBackend: Send + Sync + std::fmt::Debug {
    /// Fetch the raw stored value
    ///
    /// # Returns
    /// `None` when nothing is stored under `key`
    async fn get(&self, key: &CacheKey) -> Result<Option<String>>;

    /// Store a raw value, overwriting any previous one
    ///
    /// # Errors
    /// [`Error::StorageUnwritable`](crate::Error::StorageUnwritable) when the
    /// backend refuses the write
    async fn set(&self, key: &CacheKey, value: &str) -> Result<()>;

    /// Short identifier of the backend (e.g. "filesystem", "redis")
    fn backend_name(&self) -> &str;
}
