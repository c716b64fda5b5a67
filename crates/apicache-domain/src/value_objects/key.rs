//! Cache key value object

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};
use std::fmt;

/// Opaque identifier of a cached resource
///
/// A key is the remote endpoint path (for example `/items/articles`). It is
/// used verbatim by key-value backends; file-based backends store the entry
/// under [`CacheKey::digest`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheKey(String);

impl CacheKey {
    /// Create a key from an endpoint path
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self(path.into())
    }

    /// The key exactly as supplied by the caller
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fixed-width SHA-512 hex digest of the key (128 characters)
    pub fn digest(&self) -> String {
        hex::encode(Sha512::digest(self.0.as_bytes()))
    }

    /// Consume the key, returning the inner path
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CacheKey {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for CacheKey {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
