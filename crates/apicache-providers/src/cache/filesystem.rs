//! Filesystem cache backend
//!
//! Stores each entry in its own file named after the SHA-512 digest of the
//! key, so arbitrary endpoint paths map to safe, fixed-width file names.
//!
//! ## Write semantics
//!
//! The cache directory is never created by `set`. Writability follows the
//! target:
//!
//! - an existing entry may be written when the file itself is writable, even
//!   inside a read-only directory;
//! - a new entry may be written when the directory is writable.
//!
//! Anything else fails with
//! [`Error::StorageUnwritable`](apicache_domain::Error::StorageUnwritable).
//! When the directory allows it, writes go to a temporary sibling file that is
//! renamed over the target, so concurrent readers never observe a half-written
//! entry. Otherwise an existing file is rewritten in place.
//!
//! ## Example
//!
//! ```ignore
//! use apicache_providers::cache::FilesystemCacheBackend;
//!
//! let backend = FilesystemCacheBackend::new("/var/cache/apicache");
//! backend.ensure_directory().await?;
//! ```

use crate::constants::FILESYSTEM_CACHE_DIR_NAME;
use apicache_domain::error::{Error, Result};
use apicache_domain::ports::providers::CacheBackend;
use apicache_domain::value_objects::CacheKey;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// Counter making temporary file names unique within the process
static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Filesystem cache backend
#[derive(Debug, Clone)]
pub struct FilesystemCacheBackend {
    directory: PathBuf,
}

impl FilesystemCacheBackend {
    /// Create a backend rooted at `directory`
    pub fn new<P: Into<PathBuf>>(directory: P) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Create a backend under the user's cache directory
    /// (e.g. `~/.cache/apicache`), falling back to the system temp dir
    pub fn in_user_cache_dir() -> Self {
        let base = dirs::cache_dir().unwrap_or_else(std::env::temp_dir);
        Self::new(base.join(FILESYSTEM_CACHE_DIR_NAME))
    }

    /// Directory holding the cache files
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the file storing `key`
    pub fn entry_path(&self, key: &CacheKey) -> PathBuf {
        self.directory.join(key.digest())
    }

    /// Create the cache directory if it does not exist yet
    pub async fn ensure_directory(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| {
                Error::io_with_source(
                    format!(
                        "Failed to create cache directory {}",
                        self.directory.display()
                    ),
                    e,
                )
            })
    }

    fn tmp_path(&self, target: &Path) -> PathBuf {
        let n = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let name = target
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.directory
            .join(format!(".{name}.{}.{n}.tmp", std::process::id()))
    }
}

#[async_trait]
impl CacheBackend for FilesystemCacheBackend {
    async fn get(&self, key: &CacheKey) -> Result<Option<String>> {
        let path = self.entry_path(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            // Not UTF-8: cannot be a valid envelope
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                debug!("Cache file {} is not valid UTF-8", path.display());
                Ok(None)
            }
            Err(e) => Err(Error::io_with_source(
                format!("Failed to read cache file {}", path.display()),
                e,
            )),
        }
    }

    async fn set(&self, key: &CacheKey, value: &str) -> Result<()> {
        let target = self.entry_path(key);
        let unwritable = || Error::storage_unwritable(target.display().to_string());

        // An existing entry is only replaced when the file itself accepts writes
        let existing = match OpenOptions::new().write(true).open(&target).await {
            Ok(file) => Some(file),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                debug!("Cache file {} is not writable: {}", target.display(), e);
                return Err(unwritable());
            }
        };

        let tmp = self.tmp_path(&target);
        match tokio::fs::write(&tmp, value).await {
            Ok(()) => {
                drop(existing);
                if let Err(e) = tokio::fs::rename(&tmp, &target).await {
                    warn!("Cannot replace cache file {}: {}", target.display(), e);
                    let _ = tokio::fs::remove_file(&tmp).await;
                    return Err(unwritable());
                }
                Ok(())
            }
            Err(e) => match existing {
                Some(file) => {
                    debug!(
                        "Cannot write {} ({}), rewriting {} in place",
                        tmp.display(),
                        e,
                        target.display()
                    );
                    write_in_place(file, value).await.map_err(|e| {
                        warn!("Cannot rewrite cache file {}: {}", target.display(), e);
                        unwritable()
                    })
                }
                None => {
                    debug!("Cannot write {}: {}", tmp.display(), e);
                    Err(unwritable())
                }
            },
        }
    }

    fn backend_name(&self) -> &str {
        "filesystem"
    }
}

async fn write_in_place(mut file: File, value: &str) -> std::io::Result<()> {
    file.set_len(0).await?;
    file.write_all(value.as_bytes()).await?;
    file.flush().await
}
