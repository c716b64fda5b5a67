//! Domain Value Objects
//!
//! Immutable value objects describing cached resources and refresh work.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`CacheKey`] | Remote endpoint path identifying a cached resource |
//! | [`CacheEntry`] | Timestamped envelope persisted by cache backends |
//! | [`StalenessVerdict`] | Missing / Fresh / Stale classification of a read |
//! | [`CachedRead`] | Result of a classified cache read |
//! | [`RefreshMessage`] | Unit of work carried on the async refresh channel |

/// Cache entry envelope and staleness classification
pub mod entry;
/// Cache key value object
pub mod key;
/// Refresh message value objects
pub mod refresh;

pub use entry::{CacheEntry, CachedRead, StalenessVerdict};
pub use key::CacheKey;
pub use refresh::{RefreshEnvelope, RefreshMessage, RefreshPayload};
