//! Domain Port Interfaces
//!
//! Contracts between the caching core and the outside world. The domain and
//! application layers depend only on these traits; `apicache-providers`
//! implements them.
//!
//! ## Organization
//!
//! - **providers/** - data-holding collaborators (cache backends, remote source)
//! - **infrastructure/** - refresh pipeline plumbing (channels, sinks, clock)

/// Refresh pipeline and time ports
pub mod infrastructure;
/// External service provider ports
pub mod providers;

pub use infrastructure::{AsyncRefreshSink, Clock, RefreshChannel, SystemClock};
pub use providers::{CacheBackend, RemoteSource};
