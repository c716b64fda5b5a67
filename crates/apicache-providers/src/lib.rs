//! # apicache - Provider Implementations
//!
//! Concrete adapters for the ports declared in `apicache-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Cache | `CacheBackend` | Filesystem, Redis |
//! | Channel | `RefreshChannel` | Redis (set-backed queue), Tokio (in-process) |
//! | Sink | `AsyncRefreshSink` | Channel, Process, Fallback |
//! | Remote | `RemoteSource` | HTTP (reqwest, bearer auth) |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! apicache-providers = { version = "0.1", default-features = false }
//! ```
//!
//! Without `cache-redis` / `channel-redis` only the filesystem backend,
//! the in-process channel and the process sink are available.

// Re-export domain types commonly used with providers
pub use apicache_domain::error::{Error, Result};
pub use apicache_domain::ports::{AsyncRefreshSink, CacheBackend, RefreshChannel, RemoteSource};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Cache backend implementations
pub mod cache;

/// Refresh channel implementations
pub mod channel;

/// Async refresh sink implementations
pub mod sink;

/// HTTP remote source
pub mod http;
