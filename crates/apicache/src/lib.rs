//! # apicache
//!
//! Stale-while-revalidate cache in front of a remote JSON API.
//!
//! Reads are served from Redis or the filesystem. Entries older than the TTL
//! are still served while a refresh is scheduled on a Redis-backed queue, or
//! by spawning `apicache --refresh=<key>` when no queue is available. Missing
//! entries are fetched inline.
//!
//! ## Example
//!
//! ```ignore
//! use apicache::infrastructure::{AppContext, ConfigLoader};
//! use apicache::domain::CacheKey;
//!
//! let config = ConfigLoader::new().load()?;
//! let context = AppContext::build(config, None).await?;
//! let items = context.orchestrator().fetch(&CacheKey::new("/items")).await;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - value objects, error type and port traits
//! - `application` - staleness cache, refresh trigger, fetch orchestration, worker
//! - `providers` - Redis/filesystem backends, channels, sinks, HTTP source
//! - `infrastructure` - configuration, logging and bootstrap

/// Domain layer - value objects, errors and ports
pub mod domain {
    pub use apicache_domain::*;
}

/// Application layer - caching use cases
pub mod application {
    pub use apicache_application::*;
}

/// Provider implementations
pub mod providers {
    pub use apicache_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
pub mod infrastructure {
    pub use apicache_infrastructure::*;
}

/// Command line interface
pub mod cli;

pub use cli::{Mode, execute, run};
pub use domain::{CacheKey, Error, Result};
