//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | CacheBackend | Raw string get/set over a key-value surface |
//! | RemoteSource | Authenticated JSON API the cache fronts |

/// Cache backend port
pub mod cache;
/// Remote data source port
pub mod remote;

pub use cache::CacheBackend;
pub use remote::RemoteSource;
