//! HTTP remote source
//!
//! Provides the reqwest-based [`HttpRemoteSource`] and its client
//! configuration.

pub mod config;
pub mod source;

pub use config::HttpClientConfig;
pub use source::HttpRemoteSource;
