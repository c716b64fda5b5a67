//! # apicache - Domain Layer
//!
//! Core types and port traits for the stale-while-revalidate cache that
//! fronts a remote JSON API.
//!
//! ## Contents
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`constants`] | Domain defaults (TTL, message type tag) |
//! | [`value_objects`] | `CacheKey`, `CacheEntry`, `StalenessVerdict`, `RefreshMessage` |
//! | [`ports`] | Traits implemented by providers (backends, channels, sinks, remote source) |
//!
//! This crate has no knowledge of Redis, HTTP or the filesystem; those live in
//! `apicache-providers` behind the traits declared here.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{CacheEntry, CacheKey, CachedRead, RefreshMessage, StalenessVerdict};
