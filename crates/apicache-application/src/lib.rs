//! Application Layer - apicache
//!
//! Stale-while-revalidate caching in front of a remote JSON API, expressed
//! purely against the ports declared in `apicache-domain`.
//!
//! ## Flow
//!
//! ```text
//! fetch(key) ─► StalenessCache::read ─┬─ Fresh   ─► return payload
//!                                     ├─ Stale   ─► RefreshTrigger::schedule, return old payload
//!                                     └─ Missing ─► RefreshService::refresh, re-read, return
//!
//! RefreshChannel ─► RefreshWorker ─► RefreshService::refresh ─► StalenessCache::write
//! ```
//!
//! ## Contents
//!
//! - `domain_services::*`: staleness classification and the refresh decision
//! - `use_cases::*`: refresh, fetch orchestration and the refresh worker
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `apicache-domain`: value objects and port traits
//! - Pure Rust libraries for async, serialization, logging

pub mod domain_services;
pub mod use_cases;

pub use domain_services::*;
pub use use_cases::*;
