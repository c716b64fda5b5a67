//! Use cases
//!
//! - [`RefreshService`]: fetch one key from the remote source and store it
//! - [`FetchOrchestrator`]: stale-while-revalidate read path
//! - [`RefreshWorker`]: consumer loop for a refresh channel

pub mod fetch;
pub mod refresh;
pub mod worker;

pub use fetch::{FetchOrchestrator, FetchOutcome};
pub use refresh::RefreshService;
pub use worker::{HandleResult, RefreshWorker};
