//! Refresh pipeline configuration

use crate::constants::{DEFAULT_WORKER_ERROR_BACKOFF_MS, DEFAULT_WORKER_POLL_INTERVAL_MS};
use apicache_domain::constants::DEFAULT_REFRESH_QUEUE_KEY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Refresh worker settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    /// Redis key of the refresh queue
    pub queue_key: String,

    /// Poll interval while the queue is empty (milliseconds)
    pub poll_interval_ms: u64,

    /// Pause after a failed receive (milliseconds)
    pub error_backoff_ms: u64,
}

impl WorkerConfig {
    /// Poll interval as a [`Duration`]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Error back-off as a [`Duration`]
    pub fn error_backoff(&self) -> Duration {
        Duration::from_millis(self.error_backoff_ms)
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            queue_key: DEFAULT_REFRESH_QUEUE_KEY.to_string(),
            poll_interval_ms: DEFAULT_WORKER_POLL_INTERVAL_MS,
            error_backoff_ms: DEFAULT_WORKER_ERROR_BACKOFF_MS,
        }
    }
}

/// Detached refresh process settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Program spawned as `<program> --refresh=<key>`; defaults to the
    /// running executable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<PathBuf>,
}
