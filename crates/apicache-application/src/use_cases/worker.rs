//! Refresh Worker Use Case
//!
//! Long-running consumer of a [`RefreshChannel`]. Messages are handled one at
//! a time and independently; a failing message never stops the loop.

use crate::use_cases::RefreshService;
use apicache_domain::ports::infrastructure::RefreshChannel;
use apicache_domain::value_objects::RefreshEnvelope;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Default pause after a failed receive
const DEFAULT_ERROR_BACKOFF: Duration = Duration::from_secs(1);

/// Outcome of handling one envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    /// Key refreshed
    Refreshed,
    /// Message type has no handler
    Skipped,
    /// Refresh message without a path
    Rejected,
}

/// Consumer loop binding a channel to the refresh routine
#[derive(Debug, Clone)]
pub struct RefreshWorker {
    channel: Arc<dyn RefreshChannel>,
    refresh: RefreshService,
    error_backoff: Duration,
}

impl RefreshWorker {
    /// Create a worker consuming `channel`
    pub fn new(channel: Arc<dyn RefreshChannel>, refresh: RefreshService) -> Self {
        Self {
            channel,
            refresh,
            error_backoff: DEFAULT_ERROR_BACKOFF,
        }
    }

    /// Pause applied after a receive error
    pub fn with_error_backoff(mut self, backoff: Duration) -> Self {
        self.error_backoff = backoff;
        self
    }

    /// Consume messages until the channel closes
    ///
    /// Distributed channels never close, so for them this runs until the
    /// process is stopped. Returns the number of keys refreshed.
    pub async fn run(&self) -> usize {
        info!("Refresh worker listening on {} channel", self.channel.channel_name());
        let mut refreshed = 0;

        loop {
            match self.channel.receive().await {
                Ok(Some(envelope)) => {
                    if self.handle(envelope).await == HandleResult::Refreshed {
                        refreshed += 1;
                    }
                }
                Ok(None) => {
                    info!("Refresh channel closed, worker stopping after {} refreshes", refreshed);
                    return refreshed;
                }
                Err(e) => {
                    error!("Refresh channel receive failed: {}", e);
                    tokio::time::sleep(self.error_backoff).await;
                }
            }
        }
    }

    /// Handle a single envelope
    pub async fn handle(&self, envelope: RefreshEnvelope) -> HandleResult {
        if !envelope.is_refresh() {
            debug!("No handler for message type {}, skipping", envelope.message_type);
            return HandleResult::Skipped;
        }

        match envelope.into_message() {
            Some(message) => {
                self.refresh.refresh(&message.path).await;
                HandleResult::Refreshed
            }
            None => {
                warn!("Refresh message rejected: no path specified");
                HandleResult::Rejected
            }
        }
    }
}
