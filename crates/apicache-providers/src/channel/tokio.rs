//! Tokio in-process refresh channel
//!
//! Unbounded mpsc channel for running the refresh worker as a task inside the
//! same process as the readers. The channel closes when [`close`] is called;
//! the worker then drains what is left and stops.
//!
//! [`close`]: TokioRefreshChannel::close

use apicache_domain::error::{Error, Result};
use apicache_domain::ports::infrastructure::RefreshChannel;
use apicache_domain::value_objects::{RefreshEnvelope, RefreshMessage};
use async_trait::async_trait;
use std::sync::Mutex;
use tokio::sync::mpsc;
use tracing::debug;

/// In-process refresh channel
pub struct TokioRefreshChannel {
    sender: Mutex<Option<mpsc::UnboundedSender<RefreshEnvelope>>>,
    receiver: tokio::sync::Mutex<mpsc::UnboundedReceiver<RefreshEnvelope>>,
}

impl TokioRefreshChannel {
    /// Create an open channel
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender: Mutex::new(Some(sender)),
            receiver: tokio::sync::Mutex::new(receiver),
        }
    }

    /// Stop accepting messages; `receive` returns `None` once drained
    pub fn close(&self) {
        if let Ok(mut sender) = self.sender.lock() {
            sender.take();
        }
    }

    /// Whether `close` has been called
    pub fn is_closed(&self) -> bool {
        self.sender.lock().map(|s| s.is_none()).unwrap_or(true)
    }

    /// Enqueue an arbitrary envelope (used for messages of other types)
    pub fn publish_envelope(&self, envelope: RefreshEnvelope) -> Result<()> {
        let guard = self
            .sender
            .lock()
            .map_err(|_| Error::channel("Refresh channel lock poisoned"))?;
        let sender = guard
            .as_ref()
            .ok_or_else(|| Error::channel("Refresh channel is closed"))?;
        sender
            .send(envelope)
            .map_err(|_| Error::channel("Refresh channel receiver dropped"))
    }
}

impl Default for TokioRefreshChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TokioRefreshChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioRefreshChannel")
            .field("closed", &self.is_closed())
            .finish()
    }
}

#[async_trait]
impl RefreshChannel for TokioRefreshChannel {
    async fn publish(&self, message: &RefreshMessage) -> Result<()> {
        self.publish_envelope(message.to_envelope())?;
        debug!("Queued in-process refresh for {}", message.path);
        Ok(())
    }

    async fn receive(&self) -> Result<Option<RefreshEnvelope>> {
        Ok(self.receiver.lock().await.recv().await)
    }

    fn channel_name(&self) -> &str {
        "tokio"
    }
}
