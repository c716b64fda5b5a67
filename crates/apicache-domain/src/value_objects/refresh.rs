//! Refresh message value objects
//!
//! The async channel carries a typed envelope so that a single transport can
//! host several message kinds:
//!
//! ```json
//! {"type": "directus-update-endpoint", "payload": {"path": "/items"}}
//! ```

use crate::constants::REFRESH_MESSAGE_TYPE;
use crate::value_objects::CacheKey;
use serde::{Deserialize, Serialize};

/// Request to refresh one cache key
///
/// Refreshing is idempotent, so delivering the same message twice is harmless.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RefreshMessage {
    /// Key (endpoint path) to refresh
    pub path: CacheKey,
}

impl RefreshMessage {
    /// Create a refresh message for `path`
    pub fn new<K: Into<CacheKey>>(path: K) -> Self {
        Self { path: path.into() }
    }

    /// Wrap the message in its wire envelope
    pub fn to_envelope(&self) -> RefreshEnvelope {
        RefreshEnvelope {
            message_type: REFRESH_MESSAGE_TYPE.to_string(),
            payload: RefreshPayload {
                path: Some(self.path.as_str().to_string()),
            },
        }
    }
}

/// Payload section of a refresh envelope
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RefreshPayload {
    /// Key to refresh; producers outside this crate may omit it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Wire envelope published on the async channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshEnvelope {
    /// Message type tag used to route the message to its handler
    #[serde(rename = "type")]
    pub message_type: String,
    /// Message payload
    #[serde(default)]
    pub payload: RefreshPayload,
}

impl RefreshEnvelope {
    /// Serialize to JSON
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse an envelope from JSON
    pub fn parse(raw: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Whether this envelope is a refresh request
    pub fn is_refresh(&self) -> bool {
        self.message_type == REFRESH_MESSAGE_TYPE
    }

    /// Extract the refresh message, `None` when the path is missing or empty
    pub fn into_message(self) -> Option<RefreshMessage> {
        self.payload
            .path
            .filter(|p| !p.is_empty())
            .map(RefreshMessage::new)
    }
}
