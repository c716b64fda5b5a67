//! Cache entry envelope and staleness classification
//!
//! Every backend stores the same JSON envelope:
//!
//! ```json
//! {"time": 1700000000, "data": {"a": 1}}
//! ```
//!
//! `time` is the unix timestamp (seconds) at which the entry was written and
//! `data` is whatever the remote source returned.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Persisted cache envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Unix timestamp (seconds) of the write
    #[serde(rename = "time")]
    pub written_at: i64,
    /// Payload returned by the remote source
    #[serde(rename = "data", default)]
    pub payload: Value,
}

impl CacheEntry {
    /// Wrap a payload written at `written_at`
    pub fn new(payload: Value, written_at: i64) -> Self {
        Self {
            written_at,
            payload,
        }
    }

    /// Serialize the envelope to its JSON wire form
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode an envelope, returning `None` for anything that is not a valid
    /// `{"time": .., "data": ..}` object
    pub fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Seconds elapsed between the write and `now`
    pub fn age(&self, now: i64) -> i64 {
        now.saturating_sub(self.written_at)
    }
}

/// Classification of a cache read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StalenessVerdict {
    /// No entry decodes for the key
    Missing,
    /// Entry younger than the TTL
    Fresh,
    /// Entry present but at least TTL old; its payload is still served
    Stale,
}

impl StalenessVerdict {
    /// Classify an entry written at `written_at` as seen at `now`.
    ///
    /// An entry is fresh while `now - written_at < ttl_secs`; an entry whose
    /// age equals the TTL is already stale.
    pub fn classify(now: i64, written_at: i64, ttl_secs: u64) -> Self {
        let ttl = i64::try_from(ttl_secs).unwrap_or(i64::MAX);
        if now.saturating_sub(written_at) < ttl {
            Self::Fresh
        } else {
            Self::Stale
        }
    }

    /// Whether the verdict carries a payload
    pub fn has_payload(self) -> bool {
        !matches!(self, Self::Missing)
    }

    /// Lowercase name used in logs and CLI output
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Fresh => "fresh",
            Self::Stale => "stale",
        }
    }
}

impl std::fmt::Display for StalenessVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a classified cache read
#[derive(Debug, Clone, PartialEq)]
pub struct CachedRead {
    /// Last known payload, absent only when the verdict is `Missing`
    pub payload: Option<Value>,
    /// Staleness classification
    pub verdict: StalenessVerdict,
    /// Write timestamp of the entry, if any
    pub written_at: Option<i64>,
}

impl CachedRead {
    /// A read that found nothing usable
    pub fn missing() -> Self {
        Self {
            payload: None,
            verdict: StalenessVerdict::Missing,
            written_at: None,
        }
    }

    /// Classify a decoded entry
    pub fn from_entry(entry: CacheEntry, now: i64, ttl_secs: u64) -> Self {
        Self {
            verdict: StalenessVerdict::classify(now, entry.written_at, ttl_secs),
            written_at: Some(entry.written_at),
            payload: Some(entry.payload),
        }
    }

    /// Write time formatted as RFC 3339, if the entry exists
    pub fn written_at_rfc3339(&self) -> Option<String> {
        self.written_at
            .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0))
            .map(|dt| dt.to_rfc3339())
    }
}
