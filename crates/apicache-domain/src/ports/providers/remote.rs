//! Remote Source Port
//!
//! The JSON API fronted by the cache. Requests are authenticated by the
//! implementation; callers only pass endpoint paths.

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Remote data source port
///
/// Response bodies that are empty or not valid JSON decode to
/// [`Value::Null`] rather than an error. Only transport failures are
/// reported as [`Error::Network`](crate::Error::Network).
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// `GET {base}{path}`
    async fn get(&self, path: &str) -> Result<Value>;

    /// `POST {base}{path}` with a JSON body
    async fn post(&self, path: &str, body: &Value) -> Result<Value>;

    /// Base URL requests are issued against
    fn base_url(&self) -> &str;
}
