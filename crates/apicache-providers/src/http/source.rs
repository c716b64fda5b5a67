//! Bearer-authenticated JSON API source
//!
//! Issues `GET`/`POST` requests against `{base_url}{path}` with an
//! `Authorization: Bearer <token>` header. Response bodies are decoded
//! leniently: anything that is not JSON becomes `null`, regardless of the
//! status code. Only transport failures surface as errors.
//!
//! ## Example
//!
//! ```ignore
//! use apicache_providers::http::{HttpClientConfig, HttpRemoteSource};
//!
//! let source = HttpRemoteSource::new(
//!     "https://cms.example.com",
//!     "secret-token",
//!     &HttpClientConfig::default(),
//! )?;
//! let items = source.get("/items/articles").await?;
//! ```

use crate::http::HttpClientConfig;
use crate::utils::decode_json_body;
use apicache_domain::error::{Error, Result};
use apicache_domain::ports::providers::RemoteSource;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, warn};

/// Remote JSON API reached over HTTP
#[derive(Clone)]
pub struct HttpRemoteSource {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpRemoteSource {
    /// Create a source for `base_url` authenticating with `token`
    pub fn new<U: Into<String>, T: Into<String>>(
        base_url: U,
        token: T,
        config: &HttpClientConfig,
    ) -> Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(config.max_idle_per_host)
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::network_with_source("Failed to build HTTP client", e))?;

        Ok(Self::with_client(client, base_url, token))
    }

    /// Create a source around an existing client
    pub fn with_client<U: Into<String>, T: Into<String>>(
        client: Client,
        base_url: U,
        token: T,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Full URL for an endpoint path (plain concatenation)
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode(method: &str, url: &str, response: Response) -> Result<Value> {
        let status = response.status();
        if !status.is_success() {
            warn!("{} {} answered {}", method, url, status);
        }
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::network_with_source(format!("{method} {url}: reading body failed"), e))?;
        debug!("{} {} -> {} ({} bytes)", method, url, status, body.len());
        Ok(decode_json_body(&body))
    }
}

impl std::fmt::Debug for HttpRemoteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRemoteSource")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl RemoteSource for HttpRemoteSource {
    async fn get(&self, path: &str) -> Result<Value> {
        let url = self.url_for(path);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| Error::network_with_source(format!("GET {url} failed"), e))?;
        Self::decode("GET", &url, response).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        let url = self.url_for(path);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::network_with_source(format!("POST {url} failed"), e))?;
        Self::decode("POST", &url, response).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
