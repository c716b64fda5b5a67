//! Command line modes
//!
//! Exactly one mode is selected per invocation. `--refresh=<key>` is also
//! the form used by detached refresh processes.

use apicache_domain::error::{Error, Result};
use apicache_domain::value_objects::CacheKey;
use apicache_infrastructure::logging::init_logging;
use apicache_infrastructure::{AppContext, ConfigLoader};
use clap::{ArgGroup, Parser};
use serde_json::{Value, json};
use std::path::Path;
use tracing::{info, warn};

/// Command line interface for apicache
#[derive(Parser, Debug)]
#[command(name = "apicache")]
#[command(about = "Stale-while-revalidate cache for a remote JSON API")]
#[command(version)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["start", "refresh", "fetch", "post", "inspect"]),
))]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Run the refresh worker on the Redis queue
    #[arg(long)]
    pub start: bool,

    /// Refresh one key and exit
    #[arg(long, value_name = "KEY")]
    pub refresh: Option<String>,

    /// Print the payload for a key, refreshing as needed
    #[arg(long, value_name = "KEY")]
    pub fetch: Option<String>,

    /// POST to an endpoint path without caching
    #[arg(long, value_name = "PATH", requires = "body")]
    pub post: Option<String>,

    /// JSON request body for --post
    #[arg(long, value_name = "JSON", requires = "post")]
    pub body: Option<String>,

    /// Print the staleness verdict of a key without refreshing
    #[arg(long, value_name = "KEY")]
    pub inspect: Option<String>,
}

impl Cli {
    /// The selected mode
    pub fn mode(&self) -> Result<Mode> {
        if self.start {
            return Ok(Mode::Start);
        }
        if let Some(key) = &self.refresh {
            return Ok(Mode::Refresh(CacheKey::new(key.as_str())));
        }
        if let Some(key) = &self.fetch {
            return Ok(Mode::Fetch(CacheKey::new(key.as_str())));
        }
        if let Some(key) = &self.inspect {
            return Ok(Mode::Inspect(CacheKey::new(key.as_str())));
        }
        match (&self.post, &self.body) {
            (Some(path), Some(body)) => Mode::post(path, body),
            _ => Err(Error::invalid_argument(
                "one of --start, --refresh, --fetch, --post or --inspect is required",
            )),
        }
    }
}

/// What a single invocation does
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Consume the refresh queue until stopped
    Start,
    /// Refresh one key
    Refresh(CacheKey),
    /// Fetch one key through the stale-while-revalidate path
    Fetch(CacheKey),
    /// Uncached POST
    Post {
        /// Endpoint path
        path: String,
        /// Request body
        body: Value,
    },
    /// Classify one key without refreshing
    Inspect(CacheKey),
}

impl Mode {
    /// POST mode with a JSON body given as text
    pub fn post(path: &str, body: &str) -> Result<Self> {
        let body = serde_json::from_str(body)
            .map_err(|e| Error::invalid_argument(format!("--body is not valid JSON: {e}")))?;
        Ok(Self::Post {
            path: path.to_string(),
            body,
        })
    }
}

/// Load configuration, initialize logging and run `mode`
pub async fn run(
    config_path: Option<&Path>,
    mode: Mode,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;

    let context = AppContext::build(config, config_path.map(Path::to_path_buf)).await?;
    if let Some(output) = execute(&context, mode).await? {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }
    Ok(())
}

/// Run `mode` against an already built context
///
/// Returns the JSON document to print, if the mode produces one.
pub async fn execute(context: &AppContext, mode: Mode) -> Result<Option<Value>> {
    match mode {
        Mode::Start => {
            match context.worker() {
                Some(worker) => {
                    worker.run().await;
                }
                None => warn!("No refresh queue available (Redis not configured or unreachable), not starting worker"),
            }
            Ok(None)
        }
        Mode::Refresh(key) => {
            context.refresh_service().refresh(&key).await;
            Ok(None)
        }
        Mode::Fetch(key) => Ok(Some(context.orchestrator().fetch(&key).await)),
        Mode::Post { path, body } => {
            info!("POST {}", path);
            Ok(Some(context.orchestrator().post(&path, &body).await))
        }
        Mode::Inspect(key) => {
            let read = context.orchestrator().inspect(&key).await;
            Ok(Some(json!({
                "key": key,
                "backend": context.backend_name(),
                "verdict": read.verdict,
                "written_at": read.written_at_rfc3339(),
                "ttl_secs": context.orchestrator().cache().ttl(),
                "payload": read.payload,
            })))
        }
    }
}
