//! Application bootstrap
//!
//! Composition root: turns an [`AppConfig`] into a wired cache pipeline.
//!
//! ```text
//! redis configured and reachable?
//!   yes ─► RedisCacheBackend + RedisRefreshChannel
//!          sink = FallbackSink(ChannelSink, ProcessSink)
//!   no  ─► FilesystemCacheBackend, no channel
//!          sink = ProcessSink
//! ```
//!
//! The choice is made once per build; [`AppContext::reconfigure`] rebuilds
//! the pipeline, reusing the Redis backend when there is one.

use crate::config::loader::validate_app_config;
use crate::config::{AppConfig, CacheConfig, RedisConfig};
use apicache_application::{
    FetchOrchestrator, RefreshService, RefreshTrigger, RefreshWorker, StalenessCache,
};
use apicache_domain::error::Result;
use apicache_domain::ports::infrastructure::{AsyncRefreshSink, RefreshChannel};
use apicache_domain::ports::providers::{CacheBackend, RemoteSource};
use apicache_providers::cache::{FilesystemCacheBackend, RedisCacheBackend};
use apicache_providers::channel::RedisRefreshChannel;
use apicache_providers::http::{HttpClientConfig, HttpRemoteSource};
use apicache_providers::sink::{ChannelSink, FallbackSink, ProcessSink};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Wired application components
pub struct AppContext {
    config: Arc<AppConfig>,
    config_path: Option<PathBuf>,
    redis: Option<Arc<RedisCacheBackend>>,
    backend: Arc<dyn CacheBackend>,
    channel: Option<Arc<dyn RefreshChannel>>,
    sink: Arc<dyn AsyncRefreshSink>,
    refresh: RefreshService,
    orchestrator: FetchOrchestrator,
}

impl AppContext {
    /// Build the pipeline described by `config`
    ///
    /// `config_path` is forwarded to detached refresh processes as
    /// `--config <path>` so they see the same configuration.
    pub async fn build(config: AppConfig, config_path: Option<PathBuf>) -> Result<Self> {
        validate_app_config(&config)?;
        let redis = match &config.redis {
            Some(target) => connect_redis(target).await,
            None => None,
        };
        Self::assemble(config, config_path, redis).await
    }

    /// Rebuild the pipeline for a new configuration
    ///
    /// An existing Redis backend is pointed at the new address with
    /// [`RedisCacheBackend::configure`] instead of being replaced.
    pub async fn reconfigure(&mut self, config: AppConfig) -> Result<()> {
        validate_app_config(&config)?;
        let redis = match (&self.redis, &config.redis) {
            (Some(existing), Some(target)) => {
                match existing.configure(&target.host, target.port).await {
                    Ok(()) => Some(existing.clone()),
                    Err(e) => {
                        warn!("Redis unavailable after reconfiguration, using filesystem: {}", e);
                        None
                    }
                }
            }
            (None, Some(target)) => connect_redis(target).await,
            (_, None) => None,
        };

        let config_path = self.config_path.clone();
        *self = Self::assemble(config, config_path, redis).await?;
        Ok(())
    }

    async fn assemble(
        config: AppConfig,
        config_path: Option<PathBuf>,
        redis: Option<Arc<RedisCacheBackend>>,
    ) -> Result<Self> {
        let http = HttpClientConfig::with_timeout(Duration::from_secs(config.source.timeout_secs));
        let remote: Arc<dyn RemoteSource> = Arc::new(HttpRemoteSource::new(
            config.source.url.clone(),
            config.source.token.clone(),
            &http,
        )?);

        let backend: Arc<dyn CacheBackend> = match &redis {
            Some(redis) => redis.clone() as Arc<dyn CacheBackend>,
            None => Arc::new(filesystem_backend(&config.cache).await),
        };

        let process: Arc<dyn AsyncRefreshSink> =
            Arc::new(process_sink(&config, config_path.as_deref())?);

        let (channel, sink) = match &redis {
            Some(redis) => {
                let channel: Arc<dyn RefreshChannel> = Arc::new(
                    RedisRefreshChannel::new(
                        redis.connection().await,
                        config.worker.queue_key.clone(),
                    )
                    .with_poll_interval(config.worker.poll_interval()),
                );
                let sink: Arc<dyn AsyncRefreshSink> = Arc::new(FallbackSink::new(
                    Arc::new(ChannelSink::new(channel.clone())),
                    process,
                ));
                (Some(channel), sink)
            }
            None => (None, process),
        };

        let cache = StalenessCache::new(backend.clone(), config.cache.ttl_secs);
        let refresh = RefreshService::new(remote, cache.clone());
        let orchestrator =
            FetchOrchestrator::new(cache, RefreshTrigger::new(sink.clone()), refresh.clone());

        info!(
            "Cache backend: {}, refresh sink: {}, ttl: {}s",
            backend.backend_name(),
            sink.sink_name(),
            config.cache.ttl_secs
        );

        Ok(Self {
            config: Arc::new(config),
            config_path,
            redis,
            backend,
            channel,
            sink,
            refresh,
            orchestrator,
        })
    }

    /// Active configuration
    pub fn config(&self) -> Arc<AppConfig> {
        self.config.clone()
    }

    /// Configuration file the context was built from, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Read path
    pub fn orchestrator(&self) -> &FetchOrchestrator {
        &self.orchestrator
    }

    /// Synchronous refresh routine
    pub fn refresh_service(&self) -> &RefreshService {
        &self.refresh
    }

    /// Refresh queue, present only when Redis is live
    pub fn channel(&self) -> Option<Arc<dyn RefreshChannel>> {
        self.channel.clone()
    }

    /// Redis backend, when in use
    pub fn redis(&self) -> Option<Arc<RedisCacheBackend>> {
        self.redis.clone()
    }

    /// Name of the selected cache backend
    pub fn backend_name(&self) -> &str {
        self.backend.backend_name()
    }

    /// Name of the selected refresh sink
    pub fn sink_name(&self) -> &str {
        self.sink.sink_name()
    }

    /// Worker consuming the refresh queue, `None` without a channel
    pub fn worker(&self) -> Option<RefreshWorker> {
        self.channel.as_ref().map(|channel| {
            RefreshWorker::new(channel.clone(), self.refresh.clone())
                .with_error_backoff(self.config.worker.error_backoff())
        })
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("backend", &self.backend_name())
            .field("sink", &self.sink_name())
            .field("config_path", &self.config_path)
            .finish_non_exhaustive()
    }
}

/// Connect to Redis, `None` when the server cannot be reached
async fn connect_redis(target: &RedisConfig) -> Option<Arc<RedisCacheBackend>> {
    match RedisCacheBackend::connect(&target.host, target.port).await {
        Ok(backend) => Some(Arc::new(backend)),
        Err(e) => {
            warn!(
                "Redis at {}:{} unavailable, using filesystem cache: {}",
                target.host, target.port, e
            );
            None
        }
    }
}

async fn filesystem_backend(config: &CacheConfig) -> FilesystemCacheBackend {
    let backend = match &config.directory {
        Some(directory) => FilesystemCacheBackend::new(directory.clone()),
        None => FilesystemCacheBackend::in_user_cache_dir(),
    };
    // writes will report StorageUnwritable if this fails
    if let Err(e) = backend.ensure_directory().await {
        warn!("{}", e);
    }
    backend
}

fn process_sink(config: &AppConfig, config_path: Option<&Path>) -> Result<ProcessSink> {
    let sink = match &config.refresh.program {
        Some(program) => ProcessSink::new(program.clone()),
        None => ProcessSink::current_exe()?,
    };
    Ok(match config_path {
        Some(path) => sink.with_base_args([OsString::from("--config"), path.as_os_str().to_owned()]),
        None => sink,
    })
}
