//! Detached process refresh sink
//!
//! Re-invokes the host program as `<program> [base args] --refresh=<key>`
//! with all standard streams redirected to null. The child is not awaited and
//! no handle is kept; its success or failure is never observed.

use apicache_domain::constants::REFRESH_ARG_FLAG;
use apicache_domain::error::{Error, Result};
use apicache_domain::ports::infrastructure::AsyncRefreshSink;
use apicache_domain::value_objects::CacheKey;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Spawns one-shot refresh processes
#[derive(Debug, Clone)]
pub struct ProcessSink {
    program: PathBuf,
    base_args: Vec<OsString>,
}

impl ProcessSink {
    /// Spawn `program` for each refresh
    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        Self {
            program: program.into(),
            base_args: Vec::new(),
        }
    }

    /// Spawn the currently running executable
    pub fn current_exe() -> Result<Self> {
        let exe = std::env::current_exe()
            .map_err(|e| Error::process_with_source("Cannot locate current executable", e))?;
        Ok(Self::new(exe))
    }

    /// Arguments placed before the refresh argument (e.g. `--config <path>`)
    pub fn with_base_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.base_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Program spawned for each refresh
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// The single argument encoding `key`
    pub fn refresh_arg(key: &CacheKey) -> String {
        format!("{REFRESH_ARG_FLAG}={key}")
    }

    /// Full argument list passed to the program for `key`
    pub fn args_for(&self, key: &CacheKey) -> Vec<OsString> {
        let mut args = self.base_args.clone();
        args.push(Self::refresh_arg(key).into());
        args
    }
}

#[async_trait]
impl AsyncRefreshSink for ProcessSink {
    async fn schedule(&self, key: &CacheKey) -> Result<()> {
        let child = Command::new(&self.program)
            .args(self.args_for(key))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                Error::process_with_source(
                    format!("Failed to spawn {} for {}", self.program.display(), key),
                    e,
                )
            })?;

        debug!("Spawned refresh process {:?} for {}", child.id(), key);
        Ok(())
    }

    fn sink_name(&self) -> &str {
        "process"
    }
}
