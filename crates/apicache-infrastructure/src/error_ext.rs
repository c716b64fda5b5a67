//! Error extension utilities
//!
//! Context helpers used while loading and saving configuration, where the
//! underlying errors come from figment, toml and the filesystem.

use apicache_domain::error::{Error, Result};
use std::fmt;

/// Extension trait attaching a description to foreign errors
///
/// # Example
///
/// ```ignore
/// use apicache_infrastructure::error_ext::ErrorContext;
///
/// std::fs::write(&path, contents).io_context("Failed to write config file")?;
/// ```
pub trait ErrorContext<T> {
    /// Wrap the error as [`Error::Io`]
    fn io_context<C: fmt::Display>(self, context: C) -> Result<T>;

    /// Wrap the error as [`Error::Configuration`]
    fn config_context<C: fmt::Display>(self, context: C) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn io_context<C: fmt::Display>(self, context: C) -> Result<T> {
        self.map_err(|err| Error::io_with_source(format!("{context}: {err}"), err))
    }

    fn config_context<C: fmt::Display>(self, context: C) -> Result<T> {
        self.map_err(|err| Error::configuration_with_source(format!("{context}: {err}"), err))
    }
}
