//! # apicache - Infrastructure Layer
//!
//! Cross-cutting technical concerns and the composition root.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based layered configuration (defaults, TOML, env) |
//! | [`logging`] | tracing-subscriber setup with optional rolling file output |
//! | [`error_ext`] | Context helpers for config file and TOML errors |
//! | [`bootstrap`] | Builds the cache pipeline from an [`AppConfig`](config::AppConfig) |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::AppContext;
pub use config::{AppConfig, ConfigLoader};
