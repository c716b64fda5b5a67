//! Configuration types

pub mod app;
pub mod cache;
pub mod logging;
pub mod source;
pub mod worker;

pub use app::AppConfig;
pub use cache::{CacheConfig, RedisConfig};
pub use logging::LoggingConfig;
pub use source::SourceConfig;
pub use worker::{RefreshConfig, WorkerConfig};
