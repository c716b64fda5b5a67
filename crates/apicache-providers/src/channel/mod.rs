//! Refresh Channel Implementations
//!
//! | Channel | Type | Description |
//! |---------|------|-------------|
//! | [`RedisRefreshChannel`] | Distributed | Redis set used as a de-duplicating work queue |
//! | [`TokioRefreshChannel`] | In-Process | Unbounded tokio mpsc channel |
//!
//! ## Channel Selection Guide
//!
//! - **Multi process**: `RedisRefreshChannel`, consumed by `apicache --start`
//! - **Single process / tests**: `TokioRefreshChannel` with a worker task

#[cfg(feature = "channel-redis")]
pub mod redis;
pub mod tokio;

#[cfg(feature = "channel-redis")]
pub use self::redis::RedisRefreshChannel;
pub use self::tokio::TokioRefreshChannel;
