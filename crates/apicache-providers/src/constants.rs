//! Provider Constants

// ============================================================================
// CACHE BACKEND CONSTANTS
// ============================================================================

/// Directory name used under the user cache dir by the filesystem backend
pub const FILESYSTEM_CACHE_DIR_NAME: &str = "apicache";

/// Default Redis port
pub const REDIS_DEFAULT_PORT: u16 = 6379;

/// Timeout for establishing a Redis connection in seconds
pub const REDIS_CONNECT_TIMEOUT_SECS: u64 = 5;

// ============================================================================
// REFRESH CHANNEL CONSTANTS
// ============================================================================

/// Poll interval of the Redis refresh queue when it is empty (milliseconds)
pub const REDIS_QUEUE_POLL_INTERVAL_MS: u64 = 1000;

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// Default request timeout for the remote source in seconds
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout for the remote source in seconds
pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
