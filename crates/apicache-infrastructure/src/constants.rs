//! Infrastructure layer constants
//!
//! Domain-level values (TTL, message type tag) live in
//! `apicache_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "apicache.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "apicache";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "APICACHE";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// REMOTE SOURCE CONSTANTS
// ============================================================================

/// Default remote API base URL
pub const DEFAULT_SOURCE_URL: &str = "http://localhost:8055";

/// Default request timeout in seconds
pub const DEFAULT_SOURCE_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// WORKER CONSTANTS
// ============================================================================

/// Default poll interval of the refresh queue in milliseconds
pub const DEFAULT_WORKER_POLL_INTERVAL_MS: u64 = 1000;

/// Default pause after a failed receive in milliseconds
pub const DEFAULT_WORKER_ERROR_BACKOFF_MS: u64 = 1000;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV_VAR: &str = "APICACHE_LOG";

/// File name prefix used when the log file path has no stem
pub const LOG_FILE_PREFIX: &str = "apicache";
