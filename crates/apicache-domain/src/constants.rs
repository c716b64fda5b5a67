//! Domain layer constants
//!
//! Values that are part of the caching contract itself. Infrastructure
//! defaults (config file names, env prefixes) live in
//! `apicache_infrastructure::constants`.

// ============================================================================
// FRESHNESS CONSTANTS
// ============================================================================

/// Default freshness window in seconds (1 hour)
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

// ============================================================================
// REFRESH PIPELINE CONSTANTS
// ============================================================================

/// Message type tag carried by every refresh message on the async channel
pub const REFRESH_MESSAGE_TYPE: &str = "directus-update-endpoint";

/// Command line flag used to ask a detached process to refresh one key
pub const REFRESH_ARG_FLAG: &str = "--refresh";

/// Default Redis key holding pending refresh messages
pub const DEFAULT_REFRESH_QUEUE_KEY: &str = "apicache:refresh-queue";
