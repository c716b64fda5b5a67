//! Refresh pipeline ports
//!
//! | Port | Description |
//! |------|-------------|
//! | AsyncRefreshSink | Fire-and-forget "refresh this key soon" |
//! | RefreshChannel | Publish/consume transport for refresh messages |
//! | Clock | Source of write timestamps and read time |

/// Refresh channel port
pub mod channel;
/// Clock port
pub mod clock;
/// Async refresh sink port
pub mod sink;

pub use channel::RefreshChannel;
pub use clock::{Clock, SystemClock};
pub use sink::AsyncRefreshSink;
