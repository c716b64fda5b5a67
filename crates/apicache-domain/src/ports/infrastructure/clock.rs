//! Clock Port
//!
//! Cache writes are stamped and reads classified against this clock, so tests
//! can replay exact timelines.

/// Source of the current unix time in seconds
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Current unix timestamp in seconds
    fn now(&self) -> i64;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}
