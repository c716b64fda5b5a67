//! Domain services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`StalenessCache`] | Envelope encoding plus Missing / Fresh / Stale classification |
//! | [`RefreshTrigger`] | Maps a verdict to an action and schedules out-of-band refreshes |

pub mod staleness;
pub mod trigger;

pub use staleness::StalenessCache;
pub use trigger::{RefreshAction, RefreshTrigger};
