//! Async Refresh Sink Implementations
//!
//! | Sink | Description |
//! |------|-------------|
//! | [`ChannelSink`] | Publishes a refresh message on a `RefreshChannel` |
//! | [`ProcessSink`] | Spawns `<program> --refresh=<key>` detached |
//! | [`FallbackSink`] | Tries a primary sink, falls back to a secondary one |
//!
//! The sink is chosen once at startup: with a live Redis server the pipeline
//! uses `FallbackSink(ChannelSink, ProcessSink)`, otherwise `ProcessSink`.

pub mod channel;
pub mod fallback;
pub mod process;

pub use channel::ChannelSink;
pub use fallback::FallbackSink;
pub use process::ProcessSink;
