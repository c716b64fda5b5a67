//! Shared utilities for provider implementations

/// Lenient JSON body decoding
pub mod json;

pub use json::decode_json_body;
