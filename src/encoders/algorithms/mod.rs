pub mod chunked;
pub mod errors;

// Re-export error types for public API
pub use errors::{CodecNotFoundError, ConfigError, DecodeError, find_closest_codec};
