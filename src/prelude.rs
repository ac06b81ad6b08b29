//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use ascii_codec::prelude::*;
//!
//! let registry = CodecRegistry::load_default().unwrap();
//! let codec = registry.codec("base16").unwrap();
//! assert_eq!(encode(b"\xCA\xFE", &codec), "CAFE");
//! ```

pub use crate::{
    Alphabet,
    // Core codec
    AlphabetCodec,
    CodecBuilder,
    // Config
    CodecConfig,
    CodecRegistry,
    // Errors
    ConfigError,
    DecodeError,

    decode,
    encode,
};
