//! Binary-to-text encoding over any power-of-two ASCII alphabet.
//!
//! One bit-packing algorithm serves every alphabet from base2 to base128.
//! Decoding can be made forgiving with synonyms (`a` for `A`, `0` for `O`)
//! and ignored separators, so secrets typed in by hand still parse.
//!
//! ```
//! use ascii_codec::AlphabetCodec;
//!
//! let codec = AlphabetCodec::base32_case_insensitive();
//! let secret = codec.encode(b"Hello!");
//! assert_eq!(secret, "JBSWY3DPEE");
//! assert_eq!(codec.decode("jbsw y3dp-ee").unwrap(), b"Hello!");
//! ```

mod core;
mod encoders;

pub mod prelude;

pub use crate::core::alphabet::{Alphabet, MAX_BASE, MIN_BASE};
pub use crate::core::codec::{
    AlphabetCodec, BASE32_ALPHABET, BASE32_IGNORED, BASE32_SYNONYMS, CodecBuilder,
};
pub use crate::core::config::{CodecConfig, CodecRegistry, Settings};
pub use crate::core::decode_table::DecodeTable;
pub use crate::encoders::algorithms::{CodecNotFoundError, ConfigError, DecodeError};

/// Encodes `data` with `codec`.
///
/// Shorthand for [`AlphabetCodec::encode`].
pub fn encode(data: &[u8], codec: &AlphabetCodec) -> String {
    codec.encode(data)
}

/// Decodes `encoded` with `codec`.
///
/// Shorthand for [`AlphabetCodec::decode`].
pub fn decode(encoded: &str, codec: &AlphabetCodec) -> Result<Vec<u8>, DecodeError> {
    codec.decode(encoded)
}
