use crate::core::alphabet::Alphabet;
use crate::core::decode_table::DecodeTable;
use crate::encoders::algorithms::chunked::{self, DecodeError};
use crate::encoders::algorithms::errors::ConfigError;

/// RFC 4648 base32 symbols.
pub const BASE32_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Decode synonyms of the case-insensitive base32 preset: lowercase letters,
/// plus digits that are easily read as letters.
pub const BASE32_SYNONYMS: &[&str] = &[
    "Aa", "Bb", "Cc", "Dd", "Ee", "Ff", "Gg", "Hh", "Ii", "Jj", "Kk", "Ll", "Mm", "Nn", "Oo",
    "Pp", "Qq", "Rr", "Ss", "Tt", "Uu", "Vv", "Ww", "Xx", "Yy", "Zz", "O0", "I1", "B8",
];

/// Separators a person may type between groups of a base32 secret.
pub const BASE32_IGNORED: &str = " -";

/// Binary-to-text codec over a power-of-two ASCII alphabet.
///
/// Encoding only ever emits canonical alphabet characters. Decoding also
/// accepts configured synonyms and skips ignored characters, which makes it
/// tolerant of case changes and common transcription slips.
///
/// # Example
///
/// ```
/// use ascii_codec::AlphabetCodec;
///
/// let mut codec = AlphabetCodec::new("0123456789abcdef").unwrap();
/// codec.add_decode_synonyms("aA").unwrap();
/// codec.ignore_characters(":").unwrap();
///
/// assert_eq!(codec.encode(&[0xAB, 0x01]), "ab01");
/// assert_eq!(codec.decode("Ab:01").unwrap(), [0xAB, 0x01]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetCodec {
    alphabet: Alphabet,
    table: DecodeTable,
}

impl AlphabetCodec {
    /// Creates a codec whose canonical symbols are the characters of `alphabet`.
    ///
    /// # Errors
    ///
    /// See [`Alphabet::new`].
    pub fn new(alphabet: &str) -> Result<Self, ConfigError> {
        Ok(Self::from_alphabet(Alphabet::new(alphabet)?))
    }

    /// Creates a codec from an already validated alphabet.
    pub fn from_alphabet(alphabet: Alphabet) -> Self {
        let table = DecodeTable::from_alphabet(&alphabet);
        AlphabetCodec { alphabet, table }
    }

    /// Starts a [`CodecBuilder`] for `alphabet`.
    pub fn builder(alphabet: &str) -> Result<CodecBuilder, ConfigError> {
        Ok(CodecBuilder {
            codec: Self::new(alphabet)?,
        })
    }

    /// Base32 codec that reads lowercase input, `0`/`1`/`8` as `O`/`I`/`B`,
    /// and skips spaces and dashes.
    pub fn base32_case_insensitive() -> Self {
        let mut codec = Self::from_alphabet(base32_alphabet());
        for synonyms in BASE32_SYNONYMS {
            if let Err(e) = codec.add_decode_synonyms(synonyms) {
                unreachable!("base32 synonyms {:?} are valid: {}", synonyms, e);
            }
        }
        if let Err(e) = codec.ignore_characters(BASE32_IGNORED) {
            unreachable!("base32 ignore set is valid: {}", e);
        }
        codec
    }

    /// Makes every character after the first in `spec` decode like the first.
    ///
    /// `add_decode_synonyms("0oO")` on an alphabet containing `0` also
    /// accepts `o` and `O` for it. Adding a synonym that already decodes to
    /// the same value is allowed. Encoding is not affected.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NonAsciiCharacter`] for any character above U+007F
    /// - [`ConfigError::UnmappedAnchor`] if the first character is not decodable
    /// - [`ConfigError::ConflictingSynonym`] if a synonym already decodes to another value
    /// - [`ConfigError::IgnoredCharacterConflict`] if a synonym is in the ignore set
    pub fn add_decode_synonyms(&mut self, spec: &str) -> Result<(), ConfigError> {
        self.table.add_synonyms(spec)
    }

    /// Skips every character of `chars` while decoding.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NonAsciiCharacter`] for any character above U+007F
    /// - [`ConfigError::IgnoredCharacterConflict`] if a character is already decodable
    pub fn ignore_characters(&mut self, chars: &str) -> Result<(), ConfigError> {
        self.table.ignore(chars)
    }

    /// Encodes `data` to a string of canonical alphabet characters.
    ///
    /// The output has `ceil(len * 8 / bits_per_symbol)` characters and no padding.
    pub fn encode(&self, data: &[u8]) -> String {
        chunked::encode_chunked(data, &self.alphabet)
    }

    /// Decodes `text` back to bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidCharacter`] for the first character that
    /// is neither decodable nor ignored.
    pub fn decode(&self, text: &str) -> Result<Vec<u8>, DecodeError> {
        chunked::decode_chunked(text, &self.alphabet, &self.table)
    }

    /// The canonical alphabet used for encoding.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of canonical symbols.
    pub fn base(&self) -> usize {
        self.alphabet.base()
    }

    /// Bits carried by each encoded character.
    pub fn bits_per_symbol(&self) -> u32 {
        self.alphabet.bits_per_symbol()
    }

    /// Symbol value `c` decodes to, counting synonyms.
    pub fn decode_symbol(&self, c: char) -> Option<u8> {
        self.table.lookup(c)
    }

    /// Whether `c` is skipped while decoding.
    pub fn is_ignored(&self, c: char) -> bool {
        self.table.is_ignored(c)
    }

    /// Exact length of `encode` output for `byte_len` bytes, saturating at `usize::MAX`.
    pub fn encoded_len(&self, byte_len: usize) -> usize {
        chunked::encoded_len(byte_len, self.bits_per_symbol())
    }

    /// Upper bound on decoded bytes for a `char_len` character input.
    ///
    /// Exact when the input has no ignored characters.
    pub fn decoded_len_estimate(&self, char_len: usize) -> usize {
        chunked::decoded_len(char_len, self.bits_per_symbol())
    }
}

fn base32_alphabet() -> Alphabet {
    match Alphabet::new(BASE32_ALPHABET) {
        Ok(alphabet) => alphabet,
        Err(e) => unreachable!("base32 alphabet is valid: {}", e),
    }
}

/// Collects synonyms and ignored characters, then hands out an immutable
/// [`AlphabetCodec`].
///
/// ```
/// use ascii_codec::AlphabetCodec;
///
/// let codec = AlphabetCodec::builder("ACGT")?
///     .synonyms("Aa")?
///     .synonyms("Tt")?
///     .ignore("\n")?
///     .build();
///
/// assert_eq!(codec.decode("ta\naa")?, [0xC0]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct CodecBuilder {
    codec: AlphabetCodec,
}

impl CodecBuilder {
    /// See [`AlphabetCodec::add_decode_synonyms`].
    pub fn synonyms(mut self, spec: &str) -> Result<Self, ConfigError> {
        self.codec.add_decode_synonyms(spec)?;
        Ok(self)
    }

    /// See [`AlphabetCodec::ignore_characters`].
    pub fn ignore(mut self, chars: &str) -> Result<Self, ConfigError> {
        self.codec.ignore_characters(chars)?;
        Ok(self)
    }

    pub fn build(self) -> AlphabetCodec {
        self.codec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base32_preset_reads_lowercase() {
        let codec = AlphabetCodec::base32_case_insensitive();
        let encoded = codec.encode(b"Hello!\xDE\xAD\xBE\xEF");
        assert_eq!(
            codec.decode(&encoded.to_lowercase()).unwrap(),
            codec.decode(&encoded).unwrap()
        );
    }

    #[test]
    fn test_base32_preset_confusables() {
        let codec = AlphabetCodec::base32_case_insensitive();
        assert_eq!(codec.decode_symbol('0'), codec.decode_symbol('O'));
        assert_eq!(codec.decode_symbol('1'), codec.decode_symbol('I'));
        assert_eq!(codec.decode_symbol('8'), codec.decode_symbol('B'));
        assert_eq!(codec.decode_symbol('9'), None);
        assert!(codec.is_ignored(' '));
        assert!(codec.is_ignored('-'));
    }

    #[test]
    fn test_base32_preset_applies_every_constant() {
        let codec = AlphabetCodec::base32_case_insensitive();
        for spec in BASE32_SYNONYMS {
            let mut chars = spec.chars();
            let anchor = chars.next().and_then(|c| codec.decode_symbol(c));
            assert!(anchor.is_some(), "anchor of {:?}", spec);
            for synonym in chars {
                assert_eq!(codec.decode_symbol(synonym), anchor, "{:?}", spec);
            }
        }
        assert!(BASE32_IGNORED.chars().all(|c| codec.is_ignored(c)));
    }

    #[test]
    fn test_base32_preset_encodes_canonically() {
        let codec = AlphabetCodec::base32_case_insensitive();
        assert_eq!(codec.encode(b"foobar"), "MZXW6YTBOI");
        assert_eq!(codec.decode("mzxw 6ytb-0i").unwrap(), b"foobar");
    }

    #[test]
    fn test_synonym_scenario() {
        let mut codec = AlphabetCodec::new(BASE32_ALPHABET).unwrap();
        codec.add_decode_synonyms("A0O").unwrap_err();

        // 'O' is canonical in base32, so use a fresh alphabet without it
        let mut codec = AlphabetCodec::new("ABCD").unwrap();
        codec.add_decode_synonyms("A0O").unwrap();
        assert_eq!(codec.decode("0BCD").unwrap(), codec.decode("ABCD").unwrap());
        assert_eq!(codec.decode("OBCD").unwrap(), codec.decode("ABCD").unwrap());
        assert_eq!(
            codec.add_decode_synonyms("B0"),
            Err(ConfigError::ConflictingSynonym {
                char: '0',
                existing: 0,
                requested: 1
            })
        );
    }

    #[test]
    fn test_configuration_applies_to_later_decodes() {
        let mut codec = AlphabetCodec::new(BASE32_ALPHABET).unwrap();
        assert!(codec.decode("my").is_err());
        codec.add_decode_synonyms("Mm").unwrap();
        codec.add_decode_synonyms("Yy").unwrap();
        assert_eq!(codec.decode("my").unwrap(), b"f");

        assert!(codec.decode("MY-").is_err());
        codec.ignore_characters("-").unwrap();
        assert_eq!(codec.decode("MY-").unwrap(), codec.decode("MY").unwrap());
    }

    #[test]
    fn test_builder_matches_mutation() {
        let built = AlphabetCodec::builder("01")
            .unwrap()
            .synonyms("0oO")
            .unwrap()
            .ignore("_")
            .unwrap()
            .build();

        let mut mutated = AlphabetCodec::new("01").unwrap();
        mutated.add_decode_synonyms("0oO").unwrap();
        mutated.ignore_characters("_").unwrap();

        assert_eq!(built, mutated);
        assert_eq!(built.decode("1o1O_1010").unwrap(), [0b1010_1010]);
    }

    #[test]
    fn test_builder_propagates_errors() {
        assert_eq!(
            AlphabetCodec::builder("ABC").unwrap_err(),
            ConfigError::InvalidLength { actual: 3 }
        );
        let err = AlphabetCodec::builder("AB")
            .and_then(|b| b.ignore("A"))
            .unwrap_err();
        assert_eq!(err, ConfigError::IgnoredCharacterConflict { char: 'A' });
    }

    #[test]
    fn test_codec_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AlphabetCodec>();

        let codec = AlphabetCodec::base32_case_insensitive();
        std::thread::scope(|s| {
            for i in 0..4u8 {
                let codec = &codec;
                s.spawn(move || {
                    let data = vec![i; 33];
                    assert_eq!(codec.decode(&codec.encode(&data)).unwrap(), data);
                });
            }
        });
    }

    #[test]
    fn test_length_helpers() {
        let codec = AlphabetCodec::new("0123456789ABCDEF").unwrap();
        assert_eq!(codec.encoded_len(3), 6);
        assert_eq!(codec.decoded_len_estimate(6), 3);
        assert_eq!(codec.base(), 16);
        assert_eq!(codec.bits_per_symbol(), 4);

        assert_eq!(codec.decoded_len_estimate(usize::MAX / 2), usize::MAX / 4);
        assert_eq!(codec.encoded_len(usize::MAX), usize::MAX);
    }
}
