use crate::encoders::algorithms::errors::ConfigError;

/// Smallest supported alphabet size.
pub const MIN_BASE: usize = 2;
/// Largest supported alphabet size (every 7-bit ASCII character).
pub const MAX_BASE: usize = 128;

/// The canonical symbol set of a codec.
///
/// An alphabet is an ordered run of distinct 7-bit ASCII characters whose
/// length is a power of two between 2 and 128. The position of a character is
/// the symbol value it encodes, so `"ACGT"` maps `C` to `1` and `T` to `3`.
/// These are the only characters the encoder ever emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<u8>,
    bits_per_symbol: u32,
}

impl Alphabet {
    /// Validates `chars` and builds an alphabet from it.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidLength`] unless the length is one of 2, 4, 8, 16, 32, 64 or 128
    /// - [`ConfigError::NonAsciiCharacter`] if any character is U+0080 or above
    /// - [`ConfigError::DuplicateCharacter`] if a character appears twice
    pub fn new(chars: &str) -> Result<Self, ConfigError> {
        let base = chars.chars().count();
        if !(MIN_BASE..=MAX_BASE).contains(&base) || !base.is_power_of_two() {
            return Err(ConfigError::InvalidLength { actual: base });
        }

        let mut seen = [false; 128];
        let mut symbols = Vec::with_capacity(base);
        for (position, c) in chars.chars().enumerate() {
            let byte = ascii_byte(c, position)?;
            if std::mem::replace(&mut seen[byte as usize], true) {
                return Err(ConfigError::DuplicateCharacter { char: c, position });
            }
            symbols.push(byte);
        }

        Ok(Alphabet {
            symbols,
            bits_per_symbol: base.trailing_zeros(),
        })
    }

    /// Returns the number of symbols.
    pub fn base(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `log2(base)`, the number of bits each symbol carries.
    pub fn bits_per_symbol(&self) -> u32 {
        self.bits_per_symbol
    }

    /// Encodes a symbol value (0 to base-1) as its canonical character.
    ///
    /// Returns `None` if the value is out of range.
    pub fn encode_symbol(&self, value: u8) -> Option<char> {
        self.symbols.get(value as usize).map(|&b| b as char)
    }

    /// Raw ASCII bytes of the alphabet, in symbol order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }

    /// The alphabet as a string, in symbol order.
    pub fn as_str(&self) -> &str {
        // Every byte was checked to be below 0x80 in `new`
        std::str::from_utf8(&self.symbols).unwrap_or_default()
    }

    pub(crate) fn symbol_at(&self, value: usize) -> char {
        self.symbols[value] as char
    }
}

/// Converts `c` to its ASCII byte, or reports it as non-ASCII.
pub(crate) fn ascii_byte(c: char, position: usize) -> Result<u8, ConfigError> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(ConfigError::NonAsciiCharacter { char: c, position })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_power_of_two_length() {
        let ascii: String = (0u8..128).map(char::from).collect();
        for bits in 1..=7u32 {
            let len = 1usize << bits;
            let alphabet = Alphabet::new(&ascii[..len]).unwrap();
            assert_eq!(alphabet.base(), len);
            assert_eq!(alphabet.bits_per_symbol(), bits);
        }
    }

    #[test]
    fn test_rejects_bad_lengths() {
        let ascii: String = (0u8..128).map(char::from).collect();
        for len in [0, 1, 3, 5, 31, 33, 100, 127] {
            assert_eq!(
                Alphabet::new(&ascii[..len]),
                Err(ConfigError::InvalidLength { actual: len })
            );
        }
        let too_long = format!("{}{}", ascii, ascii);
        assert_eq!(
            Alphabet::new(&too_long),
            Err(ConfigError::InvalidLength { actual: 256 })
        );
    }

    #[test]
    fn test_rejects_non_ascii() {
        assert_eq!(
            Alphabet::new("AB\u{e9}D"),
            Err(ConfigError::NonAsciiCharacter {
                char: '\u{e9}',
                position: 2
            })
        );
    }

    #[test]
    fn test_rejects_duplicates() {
        assert_eq!(
            Alphabet::new("ABCA"),
            Err(ConfigError::DuplicateCharacter {
                char: 'A',
                position: 3
            })
        );
    }

    #[test]
    fn test_symbol_lookup() {
        let alphabet = Alphabet::new("ACGT").unwrap();
        assert_eq!(alphabet.encode_symbol(0), Some('A'));
        assert_eq!(alphabet.encode_symbol(3), Some('T'));
        assert_eq!(alphabet.encode_symbol(4), None);
        assert_eq!(alphabet.as_str(), "ACGT");
        assert_eq!(alphabet.as_bytes(), b"ACGT");
    }
}
