use crate::core::alphabet::{Alphabet, ascii_byte};
use crate::encoders::algorithms::errors::ConfigError;

/// Marks a code point that does not decode to any symbol.
pub const INVALID_VALUE: u8 = 0xFF;

/// Reverse lookup from ASCII code point to symbol value, plus the set of
/// characters skipped while decoding.
///
/// Both are fixed 128-entry arrays indexed by code point. A character is
/// never mapped and ignored at the same time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeTable {
    values: [u8; 128],
    ignored: [bool; 128],
}

impl DecodeTable {
    /// Maps every alphabet character to its position; nothing is ignored.
    pub fn from_alphabet(alphabet: &Alphabet) -> Self {
        let mut values = [INVALID_VALUE; 128];
        for (value, &byte) in alphabet.as_bytes().iter().enumerate() {
            values[byte as usize] = value as u8;
        }
        DecodeTable {
            values,
            ignored: [false; 128],
        }
    }

    /// Symbol value `c` decodes to, if any.
    #[inline]
    pub fn lookup(&self, c: char) -> Option<u8> {
        if !c.is_ascii() {
            return None;
        }
        match self.values[c as usize] {
            INVALID_VALUE => None,
            value => Some(value),
        }
    }

    #[inline]
    pub fn is_ignored(&self, c: char) -> bool {
        c.is_ascii() && self.ignored[c as usize]
    }

    /// Maps every character after the first in `spec` to the symbol value of
    /// the first one.
    ///
    /// The whole spec is validated before anything is written.
    pub fn add_synonyms(&mut self, spec: &str) -> Result<(), ConfigError> {
        let bytes = spec
            .chars()
            .enumerate()
            .map(|(position, c)| ascii_byte(c, position))
            .collect::<Result<Vec<u8>, _>>()?;

        let Some((&anchor, synonyms)) = bytes.split_first() else {
            return Ok(());
        };

        let target = self.values[anchor as usize];
        if target == INVALID_VALUE {
            return Err(ConfigError::UnmappedAnchor {
                char: anchor as char,
            });
        }

        for &byte in synonyms {
            if self.ignored[byte as usize] {
                return Err(ConfigError::IgnoredCharacterConflict { char: byte as char });
            }
            let existing = self.values[byte as usize];
            if existing != INVALID_VALUE && existing != target {
                return Err(ConfigError::ConflictingSynonym {
                    char: byte as char,
                    existing,
                    requested: target,
                });
            }
        }

        for &byte in synonyms {
            self.values[byte as usize] = target;
        }
        Ok(())
    }

    /// Adds every character of `chars` to the ignore set.
    ///
    /// Characters that already decode to a symbol are rejected.
    pub fn ignore(&mut self, chars: &str) -> Result<(), ConfigError> {
        let mut bytes = Vec::with_capacity(chars.len());
        for (position, c) in chars.chars().enumerate() {
            let byte = ascii_byte(c, position)?;
            if self.values[byte as usize] != INVALID_VALUE {
                return Err(ConfigError::IgnoredCharacterConflict { char: c });
            }
            bytes.push(byte);
        }

        for byte in bytes {
            self.ignored[byte as usize] = true;
        }
        Ok(())
    }
}
