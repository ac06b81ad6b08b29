use std::fmt;

/// Errors raised while building or configuring a codec.
///
/// Configuration calls validate everything before touching the codec, so a
/// returned error always means the codec is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Alphabet length is not a power of two in `2..=128`
    InvalidLength { actual: usize },
    /// A character outside 7-bit ASCII
    NonAsciiCharacter { char: char, position: usize },
    /// The alphabet repeats a character
    DuplicateCharacter { char: char, position: usize },
    /// The first character of a synonym spec is not decodable yet
    UnmappedAnchor { char: char },
    /// A synonym is already mapped to a different symbol
    ConflictingSynonym {
        char: char,
        existing: u8,
        requested: u8,
    },
    /// A character would be both ignored and decodable
    IgnoredCharacterConflict { char: char },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLength { actual } => {
                writeln!(f, "error: invalid alphabet length {}", actual)?;
                write!(
                    f,
                    "hint: alphabets must have 2, 4, 8, 16, 32, 64 or 128 characters"
                )
            }
            ConfigError::NonAsciiCharacter { char: c, position } => {
                writeln!(
                    f,
                    "error: non-ASCII character {:?} at position {}",
                    c, position
                )?;
                write!(f, "hint: only 7-bit ASCII characters (U+0000..U+007F) are allowed")
            }
            ConfigError::DuplicateCharacter { char: c, position } => {
                write!(
                    f,
                    "error: duplicate character {:?} in alphabet at position {}",
                    c, position
                )
            }
            ConfigError::UnmappedAnchor { char: c } => {
                writeln!(f, "error: synonym anchor {:?} is not decodable", c)?;
                write!(
                    f,
                    "hint: the first character must be an alphabet character or an existing synonym"
                )
            }
            ConfigError::ConflictingSynonym {
                char: c,
                existing,
                requested,
            } => {
                write!(
                    f,
                    "error: {:?} already decodes to symbol {}, cannot remap it to {}",
                    c, existing, requested
                )
            }
            ConfigError::IgnoredCharacterConflict { char: c } => {
                write!(
                    f,
                    "error: {:?} cannot be both ignored and decodable",
                    c
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character that is neither mapped nor ignored
    InvalidCharacter {
        char: char,
        position: usize,
        input: String,
        valid_chars: String,
    },
}

impl DecodeError {
    /// Create an InvalidCharacter error with context
    pub fn invalid_character(c: char, position: usize, input: &str, valid_chars: &str) -> Self {
        // Truncate long inputs on a char boundary
        let display_input = if input.chars().count() > 60 {
            format!("{}...", input.chars().take(60).collect::<String>())
        } else {
            input.to_string()
        };

        DecodeError::InvalidCharacter {
            char: c,
            position,
            input: display_input,
            valid_chars: valid_chars.to_string(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidCharacter {
                char: c,
                position,
                input,
                valid_chars,
            } => {
                writeln!(
                    f,
                    "error: invalid character {:?} at position {}",
                    c, position
                )?;
                writeln!(f)?;

                // Caret only makes sense while the position is inside the shown prefix
                writeln!(f, "  {}", input)?;
                if *position < 60 {
                    writeln!(f, "  {}^", " ".repeat(*position))?;
                }
                writeln!(f)?;

                write!(f, "hint: valid characters: {}", valid_chars)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Error when a named codec is not present in the registry
#[derive(Debug)]
pub struct CodecNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl CodecNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for CodecNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: codec '{}' not found", self.name)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nhint: did you mean '{}'?", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for CodecNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len2 = s2.chars().count();

    if s1.is_empty() {
        return len2;
    }
    if len2 == 0 {
        return s1.chars().count();
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching codec name
pub fn find_closest_codec<S: AsRef<str>>(name: &str, available: &[S]) -> Option<String> {
    // 1-2 character typos for short names, up to 3 for longer ones
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate.as_ref()), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.as_ref().to_string())
}
