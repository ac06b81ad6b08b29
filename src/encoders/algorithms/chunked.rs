use crate::core::alphabet::Alphabet;
use crate::core::decode_table::DecodeTable;

pub use super::errors::DecodeError;

/// Number of characters `encode_chunked` produces for `byte_len` input bytes.
///
/// Saturates at `usize::MAX` when the count does not fit.
pub fn encoded_len(byte_len: usize, bits_per_symbol: u32) -> usize {
    let bits = bits_per_symbol as usize;
    // byte_len * 8 / bits, split so the intermediate product cannot overflow
    (byte_len / bits)
        .saturating_mul(8)
        .saturating_add((byte_len % bits * 8).div_ceil(bits))
}

/// Number of bytes `symbol_count` decodable characters turn into.
pub fn decoded_len(symbol_count: usize, bits_per_symbol: u32) -> usize {
    let bits = bits_per_symbol as usize;
    symbol_count / 8 * bits + symbol_count % 8 * bits / 8
}

/// Packs `data` MSB-first into `bits_per_symbol`-bit groups and emits one
/// alphabet character per group.
///
/// A short final group is filled with zero bits on the right. No pad
/// characters are appended.
pub fn encode_chunked(data: &[u8], alphabet: &Alphabet) -> String {
    let bits_per_char = alphabet.bits_per_symbol() as usize;
    let mask = (1u32 << bits_per_char) - 1;

    let mut result = String::with_capacity(encoded_len(data.len(), alphabet.bits_per_symbol()));

    // Never holds more than bits_per_char - 1 + 8 meaningful bits
    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for &byte in data {
        bit_buffer = (bit_buffer << 8) | (byte as u32);
        bits_in_buffer += 8;

        while bits_in_buffer >= bits_per_char {
            bits_in_buffer -= bits_per_char;
            let index = ((bit_buffer >> bits_in_buffer) & mask) as usize;
            result.push(alphabet.symbol_at(index));
        }
    }

    // Handle remaining bits
    if bits_in_buffer > 0 {
        let index = ((bit_buffer << (bits_per_char - bits_in_buffer)) & mask) as usize;
        result.push(alphabet.symbol_at(index));
    }

    result
}

/// Reverses [`encode_chunked`], skipping ignored characters.
///
/// Bits left over after the last whole byte are the encoder's zero padding
/// and are dropped without being checked.
pub fn decode_chunked(
    encoded: &str,
    alphabet: &Alphabet,
    table: &DecodeTable,
) -> Result<Vec<u8>, DecodeError> {
    let bits_per_char = alphabet.bits_per_symbol() as usize;

    let mut result = Vec::with_capacity(decoded_len(encoded.len(), alphabet.bits_per_symbol()));

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for (position, c) in encoded.chars().enumerate() {
        if table.is_ignored(c) {
            continue;
        }

        let digit = table
            .lookup(c)
            .ok_or_else(|| invalid_character(c, position, encoded, alphabet))?;

        bit_buffer = (bit_buffer << bits_per_char) | (digit as u32);
        bits_in_buffer += bits_per_char;

        // At most 7 bits per symbol, so one byte completes at a time
        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            result.push((bit_buffer >> bits_in_buffer) as u8);
        }
    }

    Ok(result)
}

fn invalid_character(c: char, position: usize, encoded: &str, alphabet: &Alphabet) -> DecodeError {
    let valid_chars = if alphabet.base() <= 64 {
        alphabet.as_str().escape_debug().to_string()
    } else {
        format!("{} characters in alphabet", alphabet.base())
    };
    DecodeError::invalid_character(c, position, encoded, &valid_chars)
}
