//! # Hex Encoding/Decoding Utilities
//!
//! Hex helpers used to turn uplink payload text into bytes and to render
//! payload bytes in log output.
//!
//! ## Usage
//!
//! ```rust
//! use msb_decoder::util::hex::{decode_hex, encode_hex, format_hex_compact};
//!
//! let data = [0x0a, 0x68, 0x09, 0xc3];
//! let hex_str = encode_hex(&data);
//! assert_eq!(hex_str, "0a6809c3");
//!
//! let decoded = decode_hex(&hex_str).unwrap();
//! assert_eq!(decoded, data);
//!
//! assert_eq!(format_hex_compact(&data), "0a 68 09 c3");
//! ```

use thiserror::Error;

/// Errors that can occur during hex operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HexError {
    #[error("invalid hex character {character:?} at position {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("odd number of hex characters: {0}")]
    OddLength(usize),
}

/// Encode bytes to lowercase hex string
pub fn encode_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decode hex string to bytes
///
/// Accepts both uppercase and lowercase hex characters. ASCII whitespace is
/// allowed between byte pairs, so `"0a 68 09 c3"` is accepted while `"0 a68"`
/// is not. Error positions refer to characters of `hex_str`.
/// An empty string decodes to an empty byte vector.
pub fn decode_hex(hex_str: &str) -> Result<Vec<u8>, HexError> {
    let mut digits = String::with_capacity(hex_str.len());

    for (index, character) in hex_str.chars().enumerate() {
        let pair_boundary = digits.len() % 2 == 0;
        if character.is_ascii_hexdigit() {
            digits.push(character);
        } else if !(pair_boundary && character.is_ascii_whitespace()) {
            return Err(HexError::InvalidCharacter { character, index });
        }
    }

    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength(digits.len()));
    }

    // Every character was checked above
    hex::decode(&digits).map_err(|_| HexError::OddLength(digits.len()))
}

/// Format hex data for compact display (useful for logs)
///
/// Formats data as "0a 68 09 c3" with spaces between bytes.
pub fn format_hex_compact(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
