//! # Utility Modules
//!
//! Common helpers used throughout the msb-decoder crate.

pub mod hex;

pub use hex::{decode_hex, encode_hex, format_hex_compact, HexError};
