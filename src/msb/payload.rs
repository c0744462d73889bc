//! Uplink payload normalization
//!
//! Uplinks reach the decoder either as hex text (network server consoles,
//! websocket feeds) or as raw bytes. Both are reduced to one canonical
//! `Vec<u8>` before any field logic runs.

use crate::error::MsbError;
use crate::util::hex::decode_hex;
use serde_json::Value;

/// An uplink payload in one of the accepted representations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Hexadecimal text, e.g. `"0a6809c30ad00e4504060c27"`
    Hex(String),
    /// Raw payload bytes
    Bytes(Vec<u8>),
}

impl Payload {
    /// Reduce the payload to its raw bytes.
    ///
    /// Hex text that is not valid hexadecimal fails with
    /// [`MsbError::FormatError`]; the byte variant cannot fail.
    pub fn normalize(self) -> Result<Vec<u8>, MsbError> {
        match self {
            Payload::Hex(text) => Ok(decode_hex(&text)?),
            Payload::Bytes(bytes) => Ok(bytes),
        }
    }
}

/// Normalize anything convertible into a [`Payload`].
pub fn normalize(input: impl Into<Payload>) -> Result<Vec<u8>, MsbError> {
    input.into().normalize()
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Hex(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Hex(text)
    }
}

impl From<&[u8]> for Payload {
    fn from(bytes: &[u8]) -> Self {
        Payload::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Payload::Bytes(bytes)
    }
}

impl From<&Vec<u8>> for Payload {
    fn from(bytes: &Vec<u8>) -> Self {
        Payload::Bytes(bytes.clone())
    }
}

impl<const N: usize> From<[u8; N]> for Payload {
    fn from(bytes: [u8; N]) -> Self {
        Payload::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Payload {
    fn from(bytes: &[u8; N]) -> Self {
        Payload::Bytes(bytes.to_vec())
    }
}

/// Name of a JSON value's type, for error messages
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

const PAYLOAD_EXPECTED: &str = "a hex string or an array of bytes (0-255)";

/// Payloads taken from JSON documents (uplink messages, CLI input).
///
/// A string is hex text and an array of integers in 0..=255 is raw bytes.
/// Anything else is rejected with [`MsbError::TypeError`].
impl TryFrom<&Value> for Payload {
    type Error = MsbError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(Payload::Hex(text.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_u64()
                        .and_then(|n| u8::try_from(n).ok())
                        .ok_or_else(|| {
                            MsbError::type_error(
                                "payload",
                                PAYLOAD_EXPECTED,
                                format!("array containing {item}"),
                            )
                        })
                })
                .collect::<Result<Vec<u8>, MsbError>>()
                .map(Payload::Bytes),
            other => Err(MsbError::type_error(
                "payload",
                PAYLOAD_EXPECTED,
                json_type_name(other),
            )),
        }
    }
}
