//! # MSB Error Handling
//!
//! This module defines the MsbError enum, which represents the different error
//! types that can occur while decoding Multisense Bolt payloads.

use crate::util::hex::HexError;
use thiserror::Error;

/// Represents the different error types that can occur in the MSB decoder.
#[derive(Debug, Error)]
pub enum MsbError {
    /// An argument had the wrong type (e.g. a JSON number where a hex string
    /// or byte array was expected).
    #[error("`{argument}` must be {expected}, not {actual}")]
    TypeError {
        argument: &'static str,
        expected: &'static str,
        actual: String,
    },

    /// The payload was given as text that is not valid hexadecimal.
    #[error("Could not convert `payload` to bytes: {0}")]
    FormatError(#[from] HexError),

    /// A well-typed argument carried an unsupported value.
    #[error("Invalid `{argument}`: {reason}")]
    ValueError {
        argument: &'static str,
        reason: String,
    },

    /// Decoder configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A decoded record could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MsbError {
    pub(crate) fn type_error(
        argument: &'static str,
        expected: &'static str,
        actual: impl Into<String>,
    ) -> Self {
        MsbError::TypeError {
            argument,
            expected,
            actual: actual.into(),
        }
    }

    pub(crate) fn value_error(argument: &'static str, reason: impl Into<String>) -> Self {
        MsbError::ValueError {
            argument,
            reason: reason.into(),
        }
    }
}
