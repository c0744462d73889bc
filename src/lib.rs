//! # msb-decoder - Decoder for Multisense Bolt (MSB) LoRa uplinks
//!
//! The msb-decoder crate turns the fixed 11/12-byte uplink payload of MSB
//! multi-sensor prototypes into a structured record of sensor readings.
//!
//! ## Features
//!
//! - Accept payloads as hex text or raw bytes
//! - Strict frame layout checks (11 or 12 bytes)
//! - Optional PT100 conversion to Celsius, Fahrenheit or Kelvin
//! - Optional battery level conversion to percent
//! - Output as a typed record or compact JSON text
//! - Network-server style `{data, warnings, errors}` envelope
//!
//! ## Usage
//!
//! ```rust
//! use msb_decoder::{decode, FieldValue, OutputFormat};
//!
//! let record = decode("0a6809c30ad00e4504060c27", OutputFormat::Dictionary, false)
//!     .unwrap()
//!     .into_record()
//!     .unwrap();
//! assert_eq!(record.noise_avg, 2664);
//! assert_eq!(record.pt100, FieldValue::Integer(1030));
//! assert_eq!(record.node_temp, Some(39));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod msb;
pub mod util;

pub use crate::config::DecoderConfig;
pub use crate::error::MsbError;
pub use crate::logging::init_logger;

pub use msb::{
    convert_reading, convert_reading_value, decode, decode_uplink, DecodeOutput, DecodedRecord,
    FieldValue, MsbDecoder, MsbFrame, OutputFormat, Payload, TemperatureUnit, UplinkResult,
};
