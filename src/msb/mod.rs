//! # Multisense Bolt (MSB) uplink decoding
//!
//! Covers all MSB prototype models (20P, 100P, 250P). Firmware 0.36 - 0.38
//! sends 11-byte uplinks; 0.40 and later append the node temperature byte.

pub mod convert;
pub mod decoder;
pub mod frame;
pub mod payload;
pub mod record;
pub mod uplink;

pub use convert::{
    battery_percentage, convert_pt100, convert_reading, convert_reading_value, TemperatureUnit,
};
pub use decoder::{decode, DecodeOutput, MsbDecoder, OutputFormat};
pub use frame::{parse_frame, MsbFrame, FRAME_LEN_FULL, FRAME_LEN_SHORT};
pub use payload::{normalize, Payload};
pub use record::{DecodedRecord, FieldValue, FIELD_NAMES};
pub use uplink::{decode_uplink, UplinkResult};
