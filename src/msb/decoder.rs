//! MSB payload decoder
//!
//! Ties normalization, frame parsing and the optional conversions together
//! and renders the result as a [`DecodedRecord`] or its JSON text.

use crate::config::DecoderConfig;
use crate::error::MsbError;
use crate::logging::log_payload_hex;
use crate::msb::convert::{battery_percentage, convert_pt100, TemperatureUnit};
use crate::msb::frame::MsbFrame;
use crate::msb::payload::{json_type_name, Payload};
use crate::msb::record::{DecodedRecord, FieldValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Output form of a decode call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OutputFormat {
    /// Structured [`DecodedRecord`]
    #[default]
    Dictionary,
    /// Compact JSON text
    JsonString,
}

impl FromStr for OutputFormat {
    type Err = MsbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dictionary" => Ok(OutputFormat::Dictionary),
            "jsonstring" => Ok(OutputFormat::JsonString),
            _ => Err(MsbError::value_error(
                "output_format",
                format!("'{s}' is not one of 'dictionary' or 'jsonstring'"),
            )),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = MsbError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<&Value> for OutputFormat {
    type Error = MsbError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => s.parse(),
            other => Err(MsbError::type_error(
                "output_format",
                "a string ('dictionary' or 'jsonstring')",
                json_type_name(other),
            )),
        }
    }
}

impl From<OutputFormat> for String {
    fn from(format: OutputFormat) -> Self {
        format.to_string()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Dictionary => f.write_str("dictionary"),
            OutputFormat::JsonString => f.write_str("jsonstring"),
        }
    }
}

/// Result of [`decode`]: the record itself or its JSON text
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeOutput {
    Record(DecodedRecord),
    Text(String),
}

impl DecodeOutput {
    pub fn as_record(&self) -> Option<&DecodedRecord> {
        match self {
            DecodeOutput::Record(record) => Some(record),
            DecodeOutput::Text(_) => None,
        }
    }

    pub fn into_record(self) -> Option<DecodedRecord> {
        match self {
            DecodeOutput::Record(record) => Some(record),
            DecodeOutput::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            DecodeOutput::Text(text) => Some(text),
            DecodeOutput::Record(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            DecodeOutput::Text(text) => Some(text),
            DecodeOutput::Record(_) => None,
        }
    }
}

impl fmt::Display for DecodeOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeOutput::Record(record) => write!(f, "{record}"),
            DecodeOutput::Text(text) => f.write_str(text),
        }
    }
}

/// Decoder for MSB uplinks with a fixed set of conversion options
#[derive(Debug, Clone, Default)]
pub struct MsbDecoder {
    config: DecoderConfig,
}

impl MsbDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a payload into a record, ignoring the configured output format.
    pub fn decode_record(&self, payload: impl Into<Payload>) -> Result<DecodedRecord, MsbError> {
        let bytes = payload.into().normalize()?;
        log_payload_hex("Decoding MSB payload", &bytes);

        let frame = MsbFrame::from_bytes(&bytes)?;
        let record = self.record_from_frame(&frame);
        log::trace!("Decoded MSB record: {record:?}");
        Ok(record)
    }

    /// Decode a payload and render it in the configured output format.
    pub fn decode(&self, payload: impl Into<Payload>) -> Result<DecodeOutput, MsbError> {
        let record = self.decode_record(payload)?;
        match self.config.output_format {
            OutputFormat::Dictionary => Ok(DecodeOutput::Record(record)),
            OutputFormat::JsonString => Ok(DecodeOutput::Text(record.to_json_string()?)),
        }
    }

    /// Apply the configured conversions to a parsed frame.
    pub fn record_from_frame(&self, frame: &MsbFrame) -> DecodedRecord {
        let pt100 = if self.config.convert_pt100 {
            FieldValue::Real(convert_pt100(frame.pt100, self.config.pt100_unit))
        } else {
            FieldValue::Integer(i64::from(frame.pt100))
        };

        let battery = if self.config.convert_battery {
            u16::from(battery_percentage(
                frame.battery,
                self.config.battery_min_mv,
                self.config.battery_max_mv,
            ))
        } else {
            frame.battery
        };

        DecodedRecord {
            noise_avg: frame.noise_avg,
            noise_min: frame.noise_min,
            noise_max: frame.noise_max,
            battery,
            pt100,
            mode: frame.mode,
            gain: frame.gain,
            node_temp: frame.node_temp,
        }
    }
}

/// Decode an MSB uplink payload.
///
/// `payload` is hex text or raw bytes and must be 11 or 12 bytes long once
/// decoded. With `convert` set, `pt100` is converted to °C.
///
/// # Examples
/// ```rust
/// use msb_decoder::{decode, OutputFormat};
///
/// let text = decode("0a6809c30ad00e4504060c27", OutputFormat::JsonString, false)
///     .unwrap()
///     .into_text()
///     .unwrap();
/// assert_eq!(
///     text,
///     r#"{"noise_avg":2664,"noise_min":2499,"noise_max":2768,"battery":3653,"pt100":1030,"mode":3,"gain":0,"node_temp":39}"#
/// );
/// ```
pub fn decode(
    payload: impl Into<Payload>,
    output_format: OutputFormat,
    convert: bool,
) -> Result<DecodeOutput, MsbError> {
    let decoder = MsbDecoder::new(DecoderConfig {
        output_format,
        convert_pt100: convert,
        pt100_unit: TemperatureUnit::Celsius,
        ..DecoderConfig::default()
    });
    decoder.decode(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const EXAMPLE: &str = "0a6809c30ad00e4504060c27";

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("dictionary".parse::<OutputFormat>().unwrap(), OutputFormat::Dictionary);
        assert_eq!("JsonString".parse::<OutputFormat>().unwrap(), OutputFormat::JsonString);
        assert_eq!("JSONSTRING".parse::<OutputFormat>().unwrap(), OutputFormat::JsonString);

        match "xml".parse::<OutputFormat>() {
            Err(MsbError::ValueError { argument, reason }) => {
                assert_eq!(argument, "output_format");
                assert!(reason.contains("xml"));
            }
            other => panic!("Expected ValueError, got {other:?}"),
        }
    }

    #[test]
    fn test_output_format_from_json() {
        assert_eq!(
            OutputFormat::try_from(&json!("jsonstring")).unwrap(),
            OutputFormat::JsonString
        );
        assert!(matches!(
            OutputFormat::try_from(&json!(1)),
            Err(MsbError::TypeError { argument: "output_format", .. })
        ));
    }

    #[test]
    fn test_decode_dictionary() {
        let output = decode(EXAMPLE, OutputFormat::Dictionary, false).unwrap();
        let record = output.as_record().unwrap();
        assert_eq!(record.noise_avg, 2664);
        assert_eq!(record.pt100, FieldValue::Integer(1030));
        assert_eq!(record.node_temp, Some(39));
    }

    #[test]
    fn test_decode_converted_pt100() {
        let record = decode(EXAMPLE, OutputFormat::Dictionary, true)
            .unwrap()
            .into_record()
            .unwrap();
        match record.pt100 {
            FieldValue::Real(v) => assert!((v - 250.0 / 1570.0 * 473.0).abs() < 1e-9),
            other => panic!("Expected converted pt100, got {other:?}"),
        }
    }

    #[test]
    fn test_decoder_with_units_and_battery() {
        let decoder = MsbDecoder::new(DecoderConfig {
            convert_pt100: true,
            pt100_unit: TemperatureUnit::Kelvin,
            convert_battery: true,
            ..DecoderConfig::default()
        });
        // pt100 = 557 (0 °C), battery = 3050 mV (50 %)
        let record = decoder
            .decode_record([0, 1, 0, 2, 0, 3, 0x0B, 0xEA, 0x02, 0x2D, 0x05])
            .unwrap();
        assert_eq!(record.battery, 50);
        assert!((record.pt100.as_f64() - 273.15).abs() < 1e-9);
        assert_eq!(record.mode, 1);
        assert_eq!(record.gain, 1);
    }

    #[test]
    fn test_decode_rejects_short_payload() {
        assert!(matches!(
            decode("0a68", OutputFormat::Dictionary, false),
            Err(MsbError::ValueError { argument: "payload", .. })
        ));
    }
}
