//! Network-server style uplink envelope
//!
//! LoRaWAN network servers (TTN, TTI) expect payload formatters to return
//! `{ "data": {...}, "warnings": [...], "errors": [...] }` rather than fail.
//! [`decode_uplink`] wraps [`MsbDecoder`] in that contract.

use crate::config::DecoderConfig;
use crate::error::MsbError;
use crate::msb::decoder::MsbDecoder;
use crate::msb::payload::Payload;
use crate::msb::record::DecodedRecord;
use serde::{Deserialize, Serialize};

/// Warning attached to 11-byte payloads
pub const MISSING_NODE_TEMP_WARNING: &str =
    "Firmware versions 0.36, 0.37, 0.38 do not send 'node_temp' data byte[11].";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UplinkResult {
    pub data: Option<DecodedRecord>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl UplinkResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn to_json_string(&self) -> Result<String, MsbError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Decode an uplink, collecting failures into the envelope instead of
/// returning them.
pub fn decode_uplink(payload: impl Into<Payload>, config: &DecoderConfig) -> UplinkResult {
    let decoder = MsbDecoder::new(config.clone());
    let mut warnings = Vec::new();

    match decoder.decode_record(payload) {
        Ok(record) => {
            if record.node_temp.is_none() {
                warnings.push(MISSING_NODE_TEMP_WARNING.to_string());
            }
            UplinkResult {
                data: Some(record),
                warnings,
                errors: Vec::new(),
            }
        }
        Err(e) => {
            log::warn!("Failed to decode MSB uplink: {e}");
            UplinkResult {
                data: None,
                warnings,
                errors: vec![e.to_string()],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_payload_has_no_warnings() {
        let result = decode_uplink("0a6809c30ad00e4504060c27", &DecoderConfig::default());
        assert!(result.is_ok());
        assert!(result.warnings.is_empty());
        assert_eq!(result.data.unwrap().node_temp, Some(39));
    }

    #[test]
    fn test_short_payload_warns() {
        let result = decode_uplink("0a6809c30ad00e4504060c", &DecoderConfig::default());
        assert!(result.is_ok());
        assert_eq!(result.warnings, vec![MISSING_NODE_TEMP_WARNING.to_string()]);
        assert!(result.data.is_some());
    }

    #[test]
    fn test_failure_is_reported_in_errors() {
        let result = decode_uplink("zz", &DecoderConfig::default());
        assert!(!result.is_ok());
        assert!(result.data.is_none());
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("payload"));
    }

    #[test]
    fn test_envelope_json() {
        let result = decode_uplink("0a6809c30ad00e4504060c27", &DecoderConfig::default());
        let json = result.to_json_string().unwrap();
        assert!(json.starts_with(r#"{"data":{"noise_avg":2664,"#));
        assert!(json.ends_with(r#""warnings":[],"errors":[]}"#));
    }
}
