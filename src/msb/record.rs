//! Decoded MSB record
//!
//! The record keeps the field order of the wire layout. Serialized form is a
//! compact JSON object, e.g.
//! `{"noise_avg":2664,"noise_min":2499,"noise_max":2768,"battery":3653,"pt100":1030,"mode":3,"gain":0,"node_temp":39}`

use crate::error::MsbError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Field names in wire order
pub const FIELD_NAMES: [&str; 8] = [
    "noise_avg",
    "noise_min",
    "noise_max",
    "battery",
    "pt100",
    "mode",
    "gain",
    "node_temp",
];

/// A numeric field value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Real(f64),
}

impl FieldValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            FieldValue::Integer(i) => i as f64,
            FieldValue::Real(r) => r,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            FieldValue::Integer(i) => Some(i),
            FieldValue::Real(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(i) => write!(f, "{i}"),
            FieldValue::Real(r) => write!(f, "{r:?}"),
        }
    }
}

impl From<u8> for FieldValue {
    fn from(v: u8) -> Self {
        FieldValue::Integer(i64::from(v))
    }
}

impl From<u16> for FieldValue {
    fn from(v: u16) -> Self {
        FieldValue::Integer(i64::from(v))
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Real(v)
    }
}

/// Sensor readings decoded from one MSB uplink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedRecord {
    pub noise_avg: u16,
    pub noise_min: u16,
    pub noise_max: u16,
    /// mV, or 0-100 % when battery conversion is enabled
    pub battery: u16,
    /// Raw ADC code, or a temperature when PT100 conversion is enabled
    pub pt100: FieldValue,
    pub mode: u8,
    pub gain: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_temp: Option<u8>,
}

impl DecodedRecord {
    /// Field name / value pairs in wire order.
    ///
    /// `node_temp` is only present for 12-byte payloads.
    pub fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        let mut fields: Vec<(&'static str, FieldValue)> = vec![
            ("noise_avg", self.noise_avg.into()),
            ("noise_min", self.noise_min.into()),
            ("noise_max", self.noise_max.into()),
            ("battery", self.battery.into()),
            ("pt100", self.pt100),
            ("mode", self.mode.into()),
            ("gain", self.gain.into()),
        ];
        if let Some(temp) = self.node_temp {
            fields.push(("node_temp", temp.into()));
        }
        fields
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<FieldValue> {
        match name {
            "noise_avg" => Some(self.noise_avg.into()),
            "noise_min" => Some(self.noise_min.into()),
            "noise_max" => Some(self.noise_max.into()),
            "battery" => Some(self.battery.into()),
            "pt100" => Some(self.pt100),
            "mode" => Some(self.mode.into()),
            "gain" => Some(self.gain.into()),
            "node_temp" => self.node_temp.map(FieldValue::from),
            _ => None,
        }
    }

    /// Compact single-line JSON with fields in wire order.
    pub fn to_json_string(&self) -> Result<String, MsbError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a record back from its JSON text form.
    pub fn from_json_str(text: &str) -> Result<Self, MsbError> {
        Ok(serde_json::from_str(text)?)
    }
}

impl fmt::Display for DecodedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.fields().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{name}: {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DecodedRecord {
        DecodedRecord {
            noise_avg: 2664,
            noise_min: 2499,
            noise_max: 2768,
            battery: 3653,
            pt100: FieldValue::Integer(1030),
            mode: 3,
            gain: 0,
            node_temp: Some(39),
        }
    }

    #[test]
    fn test_json_field_order() {
        let json = sample().to_json_string().unwrap();
        assert_eq!(
            json,
            r#"{"noise_avg":2664,"noise_min":2499,"noise_max":2768,"battery":3653,"pt100":1030,"mode":3,"gain":0,"node_temp":39}"#
        );
    }

    #[test]
    fn test_json_omits_missing_node_temp() {
        let record = DecodedRecord {
            node_temp: None,
            ..sample()
        };
        let json = record.to_json_string().unwrap();
        assert!(!json.contains("node_temp"));
        assert!(json.ends_with(r#""gain":0}"#));
    }

    #[test]
    fn test_real_pt100_keeps_decimal_point() {
        let record = DecodedRecord {
            pt100: FieldValue::Real(0.0),
            ..sample()
        };
        let json = record.to_json_string().unwrap();
        assert!(json.contains(r#""pt100":0.0,"#));
    }

    #[test]
    fn test_json_parse_back() {
        let record = DecodedRecord {
            pt100: FieldValue::Real(75.5),
            ..sample()
        };
        let parsed = DecodedRecord::from_json_str(&record.to_json_string().unwrap()).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_fields_and_get() {
        let record = sample();
        let names: Vec<_> = record.fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, FIELD_NAMES.to_vec());
        assert_eq!(record.fields().len(), 8);
        assert_eq!(record.get("battery"), Some(FieldValue::Integer(3653)));
        assert_eq!(record.get("unknown"), None);

        let short = DecodedRecord {
            node_temp: None,
            ..record
        };
        assert_eq!(short.fields().len(), 7);
        assert_eq!(short.get("node_temp"), None);
    }

    #[test]
    fn test_display() {
        let text = sample().to_string();
        assert!(text.starts_with("noise_avg: 2664\n"));
        assert!(text.ends_with("node_temp: 39"));
    }
}
