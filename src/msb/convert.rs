//! Sensor value conversions for MSB prototypes
//!
//! The PT100 channel reports a raw ADC code. The prototypes map code 557 to
//! 0 °C and code 2127 to 250 °C linearly.

use crate::error::MsbError;
use crate::msb::payload::json_type_name;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Raw PT100 code at 0 °C
pub const PT100_RAW_MIN: f64 = 557.0;
/// Raw PT100 code at 250 °C
pub const PT100_RAW_MAX: f64 = 2127.0;
/// Temperature span covered by the raw code range
pub const PT100_SPAN: f64 = 250.0;

/// Battery level treated as 0 % (mV)
pub const BATTERY_MIN_MV: u16 = 2500;
/// Battery level treated as 100 % (mV)
pub const BATTERY_MAX_MV: u16 = 3600;

/// Convert a raw PT100 code to °C.
pub fn convert_reading<T: Into<f64>>(value: T) -> f64 {
    PT100_SPAN / (PT100_RAW_MAX - PT100_RAW_MIN) * (value.into() - PT100_RAW_MIN)
}

/// [`convert_reading`] for values taken from JSON.
///
/// Fails with [`MsbError::TypeError`] when `value` is not a number.
pub fn convert_reading_value(value: &Value) -> Result<f64, MsbError> {
    value.as_f64().map(convert_reading).ok_or_else(|| {
        MsbError::type_error("value", "an integer or a float", json_type_name(value))
    })
}

/// Output unit for converted PT100 readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// Convert a Celsius temperature into this unit.
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => 9.0 / 5.0 * celsius + 32.0,
            TemperatureUnit::Kelvin => celsius + 273.15,
        }
    }
}

/// Units are matched on their first letter, so "C", "celsius" and
/// "Celsius" all select Celsius.
impl FromStr for TemperatureUnit {
    type Err = MsbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('C') => Ok(TemperatureUnit::Celsius),
            Some('F') => Ok(TemperatureUnit::Fahrenheit),
            Some('K') => Ok(TemperatureUnit::Kelvin),
            _ => Err(MsbError::value_error(
                "unit",
                format!("'{s}' is not one of 'celsius', 'fahrenheit' or 'kelvin'"),
            )),
        }
    }
}

impl TryFrom<String> for TemperatureUnit {
    type Error = MsbError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TemperatureUnit> for String {
    fn from(unit: TemperatureUnit) -> Self {
        unit.to_string()
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Kelvin => "kelvin",
        };
        f.write_str(name)
    }
}

/// Convert a raw PT100 code into a temperature in `unit`.
pub fn convert_pt100<T: Into<f64>>(value: T, unit: TemperatureUnit) -> f64 {
    unit.from_celsius(convert_reading(value))
}

/// Map a battery level in mV onto 0..=100 %, truncating toward zero.
pub fn battery_percentage(millivolts: u16, min_mv: u16, max_mv: u16) -> u8 {
    if max_mv <= min_mv {
        return if millivolts >= max_mv { 100 } else { 0 };
    }
    let pct = (100.0 * (f64::from(millivolts) - f64::from(min_mv))
        / (f64::from(max_mv) - f64::from(min_mv)))
    .trunc();
    pct.clamp(0.0, 100.0) as u8
}
