//! Decoder configuration
//!
//! Options mirror the user settings of the network-server decoders shipped
//! for the MSB prototypes. Configuration can be loaded from a JSON file;
//! missing keys take their defaults.
//!
//! ```json
//! {
//!   "output_format": "jsonstring",
//!   "convert_pt100": true,
//!   "pt100_unit": "celsius",
//!   "convert_battery": true
//! }
//! ```

use crate::error::MsbError;
use crate::msb::convert::{TemperatureUnit, BATTERY_MAX_MV, BATTERY_MIN_MV};
use crate::msb::decoder::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    pub output_format: OutputFormat,
    /// Convert the raw PT100 code into a temperature
    pub convert_pt100: bool,
    pub pt100_unit: TemperatureUnit,
    /// Report battery as 0-100 % instead of mV
    pub convert_battery: bool,
    pub battery_min_mv: u16,
    pub battery_max_mv: u16,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Dictionary,
            convert_pt100: false,
            pt100_unit: TemperatureUnit::Celsius,
            convert_battery: false,
            battery_min_mv: BATTERY_MIN_MV,
            battery_max_mv: BATTERY_MAX_MV,
        }
    }
}

impl DecoderConfig {
    /// Parse and validate a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, MsbError> {
        let config: DecoderConfig = serde_json::from_str(text)
            .map_err(|e| MsbError::Config(format!("invalid decoder configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, MsbError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| MsbError::Config(format!("cannot read {}: {e}", path.display())))?;
        log::debug!("Loaded decoder configuration from {}", path.display());
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), MsbError> {
        if self.battery_min_mv >= self.battery_max_mv {
            return Err(MsbError::value_error(
                "battery_min_mv",
                format!(
                    "must be below battery_max_mv ({} >= {})",
                    self.battery_min_mv, self.battery_max_mv
                ),
            ));
        }
        Ok(())
    }
}
