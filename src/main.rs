use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use msb_decoder::{decode_uplink, init_logger, DecoderConfig, MsbDecoder, OutputFormat, TemperatureUnit};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "msb-decode")]
#[command(about = "Decode Multisense Bolt (MSB) uplink payloads")]
struct Cli {
    /// Uplink payload as hex text, e.g. 0a6809c30ad00e4504060c27
    payload: String,

    /// Output format: dictionary or jsonstring
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Convert the raw PT100 value into a temperature
    #[arg(short, long)]
    convert: bool,

    /// Temperature unit for converted PT100 values
    #[arg(short, long)]
    unit: Option<TemperatureUnit>,

    /// Report battery as percentage instead of mV
    #[arg(short, long)]
    battery_percent: bool,

    /// Print the {data, warnings, errors} envelope as JSON
    #[arg(short, long)]
    envelope: bool,

    /// JSON decoder configuration file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn decoder_config(&self) -> anyhow::Result<DecoderConfig> {
        let mut config = match &self.config {
            Some(path) => DecoderConfig::from_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => DecoderConfig::default(),
        };

        if let Some(format) = self.format {
            config.output_format = format;
        }
        if let Some(unit) = self.unit {
            config.pt100_unit = unit;
        }
        config.convert_pt100 |= self.convert;
        config.convert_battery |= self.battery_percent;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });

    let config = cli.decoder_config()?;

    if cli.envelope {
        let result = decode_uplink(cli.payload.as_str(), &config);
        println!("{}", result.to_json_string()?);
        if !result.is_ok() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let output = MsbDecoder::new(config)
        .decode(cli.payload.as_str())
        .context("decoding payload")?;
    println!("{output}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags_override_config() {
        let cli = Cli::parse_from([
            "msb-decode",
            "0a6809c30ad00e4504060c27",
            "--format",
            "JSONSTRING",
            "--convert",
            "--unit",
            "kelvin",
            "-b",
        ]);
        let config = cli.decoder_config().unwrap();
        assert_eq!(config.output_format, OutputFormat::JsonString);
        assert!(config.convert_pt100);
        assert!(config.convert_battery);
        assert_eq!(config.pt100_unit, TemperatureUnit::Kelvin);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["msb-decode", "00", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_config_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"convert_pt100": true, "pt100_unit": "fahrenheit"}}"#).unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let cli = Cli::parse_from(["msb-decode", "00", "--config", path.as_str()]);
        let config = cli.decoder_config().unwrap();
        assert!(config.convert_pt100);
        assert_eq!(config.pt100_unit, TemperatureUnit::Fahrenheit);
        assert_eq!(config.output_format, OutputFormat::Dictionary);
    }
}
