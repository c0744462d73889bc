use log::{debug, log_enabled, Level, LevelFilter};

use crate::util::hex::format_hex_compact;

/// Initializes the logger with the `env_logger` crate.
///
/// `RUST_LOG` still takes precedence over `default_level`.
pub fn init_logger(default_level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format_timestamp_secs()
        .try_init();
}

/// Log payload bytes in compact hex at debug level.
///
/// Output is capped so a garbage payload cannot flood the log.
pub fn log_payload_hex(prefix: &str, data: &[u8]) {
    const MAX_LOG_BYTES: usize = 32;

    if !log_enabled!(target: "msb::payload", Level::Debug) {
        return;
    }

    let shown = &data[..data.len().min(MAX_LOG_BYTES)];
    let suffix = if data.len() > MAX_LOG_BYTES {
        format!(" ... ({} bytes total)", data.len())
    } else {
        String::new()
    };

    debug!(
        target: "msb::payload",
        "{prefix} ({} bytes): {}{suffix}",
        data.len(),
        format_hex_compact(shown)
    );
}
