#![no_main]

use libfuzzer_sys::fuzz_target;
use msb_decoder::msb::frame::parse_frame;
use msb_decoder::{decode, OutputFormat};

fuzz_target!(|data: &[u8]| {
    // Raw bytes of any length must fail cleanly or decode
    let _ = parse_frame(data);
    let result = decode(data, OutputFormat::JsonString, true);
    if data.len() == 11 || data.len() == 12 {
        assert!(result.is_ok());
    } else {
        assert!(result.is_err());
    }

    // Same bytes interpreted as hex text
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = decode(text, OutputFormat::Dictionary, false);
    }
});
