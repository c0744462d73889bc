//! MSB uplink frame layout and parser
//!
//! ```text
//! byte:  0   1   2   3   4   5   6   7   8   9   10          11
//!       [noise_avg][noise_min][noise_max][battery][ pt100 ][mode|gain][node_temp]
//!                                                          6b   2b    optional
//! ```
//!
//! All 16-bit fields are big-endian unsigned. `node_temp` is only sent by
//! firmware 0.40 and later, which makes the frame 12 bytes instead of 11.

use crate::error::MsbError;
use nom::{
    bits::{bits, complete::take as take_bits},
    combinator::{all_consuming, opt},
    number::complete::{be_u16, u8 as parse_u8},
    sequence::tuple,
    IResult,
};

/// Frame length without the `node_temp` byte (firmware 0.36 - 0.38)
pub const FRAME_LEN_SHORT: usize = 11;
/// Frame length with the `node_temp` byte (firmware 0.40+)
pub const FRAME_LEN_FULL: usize = 12;

/// Raw field values of one MSB uplink frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MsbFrame {
    pub noise_avg: u16,
    pub noise_min: u16,
    pub noise_max: u16,
    /// Battery level in mV
    pub battery: u16,
    /// Raw PT100 ADC code
    pub pt100: u16,
    /// Top 6 bits of byte 10
    pub mode: u8,
    /// Bottom 2 bits of byte 10
    pub gain: u8,
    pub node_temp: Option<u8>,
}

impl MsbFrame {
    /// Parse a frame after checking that it is 11 or 12 bytes long.
    pub fn from_bytes(data: &[u8]) -> Result<Self, MsbError> {
        if data.len() != FRAME_LEN_SHORT && data.len() != FRAME_LEN_FULL {
            return Err(MsbError::value_error(
                "payload",
                format!(
                    "length must be {FRAME_LEN_SHORT} or {FRAME_LEN_FULL} bytes, got {}",
                    data.len()
                ),
            ));
        }

        let (_, frame) = all_consuming(parse_frame)(data).map_err(|e| {
            MsbError::value_error("payload", format!("malformed frame: {e:?}"))
        })?;
        Ok(frame)
    }

    /// Encode the frame back into its wire layout.
    ///
    /// `mode` is truncated to 6 bits and `gain` to 2 bits.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(FRAME_LEN_FULL);
        for word in [
            self.noise_avg,
            self.noise_min,
            self.noise_max,
            self.battery,
            self.pt100,
        ] {
            out.extend_from_slice(&word.to_be_bytes());
        }
        out.push(((self.mode & 0x3F) << 2) | (self.gain & 0x03));
        if let Some(temp) = self.node_temp {
            out.push(temp);
        }
        out
    }
}

/// Split byte 10 into its 6-bit mode and 2-bit gain.
fn parse_mode_gain(input: &[u8]) -> IResult<&[u8], (u8, u8)> {
    bits::<_, _, nom::error::Error<(&[u8], usize)>, _, _>(tuple((
        take_bits(6usize),
        take_bits(2usize),
    )))(input)
}

/// nom parser for the MSB frame layout.
///
/// This does not enforce the total length; trailing bytes after `node_temp`
/// are left in the remaining input. Use [`MsbFrame::from_bytes`] for the
/// checked entry point.
pub fn parse_frame(input: &[u8]) -> IResult<&[u8], MsbFrame> {
    let (input, (noise_avg, noise_min, noise_max, battery, pt100)) =
        tuple((be_u16, be_u16, be_u16, be_u16, be_u16))(input)?;
    let (input, (mode, gain)) = parse_mode_gain(input)?;
    let (input, node_temp) = opt(parse_u8)(input)?;

    Ok((
        input,
        MsbFrame {
            noise_avg,
            noise_min,
            noise_max,
            battery,
            pt100,
            mode,
            gain,
            node_temp,
        },
    ))
}
