//! Config word encoding and conversion result decoding.
//!
//! Nothing in here touches the bus; the drivers call these functions and
//! move the bytes.

use crate::constants::*;
use crate::error::InvalidArgument;

/// One acquisition request
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub mux: Mux,
    pub gain: Gain,
    pub data_rate: DataRate,
    pub mode: Mode,
}

impl Config {
    pub fn new(mux: Mux, gain: Gain, data_rate: DataRate) -> Self {
        Config {
            mux,
            gain,
            data_rate,
            mode: Mode::Continuous,
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Assembles the 16-bit config register value
    pub fn word(&self) -> u16 {
        CONFIG_OS_SINGLE
            | self.mux.bits()
            | self.gain.bits()
            | self.mode.bits()
            | self.data_rate.bits()
            | CONFIG_COMP_QUE_DISABLE
    }

    /// Config register write: pointer byte then the word, MSB first
    pub fn frame(&self) -> [u8; 3] {
        let [msb, lsb] = self.word().to_be_bytes();
        [REG_CONFIG, msb, lsb]
    }
}

/// Encodes a raw-index request into a config word.
///
/// Only the low three bits of `channel` are used. `gain` and `sample_rate`
/// must index into their tables.
pub fn encode_config(channel: u8, gain: u8, sample_rate: u8) -> Result<u16, InvalidArgument> {
    let gain = Gain::from_index(gain)?;
    let data_rate = DataRate::from_index(sample_rate)?;
    let mux = Mux::ALL[(channel & 0x07) as usize];

    Ok(Config::new(mux, gain, data_rate).word())
}

/// A decoded conversion register
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Conversion {
    pub raw: u16,
    pub gain: Gain,
    pub voltage: f32,
}

impl Conversion {
    /// Two's-complement view of the raw code
    pub fn signed_raw(&self) -> i16 {
        self.raw as i16
    }

    /// Voltage computed from the two's-complement code, negative for
    /// differential inputs below zero
    pub fn signed_voltage(&self) -> f32 {
        self.signed_raw() as f32 * self.gain.full_scale() / FULL_SCALE_CODE
    }
}

/// Decodes the two conversion register bytes, MSB first.
///
/// The code is treated as unsigned; use [`Conversion::signed_voltage`] for
/// differential readings that may go negative.
pub fn decode_conversion(raw_bytes: [u8; 2], gain: Gain) -> Conversion {
    let raw = raw_bytes[0] as u16 * 256 + raw_bytes[1] as u16;
    let voltage = raw as f32 * gain.full_scale() / FULL_SCALE_CODE;

    Conversion { raw, gain, voltage }
}
