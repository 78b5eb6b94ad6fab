use crate::error::InvalidArgument;

/// ADS1115 register pointers
pub const REG_CONVERSION: u8 = 0x00;
pub const REG_CONFIG: u8 = 0x01;
// pub const REG_LO_THRESH: u8 = 0x02;
// pub const REG_HI_THRESH: u8 = 0x03;

/// Config register fields
pub const CONFIG_OS_SINGLE: u16 = 0x8000;
pub const CONFIG_MUX_OFFSET: u16 = 12;
pub const CONFIG_MUX_MASK: u16 = 0x7000;
pub const CONFIG_PGA_MASK: u16 = 0x0E00;
pub const CONFIG_MODE_CONTINUOUS: u16 = 0x0000;
pub const CONFIG_MODE_SINGLE: u16 = 0x0100;
pub const CONFIG_DR_MASK: u16 = 0x00E0;
pub const CONFIG_COMP_QUE_DISABLE: u16 = 0x0003;

/// Fixed pad added to every settling delay, in microseconds
pub const SETTLING_PAD_US: u32 = 100;

/// OS bit polling budget in single-shot mode
pub const CONVERSION_POLL_ATTEMPTS: u32 = 100;
pub const CONVERSION_POLL_INTERVAL_US: u32 = 100;

/// Full-scale code of the 16-bit result
pub const FULL_SCALE_CODE: f32 = 32768.0;

/// I2C address selected by the ADDR pin strapping
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Address {
    Gnd = 0x48,
    #[default]
    Vdd = 0x49,
    Sda = 0x4A,
    Scl = 0x4B,
}

impl Address {
    pub fn bits(&self) -> u8 {
        *self as u8
    }
}

/// Input multiplexer configurations, AINP - AINN
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mux {
    Ain0Ain1 = 0b000,
    #[default]
    Ain0Ain3 = 0b001,
    Ain1Ain3 = 0b010,
    Ain2Ain3 = 0b011,
    Ain0Gnd = 0b100,
    Ain1Gnd = 0b101,
    Ain2Gnd = 0b110,
    Ain3Gnd = 0b111,
}

impl Mux {
    pub const ALL: [Mux; 8] = [
        Mux::Ain0Ain1,
        Mux::Ain0Ain3,
        Mux::Ain1Ain3,
        Mux::Ain2Ain3,
        Mux::Ain0Gnd,
        Mux::Ain1Gnd,
        Mux::Ain2Gnd,
        Mux::Ain3Gnd,
    ];

    pub fn from_index(index: u8) -> Result<Self, InvalidArgument> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(InvalidArgument::Channel(index))
    }

    /// Multiplexer field already shifted into place
    pub fn bits(&self) -> u16 {
        (*self as u16) << CONFIG_MUX_OFFSET
    }
}

/// Programmable gain amplifier settings, named by full-scale range
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gain {
    Fsr6_144V = 0x0000,
    #[default]
    Fsr4_096V = 0x0200,
    Fsr2_048V = 0x0400,
    Fsr1_024V = 0x0600,
    Fsr0_512V = 0x0800,
    Fsr0_256V = 0x0A00,
}

impl Gain {
    pub const ALL: [Gain; 6] = [
        Gain::Fsr6_144V,
        Gain::Fsr4_096V,
        Gain::Fsr2_048V,
        Gain::Fsr1_024V,
        Gain::Fsr0_512V,
        Gain::Fsr0_256V,
    ];

    pub fn from_index(index: u8) -> Result<Self, InvalidArgument> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(InvalidArgument::Gain(index))
    }

    pub fn bits(&self) -> u16 {
        *self as u16
    }

    /// Returns the full-scale input voltage for this gain
    pub fn full_scale(&self) -> f32 {
        match self {
            Gain::Fsr6_144V => 6.144,
            Gain::Fsr4_096V => 4.096,
            Gain::Fsr2_048V => 2.048,
            Gain::Fsr1_024V => 1.024,
            Gain::Fsr0_512V => 0.512,
            Gain::Fsr0_256V => 0.256,
        }
    }
}

/// Data rates for the ADS1115
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataRate {
    Sps8 = 0x00,
    Sps16 = 0x20,
    Sps32 = 0x40,
    Sps64 = 0x60,
    #[default]
    Sps128 = 0x80,
    Sps250 = 0xA0,
    Sps475 = 0xC0,
    Sps860 = 0xE0,
}

impl DataRate {
    pub const ALL: [DataRate; 8] = [
        DataRate::Sps8,
        DataRate::Sps16,
        DataRate::Sps32,
        DataRate::Sps64,
        DataRate::Sps128,
        DataRate::Sps250,
        DataRate::Sps475,
        DataRate::Sps860,
    ];

    pub fn from_index(index: u8) -> Result<Self, InvalidArgument> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(InvalidArgument::DataRate(index))
    }

    pub fn bits(&self) -> u16 {
        *self as u16
    }

    /// Samples per second
    pub fn sps(&self) -> u32 {
        match self {
            DataRate::Sps8 => 8,
            DataRate::Sps16 => 16,
            DataRate::Sps32 => 32,
            DataRate::Sps64 => 64,
            DataRate::Sps128 => 128,
            DataRate::Sps250 => 250,
            DataRate::Sps475 => 475,
            DataRate::Sps860 => 860,
        }
    }

    /// Length of one conversion period, rounded up to whole microseconds
    pub fn conversion_time_us(&self) -> u32 {
        1_000_000u32.div_ceil(self.sps())
    }

    /// Minimum wait between writing a config and reading its result
    pub fn settling_delay_us(&self) -> u32 {
        self.conversion_time_us() + SETTLING_PAD_US
    }
}

/// Operating mode, bit 8 of the config register
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Continuous,
    SingleShot,
}

impl Mode {
    pub fn bits(&self) -> u16 {
        match self {
            Mode::Continuous => CONFIG_MODE_CONTINUOUS,
            Mode::SingleShot => CONFIG_MODE_SINGLE,
        }
    }
}
