use crate::codec::{decode_conversion, Config, Conversion};
use crate::constants::*;
use crate::constants::{Address, DataRate, Gain, Mode, Mux};
use crate::error::Ads1115Error;
use crate::signal::StopSignal;
use core::result::Result;
use core::result::Result::Ok;

use embedded_hal_async::{delay::DelayNs, i2c::I2c};

/// ADS1115 driver
pub struct Ads1115<I2C, DELAY> {
    i2c: I2C,
    delay: DELAY,
    address: u8,
    config: Config,
}

impl<I2C, DELAY, I2cError> Ads1115<I2C, DELAY>
where
    I2C: I2c<Error = I2cError>,
    DELAY: DelayNs,
{
    /// Creates a new ADS1115 driver instance.
    ///
    /// Nothing is sent to the device until the first [`configure`](Self::configure).
    pub fn new(i2c: I2C, delay: DELAY, address: Address, config: Config) -> Self {
        Ads1115 {
            i2c,
            delay,
            address: address.bits(),
            config,
        }
    }

    /// Gives back the bus and delay provider
    pub fn release(self) -> (I2C, DELAY) {
        (self.i2c, self.delay)
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Last configuration written to the device
    pub fn config(&self) -> Config {
        self.config
    }

    /// Writes a configuration and waits out its settling delay.
    ///
    /// Any request still in flight on the device is superseded.
    pub async fn configure(&mut self, config: Config) -> Result<(), Ads1115Error<I2cError>> {
        let frame = config.frame();
        log::debug!(
            "Writing config register: 0x{:04X} ({:?}, {:?}, {:?}, {:?})",
            config.word(),
            config.mux,
            config.gain,
            config.data_rate,
            config.mode
        );
        self.i2c
            .write(self.address, &frame)
            .await
            .map_err(Ads1115Error::I2c)?;
        self.config = config;

        self.delay
            .delay_us(config.data_rate.settling_delay_us())
            .await;
        Ok(())
    }

    /// Re-issues the current configuration, starting a new conversion
    pub async fn start(&mut self) -> Result<(), Ads1115Error<I2cError>> {
        self.configure(self.config).await
    }

    /// Reads a 16-bit register, MSB first
    async fn read_register(&mut self, reg: u8) -> Result<u16, Ads1115Error<I2cError>> {
        let mut buffer = [0u8; 2];
        self.i2c
            .write(self.address, &[reg])
            .await
            .map_err(Ads1115Error::I2c)?;
        self.i2c
            .read(self.address, &mut buffer)
            .await
            .map_err(Ads1115Error::I2c)?;
        log::debug!(
            "Register 0x{:02X}: {:02X} {:02X}",
            reg,
            buffer[0],
            buffer[1]
        );
        Ok(u16::from_be_bytes(buffer))
    }

    pub async fn read_config_register(&mut self) -> Result<u16, Ads1115Error<I2cError>> {
        self.read_register(REG_CONFIG).await
    }

    /// Waits for the OS bit to report an idle device.
    ///
    /// Only single-shot mode clears the bit; in continuous mode a result is
    /// always available and this returns at once.
    pub async fn wait_for_conversion(&mut self) -> Result<(), Ads1115Error<I2cError>> {
        if self.config.mode == Mode::Continuous {
            return Ok(());
        }
        for _ in 0..CONVERSION_POLL_ATTEMPTS {
            if self.read_config_register().await? & CONFIG_OS_SINGLE != 0 {
                return Ok(());
            }
            self.delay.delay_us(CONVERSION_POLL_INTERVAL_US).await;
        }
        log::error!("Conversion did not complete");
        Err(Ads1115Error::Timeout)
    }

    /// Reads and decodes the conversion register with the configured gain
    pub async fn read_conversion(&mut self) -> Result<Conversion, Ads1115Error<I2cError>> {
        self.wait_for_conversion().await?;

        let raw = self.read_register(REG_CONVERSION).await?;
        let conversion = decode_conversion(raw.to_be_bytes(), self.config.gain);
        log::debug!(
            "Ch {:?}: raw {} - {:.4} V",
            self.config.mux,
            conversion.raw,
            conversion.voltage
        );
        Ok(conversion)
    }

    /// Reads the voltage from the ADC
    pub async fn read_voltage(&mut self) -> Result<f32, Ads1115Error<I2cError>> {
        Ok(self.read_conversion().await?.voltage)
    }

    /// Switches to `mux` and reads one result
    pub async fn measure(&mut self, mux: Mux) -> Result<Conversion, Ads1115Error<I2cError>> {
        self.set_channel(mux).await?;
        self.read_conversion().await
    }
}

// Single-field setters
impl<I2C, DELAY, I2cError> Ads1115<I2C, DELAY>
where
    I2C: I2c<Error = I2cError>,
    DELAY: DelayNs,
{
    pub async fn set_channel(&mut self, mux: Mux) -> Result<(), Ads1115Error<I2cError>> {
        self.configure(Config { mux, ..self.config }).await
    }

    pub async fn set_gain(&mut self, gain: Gain) -> Result<(), Ads1115Error<I2cError>> {
        self.configure(Config { gain, ..self.config }).await
    }

    pub async fn set_data_rate(
        &mut self,
        data_rate: DataRate,
    ) -> Result<(), Ads1115Error<I2cError>> {
        self.configure(Config {
            data_rate,
            ..self.config
        })
        .await
    }

    pub async fn set_mode(&mut self, mode: Mode) -> Result<(), Ads1115Error<I2cError>> {
        self.configure(Config { mode, ..self.config }).await
    }
}

// Acquisition loop
impl<I2C, DELAY, I2cError> Ads1115<I2C, DELAY>
where
    I2C: I2c<Error = I2cError>,
    DELAY: DelayNs,
{
    /// Measures every channel in turn, pausing `interval_ms` after each sweep,
    /// until `stop` is raised.
    ///
    /// The signal is checked before each measurement and before each pause.
    /// Returns the number of completed sweeps. Bus errors end the loop.
    pub async fn scan<F>(
        &mut self,
        channels: &[Mux],
        interval_ms: u32,
        stop: &StopSignal,
        mut on_sample: F,
    ) -> Result<u32, Ads1115Error<I2cError>>
    where
        F: FnMut(Mux, Conversion),
    {
        let mut sweeps = 0;
        loop {
            for &mux in channels {
                if stop.is_raised() {
                    return Ok(sweeps);
                }
                let conversion = self.measure(mux).await?;
                on_sample(mux, conversion);
            }
            sweeps += 1;

            if stop.is_raised() {
                return Ok(sweeps);
            }
            self.delay.delay_ms(interval_ms).await;
        }
    }
}
