use core::fmt;

/// Index outside the table it selects from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidArgument {
    Channel(u8),
    Gain(u8),
    DataRate(u8),
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::Channel(index) => write!(f, "invalid channel index {}", index),
            InvalidArgument::Gain(index) => write!(f, "invalid gain index {}", index),
            InvalidArgument::DataRate(index) => write!(f, "invalid data rate index {}", index),
        }
    }
}

#[derive(Debug)]
pub enum Ads1115Error<I2cError> {
    I2c(I2cError),
    InvalidArgument(InvalidArgument),
    Timeout,
}

impl<I2cError> From<InvalidArgument> for Ads1115Error<I2cError> {
    fn from(err: InvalidArgument) -> Self {
        Ads1115Error::InvalidArgument(err)
    }
}

impl<I2cError: fmt::Debug> fmt::Display for Ads1115Error<I2cError> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ads1115Error::I2c(err) => write!(f, "I2C transfer failed: {:?}", err),
            Ads1115Error::InvalidArgument(err) => write!(f, "{}", err),
            Ads1115Error::Timeout => write!(f, "conversion did not complete"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidArgument {}

#[cfg(feature = "std")]
impl<I2cError: fmt::Debug> std::error::Error for Ads1115Error<I2cError> {}
