#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod codec;
mod constants;
#[cfg(not(feature = "async"))]
mod driver;

#[cfg(feature = "async")]
mod driver_async;

mod error;
#[cfg(test)]
mod mock;
mod signal;

pub use codec::{decode_conversion, encode_config, Config, Conversion};
pub use constants::{Address, DataRate, Gain, Mode, Mux};

#[cfg(not(feature = "async"))]
pub use driver::Ads1115;

#[cfg(feature = "async")]
pub use driver_async::Ads1115;

pub use error::{Ads1115Error, InvalidArgument};
pub use signal::StopSignal;
