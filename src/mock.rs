//! Recording bus and delay used by the driver tests.

extern crate std;

use std::collections::VecDeque;
use std::vec::Vec;

use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Write(u8, Vec<u8>),
    Read(u8, usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockError;

impl embedded_hal::i2c::Error for MockError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
    }
}

/// Logs every operation and answers reads from a byte queue, zeros once it
/// runs dry
#[derive(Debug, Default)]
pub struct MockI2c {
    pub ops: Vec<Op>,
    pub responses: VecDeque<u8>,
    pub fail: bool,
}

impl MockI2c {
    pub fn with_responses(bytes: &[u8]) -> Self {
        MockI2c {
            responses: bytes.iter().copied().collect(),
            ..Default::default()
        }
    }

    fn run(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), MockError> {
        if self.fail {
            return Err(MockError);
        }
        for operation in operations {
            match operation {
                Operation::Write(bytes) => self.ops.push(Op::Write(address, bytes.to_vec())),
                Operation::Read(buffer) => {
                    self.ops.push(Op::Read(address, buffer.len()));
                    for byte in buffer.iter_mut() {
                        *byte = self.responses.pop_front().unwrap_or(0);
                    }
                }
            }
        }
        Ok(())
    }
}

impl ErrorType for MockI2c {
    type Error = MockError;
}

impl embedded_hal::i2c::I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.run(address, operations)
    }
}

#[cfg(feature = "async")]
impl embedded_hal_async::i2c::I2c for MockI2c {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.run(address, operations)
    }
}

/// Adds up requested delays instead of sleeping
#[derive(Debug, Default)]
pub struct MockDelay {
    pub total_ns: u64,
}

impl MockDelay {
    pub fn total_us(&self) -> u64 {
        self.total_ns / 1_000
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}

#[cfg(feature = "async")]
impl embedded_hal_async::delay::DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}

/// Drives a future whose every await is immediately ready
#[cfg(feature = "async")]
pub fn block_on<F: core::future::Future>(future: F) -> F::Output {
    use core::pin::pin;
    use core::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    fn clone(_: *const ()) -> RawWaker {
        RawWaker::new(core::ptr::null(), &VTABLE)
    }
    fn noop(_: *const ()) {}
    static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);

    let waker = unsafe { Waker::from_raw(RawWaker::new(core::ptr::null(), &VTABLE)) };
    let mut cx = Context::from_waker(&waker);
    let mut future = pin!(future);
    loop {
        if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
            return output;
        }
    }
}
