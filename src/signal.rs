use core::sync::atomic::{AtomicBool, Ordering};

/// One-shot stop request for [`Ads1115::scan`](crate::Ads1115::scan).
///
/// Meant to live in a `static` so an interrupt handler (a watchdog timeout,
/// for example) can raise it while the main loop is busy on the bus. Only
/// plain loads and stores are used, so it also works on cores without
/// compare-and-swap.
#[derive(Debug, Default)]
pub struct StopSignal {
    raised: AtomicBool,
}

impl StopSignal {
    pub const fn new() -> Self {
        StopSignal {
            raised: AtomicBool::new(false),
        }
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::Release);
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }

    /// Re-arms the signal for another loop
    pub fn clear(&self) {
        self.raised.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static WATCHDOG_FIRED: StopSignal = StopSignal::new();

    fn watchdog_handler() {
        WATCHDOG_FIRED.raise();
    }

    #[test]
    fn raised_from_handler() {
        assert!(!WATCHDOG_FIRED.is_raised());
        watchdog_handler();
        assert!(WATCHDOG_FIRED.is_raised());
        WATCHDOG_FIRED.clear();
        assert!(!WATCHDOG_FIRED.is_raised());
    }
}
