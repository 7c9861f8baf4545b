// libpn532/src/transport/delay.rs

use embedded_hal::delay::DelayNs;

/// [`DelayNs`] backed by `std::thread::sleep`, for hosts running the link
/// over GPIO character devices or similar.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}
