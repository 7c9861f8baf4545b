// libpn532/src/transport/config.rs

use crate::utils::{DEFAULT_TIMEOUT_MS, POLL_INTERVAL_MS, SELECT_SETTLE_MS};

/// Timing and compatibility knobs for a [`crate::transport::Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Budget for each wait-for-ready stage, in milliseconds
    pub timeout_ms: u32,
    /// Delay between two status polls
    pub poll_interval_ms: u32,
    /// Delay after asserting chip select
    pub select_settle_ms: u32,
    /// Accept reply frames whose first preamble byte never arrived.
    /// Some boards drop it; off by default since a shifted read can
    /// otherwise be mistaken for one.
    pub tolerate_missing_preamble: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            poll_interval_ms: POLL_INTERVAL_MS,
            select_settle_ms: SELECT_SETTLE_MS,
            tolerate_missing_preamble: false,
        }
    }
}

impl SessionConfig {
    /// Set the ready budget.
    pub fn with_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the delay between status polls.
    pub fn with_poll_interval_ms(mut self, poll_interval_ms: u32) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// Set the delay after asserting chip select.
    pub fn with_select_settle_ms(mut self, select_settle_ms: u32) -> Self {
        self.select_settle_ms = select_settle_ms;
        self
    }

    /// Enable or disable the missing-preamble repair.
    pub fn tolerate_missing_preamble(mut self, tolerate: bool) -> Self {
        self.tolerate_missing_preamble = tolerate;
        self
    }
}
