//! Timing defaults and the bounded ready-poll counter.

/// Default budget for each wait-for-ready stage
pub const DEFAULT_TIMEOUT_MS: u32 = 1000;

/// Interval between two status polls
pub const POLL_INTERVAL_MS: u32 = 10;

/// Delay after asserting chip select before the first clock edge
pub const SELECT_SETTLE_MS: u32 = 2;

/// Accounts for the time spent polling the status byte.
///
/// Each status poll costs `poll_cost_ms` (the chip-select settle time) and
/// each wait between polls costs `interval_ms`. The session charges every
/// poll with [`ReadyBudget::poll`] and asks [`ReadyBudget::tick`] before
/// sleeping; `tick` refuses once another sleep plus poll would overrun the
/// budget. The first poll is always made, so only a budget smaller than one
/// poll can be exceeded, and only by that poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadyBudget {
    budget_ms: u32,
    interval_ms: u32,
    poll_cost_ms: u32,
    elapsed_ms: u64,
}

impl ReadyBudget {
    /// A zero interval is charged as 1 ms so the loop always terminates.
    pub fn new(budget_ms: u32, interval_ms: u32) -> Self {
        Self {
            budget_ms,
            interval_ms: interval_ms.max(1),
            poll_cost_ms: 0,
            elapsed_ms: 0,
        }
    }

    /// Time each status poll spends before it can read the chip.
    pub fn with_poll_cost(mut self, poll_cost_ms: u32) -> Self {
        self.poll_cost_ms = poll_cost_ms;
        self
    }

    /// Charge one status poll.
    pub fn poll(&mut self) {
        self.elapsed_ms += u64::from(self.poll_cost_ms);
    }

    /// Charge one poll interval if the interval and the poll after it still
    /// fit. Returns `false` otherwise, in which case the caller must not
    /// sleep again.
    pub fn tick(&mut self) -> bool {
        let next = self.elapsed_ms + u64::from(self.interval_ms) + u64::from(self.poll_cost_ms);
        if next > u64::from(self.budget_ms) {
            return false;
        }
        self.elapsed_ms += u64::from(self.interval_ms);
        true
    }

    /// Poll interval in milliseconds, never zero.
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Budget in milliseconds.
    pub fn budget_ms(&self) -> u32 {
        self.budget_ms
    }

    /// Time charged so far.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }
}
