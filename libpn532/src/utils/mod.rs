//! Small helpers shared across the crate: lazy hex formatting for log
//! output and the bounded ready-poll budget.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
