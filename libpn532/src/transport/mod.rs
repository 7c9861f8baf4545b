// libpn532/src/transport/mod.rs

/// Software SPI over GPIO pins
pub mod bitbang;
/// Session timing configuration
pub mod config;
/// Blocking delay backed by the OS
#[cfg(feature = "std")]
pub mod delay;
/// Scripted link and counting delay for tests
pub mod mock;
/// The SPI handshake
pub mod session;
/// Link trait
pub mod traits;

pub use bitbang::BitLink;
pub use config::SessionConfig;
#[cfg(feature = "std")]
pub use delay::StdDelay;
pub use mock::{FakeDelay, MockLink};
pub use session::{RawReply, ReadyStage, Session};
pub use traits::Link;
