// libpn532/src/lib.rs

//! libpn532
//!
//! Pure Rust driver for the NXP PN532 NFC controller over a bit-banged
//! SPI link.
#![warn(missing_docs)]

/// Listed targets and their MIFARE conveniences
pub mod card;
pub mod constants;
/// Typestate device handle and its builder
pub mod device;
pub mod diagnostics;
/// Crate error type
pub mod error;
/// Common imports
pub mod prelude;
/// Frame codec, command encoders and reply decoders
pub mod protocol;
pub mod test_support;
/// Byte links, timing config and the SPI handshake session
pub mod transport;
/// Value types shared across the crate
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
