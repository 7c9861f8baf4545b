// libpn532/src/card/operations/mod.rs

//! MIFARE Classic operations addressed to a listed [`Target`].
//!
//! [`Target`]: crate::card::Target

/// Key authentication of one block
pub mod auth;
/// Block reads
pub mod read;
/// Block writes
pub mod write;

pub use auth::authenticate;
pub use read::read_block;
pub use write::write_block;
