//! Hexadecimal formatting for diagnostics.
//!
//! [`Hex`] formats lazily, so wrapping a frame in it inside a `log` macro
//! costs nothing when the level is disabled.

use std::fmt;

/// Display adapter printing bytes as lowercase hex separated by spaces.
///
/// Example: `Hex(&[0xde, 0xad])` -> `"de ad"`
#[derive(Clone, Copy)]
pub struct Hex<'a>(pub &'a [u8]);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bytes = self.0.iter();
        if let Some(first) = bytes.next() {
            write!(f, "{:02x}", first)?;
            for b in bytes {
                write!(f, " {:02x}", b)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}

/// Compact lowercase hex without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
