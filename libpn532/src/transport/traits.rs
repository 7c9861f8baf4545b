// libpn532/src/transport/traits.rs

use crate::Result;

/// Byte-level seam between the session and the wire.
///
/// A transaction is everything between [`Link::select`] and
/// [`Link::deselect`]; the first byte written selects what the chip does
/// with the rest of it (see [`crate::constants::SpiOp`]).
pub trait Link {
    /// Assert chip select
    fn select(&mut self) -> Result<()>;

    /// Release chip select
    fn deselect(&mut self) -> Result<()>;

    /// Clock one byte out, least significant bit first
    fn write_byte(&mut self, value: u8) -> Result<()>;

    /// Clock one byte in, least significant bit first
    fn read_byte(&mut self) -> Result<u8>;

    /// Write every byte of `data`. Default implementation loops over
    /// `write_byte`.
    fn write_all(&mut self, data: &[u8]) -> Result<()> {
        for &b in data {
            self.write_byte(b)?;
        }
        Ok(())
    }

    /// Fill `buf` from the link. Default implementation loops over
    /// `read_byte`.
    fn read_into(&mut self, buf: &mut [u8]) -> Result<()> {
        for slot in buf.iter_mut() {
            *slot = self.read_byte()?;
        }
        Ok(())
    }
}

// Lets a caller lend a link to a session and inspect it afterwards.
impl<L: Link + ?Sized> Link for &mut L {
    fn select(&mut self) -> Result<()> {
        (**self).select()
    }

    fn deselect(&mut self) -> Result<()> {
        (**self).deselect()
    }

    fn write_byte(&mut self, value: u8) -> Result<()> {
        (**self).write_byte(value)
    }

    fn read_byte(&mut self) -> Result<u8> {
        (**self).read_byte()
    }
}
