// libpn532/src/transport/bitbang.rs

use embedded_hal::digital::{InputPin, OutputPin};

use crate::Result;
use crate::error::pin_error;
use crate::transport::traits::Link;

/// Software SPI over four GPIO lines: clock, data out (MOSI), data in
/// (MISO) and an active-low chip select.
///
/// Bits travel least significant first. Data is driven while the clock is
/// low and latched by the chip on the rising edge; incoming bits are
/// sampled before each clock pulse.
pub struct BitLink<CLK, MOSI, MISO, SS> {
    clk: CLK,
    mosi: MOSI,
    miso: MISO,
    ss: SS,
}

impl<CLK, MOSI, MISO, SS> BitLink<CLK, MOSI, MISO, SS>
where
    CLK: OutputPin,
    MOSI: OutputPin,
    MISO: InputPin,
    SS: OutputPin,
{
    /// Take ownership of the four lines. Pins are used as they are, so
    /// drive select and clock high before handing them over.
    pub fn new(clk: CLK, mosi: MOSI, miso: MISO, ss: SS) -> Self {
        Self {
            clk,
            mosi,
            miso,
            ss,
        }
    }

    /// Give the pins back.
    pub fn release(self) -> (CLK, MOSI, MISO, SS) {
        (self.clk, self.mosi, self.miso, self.ss)
    }
}

impl<CLK, MOSI, MISO, SS> Link for BitLink<CLK, MOSI, MISO, SS>
where
    CLK: OutputPin,
    MOSI: OutputPin,
    MISO: InputPin,
    SS: OutputPin,
{
    fn select(&mut self) -> Result<()> {
        self.ss.set_low().map_err(pin_error)
    }

    fn deselect(&mut self) -> Result<()> {
        self.ss.set_high().map_err(pin_error)
    }

    fn write_byte(&mut self, value: u8) -> Result<()> {
        self.clk.set_high().map_err(pin_error)?;
        for bit in 0..8 {
            self.clk.set_low().map_err(pin_error)?;
            if value & (1 << bit) != 0 {
                self.mosi.set_high().map_err(pin_error)?;
            } else {
                self.mosi.set_low().map_err(pin_error)?;
            }
            self.clk.set_high().map_err(pin_error)?;
        }
        Ok(())
    }

    fn read_byte(&mut self) -> Result<u8> {
        let mut value = 0u8;
        self.clk.set_high().map_err(pin_error)?;
        for bit in 0..8 {
            if self.miso.is_high().map_err(pin_error)? {
                value |= 1 << bit;
            }
            self.clk.set_low().map_err(pin_error)?;
            self.clk.set_high().map_err(pin_error)?;
        }
        Ok(value)
    }
}
