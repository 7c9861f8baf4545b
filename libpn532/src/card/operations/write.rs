use embedded_hal::delay::DelayNs;

use crate::Result;
use crate::card::Target;
use crate::device::{Device, Initialized};
use crate::transport::Link;
use crate::types::BlockData;

/// Write one 16-byte block. The sector must have been authenticated.
pub fn write_block<L: Link, D: DelayNs>(
    target: &Target,
    device: &mut Device<L, D, Initialized>,
    block: u8,
    data: &BlockData,
) -> Result<()> {
    device.write_block(target.target_number(), block, data)
}
