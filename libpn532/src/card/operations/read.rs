use embedded_hal::delay::DelayNs;

use crate::Result;
use crate::card::Target;
use crate::device::{Device, Initialized};
use crate::transport::Link;
use crate::types::BlockData;

/// Read one 16-byte block. The sector must have been authenticated.
pub fn read_block<L: Link, D: DelayNs>(
    target: &Target,
    device: &mut Device<L, D, Initialized>,
    block: u8,
) -> Result<BlockData> {
    device.read_block(target.target_number(), block)
}
