use embedded_hal::delay::DelayNs;

use crate::Result;
use crate::card::Target;
use crate::device::{Device, Initialized};
use crate::transport::Link;
use crate::types::{KeyType, MifareKey};

/// Authenticate `block` using the target's own number and ID.
pub fn authenticate<L: Link, D: DelayNs>(
    target: &Target,
    device: &mut Device<L, D, Initialized>,
    block: u8,
    key_type: KeyType,
    key: &MifareKey,
) -> Result<()> {
    device.authenticate_block(target.target_number(), key_type, block, key, target.id())
}
