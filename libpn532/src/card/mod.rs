// libpn532/src/card/mod.rs

use embedded_hal::delay::DelayNs;

use crate::Result;
use crate::device::{Device, Initialized};
use crate::transport::Link;
use crate::types::{BlockData, KeyType, MifareKey, TargetId, Uid};

pub mod operations;

/// A passive target listed by InListPassiveTarget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    target_number: u8,
    sens_res: u16,
    sel_res: u8,
    uid: Uid,
    id: TargetId,
}

impl Target {
    /// Assemble a target from the fields of an InListPassiveTarget reply.
    pub fn new(target_number: u8, sens_res: u16, sel_res: u8, uid: Uid, id: TargetId) -> Self {
        Self {
            target_number,
            sens_res,
            sel_res,
            uid,
            id,
        }
    }

    /// Logical number the chip assigned (Tg)
    pub fn target_number(&self) -> u8 {
        self.target_number
    }

    /// ATQA
    pub fn sens_res(&self) -> u16 {
        self.sens_res
    }

    /// SAK
    pub fn sel_res(&self) -> u8 {
        self.sel_res
    }

    /// Full NFCID1.
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// ID folded to 32 bits, used for authentication.
    pub fn id(&self) -> TargetId {
        self.id
    }

    /// Authenticate a block of this target.
    pub fn authenticate<L: Link, D: DelayNs>(
        &self,
        device: &mut Device<L, D, Initialized>,
        block: u8,
        key_type: KeyType,
        key: &MifareKey,
    ) -> Result<()> {
        operations::authenticate(self, device, block, key_type, key)
    }

    /// Read a block from this target.
    pub fn read_block<L: Link, D: DelayNs>(
        &self,
        device: &mut Device<L, D, Initialized>,
        block: u8,
    ) -> Result<BlockData> {
        operations::read_block(self, device, block)
    }

    /// Write a block to this target.
    pub fn write_block<L: Link, D: DelayNs>(
        &self,
        device: &mut Device<L, D, Initialized>,
        block: u8,
        data: &BlockData,
    ) -> Result<()> {
        operations::write_block(self, device, block, data)
    }
}
