// libpn532/src/protocol/responses/mod.rs

/// DEP initiator and target replies
pub mod dep;
/// GetFirmwareVersion reply
pub mod firmware;
/// MIFARE Classic replies
pub mod mifare;
/// Register access replies
pub mod register;
/// SAMConfiguration reply
pub mod sam;
/// InListPassiveTarget reply
pub mod target;

pub use dep::{
    decode_in_data_exchange, decode_in_jump_for_dep, decode_tg_get_data, decode_tg_init_as_target,
    decode_tg_set_data,
};
pub use firmware::decode_firmware_version;
pub use mifare::{decode_mifare_status, decode_read_block};
pub use register::{decode_read_register, decode_write_register};
pub use sam::decode_sam_configuration;
pub use target::decode_in_list_passive_target;

use crate::card::Target;
use crate::protocol::Command;
use crate::types::{BlockData, FirmwareVersion};

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Packed IC, version, revision and support bytes
    FirmwareVersion(FirmwareVersion),
    /// SAM configured
    SamConfigured,
    /// The one target found
    PassiveTarget(Target),
    /// Block authenticated
    Authenticated,
    /// Contents of the block
    BlockRead(BlockData),
    /// Block written
    BlockWritten,
    /// DEP link established
    DepLinked,
    /// Packet received over DEP (initiator exchange or target receive)
    DepData([u8; 16]),
    /// Activated by an initiator
    TargetActivated,
    /// Packet sent to the initiator
    TargetDataSent,
    /// Register value
    Register(u8),
    /// Register written
    RegisterWritten,
}

impl Response {
    /// Decode a reply body (starting with the opcode echo) for the command
    /// that produced it.
    pub fn decode(cmd: &Command, data: &[u8]) -> crate::Result<Self> {
        // Every reply echoes its command; checking it here keeps a reply
        // to one command from being decoded as another.
        crate::protocol::parser::expect_response_code(data, cmd.opcode().response_code())?;

        let resp = match cmd {
            Command::GetFirmwareVersion => Self::FirmwareVersion(decode_firmware_version(data)?),
            Command::SamConfiguration { .. } => {
                decode_sam_configuration(data)?;
                Self::SamConfigured
            }
            Command::InListPassiveTarget { .. } => {
                Self::PassiveTarget(decode_in_list_passive_target(data)?)
            }
            Command::MifareAuthenticate { .. } => {
                decode_mifare_status(data)?;
                Self::Authenticated
            }
            Command::MifareRead { .. } => Self::BlockRead(decode_read_block(data)?),
            Command::MifareWrite { .. } => {
                decode_mifare_status(data)?;
                Self::BlockWritten
            }
            Command::InJumpForDep { .. } => {
                decode_in_jump_for_dep(data)?;
                Self::DepLinked
            }
            Command::InDataExchange { .. } => Self::DepData(decode_in_data_exchange(data)?),
            Command::TgInitAsTarget { .. } => {
                decode_tg_init_as_target(data)?;
                Self::TargetActivated
            }
            Command::TgGetData => Self::DepData(decode_tg_get_data(data)?),
            Command::TgSetData { .. } => {
                decode_tg_set_data(data)?;
                Self::TargetDataSent
            }
            Command::ReadRegister { .. } => Self::Register(decode_read_register(data)?),
            Command::WriteRegister { .. } => {
                decode_write_register(data)?;
                Self::RegisterWritten
            }
        };
        Ok(resp)
    }
}
