// libpn532/src/protocol/commands/mod.rs

/// DEP initiator and target commands
pub mod dep;
/// GetFirmwareVersion
pub mod firmware;
/// MIFARE Classic commands over InDataExchange
pub mod mifare;
/// Register access
pub mod register;
/// SAMConfiguration
pub mod sam;
/// InListPassiveTarget
pub mod target;

pub use dep::{
    encode_in_data_exchange, encode_in_jump_for_dep, encode_tg_get_data, encode_tg_init_as_target,
    encode_tg_set_data,
};
pub use firmware::encode_get_firmware_version;
pub use mifare::{encode_authenticate, encode_read_block, encode_write_block};
pub use register::{encode_read_register, encode_write_register};
pub use sam::{DEFAULT_SAM_TIMEOUT, encode_sam_configuration};
pub use target::encode_in_list_passive_target;

use crate::constants::Opcode;
use crate::protocol::Frame;
use crate::types::{
    BaudRate, BlockData, DepBaudRate, KeyType, MifareKey, SamMode, TargetConfig, TargetId,
};
use crate::Result;

/// High-level Command enum. Each variant is one operation of the catalog;
/// its encoder lives in `protocol::commands::<name>.rs` and its reply
/// decoder in `protocol::responses::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Query IC, version, revision and support bytes
    GetFirmwareVersion,
    /// Configure the secure access module
    SamConfiguration {
        /// SAM mode
        mode: SamMode,
        /// Virtual-card timeout in 50 ms steps
        timeout: u8,
        /// Drive the IRQ line
        use_irq: bool,
    },
    /// Detect passive targets
    InListPassiveTarget {
        /// Most targets to list (1 or 2)
        max_targets: u8,
        /// Modulation to poll with
        baud_rate: BaudRate,
    },
    /// MIFARE Classic authentication of one block
    MifareAuthenticate {
        /// Logical target number
        target: u8,
        /// Key slot
        key_type: KeyType,
        /// Block to authenticate
        block: u8,
        /// Sector key
        key: MifareKey,
        /// Target ID the key is bound to
        id: TargetId,
    },
    /// MIFARE Classic block read
    MifareRead {
        /// Logical target number
        target: u8,
        /// Block number
        block: u8,
    },
    /// MIFARE Classic block write
    MifareWrite {
        /// Logical target number
        target: u8,
        /// Block number
        block: u8,
        /// New block contents
        data: BlockData,
    },
    /// Activate a DEP target as initiator
    InJumpForDep {
        /// Active (true) or passive communication
        active: bool,
        /// Bit rate of the link
        baud_rate: DepBaudRate,
    },
    /// Send 16 bytes to a DEP target
    InDataExchange {
        /// Logical target number
        target: u8,
        /// Outgoing packet
        data: [u8; 16],
    },
    /// Wait to be activated as a DEP target
    TgInitAsTarget {
        /// Parameters advertised to the initiator
        config: TargetConfig,
    },
    /// Receive a packet from the initiator
    TgGetData,
    /// Answer the initiator
    TgSetData {
        /// Outgoing packet
        data: [u8; 16],
    },
    /// Read one register
    ReadRegister {
        /// Register address
        address: u16,
    },
    /// Write one register
    WriteRegister {
        /// Register address
        address: u16,
        /// New value
        value: u8,
    },
}

impl Command {
    /// The PN532 command code this operation is sent as.
    pub fn opcode(&self) -> Opcode {
        match self {
            Self::GetFirmwareVersion => Opcode::GetFirmwareVersion,
            Self::SamConfiguration { .. } => Opcode::SamConfiguration,
            Self::InListPassiveTarget { .. } => Opcode::InListPassiveTarget,
            Self::MifareAuthenticate { .. }
            | Self::MifareRead { .. }
            | Self::MifareWrite { .. }
            | Self::InDataExchange { .. } => Opcode::InDataExchange,
            Self::InJumpForDep { .. } => Opcode::InJumpForDep,
            Self::TgInitAsTarget { .. } => Opcode::TgInitAsTarget,
            Self::TgGetData => Opcode::TgGetData,
            Self::TgSetData { .. } => Opcode::TgSetData,
            Self::ReadRegister { .. } => Opcode::ReadRegister,
            Self::WriteRegister { .. } => Opcode::WriteRegister,
        }
    }

    /// Encode the command into the frame body (command code + params).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::GetFirmwareVersion => encode_get_firmware_version(),
            Self::SamConfiguration {
                mode,
                timeout,
                use_irq,
            } => encode_sam_configuration(*mode, *timeout, *use_irq),
            Self::InListPassiveTarget {
                max_targets,
                baud_rate,
            } => encode_in_list_passive_target(*max_targets, *baud_rate),
            Self::MifareAuthenticate {
                target,
                key_type,
                block,
                key,
                id,
            } => encode_authenticate(*target, *key_type, *block, key, *id),
            Self::MifareRead { target, block } => encode_read_block(*target, *block),
            Self::MifareWrite {
                target,
                block,
                data,
            } => encode_write_block(*target, *block, data),
            Self::InJumpForDep { active, baud_rate } => encode_in_jump_for_dep(*active, *baud_rate),
            Self::InDataExchange { target, data } => encode_in_data_exchange(*target, data),
            Self::TgInitAsTarget { config } => encode_tg_init_as_target(config),
            Self::TgGetData => encode_tg_get_data(),
            Self::TgSetData { data } => encode_tg_set_data(data),
            Self::ReadRegister { address } => encode_read_register(*address),
            Self::WriteRegister { address, value } => encode_write_register(*address, *value),
        }
    }

    /// Wrap the encoded body into a host -> chip frame.
    pub fn to_frame(&self) -> Result<Frame> {
        let body = self.encode();
        Frame::command(body[0], &body[1..])
    }
}
