// libpn532/src/protocol/commands/target.rs

use crate::constants::Opcode;
use crate::types::BaudRate;

/// Encode InListPassiveTarget
pub fn encode_in_list_passive_target(max_targets: u8, baud_rate: BaudRate) -> Vec<u8> {
    vec![
        Opcode::InListPassiveTarget.code(),
        max_targets,
        baud_rate as u8,
    ]
}
