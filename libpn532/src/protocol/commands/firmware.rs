// libpn532/src/protocol/commands/firmware.rs

use crate::constants::Opcode;

/// Encode GetFirmwareVersion (no parameters)
pub fn encode_get_firmware_version() -> Vec<u8> {
    vec![Opcode::GetFirmwareVersion.code()]
}
