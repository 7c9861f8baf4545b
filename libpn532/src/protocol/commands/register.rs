// libpn532/src/protocol/commands/register.rs

use crate::constants::Opcode;

/// Encode ReadRegister for a single 16-bit address (big-endian)
pub fn encode_read_register(address: u16) -> Vec<u8> {
    let mut buf = vec![Opcode::ReadRegister.code()];
    buf.extend_from_slice(&address.to_be_bytes());
    buf
}

/// Encode WriteRegister for a single address/value pair
pub fn encode_write_register(address: u16, value: u8) -> Vec<u8> {
    let mut buf = vec![Opcode::WriteRegister.code()];
    buf.extend_from_slice(&address.to_be_bytes());
    buf.push(value);
    buf
}
