// libpn532/src/protocol/commands/mifare.rs
//
// MIFARE Classic commands, all carried by InDataExchange:
// 40 <target> <mifare cmd> <block> [cmd data]

use crate::constants::{MIFARE_READ, MIFARE_WRITE, Opcode};
use crate::types::{BlockData, KeyType, MifareKey, TargetId};

fn header(target: u8, mifare_cmd: u8, block: u8, extra: usize) -> Vec<u8> {
    let mut buf = Vec::with_capacity(4 + extra);
    buf.push(Opcode::InDataExchange.code());
    buf.push(target);
    buf.push(mifare_cmd);
    buf.push(block);
    buf
}

/// Encode a key A/B authentication: key(6) followed by the card ID (4, BE)
pub fn encode_authenticate(
    target: u8,
    key_type: KeyType,
    block: u8,
    key: &MifareKey,
    id: TargetId,
) -> Vec<u8> {
    let mut buf = header(target, key_type.auth_command(), block, 10);
    buf.extend_from_slice(key.as_bytes());
    buf.extend_from_slice(&id.to_be_bytes());
    buf
}

/// Encode a 16-byte block read
pub fn encode_read_block(target: u8, block: u8) -> Vec<u8> {
    header(target, MIFARE_READ, block, 0)
}

/// Encode a 16-byte block write
pub fn encode_write_block(target: u8, block: u8, data: &BlockData) -> Vec<u8> {
    let mut buf = header(target, MIFARE_WRITE, block, 16);
    buf.extend_from_slice(data.as_bytes());
    buf
}
