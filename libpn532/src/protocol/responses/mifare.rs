// libpn532/src/protocol/responses/mifare.rs
//
// InDataExchange replies for MIFARE commands.
// Layout: echo(1) + status(1) + [data]

use crate::constants::Opcode;
use crate::protocol::parser;
use crate::types::BlockData;
use crate::Result;

/// Decode the reply to an authentication or block write: only the status
/// carries information.
pub fn decode_mifare_status(data: &[u8]) -> Result<()> {
    parser::expect_response_code(data, Opcode::InDataExchange.response_code())?;
    parser::expect_status_ok(data, 1)
}

/// Decode the reply to a block read: status followed by 16 data bytes.
pub fn decode_read_block(data: &[u8]) -> Result<BlockData> {
    decode_mifare_status(data)?;
    Ok(BlockData::from_bytes(parser::block_at(data, 2)?))
}
