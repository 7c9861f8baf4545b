// libpn532/src/protocol/responses/sam.rs

use crate::Result;
use crate::constants::Opcode;
use crate::protocol::parser;

/// Decode a SAMConfiguration reply: the body is just the echo (0x15).
pub fn decode_sam_configuration(data: &[u8]) -> Result<()> {
    parser::expect_response_code(data, Opcode::SamConfiguration.response_code())
}
