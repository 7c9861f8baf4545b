// libpn532/src/protocol/responses/register.rs

use crate::Result;
use crate::constants::Opcode;
use crate::protocol::parser;

/// Decode ReadRegister: echo(1) + value(1)
pub fn decode_read_register(data: &[u8]) -> Result<u8> {
    parser::expect_response_code(data, Opcode::ReadRegister.response_code())?;
    parser::byte_at(data, 1)
}

/// WriteRegister replies carry nothing beyond the echo.
pub fn decode_write_register(data: &[u8]) -> Result<()> {
    parser::expect_response_code(data, Opcode::WriteRegister.response_code())
}
