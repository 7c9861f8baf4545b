// libpn532/src/protocol/responses/dep.rs

use crate::constants::Opcode;
use crate::protocol::parser;
use crate::{Error, Result};

/// TgInitAsTarget replies are accepted when byte 23 of the reply frame
/// (body offset 17) is zero.
pub const ACTIVATION_CHECK_OFFSET: usize = 17;

/// Decode InJumpForDEP: echo(1) + status(1) + Tg + NFCID3t + ...
pub fn decode_in_jump_for_dep(data: &[u8]) -> Result<()> {
    parser::expect_response_code(data, Opcode::InJumpForDep.response_code())?;
    parser::expect_status_ok(data, 1)
}

/// Decode InDataExchange carrying a 16-byte DEP packet.
pub fn decode_in_data_exchange(data: &[u8]) -> Result<[u8; 16]> {
    parser::expect_response_code(data, Opcode::InDataExchange.response_code())?;
    parser::expect_status_ok(data, 1)?;
    parser::block_at(data, 2)
}

/// Decode TgInitAsTarget: echo(1) + mode(1) + initiator command.
pub fn decode_tg_init_as_target(data: &[u8]) -> Result<()> {
    parser::expect_response_code(data, Opcode::TgInitAsTarget.response_code())?;
    let status = parser::byte_at(data, ACTIVATION_CHECK_OFFSET)?;
    if status != 0 {
        return Err(Error::OperationRejected { status });
    }
    Ok(())
}

/// Decode TgGetData: echo(1) + status(1) + 16 data bytes.
pub fn decode_tg_get_data(data: &[u8]) -> Result<[u8; 16]> {
    parser::expect_response_code(data, Opcode::TgGetData.response_code())?;
    parser::expect_status_ok(data, 1)?;
    parser::block_at(data, 2)
}

/// Decode TgSetData: echo(1) + status(1).
pub fn decode_tg_set_data(data: &[u8]) -> Result<()> {
    parser::expect_response_code(data, Opcode::TgSetData.response_code())?;
    parser::expect_status_ok(data, 1)
}
