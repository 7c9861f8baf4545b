// libpn532/src/protocol/responses/target.rs

use crate::card::Target;
use crate::constants::Opcode;
use crate::protocol::parser;
use crate::types::{TargetId, Uid};
use crate::{Error, Result};

/// Decode an InListPassiveTarget reply for a single ISO14443A target.
/// Layout: echo(1) + NbTg(1) + Tg(1) + SENS_RES(2) + SEL_RES(1)
///         + NFCIDLength(1) + NFCID1(L)
pub fn decode_in_list_passive_target(data: &[u8]) -> Result<Target> {
    parser::expect_response_code(data, Opcode::InListPassiveTarget.response_code())?;

    let found = parser::byte_at(data, 1)?;
    if found != 1 {
        return Err(Error::NoTarget { found });
    }

    let target_number = parser::byte_at(data, 2)?;
    let sens_res = parser::be_u16_at(data, 3)?;
    let sel_res = parser::byte_at(data, 5)?;
    let id_len = parser::byte_at(data, 6)? as usize;
    let id = parser::slice_at(data, 7, id_len)?;

    Ok(Target::new(
        target_number,
        sens_res,
        sel_res,
        Uid::from_bytes(id.to_vec()),
        TargetId::from_id_bytes(id),
    ))
}
