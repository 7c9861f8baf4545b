// libpn532/src/protocol/commands/dep.rs

use crate::constants::Opcode;
use crate::types::{DepBaudRate, TargetConfig};

/// "PassiveInitiatorData present" flag for InJumpForDEP
const NEXT_PASSIVE_INITIATOR_DATA: u8 = 0x01;

/// Polling request sent while looking for a 212/424 kbps target
const POLLING_PAYLOAD: [u8; 5] = [0x00, 0xFF, 0xFF, 0x00, 0x00];

/// Encode InJumpForDEP: become a DEP initiator.
pub fn encode_in_jump_for_dep(active: bool, baud_rate: DepBaudRate) -> Vec<u8> {
    let mut buf = Vec::with_capacity(4 + POLLING_PAYLOAD.len());
    buf.push(Opcode::InJumpForDep.code());
    buf.push(active as u8);
    buf.push(baud_rate as u8);
    buf.push(NEXT_PASSIVE_INITIATOR_DATA);
    buf.extend_from_slice(&POLLING_PAYLOAD);
    buf
}

/// Encode InDataExchange carrying a 16-byte DEP packet
pub fn encode_in_data_exchange(target: u8, data: &[u8; 16]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(2 + data.len());
    buf.push(Opcode::InDataExchange.code());
    buf.push(target);
    buf.extend_from_slice(data);
    buf
}

/// Encode TgInitAsTarget from the advertised target parameters.
pub fn encode_tg_init_as_target(config: &TargetConfig) -> Vec<u8> {
    let mut buf = Vec::with_capacity(38 + config.general_bytes.len() + config.historical_bytes.len());
    buf.push(Opcode::TgInitAsTarget.code());
    buf.push(config.mode);
    buf.extend_from_slice(&config.sens_res);
    buf.extend_from_slice(&config.nfcid1);
    buf.push(config.sel_res);
    buf.extend_from_slice(&config.felica_params);
    buf.extend_from_slice(&config.nfcid3);
    buf.push(config.general_bytes.len() as u8);
    buf.extend_from_slice(&config.general_bytes);
    buf.push(config.historical_bytes.len() as u8);
    buf.extend_from_slice(&config.historical_bytes);
    buf
}

/// Encode TgGetData (no parameters)
pub fn encode_tg_get_data() -> Vec<u8> {
    vec![Opcode::TgGetData.code()]
}

/// Encode TgSetData carrying a 16-byte DEP packet
pub fn encode_tg_set_data(data: &[u8; 16]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + data.len());
    buf.push(Opcode::TgSetData.code());
    buf.extend_from_slice(data);
    buf
}
