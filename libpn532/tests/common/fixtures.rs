// Shared reply frames and payloads for the integration tests

use libpn532::protocol::Frame;
use libpn532::transport::MockLink;
use libpn532::types::{BlockData, TargetId, Uid};

/// Firmware reply as the chip actually sends it on boards that drop the
/// leading preamble byte: IC 0x01, Ver 0x06, Rev 0x07, Support 0x3C.
pub const SHIFTED_FIRMWARE_REPLY: &str = "00ff06fad5030106073cde00";

/// InListPassiveTarget reply for one MIFARE Classic 1K card, ID 04 00 01 02
pub const PASSIVE_TARGET_REPLY: &str = "0000ff0cf4d54b01010004080404000102c700";

pub fn frame_from_hex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

pub fn sample_uid_bytes() -> [u8; 4] {
    [0x04, 0x00, 0x01, 0x02]
}

pub fn sample_uid() -> Uid {
    Uid::from_bytes(sample_uid_bytes().to_vec())
}

pub fn sample_target_id() -> TargetId {
    TargetId::new(0x0400_0102)
}

pub fn sample_blockdata(fill: u8) -> BlockData {
    BlockData::from_bytes([fill; 16])
}

pub fn reply(echo: u8, data: &[u8]) -> Vec<u8> {
    Frame::response(echo, data).unwrap().encode()
}

pub fn read_block_reply(block: &[u8; 16]) -> Vec<u8> {
    let mut data = vec![0x00];
    data.extend_from_slice(block);
    reply(0x41, &data)
}

/// Queue ack + reply for one command.
pub fn script(link: &MockLink, frame: Vec<u8>) {
    link.push_ack();
    link.push_reply(frame);
}
