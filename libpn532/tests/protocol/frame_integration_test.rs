#[path = "../common/mod.rs"]
mod common;

use libpn532::Error;
use libpn532::constants::FRAME_HEADER_LEN;
use libpn532::protocol::frame::{normalize, response_length};
use libpn532::protocol::{Direction, Frame};

use common::fixtures::{PASSIVE_TARGET_REPLY, SHIFTED_FIRMWARE_REPLY, frame_from_hex};

#[test]
fn passive_target_fixture_decodes() {
    let frame = Frame::decode(&frame_from_hex(PASSIVE_TARGET_REPLY)).expect("frame decode");
    assert_eq!(frame.direction(), Direction::ChipToHost);
    assert_eq!(frame.code(), 0x4B);
    assert_eq!(frame.params()[0], 0x01);
}

#[test]
fn shifted_firmware_fixture_normalizes() {
    let shifted = frame_from_hex(SHIFTED_FIRMWARE_REPLY);
    let mut header = [0u8; FRAME_HEADER_LEN];
    header.copy_from_slice(&shifted[..FRAME_HEADER_LEN]);

    let layout = response_length(&header, true).unwrap();
    assert!(layout.leading_null_missing);

    // The chip clocks one byte past the frame; it reads as zero.
    let mut raw = shifted.clone();
    raw.resize(layout.total_len, 0x00);
    let frame = Frame::decode(&normalize(raw, &layout)).unwrap();
    assert_eq!(frame.body(), &[0x03, 0x01, 0x06, 0x07, 0x3C]);
}

#[test]
fn corrupted_fixture_is_rejected() {
    let mut bytes = frame_from_hex(PASSIVE_TARGET_REPLY);
    let last_data = bytes.len() - 3;
    bytes[last_data] ^= 0x10;
    assert!(matches!(
        Frame::decode(&bytes),
        Err(Error::ChecksumMismatch { .. })
    ));
}

#[test]
fn truncated_frame_is_rejected() {
    let bytes = frame_from_hex(PASSIVE_TARGET_REPLY);
    assert!(matches!(
        Frame::decode(&bytes[..bytes.len() - 1]),
        Err(Error::InvalidLength { .. })
    ));
}

#[test]
fn application_error_frame() {
    assert!(matches!(
        Frame::decode(&frame_from_hex("0000ff01ff7f8100")),
        Err(Error::ApplicationError)
    ));
}
