#[path = "../common/mod.rs"]
mod common;

use libpn532::Error;
use libpn532::protocol::codec::decode_response_frame;
use libpn532::protocol::{Command, Response};
use libpn532::types::{BaudRate, BlockData, KeyType, MifareKey, TargetConfig};

use common::fixtures::{PASSIVE_TARGET_REPLY, frame_from_hex, reply, sample_target_id};

fn auth() -> Command {
    Command::MifareAuthenticate {
        target: 1,
        key_type: KeyType::A,
        block: 4,
        key: MifareKey::DEFAULT,
        id: sample_target_id(),
    }
}

#[test]
fn passive_target_id_accumulates() {
    let cmd = Command::InListPassiveTarget {
        max_targets: 1,
        baud_rate: BaudRate::Iso14443a106,
    };
    match decode_response_frame(&cmd, &frame_from_hex(PASSIVE_TARGET_REPLY)).unwrap() {
        Response::PassiveTarget(t) => {
            assert_eq!(t.id().as_u32(), 0x0400_0102);
            assert_eq!(t.uid().to_hex(), "04000102");
            assert_eq!(t.sens_res(), 0x0004);
            assert_eq!(t.sel_res(), 0x08);
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn two_targets_is_no_target() {
    let cmd = Command::InListPassiveTarget {
        max_targets: 1,
        baud_rate: BaudRate::Iso14443a106,
    };
    let frame = reply(0x4B, &[0x02, 0x01, 0x00, 0x04, 0x08, 0x04, 1, 2, 3, 4]);
    assert!(matches!(
        decode_response_frame(&cmd, &frame),
        Err(Error::NoTarget { found: 2 })
    ));
}

#[test]
fn authenticate_status_zero_is_success() {
    let ok = decode_response_frame(&auth(), &reply(0x41, &[0x00])).unwrap();
    assert_eq!(ok, Response::Authenticated);
}

#[test]
fn authenticate_status_nonzero_is_failure() {
    assert!(matches!(
        decode_response_frame(&auth(), &reply(0x41, &[0x01])),
        Err(Error::OperationRejected { status: 0x01 })
    ));
}

#[test]
fn read_block_returns_sixteen_bytes() {
    let mut data = vec![0x00];
    data.extend(0u8..16);
    let cmd = Command::MifareRead {
        target: 1,
        block: 4,
    };
    let expected: [u8; 16] = core::array::from_fn(|i| i as u8);
    assert_eq!(
        decode_response_frame(&cmd, &reply(0x41, &data)).unwrap(),
        Response::BlockRead(BlockData::from_bytes(expected))
    );
}

#[test]
fn short_block_read_is_invalid_length() {
    let cmd = Command::MifareRead {
        target: 1,
        block: 4,
    };
    assert!(matches!(
        decode_response_frame(&cmd, &reply(0x41, &[0x00, 0x01, 0x02])),
        Err(Error::InvalidLength { .. })
    ));
}

#[test]
fn firmware_signature_mismatch_reports_offset() {
    // LEN 7 instead of 6: one byte too many
    let frame = reply(0x03, &[0x32, 0x01, 0x06, 0x07, 0x00]);
    match decode_response_frame(&Command::GetFirmwareVersion, &frame) {
        Err(Error::ResponseMismatch {
            offset: 2,
            expected: 0x06,
            actual: 0x07,
        }) => {}
        other => panic!("expected ResponseMismatch, got {:?}", other),
    }
}

#[test]
fn target_activation_checks_byte_twenty_three() {
    let cmd = Command::TgInitAsTarget {
        config: TargetConfig::default(),
    };
    let mut data = vec![0x04];
    data.extend_from_slice(&[0x11; 15]);
    data.push(0x00);
    assert_eq!(
        decode_response_frame(&cmd, &reply(0x8D, &data)).unwrap(),
        Response::TargetActivated
    );

    *data.last_mut().unwrap() = 0x25;
    assert!(matches!(
        decode_response_frame(&cmd, &reply(0x8D, &data)),
        Err(Error::OperationRejected { status: 0x25 })
    ));
}
