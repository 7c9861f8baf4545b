#[path = "../common/mod.rs"]
mod common;

use libpn532::protocol::codec::encode_command_frame;
use libpn532::protocol::{Command, Frame};
use libpn532::types::{BaudRate, DepBaudRate, KeyType, MifareKey, SamMode, TargetConfig};

use common::fixtures::frame_from_hex;

#[test]
fn firmware_version_frame() {
    let wire = encode_command_frame(&Command::GetFirmwareVersion).unwrap();
    assert_eq!(wire, frame_from_hex("0000ff02fed4022a00"));
}

#[test]
fn list_passive_target_frame() {
    let cmd = Command::InListPassiveTarget {
        max_targets: 1,
        baud_rate: BaudRate::Iso14443a106,
    };
    let wire = encode_command_frame(&cmd).unwrap();
    assert_eq!(wire, frame_from_hex("0000ff04fcd44a0100e100"));
}

#[test]
fn sam_configuration_frame() {
    let cmd = Command::SamConfiguration {
        mode: SamMode::Normal,
        timeout: 0x14,
        use_irq: true,
    };
    let wire = encode_command_frame(&cmd).unwrap();
    assert_eq!(wire, frame_from_hex("0000ff05fbd4140114010200"));
}

#[test]
fn authenticate_frame_body() {
    let cmd = Command::MifareAuthenticate {
        target: 1,
        key_type: KeyType::A,
        block: 4,
        key: MifareKey::DEFAULT,
        id: common::fixtures::sample_target_id(),
    };
    let frame = Frame::decode(&encode_command_frame(&cmd).unwrap()).unwrap();
    assert_eq!(
        frame.body(),
        &[
            0x40, 0x01, 0x60, 0x04, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x04, 0x00, 0x01, 0x02
        ]
    );
}

#[test]
fn jump_for_dep_frame_body() {
    let cmd = Command::InJumpForDep {
        active: true,
        baud_rate: DepBaudRate::Kbps212,
    };
    let frame = cmd.to_frame().unwrap();
    assert_eq!(
        frame.body(),
        &[0x56, 0x01, 0x01, 0x01, 0x00, 0xFF, 0xFF, 0x00, 0x00]
    );
}

#[test]
fn target_template_frame_length() {
    let cmd = Command::TgInitAsTarget {
        config: TargetConfig::default(),
    };
    let wire = encode_command_frame(&cmd).unwrap();
    // 38-byte body plus TFI
    assert_eq!(wire[3], 39);
    assert_eq!(wire.len(), 38 + 8);
}

#[test]
fn register_frames_use_big_endian_address() {
    let read = Command::ReadRegister { address: 0x633D }.to_frame().unwrap();
    assert_eq!(read.body(), &[0x06, 0x63, 0x3D]);

    let write = Command::WriteRegister {
        address: 0x6305,
        value: 0x80,
    }
    .to_frame()
    .unwrap();
    assert_eq!(write.body(), &[0x08, 0x63, 0x05, 0x80]);
}
