#[path = "../common/mod.rs"]
mod common;

use libpn532::test_support::{initialized_mock_device, initialized_mock_device_with};
use libpn532::transport::SessionConfig;
use libpn532::types::{BaudRate, KeyType, MifareKey};
use libpn532::Error;

use common::fixtures::{
    PASSIVE_TARGET_REPLY, SHIFTED_FIRMWARE_REPLY, frame_from_hex, read_block_reply, reply,
    sample_blockdata, script,
};

#[test]
fn firmware_version_via_missing_preamble_path() -> anyhow::Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let (link, mut dev) =
        initialized_mock_device_with(SessionConfig::default().tolerate_missing_preamble(true))?;
    script(&link, frame_from_hex(SHIFTED_FIRMWARE_REPLY));

    let version = dev.firmware_version()?;
    assert_eq!(version.as_u32(), 0x0106_073C);
    assert_eq!(version.ic(), 0x01);
    Ok(())
}

#[test]
fn firmware_version_shifted_reply_rejected_by_default() {
    let (link, mut dev) = initialized_mock_device().unwrap();
    script(&link, frame_from_hex(SHIFTED_FIRMWARE_REPLY));
    assert!(matches!(dev.firmware_version(), Err(Error::FrameFormat(_))));
}

#[test]
fn poll_authenticate_read_write() -> anyhow::Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let (link, mut dev) = initialized_mock_device()?;

    script(&link, reply(0x15, &[]));
    script(&link, frame_from_hex(PASSIVE_TARGET_REPLY));
    script(&link, reply(0x41, &[0x00]));
    script(&link, read_block_reply(&[0x5A; 16]));
    script(&link, reply(0x41, &[0x00]));

    dev.sam_config()?;
    let target = dev.read_passive_target(BaudRate::Iso14443a106)?;
    assert_eq!(target.id().as_u32(), 0x0400_0102);

    target.authenticate(&mut dev, 4, KeyType::A, &MifareKey::DEFAULT)?;
    let block = target.read_block(&mut dev, 4)?;
    assert_eq!(block, sample_blockdata(0x5A));
    target.write_block(&mut dev, 4, &sample_blockdata(0xA5))?;

    // begin() + five commands
    assert_eq!(link.written().len(), 6);
    assert!(!link.is_selected());
    Ok(())
}

#[test]
fn authentication_failure_short_circuits() {
    let (link, mut dev) = initialized_mock_device().unwrap();
    script(&link, reply(0x41, &[0x01]));

    let err = dev
        .authenticate_block(1, KeyType::B, 4, &MifareKey::DEFAULT, common::fixtures::sample_target_id())
        .unwrap_err();
    assert!(matches!(err, Error::OperationRejected { status: 0x01 }));
}

#[test]
fn empty_field_is_no_target() {
    let (link, mut dev) = initialized_mock_device().unwrap();
    script(&link, reply(0x4B, &[0x00]));
    assert!(matches!(
        dev.read_passive_target(BaudRate::Iso14443a106),
        Err(Error::NoTarget { found: 0 })
    ));
}

#[test]
fn raw_exchange_passthrough() {
    let (link, mut dev) = initialized_mock_device().unwrap();
    script(&link, reply(0x03, &[0x32, 0x01, 0x06, 0x07]));

    let request = frame_from_hex("0000ff02fed4022a00");
    let raw = dev.raw_exchange(&request).unwrap();
    assert_eq!(raw.ack, libpn532::constants::ACK_FRAME);
    assert_eq!(raw.frame, reply(0x03, &[0x32, 0x01, 0x06, 0x07]));
    assert_eq!(link.written().last().unwrap(), &request);
}
