#[path = "../common/mod.rs"]
mod common;

use libpn532::protocol::Frame;
use libpn532::test_support::initialized_mock_device;
use libpn532::types::DepBaudRate;
use libpn532::Error;

use common::fixtures::{reply, script};

fn packet(fill: u8) -> [u8; 16] {
    [fill; 16]
}

#[test]
fn initiator_link_and_exchange() {
    let (link, mut dev) = initialized_mock_device().unwrap();
    script(&link, reply(0x57, &[0x00, 0x01]));
    let mut answer = vec![0x00];
    answer.extend_from_slice(&packet(0x42));
    script(&link, reply(0x41, &answer));

    dev.configure_peer_as_initiator(DepBaudRate::Kbps212).unwrap();
    let incoming = dev.initiator_exchange(&packet(0x24)).unwrap();
    assert_eq!(incoming, packet(0x42));

    let sent = Frame::decode(link.written().last().unwrap()).unwrap();
    assert_eq!(sent.code(), 0x40);
    assert_eq!(sent.params()[0], 0x01);
    assert_eq!(&sent.params()[1..], &packet(0x24));
}

#[test]
fn initiator_exchange_failure() {
    let (link, mut dev) = initialized_mock_device().unwrap();
    script(&link, reply(0x41, &[0x01]));
    assert!(matches!(
        dev.initiator_exchange(&packet(0)),
        Err(Error::OperationRejected { status: 0x01 })
    ));
}

#[test]
fn target_activation_then_exchange() {
    let (link, mut dev) = initialized_mock_device().unwrap();
    let mut activated = vec![0x04];
    activated.resize(16, 0x11);
    activated.push(0x00);
    script(&link, reply(0x8D, &activated));

    let mut received = vec![0x00];
    received.extend_from_slice(&packet(0x77));
    script(&link, reply(0x87, &received));
    script(&link, reply(0x8F, &[0x00]));

    dev.configure_peer_as_target().unwrap();
    assert_eq!(dev.target_exchange(&packet(0x88)).unwrap(), packet(0x77));
    assert_eq!(link.pending_replies(), 0);
}

#[test]
fn target_exchange_send_leg_failure() {
    let (link, mut dev) = initialized_mock_device().unwrap();
    let mut received = vec![0x00];
    received.extend_from_slice(&packet(0x77));
    script(&link, reply(0x87, &received));
    script(&link, reply(0x8F, &[0x29]));

    assert!(matches!(
        dev.target_exchange(&packet(0x88)),
        Err(Error::OperationRejected { status: 0x29 })
    ));
}
