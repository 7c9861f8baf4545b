#[path = "../common/mod.rs"]
mod common;

use libpn532::constants::{ACK_FRAME, SpiOp};
use libpn532::transport::{FakeDelay, Link, MockLink, Session, SessionConfig};

#[test]
fn mock_link_write_transaction_is_recorded() {
    let mut m = MockLink::new();
    m.select().unwrap();
    m.write_all(&[SpiOp::DataWrite as u8, 0xAA, 0xBB]).unwrap();
    m.deselect().unwrap();
    assert_eq!(m.written(), vec![vec![0xAA, 0xBB]]);
}

#[test]
fn session_write_uses_data_write_prefix() {
    let link = MockLink::new();
    let mut s = Session::new(link.clone(), FakeDelay::new(), SessionConfig::default());
    s.write_frame(&[0x00, 0x00, 0xFF]).unwrap();
    assert_eq!(link.written(), vec![vec![0x00, 0x00, 0xFF]]);
    assert!(!link.is_selected());
}

#[test]
fn fixed_length_read() {
    let link = MockLink::new();
    link.push_reply(ACK_FRAME.to_vec());
    let mut s = Session::new(link.clone(), FakeDelay::new(), SessionConfig::default());
    assert_eq!(s.read_data(6).unwrap(), ACK_FRAME.to_vec());
}

#[test]
fn variable_length_read_stops_at_frame_end() {
    let link = MockLink::new();
    let mut bytes = common::fixtures::reply(0x15, &[]);
    let frame_len = bytes.len();
    // trailing garbage the chip would keep clocking out
    bytes.extend_from_slice(&[0xEE; 8]);
    link.push_reply(bytes);

    let mut s = Session::new(link.clone(), FakeDelay::new(), SessionConfig::default());
    let raw = s.read_frame_bytes().unwrap();
    assert_eq!(raw.len(), frame_len);
}

#[test]
fn settle_delay_follows_each_select() {
    let link = MockLink::new();
    let delay = FakeDelay::new();
    let mut s = Session::new(
        link.clone(),
        delay.clone(),
        SessionConfig::default().with_select_settle_ms(5),
    );
    s.status().unwrap();
    s.status().unwrap();
    assert_eq!(link.select_count(), 2);
    assert_eq!(delay.elapsed_ms(), 10);
}
