#[path = "../common/mod.rs"]
mod common;

use libpn532::constants::ACK_FRAME;
use libpn532::diagnostics::{Event, RecordingSink};
use libpn532::transport::{FakeDelay, MockLink, ReadyStage, Session, SessionConfig};
use libpn532::{Error, ErrorKind};

#[test]
fn never_ready_times_out_and_releases_select() {
    let link = MockLink::new();
    link.set_idle_status(0x00);
    let delay = FakeDelay::new();
    let sink = RecordingSink::new();
    let mut s = Session::new(link.clone(), delay.clone(), SessionConfig::default())
        .with_sink(Box::new(sink.clone()));

    let err = s.send_command(&[0x00, 0x00, 0xFF, 0x02, 0xFE, 0xD4, 0x02, 0x2A, 0x00]);
    match err {
        Err(Error::Timeout {
            stage: ReadyStage::Ack,
            budget_ms: 1000,
        }) => {}
        other => panic!("expected Timeout, got {:?}", other),
    }
    assert!(!link.is_selected());
    // the write window's settle plus the whole ack-stage poll
    assert!(delay.elapsed_ms() <= 2 + 1000);
    assert_eq!(link.status_reads(), 84);
    assert!(sink.events().contains(&Event::TimedOut {
        stage: ReadyStage::Ack,
        budget_ms: 1000
    }));
}

#[test]
fn ready_poll_with_default_settle_stays_within_budget() {
    let link = MockLink::new();
    link.set_idle_status(0x00);
    let delay = FakeDelay::new();
    let mut s = Session::new(link.clone(), delay.clone(), SessionConfig::default());

    let err = s.wait_ready(ReadyStage::Ack).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert!(delay.elapsed_ms() <= 1000);
    assert!(!link.is_selected());
}

#[test]
fn response_stage_has_its_own_budget() {
    let link = MockLink::new();
    // ready for the ack, then never again
    link.push_status(0x01);
    link.set_idle_status(0x00);
    link.push_reply(ACK_FRAME.to_vec());

    let mut s = Session::new(
        link.clone(),
        FakeDelay::new(),
        SessionConfig::default().with_timeout_ms(50),
    );
    match s.send_command(&[0x00]) {
        Err(Error::Timeout {
            stage: ReadyStage::Response,
            budget_ms: 50,
        }) => {}
        other => panic!("expected response Timeout, got {:?}", other),
    }
}

#[test]
fn ack_single_byte_difference_is_mismatch() {
    for idx in 0..ACK_FRAME.len() {
        let link = MockLink::new();
        let mut bad = ACK_FRAME;
        bad[idx] = bad[idx].wrapping_add(1);
        link.push_reply(bad.to_vec());

        let mut s = Session::new(link.clone(), FakeDelay::new(), SessionConfig::default());
        let err = s.send_command(&[0x00]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AckMismatch);
        assert!(!link.is_selected());
    }
}

#[test]
fn pin_failure_mid_frame_is_link_error() {
    let link = MockLink::new();
    link.push_reply(common::fixtures::reply(0x15, &[]));
    link.fail_reads_after(4);
    let mut s = Session::new(link.clone(), FakeDelay::new(), SessionConfig::default());
    let err = s.read_frame().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Link);
    assert!(!link.is_selected());
}
