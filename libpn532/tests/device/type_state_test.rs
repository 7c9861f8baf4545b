use libpn532::device::{Device, DeviceBuilder, Initialized, Uninitialized};
use libpn532::transport::{FakeDelay, MockLink, Session, SessionConfig};

#[test]
fn type_state_transitions() {
    let link = MockLink::new();
    link.push_ack();
    let session = Session::new(link.clone(), FakeDelay::new(), SessionConfig::default());
    let dev: Device<MockLink, FakeDelay, Uninitialized> = Device::new(session);
    let _initialized: Device<MockLink, FakeDelay, Initialized> = dev.begin().unwrap();
    assert_eq!(link.written().len(), 1);
}

#[test]
fn begin_survives_unresponsive_chip() {
    let link = MockLink::new();
    link.set_idle_status(0x00);
    let delay = FakeDelay::new();
    let dev = DeviceBuilder::new(link.clone(), delay.clone())
        .config(SessionConfig::default().with_timeout_ms(20))
        .build();
    assert!(dev.is_ok());
    assert!(!link.is_selected());
}
