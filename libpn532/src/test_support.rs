//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockLink setup so tests across the
//! crate and tests/ directory script the chip the same way.
#![allow(dead_code)]

use crate::Result;
use crate::device::{Device, DeviceBuilder, Initialized};
use crate::protocol::Frame;
use crate::transport::{FakeDelay, MockLink, SessionConfig};

/// Mock-backed device type used throughout the tests.
pub type MockDevice = Device<MockLink, FakeDelay, Initialized>;

/// Wire bytes of a chip -> host frame carrying `echo` then `data`.
#[doc(hidden)]
pub fn reply_frame(echo: u8, data: &[u8]) -> Result<Vec<u8>> {
    Ok(Frame::response(echo, data)?.encode())
}

/// The same frame as delivered by a chip that drops the first preamble
/// byte: everything shifted left by one.
#[doc(hidden)]
pub fn shifted_reply_frame(echo: u8, data: &[u8]) -> Result<Vec<u8>> {
    Ok(reply_frame(echo, data)?[1..].to_vec())
}

/// Queue an acknowledgement followed by a reply frame.
#[doc(hidden)]
pub fn push_reply(link: &MockLink, echo: u8, data: &[u8]) -> Result<()> {
    let frame = reply_frame(echo, data)?;
    link.push_ack();
    link.push_reply(frame);
    Ok(())
}

/// Create and initialize a Device backed by a fresh MockLink and
/// FakeDelay with the given config. The returned link shares state with
/// the one inside the device.
#[doc(hidden)]
pub fn initialized_mock_device_with(config: SessionConfig) -> Result<(MockLink, MockDevice)> {
    let link = MockLink::new();
    // begin() only waits for the ack of its sync command
    link.push_ack();
    let device = DeviceBuilder::new(link.clone(), FakeDelay::new())
        .config(config)
        .build()?;
    Ok((link, device))
}

/// [`initialized_mock_device_with`] using the default config.
#[doc(hidden)]
pub fn initialized_mock_device() -> Result<(MockLink, MockDevice)> {
    initialized_mock_device_with(SessionConfig::default())
}
