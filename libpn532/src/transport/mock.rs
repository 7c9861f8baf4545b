// libpn532/src/transport/mock.rs

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;

use crate::constants::{ACK_FRAME, SPI_READY, SpiOp};
use crate::transport::traits::Link;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Write,
    Status,
    Data,
}

#[derive(Debug, Default)]
struct State {
    selected: bool,
    selects: usize,
    mode: Option<Mode>,
    window: Vec<u8>,
    written: Vec<Vec<u8>>,
    statuses: VecDeque<u8>,
    idle_status: u8,
    replies: VecDeque<Vec<u8>>,
    pending: VecDeque<u8>,
    status_reads: usize,
    fail_reads_after: Option<usize>,
    fail_select: bool,
    fail_deselect: bool,
}

/// Scripted chip for unit tests.
///
/// Each select window is one SPI transaction. Data-write payloads are
/// recorded, status reads pop the next scripted status (falling back to
/// the idle status, ready by default), and each data read consumes the next
/// queued reply. Bytes past the end of a reply read as zero; leftovers are
/// dropped on deselect.
///
/// Clones share state, so a test can keep a handle while a session owns
/// the link.
#[derive(Debug, Clone)]
pub struct MockLink {
    state: Rc<RefCell<State>>,
}

impl Default for MockLink {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLink {
    /// Idle, ready chip with nothing scripted.
    pub fn new() -> Self {
        let state = State {
            idle_status: SPI_READY,
            ..State::default()
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Queue the bytes returned by the next data-read transaction.
    pub fn push_reply(&self, bytes: Vec<u8>) {
        self.state.borrow_mut().replies.push_back(bytes);
    }

    /// Queue a well-formed acknowledgement.
    pub fn push_ack(&self) {
        self.push_reply(ACK_FRAME.to_vec());
    }

    /// Queue the status byte returned by the next status read.
    pub fn push_status(&self, status: u8) {
        self.state.borrow_mut().statuses.push_back(status);
    }

    /// Status reported once the scripted statuses run out.
    pub fn set_idle_status(&self, status: u8) {
        self.state.borrow_mut().idle_status = status;
    }

    /// Make every `read_byte` after the next `n` fail with a pin error.
    pub fn fail_reads_after(&self, n: usize) {
        self.state.borrow_mut().fail_reads_after = Some(n);
    }

    /// Make `select` fail with a pin error while `fail` is set.
    pub fn fail_select(&self, fail: bool) {
        self.state.borrow_mut().fail_select = fail;
    }

    /// Make `deselect` fail with a pin error while `fail` is set. The line
    /// stays asserted.
    pub fn fail_deselect(&self, fail: bool) {
        self.state.borrow_mut().fail_deselect = fail;
    }

    /// Payloads of every completed data-write transaction, without the
    /// leading SPI op byte.
    pub fn written(&self) -> Vec<Vec<u8>> {
        self.state.borrow().written.clone()
    }

    /// Whether chip select is currently asserted.
    pub fn is_selected(&self) -> bool {
        self.state.borrow().selected
    }

    /// Number of transactions started.
    pub fn select_count(&self) -> usize {
        self.state.borrow().selects
    }

    /// Number of status bytes read.
    pub fn status_reads(&self) -> usize {
        self.state.borrow().status_reads
    }

    /// Replies still queued
    pub fn pending_replies(&self) -> usize {
        self.state.borrow().replies.len()
    }
}

impl Link for MockLink {
    fn select(&mut self) -> Result<()> {
        let mut s = self.state.borrow_mut();
        if s.fail_select {
            return Err(Error::Pin(embedded_hal::digital::ErrorKind::Other));
        }
        s.selected = true;
        s.selects += 1;
        s.mode = None;
        s.window.clear();
        Ok(())
    }

    fn deselect(&mut self) -> Result<()> {
        let mut s = self.state.borrow_mut();
        if s.fail_deselect {
            return Err(Error::Pin(embedded_hal::digital::ErrorKind::Other));
        }
        if s.mode == Some(Mode::Write) {
            let payload = s.window[1..].to_vec();
            s.written.push(payload);
        }
        s.selected = false;
        s.mode = None;
        s.window.clear();
        s.pending.clear();
        Ok(())
    }

    fn write_byte(&mut self, value: u8) -> Result<()> {
        let mut s = self.state.borrow_mut();
        if s.mode.is_none() {
            let mode = match value {
                v if v == SpiOp::DataWrite as u8 => Mode::Write,
                v if v == SpiOp::StatusRead as u8 => Mode::Status,
                v if v == SpiOp::DataRead as u8 => {
                    let reply = s.replies.pop_front().unwrap_or_default();
                    s.pending = reply.into();
                    Mode::Data
                }
                other => {
                    return Err(Error::FrameFormat(format!(
                        "unknown SPI operation {:#04x}",
                        other
                    )));
                }
            };
            s.mode = Some(mode);
        }
        s.window.push(value);
        Ok(())
    }

    fn read_byte(&mut self) -> Result<u8> {
        let mut s = self.state.borrow_mut();
        if let Some(n) = s.fail_reads_after {
            if n == 0 {
                return Err(Error::Pin(embedded_hal::digital::ErrorKind::Other));
            }
            s.fail_reads_after = Some(n - 1);
        }
        let value = match s.mode {
            Some(Mode::Status) => {
                s.status_reads += 1;
                let idle = s.idle_status;
                s.statuses.pop_front().unwrap_or(idle)
            }
            Some(Mode::Data) => s.pending.pop_front().unwrap_or(0x00),
            _ => 0x00,
        };
        Ok(value)
    }
}

/// [`DelayNs`] that only counts. Clones share the counter.
#[derive(Debug, Clone, Default)]
pub struct FakeDelay {
    elapsed_ns: Rc<Cell<u64>>,
}

impl FakeDelay {
    /// Counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total delay requested, in nanoseconds.
    pub fn elapsed_ns(&self) -> u64 {
        self.elapsed_ns.get()
    }

    /// Total delay requested, in whole milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns.get() / 1_000_000
    }
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns.set(self.elapsed_ns.get() + u64::from(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ns
            .set(self.elapsed_ns.get() + u64::from(ms) * 1_000_000);
    }
}
