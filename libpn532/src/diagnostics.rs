// libpn532/src/diagnostics.rs

//! Observation hooks for the transport session.
//!
//! The session reports every step of an exchange as an [`Event`] to a
//! [`DiagnosticSink`]. The default [`LogSink`] forwards them to the `log`
//! facade; tests use [`RecordingSink`] to assert on the sequence.

use std::cell::RefCell;
use std::rc::Rc;

use crate::ErrorKind;
use crate::transport::ReadyStage;
use crate::utils::Hex;

/// One step of a session exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A frame went out, data-write prefix excluded
    FrameWritten(Vec<u8>),
    /// The chip reported ready after `elapsed_ms` of polling
    Ready { stage: ReadyStage, elapsed_ms: u64 },
    /// The ready budget ran out
    TimedOut { stage: ReadyStage, budget_ms: u32 },
    /// A valid acknowledgement arrived
    Ack,
    /// Six ack bytes that did not match the ack frame
    AckMismatch([u8; 6]),
    /// A reply frame after normalization
    FrameRead(Vec<u8>),
    /// The reply lost its leading preamble byte and was repaired
    PreambleRestored,
    /// Releasing chip select failed while another error was being returned
    DeselectFailed(ErrorKind),
}

/// Receives session events.
pub trait DiagnosticSink {
    /// Handle one event.
    fn record(&mut self, event: &Event);
}

/// Forwards events to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&mut self, event: &Event) {
        match event {
            Event::FrameWritten(bytes) => log::trace!("-> {}", Hex(bytes)),
            Event::Ready { stage, elapsed_ms } => {
                log::trace!("ready ({}) after {} ms", stage, elapsed_ms)
            }
            Event::TimedOut { stage, budget_ms } => {
                log::warn!("chip not ready ({}) within {} ms", stage, budget_ms)
            }
            Event::Ack => log::trace!("ack"),
            Event::AckMismatch(bytes) => log::warn!("bad ack: {}", Hex(bytes)),
            Event::FrameRead(bytes) => log::trace!("<- {}", Hex(bytes)),
            Event::PreambleRestored => log::debug!("reply missing leading preamble byte"),
            Event::DeselectFailed(kind) => log::warn!("chip select not released: {:?}", kind),
        }
    }
}

/// Drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&mut self, _event: &Event) {}
}

/// Keeps every event in a shared buffer. Clones share the buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<Event>>>,
}

impl RecordingSink {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Forget recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&mut self, event: &Event) {
        self.events.borrow_mut().push(event.clone());
    }
}
