// libpn532/src/transport/session.rs

use derive_more::Display;
use embedded_hal::delay::DelayNs;

use crate::constants::{ACK_FRAME, FRAME_HEADER_LEN, MAX_FRAME_LEN, SPI_READY, SpiOp};
use crate::diagnostics::{DiagnosticSink, Event, LogSink};
use crate::protocol::Frame;
use crate::protocol::frame::{normalize, response_length};
use crate::transport::config::SessionConfig;
use crate::transport::traits::Link;
use crate::utils::ReadyBudget;
use crate::{Error, Result};

/// Which wait-for-ready of an exchange is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ReadyStage {
    /// Between sending a command and reading its acknowledgement
    #[display(fmt = "ack")]
    Ack,
    /// Between the acknowledgement and the reply frame
    #[display(fmt = "response")]
    Response,
}

/// Bytes captured by [`Session::raw_exchange`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReply {
    /// The six bytes read where the acknowledgement should be, unchecked
    pub ack: [u8; 6],
    /// The reply frame, normalized but not validated
    pub frame: Vec<u8>,
}

/// Drives the PN532 SPI handshake over a [`Link`]:
/// write command -> wait ready -> read ack -> wait ready -> read reply.
///
/// Every transaction runs inside its own chip-select window, which is
/// released on every exit path.
pub struct Session<L, D> {
    link: L,
    delay: D,
    config: SessionConfig,
    sink: Box<dyn DiagnosticSink>,
}

impl<L: Link, D: DelayNs> Session<L, D> {
    /// Session logging to [`LogSink`].
    pub fn new(link: L, delay: D, config: SessionConfig) -> Self {
        Self {
            link,
            delay,
            config,
            sink: Box::new(LogSink),
        }
    }

    /// Replace the diagnostic sink (defaults to [`LogSink`]).
    pub fn with_sink(mut self, sink: Box<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Underlying link.
    pub fn link(&self) -> &L {
        &self.link
    }

    /// Underlying link, mutably.
    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    /// Tear the session down and give back the link and delay source.
    pub fn into_parts(self) -> (L, D) {
        (self.link, self.delay)
    }

    fn with_selected<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if let Err(e) = self.link.select() {
            self.release_after_error();
            return Err(e);
        }
        self.delay.delay_ms(self.config.select_settle_ms);

        match f(self) {
            Ok(v) => {
                self.link.deselect()?;
                Ok(v)
            }
            Err(e) => {
                self.release_after_error();
                Err(e)
            }
        }
    }

    // The first error wins; a failing deselect on that path is only recorded.
    fn release_after_error(&mut self) {
        if let Err(e) = self.link.deselect() {
            self.sink.record(&Event::DeselectFailed(e.kind()));
        }
    }

    /// Read the chip's status byte (`0x01` when a frame is waiting).
    pub fn status(&mut self) -> Result<u8> {
        self.with_selected(|s| {
            s.link.write_byte(SpiOp::StatusRead as u8)?;
            s.link.read_byte()
        })
    }

    /// Poll the status byte until the chip is ready or the budget runs out.
    /// Settle delays count against the budget along with the poll interval.
    /// The status is always read at least once, so a zero budget polls once
    /// and fails.
    pub fn wait_ready(&mut self, stage: ReadyStage) -> Result<()> {
        let mut budget = ReadyBudget::new(self.config.timeout_ms, self.config.poll_interval_ms)
            .with_poll_cost(self.config.select_settle_ms);
        loop {
            budget.poll();
            if self.status()? == SPI_READY {
                self.sink.record(&Event::Ready {
                    stage,
                    elapsed_ms: budget.elapsed_ms(),
                });
                return Ok(());
            }
            if !budget.tick() {
                self.sink.record(&Event::TimedOut {
                    stage,
                    budget_ms: budget.budget_ms(),
                });
                return Err(Error::Timeout {
                    stage,
                    budget_ms: budget.budget_ms(),
                });
            }
            self.delay.delay_ms(budget.interval_ms());
        }
    }

    /// Send already framed bytes in one data-write transaction.
    pub fn write_frame(&mut self, frame: &[u8]) -> Result<()> {
        self.with_selected(|s| {
            s.link.write_byte(SpiOp::DataWrite as u8)?;
            s.link.write_all(frame)
        })?;
        self.sink.record(&Event::FrameWritten(frame.to_vec()));
        Ok(())
    }

    /// Fixed-length data read of `n` bytes.
    pub fn read_data(&mut self, n: usize) -> Result<Vec<u8>> {
        self.with_selected(|s| {
            s.link.write_byte(SpiOp::DataRead as u8)?;
            let mut buf = vec![0u8; n];
            s.link.read_into(&mut buf)?;
            Ok(buf)
        })
    }

    /// Read six bytes and require them to be the acknowledgement frame.
    pub fn read_ack(&mut self) -> Result<()> {
        let received = self.read_six()?;
        if received != ACK_FRAME {
            self.sink.record(&Event::AckMismatch(received));
            return Err(Error::AckMismatch { received });
        }
        self.sink.record(&Event::Ack);
        Ok(())
    }

    fn read_six(&mut self) -> Result<[u8; 6]> {
        let bytes = self.read_data(ACK_FRAME.len())?;
        let mut out = [0u8; 6];
        out.copy_from_slice(&bytes);
        Ok(out)
    }

    /// Write a command frame and wait until its reply is ready to be read.
    pub fn send_command(&mut self, frame: &[u8]) -> Result<()> {
        self.write_frame(frame)?;
        self.wait_ready(ReadyStage::Ack)?;
        self.read_ack()?;
        self.wait_ready(ReadyStage::Response)
    }

    /// Variable-length read: the header gives the frame's length, the rest
    /// is read in the same transaction. Returns the normalized wire bytes.
    pub fn read_frame_bytes(&mut self) -> Result<Vec<u8>> {
        let tolerate = self.config.tolerate_missing_preamble;
        let (raw, restored) = self.with_selected(|s| {
            s.link.write_byte(SpiOp::DataRead as u8)?;

            let mut header = [0u8; FRAME_HEADER_LEN];
            s.link.read_into(&mut header)?;
            let layout = response_length(&header, tolerate)?;

            let mut raw = Vec::with_capacity(layout.total_len.max(MAX_FRAME_LEN));
            raw.extend_from_slice(&header);
            raw.resize(layout.total_len, 0);
            s.link.read_into(&mut raw[FRAME_HEADER_LEN..])?;

            Ok((normalize(raw, &layout), layout.leading_null_missing))
        })?;

        if restored {
            self.sink.record(&Event::PreambleRestored);
        }
        self.sink.record(&Event::FrameRead(raw.clone()));
        Ok(raw)
    }

    /// Read and validate a reply frame.
    pub fn read_frame(&mut self) -> Result<Frame> {
        let raw = self.read_frame_bytes()?;
        Frame::decode(&raw)
    }

    /// One complete exchange: send `frame`, return the validated reply.
    pub fn exchange(&mut self, frame: &Frame) -> Result<Frame> {
        self.send_command(&frame.encode())?;
        self.read_frame()
    }

    /// Passthrough for caller-framed bytes. The acknowledgement is returned
    /// as read, not compared, and the reply is returned without checksum
    /// validation.
    pub fn raw_exchange(&mut self, frame: &[u8]) -> Result<RawReply> {
        self.write_frame(frame)?;
        self.wait_ready(ReadyStage::Ack)?;
        let ack = self.read_six()?;
        self.wait_ready(ReadyStage::Response)?;
        let frame = self.read_frame_bytes()?;
        Ok(RawReply { ack, frame })
    }
}
