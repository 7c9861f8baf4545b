// libpn532/src/device/builder.rs

use embedded_hal::delay::DelayNs;

use crate::device::handle::{Device, Initialized, Uninitialized};
use crate::diagnostics::DiagnosticSink;
use crate::transport::{Link, Session, SessionConfig};
use crate::Result;

/// Helper to construct a Device with optional configuration.
pub struct DeviceBuilder<L, D> {
    link: L,
    delay: D,
    config: SessionConfig,
    sink: Option<Box<dyn DiagnosticSink>>,
}

impl<L: Link, D: DelayNs> DeviceBuilder<L, D> {
    /// Start from a link and delay source with default timing.
    pub fn new(link: L, delay: D) -> Self {
        Self {
            link,
            delay,
            config: SessionConfig::default(),
            sink: None,
        }
    }

    /// Override the session timing.
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Route session events to `sink` instead of the `log` facade.
    pub fn sink(mut self, sink: Box<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Consume the builder and return an uninitialized Device.
    pub fn build_uninitialized(self) -> Device<L, D, Uninitialized> {
        let mut session = Session::new(self.link, self.delay, self.config);
        if let Some(sink) = self.sink {
            session = session.with_sink(sink);
        }
        Device::new(session)
    }

    /// Build and synchronise with the chip.
    pub fn build(self) -> Result<Device<L, D, Initialized>> {
        self.build_uninitialized().begin()
    }
}
