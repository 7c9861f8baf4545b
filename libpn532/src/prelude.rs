// libpn532/src/prelude.rs

pub use crate::card::Target;
pub use crate::device::{Device, DeviceBuilder};
pub use crate::device::{Initialized, Uninitialized};
pub use crate::diagnostics::{DiagnosticSink, Event, LogSink, NullSink, RecordingSink};
pub use crate::protocol::{Command, Response};
pub use crate::transport::{BitLink, Link, ReadyStage, Session, SessionConfig};
pub use crate::{
    BaudRate, BlockData, DepBaudRate, Error, ErrorKind, FirmwareVersion, KeyType, MifareKey,
    Result, SamMode, TargetConfig, TargetId, Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{Hex, to_hex};
