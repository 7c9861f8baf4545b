// libpn532/src/error.rs

use thiserror::Error;

use crate::transport::ReadyStage;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// The chip did not report ready within the budget
    #[error("timed out waiting for the chip ({stage}) after {budget_ms} ms")]
    Timeout {
        /// Which wait ran out
        stage: ReadyStage,
        /// Budget that was exhausted
        budget_ms: u32,
    },

    /// The six bytes after a command were not the ack frame
    #[error("acknowledgement mismatch: got {received:02x?}")]
    AckMismatch {
        /// Bytes actually read
        received: [u8; 6],
    },

    /// A fixed reply byte (signature or echo) had the wrong value
    #[error("response mismatch at offset {offset}: expected {expected:#04x}, got {actual:#04x}")]
    ResponseMismatch {
        /// Offset of the first differing byte
        offset: usize,
        /// Value the reply should carry there
        expected: u8,
        /// Value it carried
        actual: u8,
    },

    /// The chip answered with a non-zero status byte
    #[error("operation rejected by the chip: status={status:#04x}")]
    OperationRejected {
        /// Status byte from the reply
        status: u8,
    },

    /// Passive-target listing found no target, or more than one
    #[error("expected exactly one target in the field, found {found}")]
    NoTarget {
        /// Number of targets reported
        found: u8,
    },

    /// The chip sent its application error frame
    #[error("chip returned an application error frame")]
    ApplicationError,

    /// LCS or DCS did not add up
    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch {
        /// Checksum computed over the frame
        expected: u8,
        /// Checksum byte carried by the frame
        actual: u8,
    },

    /// Bad preamble, postamble, start code or direction byte
    #[error("frame format error: {0}")]
    FrameFormat(String),

    /// A frame or body was too short or too long
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Length required
        expected: usize,
        /// Length found
        actual: usize,
    },

    /// A GPIO line failed
    #[error("pin error: {0:?}")]
    Pin(embedded_hal::digital::ErrorKind),
}

/// Coarse classification of [`Error`] for diagnostics and retry decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Ready poll ran out
    Timeout,
    /// Wrong acknowledgement
    AckMismatch,
    /// Wrong signature or echo
    ResponseMismatch,
    /// The chip refused the operation
    OperationRejected,
    /// Malformed frame
    Frame,
    /// Pin failure
    Link,
}

impl Error {
    /// Coarse class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::AckMismatch { .. } => ErrorKind::AckMismatch,
            Self::ResponseMismatch { .. } => ErrorKind::ResponseMismatch,
            Self::OperationRejected { .. } | Self::NoTarget { .. } | Self::ApplicationError => {
                ErrorKind::OperationRejected
            }
            Self::ChecksumMismatch { .. } | Self::FrameFormat(_) | Self::InvalidLength { .. } => {
                ErrorKind::Frame
            }
            Self::Pin(_) => ErrorKind::Link,
        }
    }
}

/// Map any embedded-hal pin error into [`Error::Pin`].
pub(crate) fn pin_error<E: embedded_hal::digital::Error>(err: E) -> Error {
    Error::Pin(err.kind())
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
