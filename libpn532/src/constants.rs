// libpn532/src/constants.rs
//! Wire-level constants of the PN532 host interface.

/// Frame preamble byte
pub const PREAMBLE: u8 = 0x00;

/// Start code: 0x00 0xFF
pub const START_CODE: [u8; 2] = [0x00, 0xFF];

/// Frame postamble byte
pub const POSTAMBLE: u8 = 0x00;

/// Full frame lead-in: preamble + start code
pub const FRAME_LEAD_IN: [u8; 3] = [PREAMBLE, START_CODE[0], START_CODE[1]];

/// Frame identifier (TFI) for host -> PN532 frames
pub const HOST_TO_PN532: u8 = 0xD4;

/// Frame identifier (TFI) for PN532 -> host frames
pub const PN532_TO_HOST: u8 = 0xD5;

/// TFI value used by the chip's application-level error frame
pub const APPLICATION_ERROR: u8 = 0x7F;

/// ACK frame sent by the chip once it has accepted a command frame
pub const ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Header of a well-formed GetFirmwareVersion reply as seen after the
/// leading preamble byte: start code, LEN=6, LCS, TFI, echo.
pub const FIRMWARE_SIGNATURE: [u8; 6] = [0x00, 0xFF, 0x06, 0xFA, 0xD5, 0x03];

/// Status byte returned by the chip when a reply is ready to be read
pub const SPI_READY: u8 = 0x01;

/// Number of header bytes read before the frame length is known
pub const FRAME_HEADER_LEN: usize = 5;

/// Largest frame the driver ever stages (commands are at most 38 body bytes,
/// replies at most a few dozen).
pub const MAX_FRAME_LEN: usize = 64;

/// Largest body (opcode + params) a single normal frame can carry
pub const MAX_BODY_LEN: usize = 254;

/// PN532 command codes. Replies echo `code + 1`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Self-test
    Diagnose = 0x00,
    /// IC, version, revision and supported families
    GetFirmwareVersion = 0x02,
    /// Field and target status
    GetGeneralStatus = 0x04,
    /// Read one internal register
    ReadRegister = 0x06,
    /// Write one internal register
    WriteRegister = 0x08,
    /// Secure access module mode
    SamConfiguration = 0x14,
    /// Exchange data with an activated target (initiator side)
    InDataExchange = 0x40,
    /// Detect passive targets in the field
    InListPassiveTarget = 0x4A,
    /// Activate a DEP target (initiator side)
    InJumpForDep = 0x56,
    /// Receive data from the initiator (target side)
    TgGetData = 0x86,
    /// Wait to be activated as a target
    TgInitAsTarget = 0x8C,
    /// Answer the initiator (target side)
    TgSetData = 0x8E,
}

impl Opcode {
    /// Raw command byte.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The opcode echo carried as the first body byte of the reply.
    pub fn response_code(self) -> u8 {
        (self as u8).wrapping_add(1)
    }

    /// Look up a command byte; `None` for codes the driver does not know.
    pub fn from_code(code: u8) -> Option<Self> {
        let op = match code {
            0x00 => Self::Diagnose,
            0x02 => Self::GetFirmwareVersion,
            0x04 => Self::GetGeneralStatus,
            0x06 => Self::ReadRegister,
            0x08 => Self::WriteRegister,
            0x14 => Self::SamConfiguration,
            0x40 => Self::InDataExchange,
            0x4A => Self::InListPassiveTarget,
            0x56 => Self::InJumpForDep,
            0x86 => Self::TgGetData,
            0x8C => Self::TgInitAsTarget,
            0x8E => Self::TgSetData,
            _ => return None,
        };
        Some(op)
    }
}

/// First byte of every SPI transaction, selecting what the chip does with
/// the rest of it.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiOp {
    /// Host sends a frame
    DataWrite = 0x01,
    /// Host reads the one-byte ready status
    StatusRead = 0x02,
    /// Host reads a pending frame
    DataRead = 0x03,
}

// MIFARE Classic commands tunnelled through InDataExchange

/// Authenticate with key A
pub const MIFARE_AUTH_KEY_A: u8 = 0x60;
/// Authenticate with key B
pub const MIFARE_AUTH_KEY_B: u8 = 0x61;
/// Read one 16-byte block
pub const MIFARE_READ: u8 = 0x30;
/// Write one 16-byte block
pub const MIFARE_WRITE: u8 = 0xA0;
