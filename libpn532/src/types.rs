// libpn532/src/types.rs

use derive_more::{Display, From};

use crate::Error;
use crate::constants::{MIFARE_AUTH_KEY_A, MIFARE_AUTH_KEY_B};

/// Firmware version as reported by GetFirmwareVersion: IC, Ver, Rev and
/// Support bytes packed big-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Display)]
#[display(fmt = "{:#010x}", _0)]
pub struct FirmwareVersion(u32);

impl FirmwareVersion {
    /// Pack the four reply bytes.
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    /// Raw packed value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Chip identifier (0x32 for a PN532)
    pub fn ic(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Firmware version
    pub fn version(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Firmware revision
    pub fn revision(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Bitmask of supported card families
    pub fn support(&self) -> u8 {
        self.0 as u8
    }
}

/// Target ID folded big-endian into 32 bits. IDs longer than four bytes
/// keep only their last four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Display)]
#[display(fmt = "{:#010x}", _0)]
pub struct TargetId(u32);

impl TargetId {
    /// Wrap an already folded ID.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Fold ID bytes big-endian.
    pub fn from_id_bytes(bytes: &[u8]) -> Self {
        Self(bytes.iter().fold(0u32, |acc, &b| (acc << 8) | b as u32))
    }

    /// Folded value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Folded value as four big-endian bytes, as sent in MIFARE authentication.
    pub fn to_be_bytes(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

/// Full NFCID1 of a passive target (4, 7 or 10 bytes)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uid(Vec<u8>);

impl Uid {
    /// Wrap the ID bytes reported by the chip.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Raw ID bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of ID bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the chip reported no ID bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex without separators.
    pub fn to_hex(&self) -> String {
        crate::utils::to_hex(&self.0)
    }
}

/// BlockData (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockData([u8; 16]);

impl BlockData {
    /// Wrap 16 raw bytes.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Raw block contents.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Space-separated hex dump.
    pub fn to_hex(&self) -> String {
        crate::utils::Hex(&self.0).to_string()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 16] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: 16,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// MIFARE Classic sector key. Opaque to the driver.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MifareKey([u8; 6]);

impl MifareKey {
    /// Factory default transport key
    pub const DEFAULT: Self = Self([0xFF; 6]);

    /// Wrap six raw key bytes.
    pub fn from_bytes(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

// Keys stay out of logs.
impl std::fmt::Debug for MifareKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MifareKey(..)")
    }
}

/// Which MIFARE sector key to authenticate with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    /// Key A
    A,
    /// Key B
    B,
}

impl KeyType {
    /// MIFARE authentication command for this key slot
    pub fn auth_command(self) -> u8 {
        match self {
            KeyType::A => MIFARE_AUTH_KEY_A,
            KeyType::B => MIFARE_AUTH_KEY_B,
        }
    }
}

/// Modulation / baud rate selector for InListPassiveTarget (BrTy)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaudRate {
    /// ISO/IEC 14443 Type A, 106 kbps
    #[default]
    Iso14443a106 = 0x00,
    /// FeliCa, 212 kbps
    Felica212 = 0x01,
    /// FeliCa, 424 kbps
    Felica424 = 0x02,
    /// ISO/IEC 14443-3 Type B, 106 kbps
    Iso14443b106 = 0x03,
    /// Innovision Jewel, 106 kbps
    Jewel106 = 0x04,
}

/// Baud rate selector for InJumpForDEP
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepBaudRate {
    /// 106 kbps
    Kbps106 = 0x00,
    /// 212 kbps
    #[default]
    Kbps212 = 0x01,
    /// 424 kbps
    Kbps424 = 0x02,
}

/// SAMConfiguration mode
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamMode {
    /// No SAM in use
    #[default]
    Normal = 0x01,
    /// SAM acts as a card, the chip as its reader
    VirtualCard = 0x02,
    /// Host talks to the SAM through the chip
    WiredCard = 0x03,
    /// Both the chip and the SAM are visible to an external reader
    DualCard = 0x04,
}

/// Parameters the chip advertises when initialised as a DEP target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetConfig {
    /// Activation mode bitfield (0 = accept any)
    pub mode: u8,
    /// SENS_RES answered to ISO14443A polling
    pub sens_res: [u8; 2],
    /// Last three NFCID1 bytes (the first is fixed to 08h by the chip)
    pub nfcid1: [u8; 3],
    /// SEL_RES answered to ISO14443A selection
    pub sel_res: u8,
    /// NFCID2t (8) + PAD (8) + system code (2) used for FeliCa polling
    pub felica_params: [u8; 18],
    /// NFCID3t used in ATR_RES
    pub nfcid3: [u8; 10],
    /// General bytes appended to ATR_RES
    pub general_bytes: Vec<u8>,
    /// Historical bytes for ISO14443-4 activation
    pub historical_bytes: Vec<u8>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            mode: 0x00,
            sens_res: [0x08, 0x00],
            nfcid1: [0x12, 0x34, 0x56],
            sel_res: 0x40,
            felica_params: [
                0x01, 0xFE, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, // NFCID2t
                0xC0, 0xC1, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6, 0xC7, // PAD
                0xFF, 0xFF, // system code
            ],
            nfcid3: [0xAA, 0x99, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11],
            general_bytes: Vec::new(),
            historical_bytes: Vec::new(),
        }
    }
}
