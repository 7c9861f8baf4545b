// libpn532/src/protocol/frame.rs

use crate::constants::{
    APPLICATION_ERROR, FRAME_HEADER_LEN, FRAME_LEAD_IN, HOST_TO_PN532, MAX_BODY_LEN,
    PN532_TO_HOST, POSTAMBLE, PREAMBLE,
};
use crate::protocol::checksum::{dcs, lcs, verify_dcs};
use crate::{Error, Result};

/// Smallest normal information frame: lead-in(3) + LEN + LCS + TFI + DCS + postamble
const MIN_FRAME_LEN: usize = 8;

/// Which way a frame travels, carried in its TFI byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// TFI D4
    HostToChip,
    /// TFI D5
    ChipToHost,
}

impl Direction {
    /// TFI byte for this direction.
    pub fn tfi(self) -> u8 {
        match self {
            Direction::HostToChip => HOST_TO_PN532,
            Direction::ChipToHost => PN532_TO_HOST,
        }
    }

    /// Direction for a TFI byte, if it is one.
    pub fn from_tfi(tfi: u8) -> Option<Self> {
        match tfi {
            HOST_TO_PN532 => Some(Direction::HostToChip),
            PN532_TO_HOST => Some(Direction::ChipToHost),
            _ => None,
        }
    }
}

/// PN532 normal information frame.
///
/// Format: `00 00 FF LEN LCS TFI body… DCS 00`, where LEN counts the TFI
/// byte and the body, and the body starts with the command code (or its
/// echo in a reply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    direction: Direction,
    body: Vec<u8>,
}

impl Frame {
    /// Host -> chip frame carrying `opcode` followed by `params`.
    pub fn command(opcode: u8, params: &[u8]) -> Result<Self> {
        let mut body = Vec::with_capacity(1 + params.len());
        body.push(opcode);
        body.extend_from_slice(params);
        Self::new(Direction::HostToChip, body)
    }

    /// Chip -> host frame carrying `echo` followed by `data`.
    pub fn response(echo: u8, data: &[u8]) -> Result<Self> {
        let mut body = Vec::with_capacity(1 + data.len());
        body.push(echo);
        body.extend_from_slice(data);
        Self::new(Direction::ChipToHost, body)
    }

    fn new(direction: Direction, body: Vec<u8>) -> Result<Self> {
        if body.len() > MAX_BODY_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_BODY_LEN,
                actual: body.len(),
            });
        }
        Ok(Self { direction, body })
    }

    /// Direction carried in the TFI byte.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Command code, or opcode echo for replies.
    pub fn code(&self) -> u8 {
        self.body[0]
    }

    /// Everything after the code byte.
    pub fn params(&self) -> &[u8] {
        &self.body[1..]
    }

    /// Code byte plus parameters.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Take the body, dropping the framing.
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Serialize to wire bytes.
    pub fn encode(&self) -> Vec<u8> {
        let tfi = self.direction.tfi();
        let len = (self.body.len() + 1) as u8;

        let mut out = Vec::with_capacity(MIN_FRAME_LEN + self.body.len());
        out.extend_from_slice(&FRAME_LEAD_IN);
        out.push(len);
        out.push(lcs(len));
        out.push(tfi);
        out.extend_from_slice(&self.body);
        out.push(dcs(tfi, &self.body));
        out.push(POSTAMBLE);
        out
    }

    /// Parse and validate a complete wire frame.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < MIN_FRAME_LEN {
            return Err(Error::InvalidLength {
                expected: MIN_FRAME_LEN,
                actual: bytes.len(),
            });
        }

        if bytes[..3] != FRAME_LEAD_IN {
            return Err(Error::FrameFormat("invalid preamble".into()));
        }

        let len = bytes[3];
        let lcs_expected = lcs(len);
        if bytes[4] != lcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: lcs_expected,
                actual: bytes[4],
            });
        }

        let required_len = 3 + 1 + 1 + len as usize + 1 + 1;
        if bytes.len() != required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: bytes.len(),
            });
        }

        // LEN >= 1 here, otherwise required_len would have failed above.
        let tfi = bytes[5];
        let body_end = 5 + len as usize;
        let body = &bytes[6..body_end];

        let dcs_actual = bytes[body_end];
        if !verify_dcs(tfi, body, dcs_actual) {
            return Err(Error::ChecksumMismatch {
                expected: dcs(tfi, body),
                actual: dcs_actual,
            });
        }

        if bytes[body_end + 1] != POSTAMBLE {
            return Err(Error::FrameFormat("invalid postamble".into()));
        }

        if tfi == APPLICATION_ERROR {
            return Err(Error::ApplicationError);
        }

        let direction = Direction::from_tfi(tfi)
            .ok_or_else(|| Error::FrameFormat(format!("unknown frame identifier {:#04x}", tfi)))?;

        if body.is_empty() {
            return Err(Error::InvalidLength {
                expected: 2,
                actual: len as usize,
            });
        }

        Ok(Self {
            direction,
            body: body.to_vec(),
        })
    }
}

/// Layout of an incoming frame, derived from its first five bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Number of bytes to clock out of the chip, header included
    pub total_len: usize,
    /// The chip skipped the leading preamble byte; everything arrived
    /// shifted one position to the left.
    pub leading_null_missing: bool,
}

/// Work out how many bytes the incoming frame spans: `5 + LEN + 2`.
///
/// With `tolerate_missing_preamble`, a header whose third byte is not the
/// start code's 0xFF is taken to have lost its first preamble byte, and LEN
/// is read one position early.
pub fn response_length(
    header: &[u8; FRAME_HEADER_LEN],
    tolerate_missing_preamble: bool,
) -> Result<FrameHeader> {
    if header[2] == FRAME_LEAD_IN[2] && (tolerate_missing_preamble || header[..3] == FRAME_LEAD_IN)
    {
        return Ok(FrameHeader {
            total_len: FRAME_HEADER_LEN + header[3] as usize + 2,
            leading_null_missing: false,
        });
    }

    if tolerate_missing_preamble {
        return Ok(FrameHeader {
            total_len: FRAME_HEADER_LEN + header[2] as usize + 2,
            leading_null_missing: true,
        });
    }

    Err(Error::FrameFormat("invalid preamble".into()))
}

/// Rebuild the frame as the chip meant to send it. When the leading byte
/// went missing the read ran one byte past the frame; that byte is dropped
/// and the preamble restored.
pub fn normalize(mut raw: Vec<u8>, header: &FrameHeader) -> Vec<u8> {
    if header.leading_null_missing {
        raw.pop();
        raw.insert(0, PREAMBLE);
    }
    raw
}
