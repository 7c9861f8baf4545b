// libpn532/src/protocol/parser.rs
//
// Bounds-checked readers over a reply body. Offsets are relative to the
// body, whose byte 0 is the opcode echo.

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a big-endian u16 at `idx`.
pub fn be_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    let s = slice_at(data, idx, 2)?;
    Ok(u16::from_be_bytes([s[0], s[1]]))
}

/// Copy 16 bytes starting at `idx`.
pub fn block_at(data: &[u8], idx: usize) -> Result<[u8; 16]> {
    let mut out = [0u8; 16];
    out.copy_from_slice(slice_at(data, idx, 16)?);
    Ok(out)
}

/// The first body byte must echo the command (`opcode + 1`).
pub fn expect_response_code(data: &[u8], expected: u8) -> Result<()> {
    let actual = byte_at(data, 0)?;
    if actual != expected {
        return Err(Error::ResponseMismatch {
            offset: 0,
            expected,
            actual,
        });
    }
    Ok(())
}

/// A chip status byte of zero means success; anything else is the chip's
/// error code.
pub fn expect_status_ok(data: &[u8], idx: usize) -> Result<()> {
    let status = byte_at(data, idx)?;
    if status != 0 {
        return Err(Error::OperationRejected { status });
    }
    Ok(())
}
