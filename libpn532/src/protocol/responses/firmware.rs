// libpn532/src/protocol/responses/firmware.rs

use crate::constants::{FIRMWARE_SIGNATURE, PN532_TO_HOST, START_CODE};
use crate::protocol::checksum::lcs;
use crate::protocol::parser;
use crate::types::FirmwareVersion;
use crate::{Error, Result};

/// Decode a GetFirmwareVersion reply body.
/// Layout: echo(1) + IC(1) + Ver(1) + Rev(1) + Support(1)
///
/// The frame header (start code, LEN, LCS, TFI) plus the echo must match
/// [`FIRMWARE_SIGNATURE`]; the first differing byte is reported.
pub fn decode_firmware_version(data: &[u8]) -> Result<FirmwareVersion> {
    let echo = parser::byte_at(data, 0)?;
    let len = (data.len() + 1) as u8;
    let header = [START_CODE[0], START_CODE[1], len, lcs(len), PN532_TO_HOST, echo];

    if let Some((offset, (&expected, &actual))) = FIRMWARE_SIGNATURE
        .iter()
        .zip(header.iter())
        .enumerate()
        .find(|(_, (e, a))| e != a)
    {
        return Err(Error::ResponseMismatch {
            offset,
            expected,
            actual,
        });
    }

    let s = parser::slice_at(data, 1, 4)?;
    Ok(FirmwareVersion::from_bytes([s[0], s[1], s[2], s[3]]))
}
