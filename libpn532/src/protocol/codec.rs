// libpn532/src/protocol/codec.rs

use crate::Result;

use super::Frame;
use super::commands::Command;
use super::responses::Response;

/// Encode a Command into wire bytes (lead-in, LEN/LCS, TFI, body, DCS, postamble).
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    Ok(cmd.to_frame()?.encode())
}

/// Decode wire bytes and parse the reply they carry for `cmd`.
pub fn decode_response_frame(cmd: &Command, bytes: &[u8]) -> Result<Response> {
    let frame = Frame::decode(bytes)?;
    decode_response(cmd, &frame)
}

/// Parse an already validated frame. Only chip -> host frames are replies.
pub fn decode_response(cmd: &Command, frame: &Frame) -> Result<Response> {
    if frame.direction() != super::Direction::ChipToHost {
        return Err(crate::Error::FrameFormat(
            "expected a PN532 -> host frame".into(),
        ));
    }
    Response::decode(cmd, frame.body())
}
