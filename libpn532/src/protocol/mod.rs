// libpn532/src/protocol/mod.rs

/// LCS and DCS
pub mod checksum;
/// Command to frame and frame to response
pub mod codec;
/// Command enum and per-operation encoders
pub mod commands;
/// Frame layout, validation and preamble repair
pub mod frame;
/// Bounds-checked reply readers
pub mod parser;
/// Response enum and per-operation decoders
pub mod responses;

pub use checksum::{dcs, lcs};
pub use commands::Command;
pub use frame::{Direction, Frame, FrameHeader};
pub use responses::Response;
