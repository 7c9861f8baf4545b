// libpn532/src/device/mod.rs

/// Device builder
pub mod builder;
/// Device handle and its operations
pub mod handle;

pub use builder::DeviceBuilder;
pub use handle::{Device, Initialized, Uninitialized};
