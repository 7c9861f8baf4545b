// libpn532/src/protocol/commands/sam.rs

use crate::constants::Opcode;
use crate::types::SamMode;

/// Virtual-card timeout used by the driver, in 50 ms units (1 s)
pub const DEFAULT_SAM_TIMEOUT: u8 = 0x14;

/// Encode SAMConfiguration. `timeout` is in 50 ms units; `use_irq` lets
/// the chip drive its IRQ line.
pub fn encode_sam_configuration(mode: SamMode, timeout: u8, use_irq: bool) -> Vec<u8> {
    vec![
        Opcode::SamConfiguration.code(),
        mode as u8,
        timeout,
        use_irq as u8,
    ]
}
