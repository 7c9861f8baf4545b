// libpn532/src/protocol/checksum.rs

/// Length checksum: LEN + LCS == 0 (mod 256)
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Data checksum over the TFI byte and the body:
/// TFI + sum(body) + DCS == 0 (mod 256)
pub fn dcs(tfi: u8, body: &[u8]) -> u8 {
    0u8.wrapping_sub(sum(tfi, body))
}

/// Checks a received DCS against the TFI byte and body it covers.
pub fn verify_dcs(tfi: u8, body: &[u8], received: u8) -> bool {
    sum(tfi, body).wrapping_add(received) == 0
}

fn sum(tfi: u8, body: &[u8]) -> u8 {
    body.iter().fold(tfi, |acc, &b| acc.wrapping_add(b))
}
