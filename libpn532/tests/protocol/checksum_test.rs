use libpn532::protocol::checksum::{dcs, lcs, verify_dcs};
use proptest::prelude::*;

#[test]
fn known_checksums() {
    // GetFirmwareVersion: LEN 02, LCS FE, DCS 2A
    assert_eq!(lcs(0x02), 0xFE);
    assert_eq!(dcs(0xD4, &[0x02]), 0x2A);
    // Ack-style zero length
    assert_eq!(lcs(0x00), 0x00);
}

proptest! {
    #[test]
    fn lcs_cancels_len(len in any::<u8>()) {
        prop_assert_eq!(len.wrapping_add(lcs(len)), 0);
    }

    #[test]
    fn dcs_cancels_tfi_and_body(tfi in any::<u8>(),
                                body in prop::collection::vec(any::<u8>(), 0..64)) {
        let sum = body.iter().fold(tfi, |acc, &b| acc.wrapping_add(b));
        let d = dcs(tfi, &body);
        prop_assert_eq!(sum.wrapping_add(d), 0);
        prop_assert!(verify_dcs(tfi, &body, d));
        prop_assert!(!verify_dcs(tfi, &body, d.wrapping_add(1)));
    }
}
