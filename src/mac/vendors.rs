//! Vendor prefixes used to make generated addresses look real.

/// 24-bit OUIs assigned to well-known network interface vendors.
///
/// Generated addresses take their top three bytes from this table so they
/// resemble burned-in hardware addresses rather than random noise.
pub const VENDOR_OUIS: &[u32] = &[
    0x00_02B3, // Intel
    0x00_0347, // Intel
    0x00_0E0C, // Intel
    0x00_1517, // Intel
    0x00_1B21, // Intel
    0x00_AA00, // Intel
    0x00_A0C9, // Intel
    0x00_E04C, // Realtek
    0x00_1018, // Broadcom
    0x00_105A, // 3Com
    0x00_20AF, // 3Com
    0x00_608C, // 3Com
    0x00_000C, // Cisco
    0x00_0142, // Cisco
    0x00_0143, // Cisco
    0x00_065B, // Dell
    0x00_1422, // Dell
    0x00_037F, // Atheros
    0x00_055D, // D-Link
    0x00_1195, // D-Link
    0x00_095B, // Netgear
    0x00_146C, // Netgear
    0x00_0625, // Linksys
    0x00_1217, // Linksys
    0x00_1731, // ASUSTek
    0x00_E018, // ASUSTek
    0x00_5043, // Marvell
    0x00_1478, // TP-Link
    0x00_1D0F, // TP-Link
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_not_empty() {
        assert!(!VENDOR_OUIS.is_empty());
    }

    #[test]
    fn every_prefix_fits_in_24_bits() {
        for oui in VENDOR_OUIS {
            assert!(*oui <= 0xFF_FFFF, "OUI {oui:06X} exceeds 24 bits");
        }
    }

    #[test]
    fn prefixes_are_unique() {
        let mut sorted = VENDOR_OUIS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), VENDOR_OUIS.len());
    }

    #[test]
    fn prefixes_are_universally_administered_unicast() {
        for oui in VENDOR_OUIS {
            let first_octet = oui >> 16;
            assert_eq!(
                first_octet & 0x03,
                0,
                "OUI {oui:06X} has U/L or I/G bit set"
            );
        }
    }
}
