//! Known serial-bridge chipset vendors and the board classification predicate
//!
//! Official Arduino boards enumerate under the Arduino vendor ID, but
//! consumer-grade clones ship with whatever USB-to-serial bridge was
//! cheapest that week (CH340, FTDI, CP210x, PL2303) and report varied,
//! inconsistent product names. The predicate here is therefore an OR of
//! weak signals rather than a strict vendor match.

/// Known serial-bridge vendors, keyed by normalized vendor ID
///
/// Open set: adding a row extends classification without touching the
/// traversal in [`crate::topology`].
pub const KNOWN_VENDORS: &[(&str, &str)] = &[
    ("2341", "Arduino (official)"),
    ("1a86", "CH340/CH341"),
    ("0403", "FTDI"),
    ("10c4", "Silicon Labs CP210x"),
    ("067b", "Prolific PL2303"),
];

/// Product-name substrings that mark a device as a serial bridge even
/// when its vendor ID is not in [`KNOWN_VENDORS`]
///
/// Matched against the lowercased display name.
pub const NAME_HINTS: &[&str] = &["arduino", "serial", "ch340", "ftdi", "usb2.0-serial"];

/// Normalize a raw vendor ID string for table lookup
///
/// The host reports vendor IDs as hex strings, sometimes with the
/// registered vendor name appended (e.g. `"0x1a86  (wch.cn)"`). Lookup
/// uses the bare lowercase hex digits.
pub fn normalize_vendor_id(raw: &str) -> String {
    let token = raw
        .trim()
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_lowercase();
    token.strip_prefix("0x").unwrap_or(&token).to_string()
}

/// Look up the manufacturer label for a normalized vendor ID
pub fn manufacturer_for(vendor_id: &str) -> Option<&'static str> {
    KNOWN_VENDORS
        .iter()
        .find(|(vid, _)| *vid == vendor_id)
        .map(|(_, label)| *label)
}

/// Classification predicate for a USB device node
///
/// Takes the normalized vendor ID and the lowercased display name and
/// returns whether the node is a candidate board, paired with the
/// manufacturer resolved from [`KNOWN_VENDORS`] (`None` when the vendor
/// is absent or not in the table).
pub fn classify(vendor_id: Option<&str>, name: Option<&str>) -> (bool, Option<&'static str>) {
    let manufacturer = vendor_id.and_then(manufacturer_for);
    let name_match = name.is_some_and(|n| NAME_HINTS.iter().any(|hint| n.contains(hint)));

    (manufacturer.is_some() || name_match, manufacturer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vendor_without_name_hint_is_a_candidate() {
        let (matched, manufacturer) = classify(Some("1a86"), Some("qinheng bridge"));

        assert!(matched);
        assert_eq!(manufacturer, Some("CH340/CH341"));
    }

    #[test]
    fn name_hint_without_known_vendor_is_a_candidate() {
        let (matched, manufacturer) = classify(Some("9999"), Some("usb2.0-serial"));

        assert!(matched);
        assert_eq!(manufacturer, None);
    }

    #[test]
    fn unrelated_device_is_excluded() {
        let (matched, manufacturer) = classify(Some("05ac"), Some("keyboard"));

        assert!(!matched);
        assert_eq!(manufacturer, None);
    }

    #[test]
    fn missing_attributes_never_match() {
        assert_eq!(classify(None, None), (false, None));
    }

    #[test]
    fn every_table_vendor_resolves() {
        for (vid, label) in KNOWN_VENDORS {
            assert_eq!(manufacturer_for(vid), Some(*label));
        }
    }

    #[test]
    fn vendor_ids_normalize_to_bare_lowercase_hex() {
        assert_eq!(normalize_vendor_id("0x2341"), "2341");
        assert_eq!(normalize_vendor_id("0X1A86"), "1a86");
        assert_eq!(normalize_vendor_id("  0x1a86  (wch.cn)"), "1a86");
        assert_eq!(normalize_vendor_id("0403"), "0403");
        assert_eq!(normalize_vendor_id(""), "");
    }
}
