//! GSTIN (GST registration number) display and validation helpers

use once_cell::sync::Lazy;
use regex::Regex;

/// Length of a GSTIN in characters
pub const GSTIN_LENGTH: usize = 15;

/// State code, PAN, entity number, the fixed `Z`, checksum character
static GSTIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").expect("GSTIN pattern is valid")
});

/// Space a GSTIN into its 2/10/3 display groups, e.g. `22 AAAAA0000A 1Z5`.
///
/// Input shorter than a GSTIN is returned unchanged; characters past the
/// fifteenth are kept after the last group.
pub fn format_gst_number(gst_number: &str) -> String {
    let chars: Vec<char> = gst_number.chars().collect();
    if chars.len() < GSTIN_LENGTH {
        return gst_number.to_string();
    }

    let state: String = chars[..2].iter().collect();
    let pan: String = chars[2..12].iter().collect();
    let rest: String = chars[12..].iter().collect();
    format!("{state} {pan} {rest}")
}

/// Check a GSTIN against the registration number format.
pub fn validate_gst_number(gst_number: &str) -> bool {
    GSTIN_PATTERN.is_match(gst_number)
}

/// Two-digit state code of a valid GSTIN
pub fn gstin_state_code(gst_number: &str) -> Option<&str> {
    if validate_gst_number(gst_number) {
        gst_number.get(..2)
    } else {
        None
    }
}
