//! Calendar-date helpers for ISO `YYYY-MM-DD` strings.
//!
//! Only the date part is read, so full timestamps such as
//! `2024-01-15T14:30:00Z` are accepted too.

use chrono::NaiveDate;

const ISO_DATE: &str = "%Y-%m-%d";

/// Parse the leading `YYYY-MM-DD` of a string.
///
/// chrono alone accepts signed years and unpadded fields, so the exact
/// shape is checked first.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let date_part = s.get(..10)?;
    let shaped = date_part.bytes().enumerate().all(|(i, b)| match i {
        4 | 7 => b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shaped {
        return None;
    }
    match s.as_bytes().get(10) {
        None | Some(b'T') | Some(b' ') => {}
        _ => return None,
    }
    NaiveDate::parse_from_str(date_part, ISO_DATE).ok()
}

/// "Mar 3"
pub fn short_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// "Mar 3, 2025"
pub fn long_label(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format an ISO date for display, or return it untouched if it can't be parsed.
pub fn display_date(iso: &str) -> String {
    parse_iso_date(iso)
        .map(long_label)
        .unwrap_or_else(|| iso.to_string())
}
