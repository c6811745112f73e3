//! Clock-time helpers
//!
//! The document store represents times of day as zero-padded 24-hour `HH:MM`
//! strings; everything crossing that boundary goes through here.

use chrono::NaiveTime;

use crate::error::{Error, Result};

/// Parse a strict `HH:MM` clock string (24-hour, zero-padded)
///
/// Rejects anything the store contract does not allow: wrong length,
/// missing zero padding, out-of-range hour/minute, seconds, whitespace.
pub fn parse_clock(value: &str) -> Result<NaiveTime> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[2] == b':'
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit();
    if !well_formed {
        return Err(Error::malformed_time(value));
    }
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| Error::malformed_time(value))
}

/// Format a time back to the canonical `HH:MM` store representation
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Format a time as the 12-hour display label guests see, e.g. "5:30 PM"
pub fn format_label(time: NaiveTime) -> String {
    // %l is space-padded, so strip the pad for single-digit hours
    time.format("%l:%M %p").to_string().trim_start().to_string()
}
