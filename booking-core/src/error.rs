//! Error types for booking-core

use thiserror::Error;

/// Result type for booking-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the availability computation
///
/// Absence of open hours is not an error — a closed day simply yields no
/// slots. Errors are reserved for caller contract violations, and are never
/// caught internally; the presentation layer decides how to surface them
/// (typically as "no available time slots").
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A window's start or end time is not a zero-padded 24-hour `HH:MM` string
    #[error("malformed time format: {value:?} (expected zero-padded 24-hour HH:MM)")]
    MalformedTimeFormat { value: String },

    /// A numeric policy field is out of bounds (e.g. zero slot interval)
    #[error("invalid reservation settings: {0}")]
    InvalidSettings(String),
}

impl Error {
    /// Create a malformed-time error for the given raw value
    pub fn malformed_time(value: impl Into<String>) -> Self {
        Self::MalformedTimeFormat {
            value: value.into(),
        }
    }

    /// Create an invalid-settings error
    pub fn invalid_settings(msg: impl Into<String>) -> Self {
        Self::InvalidSettings(msg.into())
    }
}
