//! Slot Model

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::utils::time::{format_clock, format_label};

/// A single bookable start time
///
/// Produced fresh per date selection and never persisted; on submission only
/// the `time` value travels onward to booking creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Canonical `HH:MM` value (24-hour, zero-padded)
    pub time: String,
    /// Human-readable display form, e.g. "5:30 PM"
    pub label: String,
}

impl Slot {
    pub fn from_time(time: NaiveTime) -> Self {
        Self {
            time: format_clock(time),
            label: format_label(time),
        }
    }
}
