//! Slot Calculator
//!
//! Candidate generation for a single service window. Pure time-of-day
//! arithmetic; the lead-time filter lives in the engine.

use chrono::{NaiveTime, Timelike};

use crate::error::{Error, Result};
use crate::models::TimeWindow;
use crate::utils::time::parse_clock;

/// Generate candidate start times for one window
///
/// Candidates begin at `start_time` and step by `interval_minutes` while
/// strictly before `end_time` — the instant equal to `end_time` is closing,
/// not a seatable start. An inverted or zero-length window yields no
/// candidates and no error. A zero `interval_minutes` is rejected.
pub fn window_slot_times(window: &TimeWindow, interval_minutes: u32) -> Result<Vec<NaiveTime>> {
    if interval_minutes == 0 {
        return Err(Error::invalid_settings(
            "timeSlotIntervalMinutes must be greater than zero",
        ));
    }
    let start = parse_clock(&window.start_time)?;
    let end = parse_clock(&window.end_time)?;

    // Integer minutes since midnight, widened past u32 so stepping can
    // neither wrap past 24:00 nor overflow on a huge interval
    let start_min = u64::from(start.num_seconds_from_midnight() / 60);
    let end_min = u64::from(end.num_seconds_from_midnight() / 60);
    let step = u64::from(interval_minutes);

    let mut times = Vec::new();
    let mut cursor = start_min;
    while cursor < end_min {
        if let Some(t) = NaiveTime::from_hms_opt((cursor / 60) as u32, (cursor % 60) as u32, 0) {
            times.push(t);
        }
        cursor += step;
    }
    Ok(times)
}
