//! Availability Engine
//!
//! Orchestrates per-window candidate generation, applies the minimum-advance
//! lead-time filter against the injected "now", and deduplicates across
//! windows. Deterministic and side-effect-free; `now` is a parameter so the
//! computation stays testable.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Error, Result};
use crate::models::{DaySchedule, ReservationSettings, Slot};

use super::calculator::window_slot_times;

/// Compute the bookable slots for `date`
///
/// `day_schedule` is the entry for the weekday `date` falls on, already
/// resolved by the caller (see [`WeeklySchedule::for_date`]). Windows are
/// processed in given order and results are concatenated without a global
/// re-sort; duplicate `HH:MM` values from adjacent or overlapping windows are
/// dropped, keeping the first occurrence.
///
/// Date-range restriction via `booking_lead_time_days` is the caller's job
/// (it bounds the date picker); this function still drops any slot whose
/// instant falls before `now + min_advance_reservation_hours`.
///
/// [`WeeklySchedule::for_date`]: crate::models::WeeklySchedule::for_date
pub fn compute_available_slots(
    date: NaiveDate,
    day_schedule: &DaySchedule,
    settings: &ReservationSettings,
    now: NaiveDateTime,
) -> Result<Vec<Slot>> {
    if settings.time_slot_interval_minutes == 0 {
        return Err(Error::invalid_settings(
            "timeSlotIntervalMinutes must be greater than zero",
        ));
    }

    let windows = day_schedule.effective_windows();
    if windows.is_empty() {
        return Ok(Vec::new());
    }

    // A lead time too large for chrono arithmetic saturates to the far
    // future, filtering every slot rather than panicking.
    let earliest_bookable = Duration::try_minutes(settings.min_advance_minutes())
        .and_then(|advance| now.checked_add_signed(advance))
        .unwrap_or(NaiveDateTime::MAX);

    let mut slots = Vec::new();
    let mut seen: HashSet<NaiveTime> = HashSet::new();
    for window in windows {
        for time in window_slot_times(window, settings.time_slot_interval_minutes)? {
            if date.and_time(time) < earliest_bookable {
                continue;
            }
            if seen.insert(time) {
                slots.push(Slot::from_time(time));
            }
        }
    }

    tracing::debug!(
        date = %date,
        day = %day_schedule.day_of_week,
        windows = windows.len(),
        slots = slots.len(),
        "computed available slots"
    );
    Ok(slots)
}
