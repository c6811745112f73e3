//! Booking validation helpers
//!
//! Bounds checks the form layer applies before slot selection: the date-picker
//! range implied by `bookingLeadTimeDays` and the party-size limit.

use chrono::{Duration, NaiveDate};

use crate::error::{Error, Result};
use crate::models::ReservationSettings;

/// Inclusive date-picker bounds for a booking made "today"
///
/// The earliest selectable date is today itself; `min_advance_reservation_hours`
/// is enforced per slot by the availability engine, not here, so a same-day
/// date stays selectable even when every one of its slots ends up filtered.
pub fn booking_date_range(
    today: NaiveDate,
    settings: &ReservationSettings,
) -> (NaiveDate, NaiveDate) {
    let last = today + Duration::days(i64::from(settings.booking_lead_time_days));
    (today, last)
}

/// Whether a date is selectable in the booking form
pub fn is_date_bookable(date: NaiveDate, today: NaiveDate, settings: &ReservationSettings) -> bool {
    let (first, last) = booking_date_range(today, settings);
    date >= first && date <= last
}

/// Validate a requested party size against `maxGuestsPerBooking`
pub fn validate_guest_count(guests: u32, settings: &ReservationSettings) -> Result<()> {
    if guests == 0 {
        return Err(Error::invalid_settings(
            "guest count must be at least one",
        ));
    }
    if guests > settings.max_guests_per_booking {
        return Err(Error::invalid_settings(format!(
            "guest count {} exceeds the maximum of {} per booking",
            guests, settings.max_guests_per_booking
        )));
    }
    Ok(())
}
