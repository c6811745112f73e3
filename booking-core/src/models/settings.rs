//! Reservation Settings Model

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Booking-policy settings (singleton per restaurant)
///
/// Loaded from the document store alongside the weekly schedule. Only the
/// fields that influence availability and booking validation live here;
/// defaults match the store's fallbacks for restaurants that never opened
/// the settings page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationSettings {
    /// Minimum lead time between "now" and a bookable slot, in hours.
    /// Fractional values are allowed (e.g. 1.5 for 90 minutes).
    #[serde(default)]
    pub min_advance_reservation_hours: f64,
    /// Granularity of generated slots, in minutes (e.g. 15, 30, 60)
    #[serde(default = "default_interval")]
    pub time_slot_interval_minutes: u32,
    /// Furthest future date bookable, in days from today (bounds the date
    /// picker, not slot generation itself)
    #[serde(default = "default_lead_days")]
    pub booking_lead_time_days: u32,
    /// Upper bound on party size per booking
    #[serde(default = "default_max_guests")]
    pub max_guests_per_booking: u32,
}

fn default_interval() -> u32 {
    30
}

fn default_lead_days() -> u32 {
    30
}

fn default_max_guests() -> u32 {
    10
}

impl Default for ReservationSettings {
    fn default() -> Self {
        Self {
            min_advance_reservation_hours: 0.0,
            time_slot_interval_minutes: default_interval(),
            booking_lead_time_days: default_lead_days(),
            max_guests_per_booking: default_max_guests(),
        }
    }
}

impl ReservationSettings {
    /// Validate the numeric policy bounds
    pub fn validate(&self) -> Result<()> {
        if self.time_slot_interval_minutes == 0 {
            return Err(Error::invalid_settings(
                "timeSlotIntervalMinutes must be greater than zero",
            ));
        }
        if !self.min_advance_reservation_hours.is_finite()
            || self.min_advance_reservation_hours < 0.0
        {
            return Err(Error::invalid_settings(
                "minAdvanceReservationHours must be a non-negative number",
            ));
        }
        if self.booking_lead_time_days == 0 {
            return Err(Error::invalid_settings(
                "bookingLeadTimeDays must be greater than zero",
            ));
        }
        if self.max_guests_per_booking == 0 {
            return Err(Error::invalid_settings(
                "maxGuestsPerBooking must be at least one",
            ));
        }
        Ok(())
    }

    /// Minimum advance lead time as whole minutes, clamped to zero
    ///
    /// Negative or non-finite stored values are treated as "no lead time"
    /// with a warning, so a corrupt settings document degrades to showing
    /// more slots rather than none.
    pub fn min_advance_minutes(&self) -> i64 {
        let hours = self.min_advance_reservation_hours;
        if !hours.is_finite() || hours < 0.0 {
            tracing::warn!(
                "minAdvanceReservationHours {} out of range, treating as 0",
                hours
            );
            return 0;
        }
        let minutes = (hours * 60.0).round();
        if minutes >= i64::MAX as f64 {
            return i64::MAX;
        }
        minutes as i64
    }
}
