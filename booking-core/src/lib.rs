//! Reservation availability core
//!
//! Pure slot computation for restaurant bookings: given a day's operating
//! schedule and the booking-policy settings, enumerate the bookable time
//! slots for a guest-selected date. No storage, transport, or UI concerns —
//! the surrounding application loads schedules/settings from its document
//! store and renders whatever this crate returns.

pub mod availability;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports
pub use availability::compute_available_slots;
pub use error::{Error, Result};
pub use models::{
    DaySchedule, ReservationSettings, Slot, TimeWindow, Weekday, WeeklySchedule,
};
pub use utils::validation::{booking_date_range, validate_guest_count};
