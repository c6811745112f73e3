//! Availability computation
//!
//! The one algorithmic piece of the reservation system: turning a day's
//! service windows plus the booking policy into the list of bookable slots.

pub mod calculator;
pub mod engine;

pub use engine::compute_available_slots;
