//! Data models
//!
//! Shared with the reservation frontend via the document store. Field names
//! follow the store's camelCase convention, so every struct here carries
//! `#[serde(rename_all = "camelCase")]`.

pub mod schedule;
pub mod settings;
pub mod slot;

// Re-exports
pub use schedule::*;
pub use settings::*;
pub use slot::*;
