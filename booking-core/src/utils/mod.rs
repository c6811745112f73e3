//! Utility modules: clock parsing/formatting and booking validation helpers

pub mod time;
pub mod validation;
