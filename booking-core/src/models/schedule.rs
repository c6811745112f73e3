//! Weekly Schedule Model

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Day of week, stored as lowercase day names in the document store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// The weekday a calendar date falls on
    pub fn of(date: NaiveDate) -> Self {
        date.weekday().into()
    }

    /// Lowercase name as stored in the document store
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One contiguous open-for-service period within a day (e.g. dinner 17:00-22:00)
///
/// Times are zero-padded 24-hour `HH:MM` strings. `start_time < end_time` and
/// non-overlap between windows are caller responsibility; an inverted window
/// simply produces no slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    pub start_time: String,
    pub end_time: String,
}

impl TimeWindow {
    pub fn new(start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }
}

/// Operating schedule for a single weekday
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub day_of_week: Weekday,
    pub is_open: bool,
    /// Open service windows, in service order. Ignored when `is_open` is false.
    #[serde(default)]
    pub time_slots: Vec<TimeWindow>,
}

impl DaySchedule {
    /// A closed day with no windows
    pub fn closed(day_of_week: Weekday) -> Self {
        Self {
            day_of_week,
            is_open: false,
            time_slots: Vec::new(),
        }
    }

    /// Windows that actually apply: empty when the day is marked closed
    pub fn effective_windows(&self) -> &[TimeWindow] {
        if self.is_open {
            &self.time_slots
        } else {
            &[]
        }
    }
}

/// Full weekly schedule, one entry per weekday
///
/// The document store holds these as an array; entries may be missing for
/// days that were never configured, which read as closed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule {
    pub days: Vec<DaySchedule>,
}

impl WeeklySchedule {
    pub fn new(days: Vec<DaySchedule>) -> Self {
        Self { days }
    }

    /// The schedule entry for a weekday, or a closed day when unconfigured
    pub fn day_for(&self, weekday: Weekday) -> DaySchedule {
        self.days
            .iter()
            .find(|d| d.day_of_week == weekday)
            .cloned()
            .unwrap_or_else(|| DaySchedule::closed(weekday))
    }

    /// Resolve the schedule entry for a calendar date
    pub fn for_date(&self, date: NaiveDate) -> DaySchedule {
        self.day_for(Weekday::of(date))
    }
}
