//! Class session model.
//!
//! A session is one class meeting on a weekday. Records are owned by the
//! persistence layer; the layout engine reads only `start_time` and
//! `duration`. Field names follow the stored form so records deserialize
//! directly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day of the week, Monday first.
///
/// Ordering follows the week, so sorting by `Weekday` gives grid row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    /// Monday (first grid row).
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday (hidden by default).
    Saturday,
    /// Sunday (hidden by default).
    Sunday,
}

impl Weekday {
    /// All days in week order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// English day name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a day name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown weekday: {0:?}")]
pub struct UnknownWeekday(pub String);

impl FromStr for Weekday {
    type Err = UnknownWeekday;

    /// Parses a full English day name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Weekday::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownWeekday(s.to_string()))
    }
}

/// A class session placed on the weekly grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Day of the week.
    pub day: Weekday,
    /// Start time, `HH:MM`. May be empty while a record is being edited.
    pub start_time: String,
    /// Length in minutes.
    #[serde(rename = "duration")]
    pub duration_minutes: i32,
    /// Subject name.
    pub subject: String,
    /// Room or venue.
    #[serde(default)]
    pub location: Option<String>,
    /// Cancelled sessions render differently but lay out the same.
    #[serde(rename = "is_cancelled", default)]
    pub cancelled: bool,
}

impl Session {
    /// Creates a new session.
    pub fn new(
        day: Weekday,
        start_time: impl Into<String>,
        duration_minutes: i32,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            day,
            start_time: start_time.into(),
            duration_minutes,
            subject: subject.into(),
            location: None,
            cancelled: false,
        }
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Marks the session as cancelled.
    pub fn cancelled(mut self) -> Self {
        self.cancelled = true;
        self
    }
}
