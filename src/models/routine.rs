//! Routine and routine settings.
//!
//! [`RoutineSettings`] is the explicit configuration passed into the layout
//! engine. Times are kept as the `HH:MM` strings users edit; they are
//! parsed into [`DayWindow`] / [`LunchWindow`] on demand.
//!
//! # Defaults
//!
//! | Field | Default |
//! |-------|---------|
//! | `start_time` | `08:00` |
//! | `end_time` | `17:00` |
//! | `class_duration` | 75 |
//! | `lunch_start` | `13:00` |
//! | `lunch_duration` | 90 |
//! | `weekends` | `Saturday,Sunday` |

use log::warn;
use serde::{Deserialize, Serialize};

use super::{DayWindow, LunchWindow, Session, Weekday};
use crate::error::Result;
use crate::time::parse_time_to_minutes;

/// Class length used when the configured duration is not positive.
pub const DEFAULT_CLASS_DURATION: i32 = 75;
/// Default lunch length (minutes).
pub const DEFAULT_LUNCH_DURATION: i32 = 90;

/// Grid configuration for one routine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RoutineSettings {
    /// Day start, `HH:MM`.
    pub start_time: String,
    /// Day end, `HH:MM`.
    pub end_time: String,
    /// Class period length (minutes).
    pub class_duration: i32,
    /// Lunch start, `HH:MM`.
    pub lunch_start: String,
    /// Lunch length (minutes).
    pub lunch_duration: i32,
    /// Comma-separated names of days hidden from the grid.
    pub weekends: String,
}

impl Default for RoutineSettings {
    fn default() -> Self {
        Self {
            start_time: "08:00".to_string(),
            end_time: "17:00".to_string(),
            class_duration: DEFAULT_CLASS_DURATION,
            lunch_start: "13:00".to_string(),
            lunch_duration: DEFAULT_LUNCH_DURATION,
            weekends: "Saturday,Sunday".to_string(),
        }
    }
}

impl RoutineSettings {
    /// Creates settings with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the day window.
    pub fn with_day(mut self, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        self.start_time = start_time.into();
        self.end_time = end_time.into();
        self
    }

    /// Sets the class period length.
    pub fn with_class_duration(mut self, minutes: i32) -> Self {
        self.class_duration = minutes;
        self
    }

    /// Sets the lunch break.
    pub fn with_lunch(mut self, start_time: impl Into<String>, duration_minutes: i32) -> Self {
        self.lunch_start = start_time.into();
        self.lunch_duration = duration_minutes;
        self
    }

    /// Sets the hidden days from a list.
    pub fn with_weekends(mut self, days: &[Weekday]) -> Self {
        self.weekends = days
            .iter()
            .map(|d| d.name())
            .collect::<Vec<_>>()
            .join(",");
        self
    }

    /// Parses the day window.
    pub fn day_window(&self) -> Result<DayWindow> {
        Ok(DayWindow::new(
            parse_time_to_minutes(&self.start_time)?,
            parse_time_to_minutes(&self.end_time)?,
        ))
    }

    /// Parses the lunch window.
    pub fn lunch_window(&self) -> Result<LunchWindow> {
        Ok(LunchWindow::new(
            parse_time_to_minutes(&self.lunch_start)?,
            self.lunch_duration,
        ))
    }

    /// Class length actually used for partitioning.
    #[inline]
    pub fn effective_class_duration(&self) -> i32 {
        effective_class_duration(self.class_duration)
    }

    /// Days listed in `weekends`. Unrecognized names are skipped.
    pub fn weekend_days(&self) -> Vec<Weekday> {
        self.weekends
            .split(',')
            .filter(|name| !name.trim().is_empty())
            .filter_map(|name| match name.parse::<Weekday>() {
                Ok(day) => Some(day),
                Err(e) => {
                    warn!("ignoring weekend entry: {e}");
                    None
                }
            })
            .collect()
    }

    /// Days shown on the grid, in week order.
    pub fn active_days(&self) -> Vec<Weekday> {
        let weekends = self.weekend_days();
        Weekday::ALL
            .into_iter()
            .filter(|d| !weekends.contains(d))
            .collect()
    }
}

/// Substitutes [`DEFAULT_CLASS_DURATION`] for a non-positive class length.
#[inline]
pub fn effective_class_duration(class_duration: i32) -> i32 {
    if class_duration > 0 {
        class_duration
    } else {
        DEFAULT_CLASS_DURATION
    }
}

/// A named weekly routine: settings plus its sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Routine {
    /// Display name.
    pub name: String,
    /// Grid configuration.
    #[serde(flatten)]
    pub settings: RoutineSettings,
    /// Scheduled sessions, any order.
    #[serde(default)]
    pub sessions: Vec<Session>,
}

impl Routine {
    /// Creates an empty routine with default settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            settings: RoutineSettings::default(),
            sessions: Vec::new(),
        }
    }

    /// Replaces the settings.
    pub fn with_settings(mut self, settings: RoutineSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Adds a session.
    pub fn with_session(mut self, session: Session) -> Self {
        self.sessions.push(session);
        self
    }

    /// Sessions scheduled on a given day, in stored order.
    pub fn sessions_on(&self, day: Weekday) -> impl Iterator<Item = &Session> {
        self.sessions.iter().filter(move |s| s.day == day)
    }
}
