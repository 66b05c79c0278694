//! Day and lunch window models.
//!
//! # Time Model
//! All times are minutes since midnight. Intervals are half-open:
//! `[start, end)` includes the start minute and excludes the end.
//!
//! # Expected shape
//! A well-formed configuration has
//! `day.start < lunch.start` and `lunch.end < day.end`.
//! The layout functions do not enforce this; see
//! [`validate_settings`](crate::validation::validate_settings).

use serde::{Deserialize, Serialize};

/// The visible time span of one grid day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DayWindow {
    /// Window start (minutes since midnight, inclusive).
    pub start_minutes: i32,
    /// Window end (minutes since midnight, exclusive).
    pub end_minutes: i32,
}

impl DayWindow {
    /// Creates a new day window.
    pub fn new(start_minutes: i32, end_minutes: i32) -> Self {
        Self {
            start_minutes,
            end_minutes,
        }
    }

    /// Length of the window in minutes. Non-positive for degenerate windows.
    #[inline]
    pub fn span_minutes(&self) -> i32 {
        self.end_minutes - self.start_minutes
    }

    /// Whether the window has a positive span.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.span_minutes() <= 0
    }

    /// Whether a minute falls within this window.
    #[inline]
    pub fn contains(&self, minute: i32) -> bool {
        minute >= self.start_minutes && minute < self.end_minutes
    }

    /// Whether `[start, end)` lies entirely within this window.
    pub fn covers(&self, start_minutes: i32, end_minutes: i32) -> bool {
        start_minutes >= self.start_minutes && end_minutes <= self.end_minutes
    }
}

/// The daily lunch break.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct LunchWindow {
    /// Lunch start (minutes since midnight).
    pub start_minutes: i32,
    /// Lunch length in minutes.
    pub duration_minutes: i32,
}

impl LunchWindow {
    /// Creates a new lunch window.
    pub fn new(start_minutes: i32, duration_minutes: i32) -> Self {
        Self {
            start_minutes,
            duration_minutes,
        }
    }

    /// Lunch end (minutes since midnight, exclusive). Saturates at `i32::MAX`.
    #[inline]
    pub fn end_minutes(&self) -> i32 {
        self.start_minutes.saturating_add(self.duration_minutes)
    }

    /// Whether the lunch break lies strictly inside a day window.
    pub fn is_inside(&self, day: &DayWindow) -> bool {
        day.start_minutes < self.start_minutes && self.end_minutes() < day.end_minutes
    }
}

/// Whether two half-open intervals overlap.
///
/// Touching intervals (`a_end == b_start`) do not overlap.
#[inline]
pub fn intervals_overlap(a_start: i32, a_end: i32, b_start: i32, b_end: i32) -> bool {
    a_start < b_end && b_start < a_end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_window() {
        let w = DayWindow::new(480, 1020);
        assert_eq!(w.span_minutes(), 540);
        assert!(!w.is_degenerate());
        assert!(w.contains(480));
        assert!(w.contains(1019));
        assert!(!w.contains(1020)); // exclusive end
        assert!(!w.contains(420));
        assert!(w.covers(480, 1020));
        assert!(!w.covers(420, 540));
    }

    #[test]
    fn test_degenerate_day_window() {
        assert!(DayWindow::new(600, 600).is_degenerate());
        assert!(DayWindow::new(600, 480).is_degenerate());
    }

    #[test]
    fn test_lunch_window() {
        let day = DayWindow::new(480, 1020);
        let lunch = LunchWindow::new(780, 90);
        assert_eq!(lunch.end_minutes(), 870);
        assert!(lunch.is_inside(&day));

        assert!(!LunchWindow::new(480, 60).is_inside(&day)); // starts with the day
        assert!(!LunchWindow::new(960, 60).is_inside(&day)); // ends with the day

        let huge = LunchWindow::new(780, i32::MAX);
        assert_eq!(huge.end_minutes(), i32::MAX);
        assert!(!huge.is_inside(&day));
    }

    #[test]
    fn test_intervals_overlap() {
        assert!(intervals_overlap(0, 100, 50, 150));
        assert!(intervals_overlap(50, 150, 0, 100));
        assert!(!intervals_overlap(0, 100, 100, 200)); // touching
    }
}
