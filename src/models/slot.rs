//! Layout output models: slots and placements.
//!
//! Both are value types recomputed on every layout pass. A [`Slot`] is one
//! segment of the day partition; a [`Placement`] is the normalized
//! position of an arbitrary interval on the day axis.

use serde::{Deserialize, Serialize};

use crate::time::format_range;

/// Label of the lunch slot.
pub const LUNCH_LABEL: &str = "Lunch";

/// One contiguous segment of the day window: a class period or lunch.
///
/// Offsets are relative to the day window start, so a partition of a
/// window with span `S` covers `[0, S)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slot {
    /// Start relative to the day window start (minutes).
    pub offset_minutes: i32,
    /// Length (minutes).
    pub duration_minutes: i32,
    /// Display label: `"H:MM - H:MM"` for classes, [`LUNCH_LABEL`] for lunch.
    pub label: String,
    /// Whether this is the lunch break.
    pub is_lunch: bool,
}

impl Slot {
    /// Creates a class slot covering `[start, end)` in absolute minutes.
    pub fn class(day_start: i32, start_minutes: i32, end_minutes: i32) -> Self {
        Self {
            offset_minutes: start_minutes.saturating_sub(day_start),
            duration_minutes: end_minutes.saturating_sub(start_minutes),
            label: format_range(start_minutes, end_minutes),
            is_lunch: false,
        }
    }

    /// Creates the lunch slot for `[start, start + duration)` in absolute minutes.
    pub fn lunch(day_start: i32, start_minutes: i32, duration_minutes: i32) -> Self {
        Self {
            offset_minutes: start_minutes.saturating_sub(day_start),
            duration_minutes,
            label: LUNCH_LABEL.to_string(),
            is_lunch: true,
        }
    }

    /// End relative to the day window start (minutes, exclusive).
    #[inline]
    pub fn end_offset_minutes(&self) -> i32 {
        self.offset_minutes.saturating_add(self.duration_minutes)
    }

    /// Absolute `(start, end)` minutes since midnight.
    pub fn time_range(&self, day_start: i32) -> (i32, i32) {
        let start = day_start.saturating_add(self.offset_minutes);
        (start, start.saturating_add(self.duration_minutes))
    }

    /// `"H:MM - H:MM"` derived from the offsets rather than the stored label.
    ///
    /// Renderers use this for the lunch header, whose stored label is the
    /// fixed [`LUNCH_LABEL`].
    pub fn range_label(&self, day_start: i32) -> String {
        let (start, end) = self.time_range(day_start);
        format_range(start, end)
    }
}

/// Normalized position of an interval on the day axis.
///
/// Fractions are of the day window span. They are not clamped: an
/// interval starting before the window has a negative offset, one
/// running past it has `offset + width > 1`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Placement {
    /// Start as a fraction of the span from the window start.
    pub offset_fraction: f64,
    /// Length as a fraction of the span.
    pub width_fraction: f64,
}

impl Placement {
    /// Zero-area placement at the window start.
    pub const EMPTY: Self = Self {
        offset_fraction: 0.0,
        width_fraction: 0.0,
    };

    /// Creates a new placement.
    pub fn new(offset_fraction: f64, width_fraction: f64) -> Self {
        Self {
            offset_fraction,
            width_fraction,
        }
    }

    /// End as a fraction of the span.
    #[inline]
    pub fn end_fraction(&self) -> f64 {
        self.offset_fraction + self.width_fraction
    }

    /// Whether the placement has no width.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width_fraction == 0.0
    }

    /// Whether any part of the placement falls outside `[0, 1]`.
    pub fn overflows(&self) -> bool {
        self.offset_fraction < 0.0 || self.end_fraction() > 1.0
    }

    /// The placement as CSS-style percentages `(left, width)`.
    pub fn as_percent(&self) -> (f64, f64) {
        (self.offset_fraction * 100.0, self.width_fraction * 100.0)
    }
}
