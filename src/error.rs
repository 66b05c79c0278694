//! Error types for the layout engine.
//!
//! Only two failures can reach a caller of the core computations: a time
//! string that does not parse, and a day window with no positive span.
//! Configuration inconsistencies (lunch outside the day, non-positive
//! durations) are reported by [`crate::validation`] instead; the layout
//! functions tolerate them mechanically.

use thiserror::Error;

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors raised by time parsing and position mapping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A time string is empty or not of the form `H:MM` / `HH:MM`.
    #[error("invalid time format: {input:?} (expected H:MM or HH:MM)")]
    InvalidTimeFormat {
        /// The offending input.
        input: String,
    },

    /// The day window ends at or before it starts.
    #[error("degenerate day window: end {end_minutes} <= start {start_minutes}")]
    DegenerateWindow {
        /// Window start (minutes since midnight).
        start_minutes: i32,
        /// Window end (minutes since midnight).
        end_minutes: i32,
    },
}

impl LayoutError {
    pub(crate) fn invalid_time(input: impl Into<String>) -> Self {
        Self::InvalidTimeFormat {
            input: input.into(),
        }
    }
}
