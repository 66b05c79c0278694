//! Time-grid layout engine.
//!
//! Two independent pure functions and one composer:
//!
//! - [`partition`]: day window → ordered class/lunch [`Slot`](crate::models::Slot)s.
//! - [`map_position`]: start time + duration → [`Placement`](crate::models::Placement).
//! - [`GridLayout::build`]: runs both against one shared day window for a
//!   whole [`Routine`](crate::models::Routine).
//!
//! The functions hold no state and perform no I/O; identical inputs give
//! bit-identical outputs. Callers that use [`partition`] and
//! [`map_position`] directly must pass the same day window to both, or
//! session rectangles will not line up with slot boundaries.

mod grid;
mod partition;
mod position;

pub use grid::{DayRow, GridLayout, HeaderAnchor, PlacedSession, SkippedSession};
pub use partition::partition;
pub use position::{fraction_at, map_minutes, map_position};
