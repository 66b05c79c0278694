//! Routine domain models.
//!
//! Configuration inputs ([`RoutineSettings`], [`DayWindow`], [`LunchWindow`]),
//! persisted records ([`Session`], [`Routine`]), and layout outputs
//! ([`Slot`], [`Placement`]).
//!
//! # Time Model
//! Minutes since midnight, half-open intervals. See [`crate::time`].

mod routine;
mod session;
mod slot;
mod window;

pub use routine::{
    effective_class_duration, Routine, RoutineSettings, DEFAULT_CLASS_DURATION,
    DEFAULT_LUNCH_DURATION,
};
pub use session::{Session, UnknownWeekday, Weekday};
pub use slot::{Placement, Slot, LUNCH_LABEL};
pub use window::{intervals_overlap, DayWindow, LunchWindow};
