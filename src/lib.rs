//! Weekly class-routine time grid.
//!
//! Lays out a routine's day as a sequence of class slots around a lunch
//! break, and places each class session on that axis as a fraction of the
//! day. Persistence, transport, and rendering are left to the caller; this
//! crate computes only where things go.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `DayWindow`, `LunchWindow`, `Slot`,
//!   `Placement`, `Session`, `RoutineSettings`, `Routine`
//! - **`layout`**: `partition`, `map_position`, and `GridLayout`
//! - **`time`**: `HH:MM` ⇄ minutes-of-day helpers
//! - **`validation`**: Settings and session consistency checks
//!
//! # Example
//!
//! ```
//! use u_routine::layout::GridLayout;
//! use u_routine::models::{Routine, Session, Weekday};
//!
//! let routine = Routine::new("Fall")
//!     .with_session(Session::new(Weekday::Monday, "09:15", 75, "Physics"));
//! let grid = GridLayout::build(&routine).unwrap();
//!
//! assert_eq!(grid.slots[1].label, "9:15 - 10:30");
//! let placed = &grid.row(Weekday::Monday).unwrap().sessions[0];
//! assert!((placed.placement.offset_fraction - 75.0 / 540.0).abs() < 1e-12);
//! ```

pub mod error;
pub mod layout;
pub mod models;
pub mod time;
pub mod validation;

pub use error::{LayoutError, Result};
