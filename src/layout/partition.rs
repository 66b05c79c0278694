//! Slot partitioning.
//!
//! Splits a day window into class periods around a single lunch break.
//!
//! # Algorithm
//!
//! 1. Walk forward from the day start in steps of the class duration while
//!    the cursor is before lunch. A step that would cross the lunch start
//!    is clamped to end exactly there.
//! 2. Emit one lunch slot.
//! 3. Walk forward from the lunch end under the same rule, clamping
//!    against the day end.
//!
//! Because the cursor always advances by a positive amount and each loop
//! runs only while the cursor is strictly before its bound, every class
//! slot has positive width; only the final slot of each segment can be
//! shorter than the class duration.
//!
//! # Degenerate configurations
//!
//! A lunch that starts at or before the day start produces no morning
//! slots; a lunch that ends at or after the day end produces no afternoon
//! slots. Neither is an error here. The lunch slot is always emitted, even
//! when it lies outside the window or has zero length.

use log::{debug, trace, warn};

use crate::models::{effective_class_duration, DayWindow, LunchWindow, Slot};

/// Partitions `day` into class slots and one lunch slot.
///
/// A non-positive `class_duration` is replaced by
/// [`DEFAULT_CLASS_DURATION`](crate::models::DEFAULT_CLASS_DURATION).
///
/// # Examples
///
/// ```
/// use u_routine::layout::partition;
/// use u_routine::models::{DayWindow, LunchWindow};
///
/// let slots = partition(DayWindow::new(480, 1020), 100, LunchWindow::new(780, 90));
/// let labels: Vec<_> = slots.iter().map(|s| s.label.as_str()).collect();
/// assert_eq!(
///     labels,
///     ["8:00 - 9:40", "9:40 - 11:20", "11:20 - 13:00", "Lunch",
///      "14:30 - 16:10", "16:10 - 17:00"]
/// );
/// ```
pub fn partition(day: DayWindow, class_duration: i32, lunch: LunchWindow) -> Vec<Slot> {
    let step = effective_class_duration(class_duration);
    if step != class_duration {
        debug!("class duration {class_duration} is not positive, using {step}");
    }
    if !lunch.is_inside(&day) {
        warn!(
            "lunch [{}, {}) is not inside day [{}, {}); layout will be degenerate",
            lunch.start_minutes,
            lunch.end_minutes(),
            day.start_minutes,
            day.end_minutes
        );
    }

    let mut slots = Vec::new();
    walk(&mut slots, day.start_minutes, day.start_minutes, lunch.start_minutes, step);
    slots.push(Slot::lunch(
        day.start_minutes,
        lunch.start_minutes,
        lunch.duration_minutes,
    ));
    walk(&mut slots, day.start_minutes, lunch.end_minutes(), day.end_minutes, step);

    debug!(
        "partitioned [{}, {}) into {} slots (step {step})",
        day.start_minutes,
        day.end_minutes,
        slots.len()
    );
    slots
}

/// Emits class slots from `from` up to `bound`, clamping the last one.
fn walk(slots: &mut Vec<Slot>, day_start: i32, from: i32, bound: i32, step: i32) {
    let mut current = from;
    while current < bound {
        let next = current.saturating_add(step).min(bound);
        let slot = Slot::class(day_start, current, next);
        trace!("slot {}", slot.label);
        slots.push(slot);
        current = next;
    }
}
