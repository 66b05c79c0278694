//! Position mapping: absolute times to fractions of the day axis.
//!
//! The mapper is a pure affine transform. It does not clamp and does not
//! validate that the interval lies inside the window; deciding whether to
//! clip or flag overflow is left to the renderer
//! (see [`Placement::overflows`]).

use crate::error::{LayoutError, Result};
use crate::models::{DayWindow, Placement};
use crate::time::parse_time_to_minutes;

/// Maps a `start_time` / `duration_minutes` pair onto `day`.
///
/// # Errors
/// - [`LayoutError::DegenerateWindow`] if the window span is not positive.
/// - [`LayoutError::InvalidTimeFormat`] if `start_time` is non-empty and
///   does not parse.
///
/// An empty (or blank) `start_time` yields [`Placement::EMPTY`].
///
/// # Examples
///
/// ```
/// use u_routine::layout::map_position;
/// use u_routine::models::DayWindow;
///
/// let day = DayWindow::new(480, 1020); // 08:00–17:00
/// let p = map_position(day, "07:00", 60).unwrap();
/// assert!(p.offset_fraction < 0.0);
/// ```
pub fn map_position(day: DayWindow, start_time: &str, duration_minutes: i32) -> Result<Placement> {
    let span = checked_span(day)?;
    if start_time.trim().is_empty() {
        return Ok(Placement::EMPTY);
    }
    let start = parse_time_to_minutes(start_time)?;
    Ok(place(day.start_minutes, span, start, duration_minutes))
}

/// Maps an interval given in absolute minutes onto `day`.
///
/// Same transform as [`map_position`] without the string parsing.
pub fn map_minutes(day: DayWindow, start_minutes: i32, duration_minutes: i32) -> Result<Placement> {
    let span = checked_span(day)?;
    Ok(place(day.start_minutes, span, start_minutes, duration_minutes))
}

/// Fraction of the day axis at which an absolute minute falls.
pub fn fraction_at(day: DayWindow, minute: i32) -> Result<f64> {
    let span = checked_span(day)?;
    Ok(f64::from(minute - day.start_minutes) / span)
}

fn checked_span(day: DayWindow) -> Result<f64> {
    if day.is_degenerate() {
        return Err(LayoutError::DegenerateWindow {
            start_minutes: day.start_minutes,
            end_minutes: day.end_minutes,
        });
    }
    Ok(f64::from(day.span_minutes()))
}

#[inline]
fn place(day_start: i32, span: f64, start_minutes: i32, duration_minutes: i32) -> Placement {
    Placement::new(
        f64::from(start_minutes - day_start) / span,
        f64::from(duration_minutes) / span,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn day() -> DayWindow {
        DayWindow::new(480, 1020)
    }

    #[test]
    fn test_basic_placement() {
        let p = map_position(day(), "09:15", 75).unwrap();
        assert!((p.offset_fraction - 75.0 / 540.0).abs() < 1e-10);
        assert!((p.width_fraction - 75.0 / 540.0).abs() < 1e-10);

        let p = map_position(day(), "08:00", 540).unwrap();
        assert_eq!(p.offset_fraction, 0.0);
        assert_eq!(p.width_fraction, 1.0);
    }

    #[test]
    fn test_out_of_window_is_not_an_error() {
        let p = map_position(day(), "07:00", 60).unwrap();
        assert!((p.offset_fraction - (-60.0 / 540.0)).abs() < 1e-10);
        assert!(p.overflows());

        let p = map_position(day(), "16:30", 60).unwrap();
        assert!(p.end_fraction() > 1.0);
    }

    #[test]
    fn test_empty_start_time() {
        assert_eq!(map_position(day(), "", 75).unwrap(), Placement::EMPTY);
        assert_eq!(map_position(day(), "   ", 75).unwrap(), Placement::EMPTY);
    }

    #[test]
    fn test_malformed_start_time() {
        let err = map_position(day(), "9.15", 75).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidTimeFormat { .. }));
    }

    #[test]
    fn test_degenerate_window() {
        for w in [DayWindow::new(600, 600), DayWindow::new(600, 480)] {
            assert_eq!(
                map_position(w, "09:00", 60).unwrap_err(),
                LayoutError::DegenerateWindow {
                    start_minutes: w.start_minutes,
                    end_minutes: w.end_minutes
                }
            );
            // Degenerate windows fail even with no start time.
            assert!(map_position(w, "", 60).is_err());
            assert!(fraction_at(w, 500).is_err());
        }
    }

    #[test]
    fn test_negative_and_zero_duration() {
        let p = map_position(day(), "10:00", 0).unwrap();
        assert!(p.is_empty());
        let p = map_position(day(), "10:00", -54).unwrap();
        assert!((p.width_fraction + 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_map_minutes_matches_map_position() {
        assert_eq!(
            map_minutes(day(), 555, 75).unwrap(),
            map_position(day(), "09:15", 75).unwrap()
        );
        assert!((fraction_at(day(), 750).unwrap() - 0.5).abs() < 1e-10);
    }

    proptest! {
        #[test]
        fn prop_width_is_linear_in_duration(duration in 0i32..600, minute in 0i32..1440) {
            let a = map_minutes(day(), minute, duration).unwrap();
            let b = map_minutes(day(), minute, duration * 2).unwrap();
            prop_assert!((b.width_fraction - 2.0 * a.width_fraction).abs() < 1e-12);
            prop_assert_eq!(a.offset_fraction, b.offset_fraction);
        }

        #[test]
        fn prop_offset_is_affine_in_start(minute in 0i32..1400, shift in 1i32..40) {
            let a = map_minutes(day(), minute, 30).unwrap();
            let b = map_minutes(day(), minute + shift, 30).unwrap();
            let expected = f64::from(shift) / 540.0;
            prop_assert!((b.offset_fraction - a.offset_fraction - expected).abs() < 1e-12);
        }

        #[test]
        fn prop_bit_identical_on_repeat(h in 0i32..24, m in 0i32..60, duration in -100i32..600) {
            let s = format!("{h:02}:{m:02}");
            let a = map_position(day(), &s, duration).unwrap();
            let b = map_position(day(), &s, duration).unwrap();
            prop_assert_eq!(a.offset_fraction.to_bits(), b.offset_fraction.to_bits());
            prop_assert_eq!(a.width_fraction.to_bits(), b.width_fraction.to_bits());
        }
    }
}
