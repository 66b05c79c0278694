//! Minutes-of-day arithmetic.
//!
//! Every clock time in this crate is an integer number of minutes since
//! midnight. Strings appear only at the boundary: settings and session
//! records store `HH:MM`, slot labels use `H:MM`.
//!
//! # Accepted input
//! `parse_time_to_minutes` accepts one or two hour digits, a colon, and
//! exactly two minute digits, with surrounding whitespace ignored. Hours
//! run `0..=23`; `24:00` is also accepted as the end of a day. Anything
//! else, including the empty string, is an
//! [`InvalidTimeFormat`](crate::LayoutError::InvalidTimeFormat) error.

use crate::error::{LayoutError, Result};

/// Minutes in one day.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Builds a minutes-of-day value from hours and minutes.
#[inline]
pub const fn minutes_of_day(hours: i32, minutes: i32) -> i32 {
    hours * 60 + minutes
}

/// Parses `H:MM` or `HH:MM` into minutes since midnight.
///
/// # Examples
///
/// ```
/// use u_routine::time::parse_time_to_minutes;
///
/// assert_eq!(parse_time_to_minutes("08:00").unwrap(), 480);
/// assert_eq!(parse_time_to_minutes("9:15").unwrap(), 555);
/// assert!(parse_time_to_minutes("").is_err());
/// ```
pub fn parse_time_to_minutes(s: &str) -> Result<i32> {
    let trimmed = s.trim();
    let (h, m) = trimmed
        .split_once(':')
        .ok_or_else(|| LayoutError::invalid_time(s))?;

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if h.is_empty() || h.len() > 2 || m.len() != 2 || !all_digits(h) || !all_digits(m) {
        return Err(LayoutError::invalid_time(s));
    }

    // Digits were checked above, so these cannot fail.
    let hours: i32 = h.parse().map_err(|_| LayoutError::invalid_time(s))?;
    let minutes: i32 = m.parse().map_err(|_| LayoutError::invalid_time(s))?;

    let in_range = minutes < 60 && (hours < 24 || (hours == 24 && minutes == 0));
    if !in_range {
        return Err(LayoutError::invalid_time(s));
    }

    Ok(minutes_of_day(hours, minutes))
}

/// Formats minutes since midnight as `H:MM` (hour not padded).
///
/// The value is rounded to the nearest whole minute *before* it is split
/// into hours and minutes, so `479.6` renders as `8:00` rather than
/// `7:60`. Negative values split with floor semantics (`-30` → `-1:30`).
/// A NaN input formats as `0:00`.
pub fn format_minutes_to_time(mins: f64) -> String {
    let rounded = mins.round() as i64;
    let hours = rounded.div_euclid(60);
    let minutes = rounded.rem_euclid(60);
    format!("{hours}:{minutes:02}")
}

/// Formats minutes since midnight as zero-padded `HH:MM`.
///
/// This is the storage form used by settings and session records;
/// for any `m` in `0..=1440`, `parse_time_to_minutes(&format_minutes_to_clock(m)) == Ok(m)`.
pub fn format_minutes_to_clock(mins: i32) -> String {
    let hours = mins.div_euclid(60);
    let minutes = mins.rem_euclid(60);
    format!("{hours:02}:{minutes:02}")
}

/// Formats a `[start, end)` range as `"H:MM - H:MM"`.
pub fn format_range(start_minutes: i32, end_minutes: i32) -> String {
    format!(
        "{} - {}",
        format_minutes_to_time(f64::from(start_minutes)),
        format_minutes_to_time(f64::from(end_minutes))
    )
}
