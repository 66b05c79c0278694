//! Input validation for routine settings and sessions.
//!
//! The layout functions tolerate inconsistent configuration mechanically
//! (a lunch outside the day just yields a degenerate partition). This
//! module is where such inputs are caught before they reach the grid.
//! Detects:
//! - Malformed time strings
//! - Day windows with no positive span
//! - Lunch breaks not strictly inside the day
//! - Non-positive durations
//! - Sessions on hidden days, outside the day window, or overlapping
//!
//! All checks run; every problem found is reported.

use crate::models::{intervals_overlap, Routine, RoutineSettings, Session, Weekday};
use crate::time::parse_time_to_minutes;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A time string does not parse.
    InvalidTimeFormat,
    /// The day ends at or before it starts.
    DegenerateDayWindow,
    /// The lunch break is not strictly inside the day window.
    LunchOutsideDay,
    /// A class, lunch, or session duration is zero or negative.
    NonPositiveDuration,
    /// A session falls on a day hidden by `weekends`.
    InactiveDay,
    /// A session starts before or ends after the day window.
    OutsideDayWindow,
    /// Two sessions on the same day overlap in time.
    SessionOverlap,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates routine settings.
///
/// Checks:
/// 1. `start_time`, `end_time`, `lunch_start` parse
/// 2. `end_time` is after `start_time`
/// 3. Lunch starts after the day starts and ends before the day ends
/// 4. `class_duration` and `lunch_duration` are positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_settings(settings: &RoutineSettings) -> ValidationResult {
    let mut errors = Vec::new();
    check_settings(settings, &mut errors);
    into_result(errors)
}

/// Validates sessions against settings.
///
/// Checks, per session:
/// 1. `start_time` parses (an empty start time is reported too)
/// 2. Duration is positive
/// 3. The day is active
/// 4. `[start, start + duration)` lies inside the day window
///
/// and across sessions, that no two non-cancelled sessions on the same
/// day overlap. Window checks are skipped when the settings' own times do
/// not parse; [`validate_settings`] reports that.
pub fn validate_sessions(settings: &RoutineSettings, sessions: &[Session]) -> ValidationResult {
    let mut errors = Vec::new();
    check_sessions(settings, sessions, &mut errors);
    into_result(errors)
}

/// Runs [`validate_settings`] and [`validate_sessions`] on a routine.
pub fn validate_routine(routine: &Routine) -> ValidationResult {
    let mut errors = Vec::new();
    check_settings(&routine.settings, &mut errors);
    check_sessions(&routine.settings, &routine.sessions, &mut errors);
    into_result(errors)
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_settings(settings: &RoutineSettings, errors: &mut Vec<ValidationError>) {
    let mut parse = |field: &str, value: &str| match parse_time_to_minutes(value) {
        Ok(m) => Some(m),
        Err(e) => {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeFormat,
                format!("Setting '{field}': {e}"),
            ));
            None
        }
    };
    let start = parse("start_time", &settings.start_time);
    let end = parse("end_time", &settings.end_time);
    let lunch_start = parse("lunch_start", &settings.lunch_start);

    if settings.class_duration <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveDuration,
            format!("Class duration must be positive, got {}", settings.class_duration),
        ));
    }
    if settings.lunch_duration <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveDuration,
            format!("Lunch duration must be positive, got {}", settings.lunch_duration),
        ));
    }

    if let (Some(start), Some(end)) = (start, end) {
        if end <= start {
            errors.push(ValidationError::new(
                ValidationErrorKind::DegenerateDayWindow,
                format!(
                    "Day ends at {} which is not after its start {}",
                    settings.end_time, settings.start_time
                ),
            ));
        } else if let Some(lunch_start) = lunch_start {
            let lunch_end = lunch_start.saturating_add(settings.lunch_duration);
            if lunch_start <= start || lunch_end >= end {
                errors.push(ValidationError::new(
                    ValidationErrorKind::LunchOutsideDay,
                    format!(
                        "Lunch {} + {} min is not inside the day {}-{}",
                        settings.lunch_start,
                        settings.lunch_duration,
                        settings.start_time,
                        settings.end_time
                    ),
                ));
            }
        }
    }
}

fn check_sessions(
    settings: &RoutineSettings,
    sessions: &[Session],
    errors: &mut Vec<ValidationError>,
) {
    let window = settings.day_window().ok().filter(|w| !w.is_degenerate());
    let active = settings.active_days();

    // (day, start, end, index) for the overlap pass
    let mut intervals: Vec<(Weekday, i32, i32, usize)> = Vec::new();

    for (index, session) in sessions.iter().enumerate() {
        let who = format!("Session {index} ({} on {})", session.subject, session.day);

        if !active.contains(&session.day) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InactiveDay,
                format!("{who} is on a hidden day"),
            ));
        }

        if session.duration_minutes <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                format!("{who} has duration {}", session.duration_minutes),
            ));
        }

        let start = match parse_time_to_minutes(&session.start_time) {
            Ok(m) => m,
            Err(e) => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidTimeFormat,
                    format!("{who}: {e}"),
                ));
                continue;
            }
        };
        let end = start.saturating_add(session.duration_minutes.max(0));

        if let Some(window) = window {
            if !window.covers(start, end) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OutsideDayWindow,
                    format!(
                        "{who} at {} for {} min is outside {}-{}",
                        session.start_time,
                        session.duration_minutes,
                        settings.start_time,
                        settings.end_time
                    ),
                ));
            }
        }

        if !session.cancelled && session.duration_minutes > 0 {
            intervals.push((session.day, start, end, index));
        }
    }

    intervals.sort_by_key(|&(day, start, _, index)| (day, start, index));
    for (i, a) in intervals.iter().enumerate() {
        for b in intervals[i + 1..].iter().take_while(|b| b.0 == a.0) {
            if intervals_overlap(a.1, a.2, b.1, b.2) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SessionOverlap,
                    format!(
                        "Sessions {} and {} overlap on {}",
                        sessions[a.3].subject, sessions[b.3].subject, a.0
                    ),
                ));
            }
        }
    }
}
