//! Grid assembly for one render pass.
//!
//! [`GridLayout::build`] resolves a routine's settings once and runs both
//! the partitioner and the position mapper against that single
//! [`DayWindow`], so session rectangles line up with slot boundaries.
//! Everything it returns is in axis fractions; pixel and export work
//! belongs to the renderer.

use log::{debug, warn};
use serde::Serialize;

use super::{fraction_at, map_minutes, map_position, partition};
use crate::error::{LayoutError, Result};
use crate::models::{DayWindow, LunchWindow, Placement, Routine, Slot, Weekday};

/// Where a slot's header label is centered.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeaderAnchor {
    /// Text to draw. Lunch uses its own time range rather than the stored label.
    pub text: String,
    /// Center of the slot as a fraction of the day span.
    pub center_fraction: f64,
    /// Whether this anchors the lunch slot.
    pub is_lunch: bool,
}

/// A session positioned on its day row.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlacedSession {
    /// Index into [`Routine::sessions`].
    pub session_index: usize,
    /// Axis placement.
    pub placement: Placement,
    /// Carried through for styling; does not affect the placement.
    pub cancelled: bool,
}

/// One grid row.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DayRow {
    /// Row day.
    pub day: Weekday,
    /// Sessions on this day, in stored order.
    pub sessions: Vec<PlacedSession>,
}

/// A session that could not be placed.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkippedSession {
    /// Index into [`Routine::sessions`].
    pub session_index: usize,
    /// Why it was skipped.
    pub reason: String,
}

/// Complete layout of a routine's weekly grid.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GridLayout {
    /// Day window shared by every computation below.
    pub day: DayWindow,
    /// Lunch window used for the partition.
    pub lunch: LunchWindow,
    /// Ordered partition of the day.
    pub slots: Vec<Slot>,
    /// Header label positions, one per slot.
    pub header_anchors: Vec<HeaderAnchor>,
    /// Vertical gridline positions: the end of each slot.
    pub gridlines: Vec<f64>,
    /// The lunch band as a placement.
    pub lunch_band: Placement,
    /// Active days in week order.
    pub rows: Vec<DayRow>,
    /// Sessions left off the grid.
    pub skipped: Vec<SkippedSession>,
}

impl GridLayout {
    /// Lays out a routine.
    ///
    /// # Errors
    /// Fails if a settings time string does not parse or the day window is
    /// degenerate. A session with a malformed start time does not fail
    /// the build; it is recorded in [`GridLayout::skipped`]. Sessions on
    /// days that are not active are ignored.
    pub fn build(routine: &Routine) -> Result<Self> {
        let settings = &routine.settings;
        let day = settings.day_window()?;
        let lunch = settings.lunch_window()?;
        if day.is_degenerate() {
            return Err(LayoutError::DegenerateWindow {
                start_minutes: day.start_minutes,
                end_minutes: day.end_minutes,
            });
        }

        let slots = partition(day, settings.class_duration, lunch);

        let slot_placement = |slot: &Slot| {
            let (start, _) = slot.time_range(day.start_minutes);
            map_minutes(day, start, slot.duration_minutes)
        };

        let header_anchors = slots
            .iter()
            .map(|slot| -> Result<HeaderAnchor> {
                let placement = slot_placement(slot)?;
                Ok(HeaderAnchor {
                    text: if slot.is_lunch {
                        slot.range_label(day.start_minutes)
                    } else {
                        slot.label.clone()
                    },
                    center_fraction: placement.offset_fraction + placement.width_fraction / 2.0,
                    is_lunch: slot.is_lunch,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let gridlines = slots
            .iter()
            .map(|slot| fraction_at(day, slot.time_range(day.start_minutes).1))
            .collect::<Result<Vec<_>>>()?;

        let lunch_band = match slots.iter().find(|slot| slot.is_lunch) {
            Some(slot) => slot_placement(slot)?,
            None => Placement::EMPTY,
        };

        let mut skipped = Vec::new();
        let rows = settings
            .active_days()
            .into_iter()
            .map(|weekday| {
                let mut placed = Vec::new();
                for (index, session) in routine.sessions.iter().enumerate() {
                    if session.day != weekday {
                        continue;
                    }
                    match map_position(day, &session.start_time, session.duration_minutes) {
                        Ok(placement) => placed.push(PlacedSession {
                            session_index: index,
                            placement,
                            cancelled: session.cancelled,
                        }),
                        Err(e) => {
                            warn!("skipping session {index} ({}): {e}", session.subject);
                            skipped.push(SkippedSession {
                                session_index: index,
                                reason: e.to_string(),
                            });
                        }
                    }
                }
                DayRow {
                    day: weekday,
                    sessions: placed,
                }
            })
            .collect::<Vec<_>>();

        debug!(
            "laid out '{}': {} slots, {} rows, {} skipped",
            routine.name,
            slots.len(),
            rows.len(),
            skipped.len()
        );

        Ok(Self {
            day,
            lunch,
            slots,
            header_anchors,
            gridlines,
            lunch_band,
            rows,
            skipped,
        })
    }

    /// The row for a given day, if that day is active.
    pub fn row(&self, day: Weekday) -> Option<&DayRow> {
        self.rows.iter().find(|r| r.day == day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RoutineSettings, Session};

    fn sample_routine() -> Routine {
        Routine::new("Fall")
            .with_session(Session::new(Weekday::Monday, "08:00", 75, "Math"))
            .with_session(Session::new(Weekday::Monday, "10:30", 150, "Lab").cancelled())
            .with_session(Session::new(Weekday::Wednesday, "14:30", 75, "History"))
            .with_session(Session::new(Weekday::Saturday, "09:00", 75, "Hidden"))
    }

    #[test]
    fn test_build_default_grid() {
        let grid = GridLayout::build(&sample_routine()).unwrap();
        assert_eq!(grid.day, DayWindow::new(480, 1020));
        assert_eq!(grid.slots.len(), 7);
        assert_eq!(grid.rows.len(), 5);
        assert!(grid.row(Weekday::Saturday).is_none());
        assert!(grid.skipped.is_empty());

        let monday = grid.row(Weekday::Monday).unwrap();
        assert_eq!(monday.sessions.len(), 2);
        assert_eq!(monday.sessions[0].session_index, 0);
        assert_eq!(monday.sessions[0].placement.offset_fraction, 0.0);
        assert!(monday.sessions[1].cancelled);
        assert!((monday.sessions[1].placement.width_fraction - 150.0 / 540.0).abs() < 1e-10);

        assert!(grid.row(Weekday::Tuesday).unwrap().sessions.is_empty());
    }

    #[test]
    fn test_session_aligns_with_slot() {
        let grid = GridLayout::build(&sample_routine()).unwrap();
        let wed = grid.row(Weekday::Wednesday).unwrap();
        let p = wed.sessions[0].placement;

        // 14:30 session starts where lunch ends and ends on the next gridline.
        assert!((p.offset_fraction - grid.lunch_band.end_fraction()).abs() < 1e-10);
        assert!((p.end_fraction() - grid.gridlines[5]).abs() < 1e-10);
    }

    #[test]
    fn test_header_anchors_and_gridlines() {
        let grid = GridLayout::build(&sample_routine()).unwrap();
        assert_eq!(grid.header_anchors.len(), grid.slots.len());
        assert_eq!(grid.gridlines.len(), grid.slots.len());

        let first = &grid.header_anchors[0];
        assert_eq!(first.text, "8:00 - 9:15");
        assert!((first.center_fraction - 37.5 / 540.0).abs() < 1e-10);

        let lunch = grid.header_anchors.iter().find(|a| a.is_lunch).unwrap();
        assert_eq!(lunch.text, "13:00 - 14:30");
        assert!((lunch.center_fraction - 345.0 / 540.0).abs() < 1e-10);

        assert!((grid.gridlines.last().unwrap() - 1.0).abs() < 1e-10);
        assert!(grid.gridlines.windows(2).all(|w| w[0] < w[1]));

        assert!((grid.lunch_band.offset_fraction - 300.0 / 540.0).abs() < 1e-10);
        assert!((grid.lunch_band.width_fraction - 90.0 / 540.0).abs() < 1e-10);
    }

    #[test]
    fn test_malformed_session_is_skipped() {
        let routine = sample_routine()
            .with_session(Session::new(Weekday::Friday, "noon", 60, "Broken"))
            .with_session(Session::new(Weekday::Friday, "", 60, "Draft"));
        let grid = GridLayout::build(&routine).unwrap();

        assert_eq!(grid.skipped.len(), 1);
        assert_eq!(grid.skipped[0].session_index, 4);
        assert!(grid.skipped[0].reason.contains("noon"));

        // The empty draft still gets a zero-area placement.
        let friday = grid.row(Weekday::Friday).unwrap();
        assert_eq!(friday.sessions.len(), 1);
        assert_eq!(friday.sessions[0].placement, Placement::EMPTY);
    }

    #[test]
    fn test_degenerate_settings_fail() {
        let routine =
            Routine::new("bad").with_settings(RoutineSettings::new().with_day("17:00", "08:00"));
        assert_eq!(
            GridLayout::build(&routine).unwrap_err(),
            LayoutError::DegenerateWindow {
                start_minutes: 1020,
                end_minutes: 480
            }
        );

        let routine =
            Routine::new("bad").with_settings(RoutineSettings::new().with_lunch("1pm", 60));
        assert!(matches!(
            GridLayout::build(&routine).unwrap_err(),
            LayoutError::InvalidTimeFormat { .. }
        ));
    }

    #[test]
    fn test_band_and_gridlines_use_the_mapper() {
        let grid = GridLayout::build(&sample_routine()).unwrap();
        assert_eq!(grid.lunch_band, map_minutes(grid.day, 780, 90).unwrap());
        for (slot, line) in grid.slots.iter().zip(&grid.gridlines) {
            let end = grid.day.start_minutes + slot.end_offset_minutes();
            assert_eq!(*line, fraction_at(grid.day, end).unwrap());
        }
    }

    #[test]
    fn test_huge_durations_do_not_overflow() {
        let routine = sample_routine()
            .with_settings(RoutineSettings::new().with_class_duration(i32::MAX));
        let grid = GridLayout::build(&routine).unwrap();
        assert_eq!(grid.slots.len(), 3);
        assert!((grid.gridlines[2] - 1.0).abs() < 1e-10);

        let routine = sample_routine()
            .with_settings(RoutineSettings::new().with_lunch("13:00", i32::MAX));
        let grid = GridLayout::build(&routine).unwrap();
        assert!(grid.slots.last().unwrap().is_lunch);
        assert!(grid.lunch_band.end_fraction() > 1.0);
    }

    #[test]
    fn test_weekend_rows_follow_settings() {
        let routine = sample_routine()
            .with_settings(RoutineSettings::new().with_weekends(&[Weekday::Sunday]));
        let grid = GridLayout::build(&routine).unwrap();
        assert_eq!(grid.rows.len(), 6);
        assert_eq!(grid.row(Weekday::Saturday).unwrap().sessions.len(), 1);
    }
}
