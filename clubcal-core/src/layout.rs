//! Placement of occurrences inside a day's time grid.
//!
//! Positions are percentages of the grid height so any renderer can scale
//! them. Hour rows are a rendering aid only.

use serde::{Deserialize, Serialize};

use crate::occurrence::Occurrence;
use crate::time::{MINUTES_PER_DAY, format_minutes, parse_time};

/// The time span covered by a day column, in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpan {
    pub start_minutes: u32,
    pub end_minutes: u32,
}

impl Default for GridSpan {
    fn default() -> Self {
        GridSpan {
            start_minutes: 0,
            end_minutes: MINUTES_PER_DAY,
        }
    }
}

impl GridSpan {
    pub fn new(start_minutes: u32, end_minutes: u32) -> Self {
        GridSpan {
            start_minutes,
            end_minutes,
        }
    }

    /// Build a span from two `HH:MM` strings.
    pub fn from_times(start: &str, end: &str) -> Option<Self> {
        let span = GridSpan::new(parse_time(start)?, parse_time(end)?);
        (!span.is_empty()).then_some(span)
    }

    pub fn len(&self) -> u32 {
        self.end_minutes.saturating_sub(self.start_minutes)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hour row labels covering the span, e.g. `["06:00", "07:00", ...]`.
    pub fn rows(&self) -> Vec<String> {
        let first_hour = self.start_minutes / 60;
        let last_hour = self.end_minutes.div_ceil(60);
        (first_hour..last_hour).map(|h| format_minutes(h * 60)).collect()
    }
}

/// Vertical placement of a slot within the grid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SlotPosition {
    pub top_percent: f64,
    pub height_percent: f64,
}

impl SlotPosition {
    pub const HIDDEN: SlotPosition = SlotPosition {
        top_percent: 0.0,
        height_percent: 0.0,
    };

    pub fn is_hidden(&self) -> bool {
        self.height_percent <= 0.0
    }
}

/// Position an occurrence in the grid.
///
/// Unreadable times or an empty grid give a zero-size slot instead of an
/// error, so one broken rule never takes the grid down.
pub fn position(occurrence: &Occurrence, grid: GridSpan) -> SlotPosition {
    match (occurrence.start_minutes(), occurrence.end_minutes()) {
        (Some(start), Some(end)) => position_minutes(start, end, grid),
        _ => SlotPosition::HIDDEN,
    }
}

fn position_minutes(start: u32, end: u32, grid: GridSpan) -> SlotPosition {
    if grid.is_empty() {
        return SlotPosition::HIDDEN;
    }

    let span = f64::from(grid.len());
    let top = (f64::from(start) - f64::from(grid.start_minutes)) / span * 100.0;
    let height = (f64::from(end) - f64::from(start)) / span * 100.0;

    SlotPosition {
        top_percent: top.max(0.0),
        height_percent: height.max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{RuleStatus, ScheduleRule};
    use chrono::NaiveDate;

    fn rule(start: &str, end: &str) -> ScheduleRule {
        ScheduleRule {
            id: "r".to_string(),
            day_of_week: 1,
            start_time: start.to_string(),
            end_time: end.to_string(),
            discipline_name: None,
            category_name: None,
            teacher_name: None,
            room: None,
            max_capacity: None,
            enrolled_count: 0,
            status: RuleStatus::Active,
            created_at: None,
        }
    }

    fn place(start: &str, end: &str, grid: GridSpan) -> SlotPosition {
        let rule = rule(start, end);
        let occ = Occurrence::new(&rule, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        position(&occ, grid)
    }

    #[test]
    fn test_position_within_day_grid() {
        let grid = GridSpan::from_times("06:00", "22:00").unwrap();
        assert_eq!(grid.len(), 960);

        let slot = place("08:30", "10:00", grid);
        assert_eq!(slot.top_percent, 15.625);
        assert_eq!(slot.height_percent, 9.375);
    }

    #[test]
    fn test_full_day_grid() {
        let slot = place("12:00", "18:00", GridSpan::default());
        assert_eq!(slot.top_percent, 50.0);
        assert_eq!(slot.height_percent, 25.0);
    }

    #[test]
    fn test_start_before_grid_clamps_top() {
        let grid = GridSpan::from_times("08:00", "20:00").unwrap();
        let slot = place("07:00", "09:00", grid);
        assert_eq!(slot.top_percent, 0.0);
        assert!(slot.height_percent > 0.0);
    }

    #[test]
    fn test_inverted_times_give_zero_height() {
        let slot = place("19:00", "18:00", GridSpan::default());
        assert_eq!(slot.height_percent, 0.0);
        assert!(slot.is_hidden());
    }

    #[test]
    fn test_unparseable_times_are_hidden() {
        assert_eq!(place("", "10:00", GridSpan::default()), SlotPosition::HIDDEN);
        assert_eq!(place("10:00", "later", GridSpan::default()), SlotPosition::HIDDEN);
    }

    #[test]
    fn test_empty_grid_is_hidden() {
        assert_eq!(
            place("10:00", "11:00", GridSpan::new(600, 600)),
            SlotPosition::HIDDEN
        );
        assert!(GridSpan::from_times("10:00", "09:00").is_none());
    }

    #[test]
    fn test_rows() {
        let grid = GridSpan::from_times("06:00", "09:30").unwrap();
        assert_eq!(grid.rows(), ["06:00", "07:00", "08:00", "09:00"]);
        assert_eq!(GridSpan::default().rows().len(), 24);
    }
}
