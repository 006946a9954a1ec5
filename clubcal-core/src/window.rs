//! Visible calendar window (a week or a single day) and its navigation.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ClubcalError, ClubcalResult};
use crate::occurrence::Occurrence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Week,
    Day,
}

impl ViewMode {
    fn step(self) -> Days {
        match self {
            ViewMode::Week => Days::new(7),
            ViewMode::Day => Days::new(1),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ViewMode::Week => write!(f, "week"),
            ViewMode::Day => write!(f, "day"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(ViewMode::Week),
            "day" => Ok(ViewMode::Day),
            other => Err(format!("Unknown view '{}'. Expected 'week' or 'day'", other)),
        }
    }
}

/// The date range a user is looking at.
///
/// Week mode always shows Sunday through Saturday around `reference_date`.
/// Navigating past the representable date range leaves the window unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarWindow {
    pub mode: ViewMode,
    pub reference_date: NaiveDate,
}

impl CalendarWindow {
    pub fn new(mode: ViewMode, reference_date: NaiveDate) -> Self {
        CalendarWindow {
            mode,
            reference_date,
        }
    }

    pub fn go_today(&mut self, today: NaiveDate) {
        self.reference_date = today;
    }

    pub fn go_previous(&mut self) {
        if let Some(date) = self.reference_date.checked_sub_days(self.mode.step()) {
            self.reference_date = date;
        }
    }

    pub fn go_next(&mut self) {
        if let Some(date) = self.reference_date.checked_add_days(self.mode.step()) {
            self.reference_date = date;
        }
    }

    /// Switch between week and day view, keeping the reference date.
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// The dates on screen, in order.
    pub fn visible_days(&self) -> Vec<NaiveDate> {
        match self.mode {
            ViewMode::Day => vec![self.reference_date],
            ViewMode::Week => {
                let sunday = week_start(self.reference_date);
                sunday.iter_days().take(7).collect()
            }
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        match self.mode {
            ViewMode::Day => self.reference_date,
            ViewMode::Week => week_start(self.reference_date),
        }
    }

    pub fn last_day(&self) -> NaiveDate {
        match self.mode {
            ViewMode::Day => self.reference_date,
            ViewMode::Week => self
                .first_day()
                .checked_add_days(Days::new(6))
                .unwrap_or(NaiveDate::MAX),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day() <= date && date <= self.last_day()
    }

    /// Title for the window, e.g. "Jan 7 - 13, 2024" or "Tue Jan 9, 2024".
    pub fn label(&self) -> String {
        match self.mode {
            ViewMode::Day => self.reference_date.format("%a %b %-d, %Y").to_string(),
            ViewMode::Week => {
                let first = self.first_day();
                let last = self.last_day();
                if first.year() != last.year() {
                    format!("{} - {}", first.format("%b %-d, %Y"), last.format("%b %-d, %Y"))
                } else if first.month() != last.month() {
                    format!("{} - {}", first.format("%b %-d"), last.format("%b %-d, %Y"))
                } else {
                    format!("{} - {}", first.format("%b %-d"), last.format("%-d, %Y"))
                }
            }
        }
    }
}

/// The Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as u64;
    date.checked_sub_days(Days::new(offset)).unwrap_or(NaiveDate::MIN)
}

/// Keep the occurrences dated within the first and last visible day.
pub fn filter_to_window<'a>(
    occurrences: &[Occurrence<'a>],
    visible_days: &[NaiveDate],
) -> Vec<Occurrence<'a>> {
    let (Some(first), Some(last)) = (visible_days.first(), visible_days.last()) else {
        return Vec::new();
    };

    occurrences
        .iter()
        .filter(|o| *first <= o.date && o.date <= *last)
        .cloned()
        .collect()
}

/// Parse YYYY-MM-DD
pub fn parse_date(s: &str) -> ClubcalResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| ClubcalError::InvalidDate(s.to_string()))
}
