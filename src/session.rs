//! Everything a command needs: config, the rule snapshot and today's date.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clubcal_core::config::ClubcalConfig;
use clubcal_core::rules_file::load_rules;
use clubcal_core::window::parse_date;
use clubcal_core::{CalendarWindow, ScheduleRule, ViewMode, ViewSettings};

pub struct Session {
    pub config: ClubcalConfig,
    pub rules: Vec<ScheduleRule>,
    pub today: NaiveDate,
}

impl Session {
    pub fn load(rules_override: Option<&Path>, today: Option<&str>) -> Result<Self> {
        let config = ClubcalConfig::load()?;

        let rules_path = match rules_override {
            Some(path) => path.to_path_buf(),
            None => config.rules_path(),
        };
        let rules = load_rules(&rules_path).with_context(|| {
            format!(
                "Could not load schedule rules.\n\n\
                Export them from the club backend to {} or pass --rules <file>",
                rules_path.display()
            )
        })?;

        // The only place the wall clock is read
        let today = match today {
            Some(s) => parse_date(s)?,
            None => chrono::Local::now().date_naive(),
        };

        Ok(Session {
            config,
            rules,
            today,
        })
    }

    pub fn settings(&self) -> ViewSettings {
        ViewSettings::from(&self.config)
    }

    /// Window anchored on `date` (or today), moved `offset` steps.
    pub fn window(&self, mode: ViewMode, date: Option<&str>, offset: i64) -> Result<CalendarWindow> {
        let mut window = CalendarWindow::new(mode, self.today);
        if let Some(date) = date {
            window.reference_date = parse_date(date)?;
        }
        navigate(&mut window, offset);
        Ok(window)
    }
}

pub fn navigate(window: &mut CalendarWindow, offset: i64) {
    for _ in 0..offset.unsigned_abs() {
        if offset < 0 {
            window.go_previous();
        } else {
            window.go_next();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_navigate_both_directions() {
        let mut window = CalendarWindow::new(ViewMode::Week, date(2024, 1, 10));
        navigate(&mut window, 2);
        assert_eq!(window.reference_date, date(2024, 1, 24));
        navigate(&mut window, -3);
        assert_eq!(window.reference_date, date(2024, 1, 3));

        window.set_mode(ViewMode::Day);
        navigate(&mut window, -1);
        assert_eq!(window.reference_date, date(2024, 1, 2));
        navigate(&mut window, 0);
        assert_eq!(window.reference_date, date(2024, 1, 2));
    }
}
