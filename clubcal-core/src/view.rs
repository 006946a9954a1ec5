//! Composes expansion, windowing, layout, colors and stats into one view.
//!
//! This is the only entry point a renderer needs: hand it the current rule
//! snapshot, today's date and the window, and rebuild on every change.

use chrono::NaiveDate;
use serde::Serialize;

use crate::aggregate::aggregate;
use crate::color::{HexColor, color_for};
use crate::config::ClubcalConfig;
use crate::layout::{GridSpan, SlotPosition, position};
use crate::occurrence::Occurrence;
use crate::rule::ScheduleRule;
use crate::stats::WindowStats;
use crate::window::{CalendarWindow, filter_to_window};

/// Inputs that stay fixed across renders.
#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub horizon_months: u32,
    pub grid: GridSpan,
    pub palette: Vec<HexColor>,
}

impl Default for ViewSettings {
    fn default() -> Self {
        ViewSettings::from(&ClubcalConfig::default())
    }
}

impl From<&ClubcalConfig> for ViewSettings {
    fn from(config: &ClubcalConfig) -> Self {
        ViewSettings {
            horizon_months: config.horizon_months,
            grid: config.grid(),
            palette: config.palette().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlacedOccurrence<'a> {
    #[serde(flatten)]
    pub occurrence: Occurrence<'a>,
    pub slot: SlotPosition,
    pub color: Option<HexColor>,
}

impl<'a> PlacedOccurrence<'a> {
    pub fn edit_target(&self) -> &'a ScheduleRule {
        self.occurrence.edit_target()
    }

    pub fn delete_target(&self) -> &'a str {
        self.occurrence.delete_target()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DayColumn<'a> {
    pub date: NaiveDate,
    pub slots: Vec<PlacedOccurrence<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleView<'a> {
    pub window: CalendarWindow,
    pub label: String,
    pub grid: GridSpan,
    pub days: Vec<DayColumn<'a>>,
    pub stats: WindowStats,
}

impl<'a> ScheduleView<'a> {
    pub fn build(
        rules: &'a [ScheduleRule],
        today: NaiveDate,
        window: &CalendarWindow,
        settings: &ViewSettings,
    ) -> Self {
        let occurrences = aggregate(rules, today, settings.horizon_months);
        let visible_days = window.visible_days();
        let visible = filter_to_window(&occurrences, &visible_days);
        let stats = WindowStats::from_occurrences(&visible);

        let days = visible_days
            .iter()
            .map(|&date| DayColumn {
                date,
                slots: visible
                    .iter()
                    .filter(|o| o.date == date)
                    .map(|o| PlacedOccurrence {
                        slot: position(o, settings.grid),
                        color: color_for(o.discipline(), &settings.palette).copied(),
                        occurrence: o.clone(),
                    })
                    .collect(),
            })
            .collect();

        ScheduleView {
            window: *window,
            label: window.label(),
            grid: settings.grid,
            days,
            stats,
        }
    }

    pub fn occurrences(&self) -> impl Iterator<Item = &PlacedOccurrence<'a>> {
        self.days.iter().flat_map(|day| day.slots.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.stats.occurrence_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleStatus;
    use crate::window::ViewMode;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rule(id: &str, day_of_week: i32, start: &str, end: &str, discipline: &str) -> ScheduleRule {
        ScheduleRule {
            id: id.to_string(),
            day_of_week,
            start_time: start.to_string(),
            end_time: end.to_string(),
            discipline_name: Some(discipline.to_string()),
            category_name: None,
            teacher_name: None,
            room: None,
            max_capacity: Some(10),
            enrolled_count: 3,
            status: RuleStatus::Active,
            created_at: Some("2024-01-01".to_string()),
        }
    }

    fn settings() -> ViewSettings {
        ViewSettings {
            horizon_months: 3,
            grid: GridSpan::new(360, 1320),
            palette: vec![HexColor::new(1, 1, 1), HexColor::new(2, 2, 2), HexColor::new(3, 3, 3)],
        }
    }

    #[test]
    fn test_week_view_columns() {
        let rules = vec![
            rule("judo", 2, "18:00", "19:00", "Judo"),
            rule("yoga", 2, "08:30", "10:00", "Yoga"),
            rule("box", 4, "20:00", "21:30", "Boxing"),
        ];
        let window = CalendarWindow::new(ViewMode::Week, date(2024, 1, 10));
        let view = ScheduleView::build(&rules, date(2024, 1, 1), &window, &settings());

        assert_eq!(view.label, "Jan 7 - 13, 2024");
        assert_eq!(view.days.len(), 7);
        assert_eq!(view.days[0].date, date(2024, 1, 7));

        let tuesday = &view.days[2];
        let ids: Vec<_> = tuesday.slots.iter().map(|s| s.occurrence.id.as_str()).collect();
        assert_eq!(ids, ["yoga-2024-01-09", "judo-2024-01-09"]);
        assert_eq!(tuesday.slots[0].slot.top_percent, 15.625);
        assert_eq!(tuesday.slots[0].slot.height_percent, 9.375);

        assert_eq!(view.days[4].slots.len(), 1);
        assert_eq!(view.stats.occurrence_count, 3);
        assert_eq!(view.stats.discipline_count, 3);
        assert_eq!(view.stats.total_capacity, 30);
        assert_eq!(view.occurrences().count(), 3);
    }

    #[test]
    fn test_colors_are_stable_per_discipline() {
        let rules = vec![
            rule("a", 1, "10:00", "11:00", "Judo"),
            rule("b", 3, "10:00", "11:00", "Judo"),
        ];
        let window = CalendarWindow::new(ViewMode::Week, date(2024, 1, 10));
        let view = ScheduleView::build(&rules, date(2024, 1, 1), &window, &settings());

        let colors: Vec<_> = view.occurrences().map(|p| p.color).collect();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0], colors[1]);
        assert!(colors[0].is_some());
    }

    #[test]
    fn test_day_view_and_callbacks() {
        let rules = vec![rule("judo", 2, "18:00", "19:00", "Judo")];
        let window = CalendarWindow::new(ViewMode::Day, date(2024, 1, 9));
        let view = ScheduleView::build(&rules, date(2024, 1, 1), &window, &settings());

        let placed = view.occurrences().next().expect("one class on Tuesday");
        assert_eq!(placed.edit_target(), &rules[0]);
        assert_eq!(placed.delete_target(), "judo");
    }

    #[test]
    fn test_window_in_the_past_is_empty() {
        let rules = vec![rule("judo", 2, "18:00", "19:00", "Judo")];
        let window = CalendarWindow::new(ViewMode::Week, date(2023, 12, 20));
        let view = ScheduleView::build(&rules, date(2024, 1, 1), &window, &settings());

        assert!(view.is_empty());
        assert_eq!(view.days.len(), 7);
        assert!(view.days.iter().all(|d| d.slots.is_empty()));
    }

    #[test]
    fn test_view_serializes() {
        let rules = vec![rule("judo", 2, "18:00", "19:00", "Judo")];
        let window = CalendarWindow::new(ViewMode::Day, date(2024, 1, 9));
        let view = ScheduleView::build(&rules, date(2024, 1, 1), &window, &settings());

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["window"]["mode"], "day");
        assert_eq!(json["days"][0]["slots"][0]["id"], "judo-2024-01-09");
        assert!(json["days"][0]["slots"][0]["slot"]["height_percent"].is_number());
    }
}
