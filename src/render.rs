//! Terminal rendering for schedule views.
//!
//! Extension traits that add colored output to clubcal-core types using
//! owo_colors.

use chrono::NaiveDate;
use clubcal_core::color::HexColor;
use clubcal_core::layout::GridSpan;
use clubcal_core::stats::{WindowStats, format_occupancy};
use clubcal_core::time::format_time;
use clubcal_core::view::{DayColumn, PlacedOccurrence, ScheduleView};
use owo_colors::OwoColorize;

/// Terminal lines per grid hour in the grid view.
const LINES_PER_HOUR: usize = 2;
const MINUTES_PER_LINE: u32 = 60 / LINES_PER_HOUR as u32;

pub trait Render {
    fn render(&self, today: NaiveDate) -> String;
}

impl Render for PlacedOccurrence<'_> {
    fn render(&self, _today: NaiveDate) -> String {
        let occ = &self.occurrence;
        let time = format!("{}-{}", format_time(&occ.start_time), format_time(&occ.end_time));
        let name = colorize(self.color, display_name(occ.discipline()));

        let mut details = Vec::new();
        if let Some(category) = &occ.category_name {
            details.push(category.clone());
        }
        if let Some(teacher) = &occ.teacher_name {
            details.push(teacher.clone());
        }
        if let Some(room) = &occ.room {
            details.push(format!("room {}", room));
        }
        details.push(format_occupancy(
            u64::from(occ.enrolled_count),
            occ.max_capacity.map(u64::from),
        ));

        format!("  {:>11} {} {}", time, name, details.join(" · ").dimmed())
    }
}

impl Render for DayColumn<'_> {
    fn render(&self, today: NaiveDate) -> String {
        let mut lines = vec![format_date_label(self.date, today).bold().to_string()];

        if self.slots.is_empty() {
            lines.push(format!("  {}", "No classes".dimmed()));
        }
        lines.extend(self.slots.iter().map(|slot| slot.render(today)));

        lines.join("\n")
    }
}

impl Render for WindowStats {
    fn render(&self, _today: NaiveDate) -> String {
        format!(
            "{} {}  {} {}  {} {}",
            self.occurrence_count.bold(),
            pluralize("class", self.occurrence_count),
            self.discipline_count.bold(),
            pluralize("discipline", self.discipline_count),
            self.occupancy().bold(),
            "enrolled".dimmed(),
        )
    }
}

impl Render for ScheduleView<'_> {
    fn render(&self, today: NaiveDate) -> String {
        let mut sections = vec![self.label.bold().underline().to_string()];
        sections.extend(self.days.iter().map(|day| day.render(today)));
        sections.push(self.stats.render(today));
        sections.join("\n\n")
    }
}

/// Draw a day column as a time grid, one row every half hour.
pub fn render_grid(day: &DayColumn, grid: GridSpan, today: NaiveDate) -> String {
    let rows = grid.rows();
    let origin = grid.start_minutes / 60 * 60;
    let total_lines = rows.len() * LINES_PER_HOUR;
    let mut cells: Vec<Vec<String>> = vec![Vec::new(); total_lines];

    for placed in &day.slots {
        // Past the grid end
        if placed.slot.is_hidden() || placed.slot.top_percent >= 100.0 {
            continue;
        }
        let occ = &placed.occurrence;
        let (Some(start), Some(end)) = (occ.start_minutes(), occ.end_minutes()) else {
            continue;
        };
        let start = start.max(grid.start_minutes);
        let end = end.min(grid.end_minutes);
        let Some((first, last)) = slot_lines(start, end, origin, total_lines) else {
            continue;
        };

        let name = display_name(occ.discipline());
        for (i, line) in cells.iter_mut().enumerate().take(last).skip(first) {
            let text = if i == first {
                format!("█ {} {}", name, format_time(&occ.start_time))
            } else {
                "█".to_string()
            };
            line.push(colorize(placed.color, &text));
        }
    }

    let mut lines = vec![format_date_label(day.date, today).bold().to_string()];
    for (i, cell) in cells.iter().enumerate() {
        let label = if i % LINES_PER_HOUR == 0 {
            rows[i / LINES_PER_HOUR].clone()
        } else {
            String::new()
        };
        lines.push(format!("{:>5} │ {}", label.dimmed(), cell.join("  ")));
    }

    lines.join("\n")
}

/// First and one-past-last grid line covered by `start..end`, counted from
/// the first labeled hour at `origin`. At least one line when visible.
fn slot_lines(start: u32, end: u32, origin: u32, total_lines: usize) -> Option<(usize, usize)> {
    if end <= start || start < origin {
        return None;
    }
    let first = ((start - origin) / MINUTES_PER_LINE) as usize;
    if first >= total_lines {
        return None;
    }
    let last = ((end - origin).div_ceil(MINUTES_PER_LINE) as usize).max(first + 1);
    Some((first, last.min(total_lines)))
}

/// "Today", "Tomorrow", or e.g. "Wed Feb 25"
pub fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

pub fn display_name(discipline: &str) -> &str {
    if discipline.is_empty() {
        "Class"
    } else {
        discipline
    }
}

fn colorize(color: Option<HexColor>, text: &str) -> String {
    match color {
        Some(c) => text.truecolor(c.r, c.g, c.b).to_string(),
        None => text.to_string(),
    }
}

/// Simple pluralization helper
fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else if word.ends_with('s') {
        format!("{}es", word)
    } else {
        format!("{}s", word)
    }
}
