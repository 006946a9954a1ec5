use anyhow::Result;
use clubcal_core::{CalendarWindow, ScheduleView};
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::session::Session;

pub fn run(session: &Session, window: CalendarWindow, json: bool) -> Result<()> {
    let view = ScheduleView::build(&session.rules, session.today, &window, &session.settings());

    if json {
        println!("{}", serde_json::to_string_pretty(&view.stats)?);
        return Ok(());
    }

    println!("{}", view.label.bold());
    println!("  {}", view.stats.render(session.today));
    if view.stats.unlimited_count > 0 {
        println!(
            "  {}",
            format!(
                "{} of them without a capacity limit (capacity total {})",
                view.stats.unlimited_count, view.stats.total_capacity
            )
            .dimmed()
        );
    }

    Ok(())
}
