use anyhow::Result;
use clubcal_core::{CalendarWindow, ScheduleView};

use crate::render::{Render, render_grid};
use crate::session::Session;

pub fn run(session: &Session, window: CalendarWindow, json: bool, grid: bool) -> Result<()> {
    let settings = session.settings();
    let view = ScheduleView::build(&session.rules, session.today, &window, &settings);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    if grid {
        for day in &view.days {
            println!("{}", render_grid(day, view.grid, session.today));
        }
        println!();
        println!("{}", view.stats.render(session.today));
    } else {
        println!("{}", view.render(session.today));
    }

    Ok(())
}
