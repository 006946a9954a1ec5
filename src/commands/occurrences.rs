use anyhow::Result;
use clubcal_core::{Occurrence, aggregate};
use clubcal_core::time::format_time;
use owo_colors::OwoColorize;

use crate::render::{display_name, format_date_label};
use crate::session::Session;

pub fn run(session: &Session, rule: Option<&str>, json: bool) -> Result<()> {
    if let Some(id) = rule {
        if !session.rules.iter().any(|r| r.id == id) {
            let available: Vec<_> = session.rules.iter().map(|r| r.id.as_str()).collect();
            anyhow::bail!("Rule '{}' not found. Available: {}", id, available.join(", "));
        }
    }

    let occurrences: Vec<_> = aggregate(&session.rules, session.today, session.config.horizon_months)
        .into_iter()
        .filter(|o| rule.is_none_or(|id| o.rule_id == id))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&occurrences)?);
        return Ok(());
    }

    if occurrences.is_empty() {
        println!("{}", "No upcoming classes".dimmed());
        return Ok(());
    }

    // Group by day
    let mut current_date = None;

    for occ in &occurrences {
        if current_date != Some(occ.date) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", format_date_label(occ.date, session.today).bold());
            current_date = Some(occ.date);
        }

        println!("{}", format_row(occ));
    }

    Ok(())
}

fn format_row(occ: &Occurrence) -> String {
    let room = occ.room.as_deref().map(|r| format!("[{}]", r)).unwrap_or_default();
    format!(
        "  {} {} {}",
        format_time(&occ.start_time),
        display_name(occ.discipline()),
        room.dimmed()
    )
}
