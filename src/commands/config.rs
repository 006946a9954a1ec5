use std::path::Path;

use anyhow::Result;
use clubcal_core::config::ClubcalConfig;
use clubcal_core::time::format_minutes;
use owo_colors::OwoColorize;

pub fn run(rules_override: Option<&Path>) -> Result<()> {
    let config_path = ClubcalConfig::config_path()?;
    let config = ClubcalConfig::load()?;

    let rules_path = rules_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.rules_path());

    println!("{}", "Paths".bold());
    println!("  Config:   {}", config_path.display());
    println!(
        "  Rules:    {} {}",
        rules_path.display(),
        (if rules_path.exists() { "" } else { "(missing)" }).red()
    );

    let grid = config.grid();
    println!();
    println!("{}", "Settings".bold());
    println!("  Horizon:  {} months", config.horizon_months);
    println!("  View:     {}", config.default_view);
    println!(
        "  Grid:     {}-{}",
        format_minutes(grid.start_minutes),
        format_minutes(grid.end_minutes)
    );
    println!(
        "  Palette:  {}",
        config
            .palette()
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );

    Ok(())
}
