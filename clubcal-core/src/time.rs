//! Time-of-day helpers for `HH:MM` strings.
//!
//! Rule times come from a backend that is not always consistent about
//! zero-padding or seconds, so parsing is lenient and never panics. Callers get
//! `None` for anything unreadable and decide how to degrade.

use std::cmp::Ordering;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Shown in place of a time that could not be parsed.
pub const INVALID_TIME: &str = "--:--";

/// Parse `HH:MM` (or `HH:MM:SS`) into minutes since midnight.
///
/// Missing leading zeros are fine (`"8:5"` is 08:05). `"24:00"` is accepted
/// as the end of the day so it can close a grid.
pub fn parse_time(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let mut parts = s.split(':');
    let hours = parse_component(parts.next()?)?;
    let minutes = parse_component(parts.next()?)?;

    // Seconds are tolerated but not kept
    if let Some(seconds) = parts.next() {
        if parse_component(seconds)? > 59 {
            return None;
        }
    }
    if parts.next().is_some() || minutes > 59 {
        return None;
    }

    match hours {
        0..=23 => Some(hours * 60 + minutes),
        24 if minutes == 0 => Some(MINUTES_PER_DAY),
        _ => None,
    }
}

fn parse_component(part: &str) -> Option<u32> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Format minutes since midnight as `HH:MM`.
pub fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Normalize a time string to `HH:MM`, or `--:--` if it can't be parsed.
pub fn format_time(s: &str) -> String {
    parse_time(s)
        .map(format_minutes)
        .unwrap_or_else(|| INVALID_TIME.to_string())
}

/// Compare two time strings by their minute value.
///
/// Unparseable times sort after every valid one.
pub fn compare_times(a: &str, b: &str) -> Ordering {
    sort_key(parse_time(a)).cmp(&sort_key(parse_time(b)))
}

/// Ordering key placing `None` last.
pub(crate) fn sort_key(minutes: Option<u32>) -> u32 {
    minutes.unwrap_or(u32::MAX)
}
