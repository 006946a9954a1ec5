//! Weekly rule expansion.
//!
//! Expands one rule into dated occurrences over a rolling horizon. Only
//! "weekly on one weekday" rules exist here: no UNTIL, no exceptions, no
//! holiday skipping.

use chrono::{Datelike, Days, Months, NaiveDate};
use tracing::{debug, warn};

use crate::occurrence::Occurrence;
use crate::rule::ScheduleRule;

/// How far ahead rules are expanded unless configured otherwise.
pub const DEFAULT_HORIZON_MONTHS: u32 = 3;

const WEEK: Days = Days::new(7);

/// Expand a rule into its occurrences from `today` to the end of the horizon.
///
/// The horizon starts at the later of the rule's anchor date and `today`,
/// and runs `horizon_months` calendar months. Nothing before `today` is ever
/// produced. A malformed rule yields an empty list and a warning.
pub fn expand<'a>(
    rule: &'a ScheduleRule,
    today: NaiveDate,
    horizon_months: u32,
) -> Vec<Occurrence<'a>> {
    if !rule.is_active() {
        debug!(rule = %rule.id, "skipping inactive rule");
        return Vec::new();
    }

    let Some(weekday) = rule.weekday() else {
        warn!(
            rule = %rule.id,
            day_of_week = rule.day_of_week,
            "day_of_week outside 0-6, rule skipped"
        );
        return Vec::new();
    };

    let anchor = match rule.anchor_date() {
        Some(date) => date,
        None => {
            if rule.created_at.is_some() {
                warn!(rule = %rule.id, created_at = ?rule.created_at, "unreadable created_at, anchoring on today");
            }
            today
        }
    };

    let horizon_start = anchor.max(today);
    let Some(end) = horizon_start.checked_add_months(Months::new(horizon_months)) else {
        warn!(rule = %rule.id, "horizon end out of range, rule skipped");
        return Vec::new();
    };

    let delta = (weekday.num_days_from_sunday() + 7 - anchor.weekday().num_days_from_sunday()) % 7;
    let Some(mut date) = anchor.checked_add_days(Days::new(delta as u64)) else {
        return Vec::new();
    };

    // Old anchors: jump forward in whole weeks so the weekday is kept
    if date < today {
        let behind = (today - date).num_days() as u64;
        let weeks = behind.div_ceil(7);
        match date.checked_add_days(Days::new(weeks * 7)) {
            Some(d) => date = d,
            None => return Vec::new(),
        }
    }

    let mut occurrences = Vec::new();
    while date <= end {
        occurrences.push(Occurrence::new(rule, date));
        match date.checked_add_days(WEEK) {
            Some(next) => date = next,
            None => break,
        }
    }

    debug!(
        rule = %rule.id,
        count = occurrences.len(),
        %anchor,
        %end,
        "expanded rule"
    );

    occurrences
}
