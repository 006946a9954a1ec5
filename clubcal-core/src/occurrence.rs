//! Concrete, dated materializations of a rule.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::rule::ScheduleRule;
use crate::time::parse_time;

/// One class on one date.
///
/// Occurrences are never stored. They borrow the rule snapshot they were
/// expanded from, so replacing the rules forces a fresh expansion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Occurrence<'a> {
    /// `{rule_id}-{YYYY-MM-DD}`
    pub id: String,
    pub date: NaiveDate,
    /// 0 = Sunday, same convention as the rule
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    pub discipline_name: Option<String>,
    pub category_name: Option<String>,
    pub teacher_name: Option<String>,
    pub room: Option<String>,
    pub max_capacity: Option<u32>,
    pub enrolled_count: u32,
    pub rule_id: String,

    #[serde(skip)]
    pub source_rule: &'a ScheduleRule,
}

impl<'a> Occurrence<'a> {
    pub fn new(rule: &'a ScheduleRule, date: NaiveDate) -> Self {
        Occurrence {
            id: occurrence_id(&rule.id, date),
            date,
            day_of_week: date.weekday().num_days_from_sunday() as i32,
            start_time: rule.start_time.clone(),
            end_time: rule.end_time.clone(),
            discipline_name: rule.discipline_name.clone(),
            category_name: rule.category_name.clone(),
            teacher_name: rule.teacher_name.clone(),
            room: rule.room.clone(),
            max_capacity: rule.max_capacity,
            enrolled_count: rule.enrolled_count,
            rule_id: rule.id.clone(),
            source_rule: rule,
        }
    }

    pub fn start_minutes(&self) -> Option<u32> {
        parse_time(&self.start_time)
    }

    pub fn end_minutes(&self) -> Option<u32> {
        parse_time(&self.end_time)
    }

    pub fn discipline(&self) -> &str {
        self.discipline_name.as_deref().unwrap_or("")
    }

    /// Rule handed back when the user asks to edit this class.
    pub fn edit_target(&self) -> &'a ScheduleRule {
        self.source_rule
    }

    /// Rule id handed back when the user asks to delete this class.
    pub fn delete_target(&self) -> &'a str {
        &self.source_rule.id
    }
}

pub fn occurrence_id(rule_id: &str, date: NaiveDate) -> String {
    format!("{}-{}", rule_id, date.format("%Y-%m-%d"))
}
