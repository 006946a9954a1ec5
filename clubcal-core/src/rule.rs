//! Weekly schedule rules.
//!
//! Rules are owned by the club-management backend; clubcal only reads them.
//! Fields are kept close to what the backend exports, so a rule may be
//! malformed (bad weekday, unreadable times) and the engine degrades around it.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

/// A weekly recurring class: "every Tuesday 18:00-19:00, room A".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRule {
    pub id: String,
    /// 0 = Sunday .. 6 = Saturday. Signed so bad input survives deserialization.
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discipline_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,

    /// None means unlimited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<u32>,
    #[serde(default)]
    pub enrolled_count: u32,

    #[serde(default)]
    pub status: RuleStatus,

    /// Anchor for the weekly recurrence. Free-form because the backend is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    #[default]
    Active,
    Inactive,
}

impl ScheduleRule {
    pub fn is_active(&self) -> bool {
        self.status == RuleStatus::Active
    }

    /// The rule's weekday, or None when `day_of_week` is outside 0-6.
    pub fn weekday(&self) -> Option<Weekday> {
        weekday_from_index(self.day_of_week)
    }

    /// Civil date of `created_at`, if it can be read.
    pub fn anchor_date(&self) -> Option<NaiveDate> {
        self.created_at.as_deref().and_then(parse_anchor_date)
    }

    pub fn discipline(&self) -> &str {
        self.discipline_name.as_deref().unwrap_or("")
    }
}

/// Map a Sunday-based index (0 = Sunday) to a chrono weekday.
pub fn weekday_from_index(index: i32) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Read the date part of a timestamp as written, without shifting time zones.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` (optionally with fractional
/// seconds) and plain `YYYY-MM-DD`.
pub fn parse_anchor_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.date());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_from_index_is_sunday_based() {
        assert_eq!(weekday_from_index(0), Some(Weekday::Sun));
        assert_eq!(weekday_from_index(2), Some(Weekday::Tue));
        assert_eq!(weekday_from_index(6), Some(Weekday::Sat));
        assert_eq!(weekday_from_index(7), None);
        assert_eq!(weekday_from_index(-1), None);
    }

    #[test]
    fn test_parse_anchor_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1);
        assert_eq!(parse_anchor_date("2024-01-01"), expected);
        assert_eq!(parse_anchor_date("2024-01-01T09:15:00Z"), expected);
        assert_eq!(parse_anchor_date("2024-01-01T23:30:00-05:00"), expected);
        assert_eq!(parse_anchor_date("2024-01-01 10:00:00.123"), expected);
        assert_eq!(parse_anchor_date("2024-01-01T10:00:00"), expected);
    }

    #[test]
    fn test_parse_anchor_date_garbage() {
        assert_eq!(parse_anchor_date(""), None);
        assert_eq!(parse_anchor_date("yesterday"), None);
        assert_eq!(parse_anchor_date("2024-13-01"), None);
    }

    #[test]
    fn test_rule_deserializes_with_defaults() {
        let json = r#"{
            "id": "r1",
            "day_of_week": 2,
            "start_time": "18:00",
            "end_time": "19:00"
        }"#;

        let rule: ScheduleRule = serde_json::from_str(json).expect("Should parse");
        assert!(rule.is_active());
        assert_eq!(rule.max_capacity, None);
        assert_eq!(rule.enrolled_count, 0);
        assert_eq!(rule.anchor_date(), None);
        assert_eq!(rule.discipline(), "");
    }

    #[test]
    fn test_rule_status_lowercase() {
        let rule: ScheduleRule = serde_json::from_str(
            r#"{"id":"r2","day_of_week":9,"start_time":"x","end_time":"y","status":"inactive"}"#,
        )
        .expect("Should parse");
        assert!(!rule.is_active());
        assert_eq!(rule.weekday(), None);
    }
}
