//! Merging occurrences from every active rule.

use chrono::NaiveDate;
use tracing::debug;

use crate::occurrence::Occurrence;
use crate::recurrence::expand;
use crate::rule::ScheduleRule;
use crate::time::sort_key;

/// Expand all active rules and sort the result by date, then start time.
///
/// Ties keep rule order. Occurrences with an unreadable start time go last
/// within their day.
pub fn aggregate<'a>(
    rules: &'a [ScheduleRule],
    today: NaiveDate,
    horizon_months: u32,
) -> Vec<Occurrence<'a>> {
    let mut occurrences: Vec<Occurrence<'a>> = rules
        .iter()
        .filter(|rule| rule.is_active())
        .flat_map(|rule| expand(rule, today, horizon_months))
        .collect();

    occurrences.sort_by_key(|o| (o.date, sort_key(o.start_minutes())));

    debug!(
        rules = rules.len(),
        occurrences = occurrences.len(),
        %today,
        "aggregated schedule"
    );

    occurrences
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rule(id: &str, day_of_week: i32, start: &str, status: RuleStatus) -> ScheduleRule {
        ScheduleRule {
            id: id.to_string(),
            day_of_week,
            start_time: start.to_string(),
            end_time: "23:00".to_string(),
            discipline_name: Some(id.to_uppercase()),
            category_name: None,
            teacher_name: None,
            room: None,
            max_capacity: None,
            enrolled_count: 0,
            status,
            created_at: Some("2024-01-01".to_string()),
        }
    }

    #[test]
    fn test_sorted_by_date_then_start_time() {
        let rules = vec![
            rule("late", 1, "20:00", RuleStatus::Active),
            rule("wed", 3, "07:00", RuleStatus::Active),
            rule("early", 1, "9:00", RuleStatus::Active),
        ];
        let occs = aggregate(&rules, date(2024, 1, 1), 1);

        let first_three: Vec<_> = occs.iter().take(3).map(|o| o.id.as_str()).collect();
        assert_eq!(first_three, ["early-2024-01-01", "late-2024-01-01", "wed-2024-01-03"]);

        for pair in occs.windows(2) {
            let a = (pair[0].date, sort_key(pair[0].start_minutes()));
            let b = (pair[1].date, sort_key(pair[1].start_minutes()));
            assert!(a <= b);
        }
    }

    #[test]
    fn test_inactive_and_malformed_rules_are_skipped() {
        let rules = vec![
            rule("off", 1, "10:00", RuleStatus::Inactive),
            rule("bad", 9, "10:00", RuleStatus::Active),
            rule("ok", 1, "10:00", RuleStatus::Active),
        ];
        let occs = aggregate(&rules, date(2024, 1, 1), 1);

        assert!(!occs.is_empty());
        assert!(occs.iter().all(|o| o.rule_id == "ok"));
    }

    #[test]
    fn test_unparseable_start_sorts_last_in_day() {
        let rules = vec![
            rule("broken", 1, "??", RuleStatus::Active),
            rule("fine", 1, "23:30", RuleStatus::Active),
        ];
        let occs = aggregate(&rules, date(2024, 1, 1), 0);

        let ids: Vec<_> = occs.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["fine-2024-01-01", "broken-2024-01-01"]);
    }

    #[test]
    fn test_deterministic() {
        let rules = vec![
            rule("a", 2, "18:00", RuleStatus::Active),
            rule("b", 2, "18:00", RuleStatus::Active),
            rule("c", 5, "08:00", RuleStatus::Active),
        ];
        let today = date(2024, 2, 10);
        let first: Vec<_> = aggregate(&rules, today, 3).into_iter().map(|o| o.id).collect();
        let second: Vec<_> = aggregate(&rules, today, 3).into_iter().map(|o| o.id).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_rules() {
        assert!(aggregate(&[], date(2024, 1, 1), 3).is_empty());
    }
}
