//! Summary numbers for the visible window.

use std::collections::HashSet;

use serde::Serialize;

use crate::occurrence::Occurrence;

/// Shown where a capacity would be when a class has no limit.
pub const UNLIMITED: &str = "∞";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WindowStats {
    pub occurrence_count: usize,
    /// Distinct non-empty discipline names
    pub discipline_count: usize,
    /// Sum of the capacities that are set; unlimited classes are skipped
    pub total_capacity: u64,
    pub total_enrolled: u64,
    /// Occurrences with no capacity limit
    pub unlimited_count: usize,
}

impl WindowStats {
    pub fn from_occurrences(occurrences: &[Occurrence]) -> Self {
        let disciplines: HashSet<&str> = occurrences
            .iter()
            .map(|o| o.discipline())
            .filter(|name| !name.is_empty())
            .collect();

        WindowStats {
            occurrence_count: occurrences.len(),
            discipline_count: disciplines.len(),
            total_capacity: occurrences
                .iter()
                .filter_map(|o| o.max_capacity)
                .map(u64::from)
                .sum(),
            total_enrolled: occurrences.iter().map(|o| u64::from(o.enrolled_count)).sum(),
            unlimited_count: occurrences.iter().filter(|o| o.max_capacity.is_none()).count(),
        }
    }

    /// "enrolled/capacity" for the whole window; capacity is ∞ if any class is unlimited.
    pub fn occupancy(&self) -> String {
        if self.unlimited_count > 0 {
            format_occupancy(self.total_enrolled, None)
        } else {
            format_occupancy(self.total_enrolled, Some(self.total_capacity))
        }
    }
}

/// Format "enrolled/capacity", using ∞ for no limit.
pub fn format_occupancy(enrolled: u64, capacity: Option<u64>) -> String {
    match capacity {
        Some(capacity) => format!("{}/{}", enrolled, capacity),
        None => format!("{}/{}", enrolled, UNLIMITED),
    }
}
