pub mod config;
pub mod occurrences;
pub mod schedule;
pub mod stats;
