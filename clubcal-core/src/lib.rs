//! Core engine for clubcal.
//!
//! Turns weekly class rules from the club backend into dated occurrences,
//! windows them into a week or day view, and lays them out on a time grid:
//! - `recurrence` and `aggregate` expand rules into sorted occurrences
//! - `window` selects and navigates the visible dates
//! - `layout`, `color` and `stats` feed the renderer
//! - `view` composes all of the above
//!
//! Everything in the engine takes `today` explicitly and never reads the clock.

pub mod aggregate;
pub mod color;
pub mod config;
pub mod error;
pub mod layout;
pub mod occurrence;
pub mod recurrence;
pub mod rule;
pub mod rules_file;
pub mod stats;
pub mod time;
pub mod view;
pub mod window;

pub use aggregate::aggregate;
pub use occurrence::Occurrence;
pub use recurrence::expand;
pub use rule::{RuleStatus, ScheduleRule};
pub use view::{ScheduleView, ViewSettings};
pub use window::{CalendarWindow, ViewMode};
