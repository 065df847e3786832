//! Recurring-activity expansion.
//!
//! Expands an anchor date, a fixed repeat interval and an inclusive end date
//! into the ordered sequence of dates an activity occurs on. The sequence is
//! produced lazily and is always finite: a missing end date is normalized to
//! the anchor itself, so nothing here can iterate unbounded.

use serde::{Deserialize, Serialize};

use crate::local_date::LocalDate;

/// Fixed repeat cadence for an activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatInterval {
    #[default]
    None,
    Daily,
    Weekly,
}

impl RepeatInterval {
    /// Step size in days. Zero means no repetition.
    pub fn days(self) -> u64 {
        match self {
            RepeatInterval::None => 0,
            RepeatInterval::Daily => 1,
            RepeatInterval::Weekly => 7,
        }
    }

    /// Parse a user-facing name. Anything unrecognized means no repetition.
    pub fn from_name(name: &str) -> RepeatInterval {
        match name.to_ascii_lowercase().as_str() {
            "daily" => RepeatInterval::Daily,
            "weekly" => RepeatInterval::Weekly,
            _ => RepeatInterval::None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RepeatInterval::None => "None",
            RepeatInterval::Daily => "Daily",
            RepeatInterval::Weekly => "Weekly",
        }
    }
}

/// Lazy iterator over the dates a recurring activity lands on.
///
/// Yields the anchor first, then steps by the interval while dates stay at
/// or before `until`. With `RepeatInterval::None` the end date is ignored
/// entirely and exactly the anchor is yielded. An end date earlier than the
/// anchor yields nothing.
#[derive(Debug, Clone)]
pub struct Occurrences {
    upcoming: Option<LocalDate>,
    until: LocalDate,
    interval: RepeatInterval,
}

impl Occurrences {
    pub fn new(anchor: LocalDate, interval: RepeatInterval, until: Option<LocalDate>) -> Self {
        // Repeat fields are meaningless once the interval resolves to None.
        let until = match interval {
            RepeatInterval::None => anchor,
            _ => until.unwrap_or(anchor),
        };
        let upcoming = (anchor <= until).then_some(anchor);
        Occurrences {
            upcoming,
            until,
            interval,
        }
    }
}

impl Iterator for Occurrences {
    type Item = LocalDate;

    fn next(&mut self) -> Option<LocalDate> {
        let current = self.upcoming.take()?;
        if self.interval != RepeatInterval::None {
            let step = self.interval.days();
            let following = current.plus_days(step);
            // plus_days saturates at the calendar bounds; stop if we didn't move
            if following > current && following <= self.until {
                self.upcoming = Some(following);
            }
        }
        Some(current)
    }
}
