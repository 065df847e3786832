//! Holiday annotation for calendar days.
//!
//! Pure date-to-holiday mapping used by presentation layers when formatting
//! a day's header. The engine itself never consults this module.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::local_date::LocalDate;

/// The closed set of recognized holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Holiday {
    Christmas,
    Halloween,
    IndependenceDay,
    Thanksgiving,
}

impl Holiday {
    pub fn name(&self) -> &'static str {
        match self {
            Holiday::Christmas => "Christmas",
            Holiday::Halloween => "Halloween",
            Holiday::IndependenceDay => "US Independence Day",
            Holiday::Thanksgiving => "Thanksgiving",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Holiday::Christmas => "🎄",
            Holiday::Halloween => "🎃",
            Holiday::IndependenceDay => "🇺🇸",
            Holiday::Thanksgiving => "🦃",
        }
    }
}

/// All holidays falling on the given date. Deterministic and side-effect free.
pub fn holidays_on(date: LocalDate) -> Vec<Holiday> {
    let mut holidays = Vec::new();
    if date.month() == 12 && date.day() == 25 {
        holidays.push(Holiday::Christmas);
    }
    if date.month() == 10 && date.day() == 31 {
        holidays.push(Holiday::Halloween);
    }
    if date.month() == 7 && date.day() == 4 {
        holidays.push(Holiday::IndependenceDay);
    }
    // Thanksgiving floats: the 4th Thursday of November
    if is_nth_weekday_of_month(date, 4, Weekday::Thu, 11) {
        holidays.push(Holiday::Thanksgiving);
    }
    holidays
}

/// Whether `date` is the `n`th occurrence of `weekday` within `month`.
///
/// Walks backward through the month counting earlier dates with the same
/// weekday: the date qualifies iff exactly `n - 1` such dates precede it.
fn is_nth_weekday_of_month(date: LocalDate, n: u32, weekday: Weekday, month: u32) -> bool {
    if date.day_of_week() != weekday || date.month() != month {
        return false;
    }
    let mut count = 1;
    let mut earlier = date.prior();
    while earlier.month() == month {
        if earlier.day_of_week() == weekday {
            count += 1;
        }
        earlier = earlier.prior();
    }
    count == n
}
