//! Timezone-naive calendar day values.
//!
//! `LocalDate` is the only date type in the engine. It is a wall-clock
//! calendar day with no time-of-day and no timezone: "2024-03-01" means the
//! same day wherever the user happens to be. The canonical ISO string
//! (`YYYY-MM-DD`, zero-padded) is used both for storage keys and for
//! equality-sensitive comparisons; locale formatting is display-only.

use std::fmt;

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{DayPlanError, DayPlanResult};

const ISO_FORMAT: &str = "%Y-%m-%d";

/// An immutable calendar date. All operations produce new values.
///
/// Ordering is by (year, month, day), so comparisons are correct across
/// month and year boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocalDate(NaiveDate);

impl LocalDate {
    /// Today's date in the user's local timezone.
    pub fn today() -> LocalDate {
        LocalDate(Local::now().date_naive())
    }

    /// Parse a canonical `YYYY-MM-DD` string.
    ///
    /// Malformed input is a recoverable error, never a silently wrong date.
    pub fn from_iso(s: &str) -> DayPlanResult<LocalDate> {
        NaiveDate::parse_from_str(s, ISO_FORMAT)
            .map(LocalDate)
            .map_err(|_| DayPlanError::InvalidDate(s.to_string()))
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> DayPlanResult<LocalDate> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(LocalDate)
            .ok_or_else(|| DayPlanError::InvalidDate(format!("{year}-{month:02}-{day:02}")))
    }

    /// The canonical zero-padded `YYYY-MM-DD` string.
    pub fn to_iso(self) -> String {
        self.0.format(ISO_FORMAT).to_string()
    }

    /// Display-only `M/D/YYYY` formatting. Never used as a storage key.
    pub fn to_locale_string(self) -> String {
        format!("{}/{}/{}", self.month(), self.day(), self.year())
    }

    /// The day after this one, crossing month/year boundaries correctly.
    /// Saturates at the calendar bounds rather than wrapping.
    pub fn next(self) -> LocalDate {
        LocalDate(self.0.succ_opt().unwrap_or(self.0))
    }

    /// The day before this one.
    pub fn prior(self) -> LocalDate {
        LocalDate(self.0.pred_opt().unwrap_or(self.0))
    }

    /// This date plus `n` whole days.
    pub fn plus_days(self, n: u64) -> LocalDate {
        LocalDate(self.0.checked_add_days(Days::new(n)).unwrap_or(self.0))
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    pub fn day_of_week(self) -> Weekday {
        self.0.weekday()
    }

    pub fn is_weekend(self) -> bool {
        matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }

    pub fn is_greater_than(self, other: LocalDate) -> bool {
        self > other
    }

    pub fn is_equal(self, other: LocalDate) -> bool {
        self == other
    }
}

impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso())
    }
}

impl TryFrom<String> for LocalDate {
    type Error = DayPlanError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        LocalDate::from_iso(&s)
    }
}

impl From<LocalDate> for String {
    fn from(date: LocalDate) -> String {
        date.to_iso()
    }
}

/// Display metadata for weekdays.
pub trait DayOfWeekExt {
    fn full_name(&self) -> &'static str;
    fn short_name(&self) -> &'static str;
}

impl DayOfWeekExt for Weekday {
    fn full_name(&self) -> &'static str {
        match self {
            Weekday::Sun => "Sunday",
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
        }
    }

    fn short_name(&self) -> &'static str {
        match self {
            Weekday::Sun => "Sun.",
            Weekday::Mon => "Mon.",
            Weekday::Tue => "Tues.",
            Weekday::Wed => "Wed.",
            Weekday::Thu => "Thu.",
            Weekday::Fri => "Fri.",
            Weekday::Sat => "Sat.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_round_trip() {
        let date = LocalDate::from_ymd(2024, 3, 1).unwrap();
        assert_eq!(date.to_iso(), "2024-03-01");
        assert_eq!(LocalDate::from_iso(&date.to_iso()).unwrap(), date);
    }

    #[test]
    fn test_iso_string_is_zero_padded() {
        let date = LocalDate::from_ymd(2024, 1, 5).unwrap();
        assert_eq!(date.to_iso(), "2024-01-05");
    }

    #[test]
    fn test_malformed_strings_are_rejected() {
        assert!(LocalDate::from_iso("not-a-date").is_err());
        assert!(LocalDate::from_iso("2024-13-01").is_err());
        assert!(LocalDate::from_iso("2024-02-30").is_err());
        assert!(LocalDate::from_iso("").is_err());
    }

    #[test]
    fn test_next_crosses_month_and_year_boundaries() {
        let jan_31 = LocalDate::from_ymd(2024, 1, 31).unwrap();
        assert_eq!(jan_31.next().to_iso(), "2024-02-01");

        let dec_31 = LocalDate::from_ymd(2023, 12, 31).unwrap();
        assert_eq!(dec_31.next().to_iso(), "2024-01-01");

        // 2024 is a leap year
        let feb_28 = LocalDate::from_ymd(2024, 2, 28).unwrap();
        assert_eq!(feb_28.next().to_iso(), "2024-02-29");
    }

    #[test]
    fn test_next_and_prior_are_inverses() {
        let date = LocalDate::from_ymd(2024, 3, 1).unwrap();
        assert_eq!(date.next().prior(), date);
        assert_eq!(date.prior().next(), date);
    }

    #[test]
    fn test_ordering_across_year_boundary() {
        let dec = LocalDate::from_ymd(2023, 12, 31).unwrap();
        let jan = LocalDate::from_ymd(2024, 1, 1).unwrap();
        assert!(jan.is_greater_than(dec));
        assert!(!dec.is_greater_than(jan));
        assert!(!jan.is_equal(dec));
    }

    #[test]
    fn test_weekend_detection() {
        // 2024-01-06 is a Saturday, 2024-01-07 a Sunday, 2024-01-08 a Monday
        assert!(LocalDate::from_ymd(2024, 1, 6).unwrap().is_weekend());
        assert!(LocalDate::from_ymd(2024, 1, 7).unwrap().is_weekend());
        assert!(!LocalDate::from_ymd(2024, 1, 8).unwrap().is_weekend());
    }

    #[test]
    fn test_locale_string_does_not_affect_iso() {
        let date = LocalDate::from_ymd(2024, 1, 5).unwrap();
        assert_eq!(date.to_locale_string(), "1/5/2024");
        assert_eq!(date.to_iso(), "2024-01-05");
    }

    #[test]
    fn test_serde_uses_iso_string() {
        let date = LocalDate::from_ymd(2024, 11, 28).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-11-28\"");
        let back: LocalDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
