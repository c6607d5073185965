use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Months, NaiveDate, TimeZone, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::CalendarParseError;

/// A calendar day with no time component.
///
/// Equality, ordering and hashing are by the (year, month, day) triple, so
/// two values built from different entry points (a parsed workout, "today",
/// a stored selection) always compare equal when they name the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(CalendarDate)
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        CalendarDate(date)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn year_month(&self) -> YearMonth {
        YearMonth::of(*self)
    }

    /// Shift by whole days. `None` only outside chrono's supported range.
    pub fn add_days(self, days: i64) -> Option<Self> {
        self.0
            .checked_add_signed(chrono::Duration::days(days))
            .map(CalendarDate)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CalendarParseError {
            input: s.to_string(),
            expected: "date (YYYY-MM-DD)",
        };
        let mut parts = s.splitn(3, '-');
        let (y, m, d) = match (parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d)) => (y, m, d),
            _ => return Err(err()),
        };
        let year: i32 = y.parse().map_err(|_| err())?;
        let month: u32 = m.parse().map_err(|_| err())?;
        let day: u32 = d.parse().map_err(|_| err())?;
        CalendarDate::from_ymd(year, month, day).ok_or_else(err)
    }
}

/// The canonical day key: the local calendar date of `instant` in its own zone.
///
/// Every `CalendarDate` used for bucketing or highlighting goes through this
/// function or [`CalendarDate::from_ymd`], so lookups never need a fuzzy
/// same-day scan.
pub fn day_key<Tz: TimeZone>(instant: &DateTime<Tz>) -> CalendarDate {
    CalendarDate(instant.date_naive())
}

/// Reference month of a calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    // always day 1
    first: NaiveDate,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| YearMonth { first })
    }

    pub fn of(date: CalendarDate) -> Self {
        // day 1 of an existing date's month always exists
        let first = date.0.with_day(1).unwrap_or(date.0);
        YearMonth { first }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> CalendarDate {
        CalendarDate(self.first)
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Every day of the month in order.
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> {
        self.first
            .iter_days()
            .take(self.days_in_month() as usize)
            .map(CalendarDate)
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Following month; stays put at the end of chrono's date range.
    pub fn next(self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| YearMonth { first })
            .unwrap_or(self)
    }

    /// Preceding month; stays put at the start of chrono's date range.
    pub fn previous(self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| YearMonth { first })
            .unwrap_or(self)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = CalendarParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CalendarParseError {
            input: s.to_string(),
            expected: "month (YYYY-MM)",
        };
        let (y, m) = s.split_once('-').ok_or_else(err)?;
        let year: i32 = y.parse().map_err(|_| err())?;
        let month: u32 = m.parse().map_err(|_| err())?;
        YearMonth::new(year, month).ok_or_else(err)
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}
