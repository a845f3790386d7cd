use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use bank_core::{DomainError, DomainResult, ValueObject};

/// Calendar date (day, month, year) that is always a real date.
///
/// Ordering is chronological.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "DateParts")]
pub struct Date {
    year: i32,
    month: u32,
    day: u32,
}

/// Unvalidated wire shape; every deserialized date goes through [`Date::new`].
#[derive(Deserialize)]
struct DateParts {
    day: u32,
    month: u32,
    year: i32,
}

impl TryFrom<DateParts> for Date {
    type Error = DomainError;

    fn try_from(parts: DateParts) -> Result<Self, Self::Error> {
        Self::new(parts.day, parts.month, parts.year)
    }
}

impl Date {
    /// Build a date, rejecting combinations that do not exist on the calendar
    /// (31 April, 29 February outside leap years, month 13, ...).
    pub fn new(day: u32, month: u32, year: i32) -> DomainResult<Self> {
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            tracing::warn!(day, month, year, "rejected impossible calendar date");
            return Err(DomainError::invalid_argument(format!(
                "{day:02}/{month:02}/{year:04} is not a valid calendar date"
            )));
        }
        Ok(Self { year, month, day })
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Whole calendar years from `earlier` to `later`, by year subtraction only.
    ///
    /// Day and month are ignored: 31/12/2000 to 01/01/2014 counts as 14.
    pub fn calendar_years_between(earlier: &Date, later: &Date) -> i32 {
        later.year - earlier.year
    }
}

/// 1 January 1900.
impl Default for Date {
    fn default() -> Self {
        Self {
            year: 1900,
            month: 1,
            day: 1,
        }
    }
}

impl From<NaiveDate> for Date {
    fn from(value: NaiveDate) -> Self {
        Self {
            year: value.year(),
            month: value.month(),
            day: value.day(),
        }
    }
}

impl core::fmt::Display for Date {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

impl ValueObject for Date {}
