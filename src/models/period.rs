//! Accrual period (competência) representation
//!
//! A period is a calendar year-month, written `YYYY-MM`. Its ordering is the
//! same as the lexicographic ordering of that string.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The year-month a financial fact belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccrualPeriod {
    year: i32,
    month: u32,
}

impl AccrualPeriod {
    /// Create a period, validating the month
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) || !(1000..=9999).contains(&year) {
            return Err(PeriodParseError(format!("{:04}-{:02}", year, month)));
        }
        Ok(Self { year, month })
    }

    /// The period containing the given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current period (local time)
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    /// Parse a `YYYY-MM` string
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let err = || PeriodParseError(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(err)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(err());
        }
        let year: i32 = year.parse().map_err(|_| err())?;
        let month: u32 = month.parse().map_err(|_| err())?;
        Self::new(year, month).map_err(|_| err())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// A given day of this period, clamped to the last day of the month
    pub fn day(&self, day: u32) -> NaiveDate {
        let mut d = day.clamp(1, 31);
        loop {
            if let Some(date) = NaiveDate::from_ymd_opt(self.year, self.month, d) {
                return date;
            }
            d -= 1;
        }
    }

    /// First day of the period
    pub fn first_day(&self) -> NaiveDate {
        self.day(1)
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Get the next period
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Get the previous period
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

impl fmt::Display for AccrualPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for AccrualPeriod {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AccrualPeriod {
    type Error = PeriodParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AccrualPeriod> for String {
    fn from(period: AccrualPeriod) -> Self {
        period.to_string()
    }
}

/// Error returned for malformed `YYYY-MM` strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodParseError(String);

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid period (expected YYYY-MM): {}", self.0)
    }
}

impl std::error::Error for PeriodParseError {}
