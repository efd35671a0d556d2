mod config;
mod consts;
mod count;
mod holiday;
mod prelude;
mod query;
mod range;
#[cfg(test)]
mod test_utils;
mod types;
mod weekday;

pub use config::{CounterConfig, MeetingCounter};
pub use consts::*;
pub use count::{RemainderRule, count_in_range};
pub use holiday::{Holiday, count_in_range_excluding, intersecting_holidays};
pub use query::{Query, QueryError, parse_holidays, parse_queries};
pub use range::{DateRange, RangeError, days_between};
pub use types::{Day, Month, Year, days_in_month, days_in_year, is_leap_year};
pub use weekday::Weekday;

use crate::prelude::*;
use std::str::FromStr;

/// A fixed Gregorian calendar date.
///
/// Construction validates every component, so a `Date` always names a day
/// that exists. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-{}-{}", year, month, day)]
pub struct Date {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {month:02}{}", "of_year(year)")]
    InvalidDay { year: Option<u16>, month: u8, day: u8 },
    #[display(fmt = "Unrecognized weekday: {_0}")]
    InvalidWeekday(String),
    #[display(fmt = "Empty input")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

fn of_year(year: impl std::borrow::Borrow<Option<u16>>) -> String {
    year.borrow().map(|y| format!(" of {y}")).unwrap_or_default()
}

impl Date {
    /// Creates a date from raw components.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from already-typed components, re-checking the day
    /// against the month length of `year`.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if `day` does not exist in that month.
    pub fn from_parts(year: Year, month: Month, day: Day) -> Result<Self, ParseError> {
        let day = Day::new(day.get(), year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// True if `self` is on or before `other`.
    #[inline]
    pub fn is_before(&self, other: &Self) -> bool {
        self <= other
    }

    /// Days preceding this date within its year (0 for January 1st).
    pub fn days_before(&self) -> u16 {
        days_before_date(self)
    }

    pub fn weekday(&self) -> Weekday {
        weekday_from_date(self)
    }
}

/// Number of days preceding `date` in its own year.
pub fn days_before_date(date: &Date) -> u16 {
    let year = date.year.get();
    let months: u16 = (1..date.month.get())
        .map(|m| u16::from(days_in_month(year, m)))
        .sum();
    months + u16::from(date.day.get()) - 1
}

/// Weekday of `date`, from the month and century code tables.
///
/// `(yy + yy / 4) + month code + century code + day`, minus one for
/// January and February of a leap year, modulo 7.
pub fn weekday_from_date(date: &Date) -> Weekday {
    let leap_fix = u32::from(date.year.is_leap() && date.month.precedes_leap_day());
    let sum = u32::from(date.year.two_digit_code())
        + u32::from(date.month.code())
        + u32::from(date.year.century_code())
        + u32::from(date.day.get());
    Weekday::Sunday.advance(sum + 7 - leap_fix)
}

/// Splits a date string on any non-digit character.
pub(crate) fn date_components(s: &str) -> Result<Vec<&str>, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let parts: Vec<&str> = trimmed.split(|c: char| !c.is_ascii_digit()).collect();
    if parts.iter().any(|p| p.is_empty()) {
        return Err(ParseError::InvalidFormat(trimmed.to_owned()));
    }
    Ok(parts)
}

pub(crate) fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

pub(crate) fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match date_components(s)?.as_slice() {
            [year, month, day] => Self::new(parse_u16(year)?, parse_u8(month)?, parse_u8(day)?),
            _ => Err(ParseError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {}",
                s.trim()
            ))),
        }
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
