//! Holiday exclusion.
//!
//! A holiday is either a fixed date or a month/day that recurs every year.
//! Recurring holidays spanning several years are projected with the yearly
//! weekday drift: a month/day moves forward one weekday per year, or two
//! when a Feb 29 falls between two consecutive occurrences.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    CounterConfig, DATE_SEPARATOR, Date, DateRange, Day, FEBRUARY, FEBRUARY_DAYS_LEAP, Month,
    ParseError, RemainderRule, Weekday, Year, count::count_with_rule, date_components,
    is_leap_year, parse_u8, prelude::*,
};

/// A day on which meetings are not held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Holiday {
    /// A single date.
    #[display(fmt = "{_0}")]
    Fixed(Date),
    /// The same month and day every year.
    #[display(fmt = "{month}-{day}")]
    Recurring { month: Month, day: Day },
}

impl Holiday {
    pub const fn fixed(date: Date) -> Self {
        Self::Fixed(date)
    }

    /// A yearly holiday on `month`/`day`.
    ///
    /// # Errors
    /// Returns a `ParseError` if the month is out of range or no year has
    /// that day in that month.
    pub fn recurring(month: u8, day: u8) -> Result<Self, ParseError> {
        let month = Month::new(month)?;
        let day = Day::for_any_year(day, month)?;
        Ok(Self::Recurring { month, day })
    }

    pub const fn is_recurring(&self) -> bool {
        matches!(self, Self::Recurring { .. })
    }

    /// The holiday's date in `year`, if it falls in that year.
    ///
    /// A recurring Feb 29 has no date in common years.
    pub fn in_year(&self, year: Year) -> Option<Date> {
        match *self {
            Self::Fixed(date) => (date.year() == year).then_some(date),
            Self::Recurring { month, day } => Date::from_parts(year, month, day).ok(),
        }
    }

    /// Number of times this holiday falls on `weekday` within `range`.
    pub fn occurrences(&self, range: &DateRange, weekday: Weekday) -> u32 {
        match *self {
            Self::Fixed(date) => fixed_hit(range, weekday, date),
            Self::Recurring { .. } if range.is_single_year() => self
                .in_year(range.start().year())
                .map_or(0, |date| fixed_hit(range, weekday, date)),
            Self::Recurring { month, day }
                if month.get() == FEBRUARY && day.get() == FEBRUARY_DAYS_LEAP =>
            {
                leap_day_hits(range, weekday, month, day)
            },
            Self::Recurring { month, day } => drift_hits(range, weekday, month, day),
        }
    }
}

fn fixed_hit(range: &DateRange, weekday: Weekday, date: Date) -> u32 {
    u32::from(date.weekday() == weekday && range.contains(&date))
}

/// Multi-year range: check the two boundary years against the range ends and
/// walk the years in between by weekday drift alone.
fn drift_hits(range: &DateRange, weekday: Weekday, month: Month, day: Day) -> u32 {
    let (start, end) = (range.start(), range.end());
    let (Ok(first), Ok(last)) = (
        Date::from_parts(start.year(), month, day),
        Date::from_parts(end.year(), month, day),
    ) else {
        return 0;
    };

    let mut running = first.weekday();
    let mut count = u32::from(running == weekday && start.is_before(&first));

    for year in start.year().get() + 1..end.year().get() {
        // Feb 29 of the previous year lies between two January/February
        // occurrences; for later months it is this year's Feb 29.
        let crossed_leap_day = if month.precedes_leap_day() {
            is_leap_year(year - 1)
        } else {
            is_leap_year(year)
        };
        running = running.advance(if crossed_leap_day { 2 } else { 1 });
        count += u32::from(running == weekday);
    }

    count += u32::from(last.weekday() == weekday && last.is_before(&end));
    trace!(%first, %last, count, "projected recurring holiday");
    count
}

/// A yearly Feb 29 only exists in leap years, which do not follow the
/// one-or-two day drift, so each leap year is checked on its own.
fn leap_day_hits(range: &DateRange, weekday: Weekday, month: Month, day: Day) -> u32 {
    range
        .years()
        .filter(|year| year.is_leap())
        .filter_map(|year| Date::from_parts(year, month, day).ok())
        .map(|date| fixed_hit(range, weekday, date))
        .sum()
}

/// Counts the holiday occurrences that fall on `weekday` within `range`,
/// bounds included.
pub fn intersecting_holidays(range: &DateRange, weekday: Weekday, holidays: &[Holiday]) -> u32 {
    let count = holidays
        .iter()
        .map(|holiday| holiday.occurrences(range, weekday))
        .sum();
    debug!(%range, %weekday, holidays = holidays.len(), count, "intersected holidays");
    count
}

/// Counts the occurrences of `weekday` in `range` that are not holidays,
/// with the default [`CounterConfig`].
pub fn count_in_range_excluding(range: &DateRange, weekday: Weekday, holidays: &[Holiday]) -> u32 {
    excluding_with_rule(
        range,
        weekday,
        holidays,
        CounterConfig::default().remainder_rule(),
    )
}

pub(crate) fn excluding_with_rule(
    range: &DateRange,
    weekday: Weekday,
    holidays: &[Holiday],
    rule: RemainderRule,
) -> u32 {
    let base = count_with_rule(range, weekday, rule);
    if holidays.is_empty() {
        return base;
    }
    // The absolute-offset rule can undercount below the holiday hits
    base.saturating_sub(intersecting_holidays(range, weekday, holidays))
}

impl FromStr for Holiday {
    type Err = ParseError;

    /// `MM-DD` for a yearly holiday, `YYYY-MM-DD` for a single date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match date_components(s)?.as_slice() {
            [month, day] => Self::recurring(parse_u8(month)?, parse_u8(day)?),
            [_, _, _] => s.parse().map(Self::Fixed),
            _ => Err(ParseError::InvalidFormat(format!(
                "expected MM{DATE_SEPARATOR}DD or YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {}",
                s.trim()
            ))),
        }
    }
}

impl Serialize for Holiday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Holiday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
