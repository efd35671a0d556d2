use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Date, ParseError, RANGE_SEPARATOR, Year, days_in_year, prelude::*};

/// An inclusive range of dates.
/// The start date is never after the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: Date,
    end:   Date,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: Date, end: Date },

    /// Error parsing one of the dates.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: Date, end: Date) -> Result<Self, RangeError> {
        if !start.is_before(&end) {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering a single day
    pub const fn single_day(date: Date) -> Self {
        Self {
            start: date,
            end:   date,
        }
    }

    pub const fn start(&self) -> Date {
        self.start
    }

    pub const fn end(&self) -> Date {
        self.end
    }

    /// Checks if the range contains a given date, bounds included
    pub fn contains(&self, date: &Date) -> bool {
        self.start.is_before(date) && date.is_before(&self.end)
    }

    /// True when start and end fall in the same calendar year
    pub fn is_single_year(&self) -> bool {
        self.start.year() == self.end.year()
    }

    /// Number of days in the range, both ends included.
    pub fn days(&self) -> u32 {
        let (start, end) = (self.start, self.end);

        if start.year() == end.year() {
            if start.month() == end.month() {
                return u32::from(end.day().get() - start.day().get()) + 1;
            }
            return u32::from(end.days_before() - start.days_before()) + 1;
        }

        // Rest of the first year, start included
        let head = u32::from(start.year().days() - start.days_before());
        // Beginning of the last year, end included
        let tail = u32::from(end.days_before()) + 1;
        let middle: u32 = (start.year().get() + 1..end.year().get())
            .map(|y| u32::from(days_in_year(y)))
            .sum();

        head + middle + tail
    }

    /// Years touched by the range, in order
    pub fn years(&self) -> impl Iterator<Item = Year> + use<> {
        (self.start.year().get()..=self.end.year().get()).filter_map(|y| Year::new(y).ok())
    }
}

/// Inclusive number of days from `start` to `end`.
///
/// # Errors
/// Returns `RangeError::InvalidRange` if `start` is after `end`.
pub fn days_between(start: Date, end: Date) -> Result<u32, RangeError> {
    DateRange::new(start, end).map(|range| range.days())
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        match trimmed.split_once(RANGE_SEPARATOR) {
            Some((start, end)) if !end.contains(RANGE_SEPARATOR) => {
                Self::new(start.parse::<Date>()?, end.parse::<Date>()?)
            },
            Some(_) => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: {s}"
            ))),
            None => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, range};

    #[test]
    fn test_new_range_cases() {
        struct TestCase {
            start:          Date,
            end:            Date,
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                start:          date(2024, 1, 1),
                end:            date(2024, 12, 31),
                should_succeed: true,
                description:    "valid range (start < end)",
            },
            TestCase {
                start:          date(2024, 3, 2),
                end:            date(2024, 3, 1),
                should_succeed: false,
                description:    "invalid range (start > end)",
            },
            TestCase {
                start:          date(2024, 3, 1),
                end:            date(2024, 3, 1),
                should_succeed: true,
                description:    "equal dates (start == end)",
            },
        ];

        for case in &cases {
            let result = DateRange::new(case.start, case.end);
            assert_eq!(result.is_ok(), case.should_succeed, "{}", case.description);
        }
    }

    #[test]
    fn test_invalid_range_error() {
        let err = DateRange::new(date(2025, 1, 1), date(2024, 1, 1)).unwrap_err();
        assert_eq!(
            err,
            RangeError::InvalidRange {
                start: date(2025, 1, 1),
                end:   date(2024, 1, 1),
            }
        );
        assert_eq!(
            err.to_string(),
            "Invalid date range: start (2025-01-01) is after end (2024-01-01)"
        );
    }

    #[test]
    fn test_contains_is_inclusive() {
        let r = range((2024, 3, 1), (2024, 3, 31));
        assert!(r.contains(&date(2024, 3, 1)));
        assert!(r.contains(&date(2024, 3, 15)));
        assert!(r.contains(&date(2024, 3, 31)));
        assert!(!r.contains(&date(2024, 2, 29)));
        assert!(!r.contains(&date(2024, 4, 1)));
    }

    #[test]
    fn test_days_cases() {
        struct TestCase {
            range:       DateRange,
            expected:    u32,
            description: &'static str,
        }

        let cases = [
            TestCase {
                range:       range((2024, 1, 1), (2024, 1, 1)),
                expected:    1,
                description: "single day",
            },
            TestCase {
                range:       range((2024, 1, 1), (2024, 12, 31)),
                expected:    366,
                description: "whole leap year",
            },
            TestCase {
                range:       range((2023, 1, 1), (2023, 12, 31)),
                expected:    365,
                description: "whole common year",
            },
            TestCase {
                range:       range((2024, 2, 1), (2024, 3, 1)),
                expected:    30,
                description: "across a leap day",
            },
            TestCase {
                range:       range((2023, 12, 31), (2024, 1, 1)),
                expected:    2,
                description: "across new year",
            },
            TestCase {
                range:       range((2020, 3, 1), (2024, 2, 29)),
                expected:    1461,
                description: "four years ending on a leap day",
            },
            TestCase {
                range:       range((1999, 1, 1), (2001, 12, 31)),
                expected:    1096,
                description: "three years around 2000",
            },
        ];

        for case in &cases {
            assert_eq!(case.range.days(), case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_days_between_rejects_reversed_dates() {
        assert_eq!(days_between(date(2024, 1, 1), date(2024, 1, 31)), Ok(31));
        assert!(matches!(
            days_between(date(2024, 2, 1), date(2024, 1, 31)),
            Err(RangeError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_days_matches_counting_forward() {
        // Count days one by one from a fixed start
        let start = date(2019, 11, 20);
        let mut expected = 0;
        for y in 2019..=2025 {
            for m in 1..=12 {
                for d in 1..=crate::days_in_month(y, m) {
                    let end = date(y, m, d);
                    if end < start {
                        continue;
                    }
                    expected += 1;
                    let r = DateRange::new(start, end).unwrap();
                    assert_eq!(r.days(), expected, "{r}");
                }
            }
        }
    }

    #[test]
    fn test_years() {
        let r = range((2022, 6, 1), (2025, 1, 1));
        let years: Vec<u16> = r.years().map(Year::get).collect();
        assert_eq!(years, [2022, 2023, 2024, 2025]);
        assert!(!r.is_single_year());
        assert!(DateRange::single_day(date(2024, 1, 1)).is_single_year());
    }

    #[test]
    fn test_from_str() {
        let r = "2024-01-01/2024-06-30".parse::<DateRange>().unwrap();
        assert_eq!(r, range((2024, 1, 1), (2024, 6, 30)));
        assert!("2024-06-30/2024-01-01".parse::<DateRange>().is_err());
        assert!(matches!(
            "2024-01-01".parse::<DateRange>(),
            Err(RangeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-01-01/2024-01-02/2024-01-03".parse::<DateRange>(),
            Err(RangeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-01-01/2024-02-30".parse::<DateRange>(),
            Err(RangeError::ParseError(_))
        ));
    }

    #[test]
    fn test_serde_string_format() {
        let r = range((2024, 1, 1), (2024, 6, 30));
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#""2024-01-01/2024-06-30""#);
        let parsed: DateRange = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, r);
    }
}
