//! Meeting queries and the text forms they are read from.
//!
//! A meeting row is `start, end, weekday`, for example
//! `2024-01-01, 2024-06-30, Monday`. A holiday list is a sequence of
//! `MM-DD` or `YYYY-MM-DD` entries separated by commas or newlines.
//! In both, lines starting with `#` are comments.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    COMMENT_MARKER, CounterConfig, Date, DateRange, FIELD_SEPARATOR, Holiday, RangeError, Weekday,
    count::count_with_rule, holiday::excluding_with_rule,
};

/// A recurring meeting: one weekday, every week within a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Query {
    range:   DateRange,
    weekday: Weekday,
}

/// Error type for reading queries and holiday lists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// A line could not be read; `line` is 1-based.
    #[error("line {line}: {source}")]
    Line {
        line:   usize,
        #[source]
        source: RangeError,
    },

    /// A meeting row does not have three fields.
    #[error("Invalid meeting row (expected start, end, weekday): {0}")]
    InvalidFormat(String),
}

impl Query {
    pub const fn new(range: DateRange, weekday: Weekday) -> Self {
        Self { range, weekday }
    }

    pub const fn range(&self) -> DateRange {
        self.range
    }

    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Meeting count with the default configuration
    pub fn count(&self) -> u32 {
        count_with_rule(
            &self.range,
            self.weekday,
            CounterConfig::default().remainder_rule(),
        )
    }

    /// Meeting count, skipping holidays, with the default configuration
    pub fn count_excluding(&self, holidays: &[Holiday]) -> u32 {
        excluding_with_rule(
            &self.range,
            self.weekday,
            holidays,
            CounterConfig::default().remainder_rule(),
        )
    }
}

impl FromStr for Query {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(FIELD_SEPARATOR).map(str::trim).collect();
        let [start, end, weekday] = fields.as_slice() else {
            return Err(QueryError::InvalidFormat(s.trim().to_owned()));
        };

        let parse = || -> Result<Self, RangeError> {
            let start = start.parse::<Date>()?;
            let end = end.parse::<Date>()?;
            let weekday = weekday.parse::<Weekday>()?;
            Ok(Self::new(DateRange::new(start, end)?, weekday))
        };
        parse().map_err(|source| QueryError::Line { line: 1, source })
    }
}

fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with(COMMENT_MARKER)
}

/// Reads one query per line, skipping comments and blank lines.
///
/// # Errors
/// Returns the first row that fails to parse, with its line number.
pub fn parse_queries(text: &str) -> Result<Vec<Query>, QueryError> {
    let mut queries = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() || is_comment(line) {
            trace!(line = index + 1, "skipping line");
            continue;
        }
        let query = line.parse::<Query>().map_err(|err| match err {
            QueryError::Line { source, .. } => QueryError::Line {
                line: index + 1,
                source,
            },
            other => other,
        })?;
        queries.push(query);
    }
    debug!(count = queries.len(), "read meeting queries");
    Ok(queries)
}

/// Reads holidays separated by commas and/or newlines, skipping comments
/// and empty entries.
///
/// # Errors
/// Returns the first entry that fails to parse, with its line number.
pub fn parse_holidays(text: &str) -> Result<Vec<Holiday>, QueryError> {
    let mut holidays = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if is_comment(line) {
            trace!(line = index + 1, "skipping comment");
            continue;
        }
        for entry in line.split(FIELD_SEPARATOR).map(str::trim) {
            if entry.is_empty() {
                continue;
            }
            let holiday = entry.parse::<Holiday>().map_err(|err| QueryError::Line {
                line:   index + 1,
                source: err.into(),
            })?;
            holidays.push(holiday);
        }
    }
    debug!(count = holidays.len(), "read holidays");
    Ok(holidays)
}
