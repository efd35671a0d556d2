//! Weekday counting over a date range, without holidays.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CounterConfig, DAYS_IN_WEEK, DateRange, Weekday};

/// How the days left over after the full weeks of a range are checked for
/// the target weekday.
///
/// A range of `n` days holds `n / 7` full weeks, each containing every
/// weekday once, plus `n % 7` trailing days starting on the start date's
/// weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemainderRule {
    /// Counts one more when `|target - start weekday| <= n % 7`.
    ///
    /// This is the historical behaviour and stays the default. It does not
    /// wrap around the end of the week and compares with `<=`, so it
    /// overcounts when the remainder is 0 and misses targets that come
    /// before the start weekday by index.
    #[default]
    AbsoluteOffset,
    /// Counts one more when the target is among the `n % 7` trailing days,
    /// walking forward from the start weekday and wrapping after Saturday.
    Wrapping,
}

impl RemainderRule {
    /// Whether the trailing `remainder` days starting on `first` contain `target`.
    pub const fn hits(self, first: Weekday, target: Weekday, remainder: u32) -> bool {
        match self {
            Self::AbsoluteOffset => {
                (target.index() as u32).abs_diff(first.index() as u32) <= remainder
            },
            Self::Wrapping => (first.days_until(target) as u32) < remainder,
        }
    }
}

/// Counts the occurrences of `weekday` in `range` with the default
/// [`CounterConfig`].
pub fn count_in_range(range: &DateRange, weekday: Weekday) -> u32 {
    count_with_rule(range, weekday, CounterConfig::default().remainder_rule())
}

pub(crate) fn count_with_rule(range: &DateRange, weekday: Weekday, rule: RemainderRule) -> u32 {
    let days = range.days();
    let first = range.start().weekday();
    let remainder = days % DAYS_IN_WEEK;
    let count = days / DAYS_IN_WEEK + u32::from(rule.hits(first, weekday, remainder));

    debug!(%range, %weekday, days, %first, remainder, ?rule, count, "counted weekday");
    count
}
