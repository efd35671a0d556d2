//! Counter configuration and the configured entry point.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    DateRange, Holiday, Query, RemainderRule, Weekday, count::count_with_rule,
    holiday::excluding_with_rule,
};

/// Configuration for meeting counts.
///
/// # Example
///
/// ```
/// use meeting_counter::{CounterConfig, RemainderRule};
///
/// let config = CounterConfig::new().with_remainder_rule(RemainderRule::Wrapping);
/// assert_eq!(config.remainder_rule(), RemainderRule::Wrapping);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// How the days after the last full week are checked.
    remainder_rule: RemainderRule,
}

impl CounterConfig {
    /// Creates the default configuration (`RemainderRule::AbsoluteOffset`).
    pub const fn new() -> Self {
        Self {
            remainder_rule: RemainderRule::AbsoluteOffset,
        }
    }

    #[must_use]
    pub const fn with_remainder_rule(mut self, rule: RemainderRule) -> Self {
        self.remainder_rule = rule;
        self
    }

    pub const fn remainder_rule(&self) -> RemainderRule {
        self.remainder_rule
    }
}

/// Counts meetings under a fixed [`CounterConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MeetingCounter {
    config: CounterConfig,
}

impl MeetingCounter {
    pub const fn new(config: CounterConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// Occurrences of `weekday` in `range`.
    pub fn count(&self, range: &DateRange, weekday: Weekday) -> u32 {
        count_with_rule(range, weekday, self.config.remainder_rule)
    }

    /// Occurrences of `weekday` in `range` that are not holidays.
    pub fn count_excluding(&self, range: &DateRange, weekday: Weekday, holidays: &[Holiday]) -> u32 {
        excluding_with_rule(range, weekday, holidays, self.config.remainder_rule)
    }

    /// Meeting count of every query, in order.
    pub fn count_all(&self, queries: &[Query], holidays: &[Holiday]) -> Vec<u32> {
        let counts: Vec<u32> = queries
            .iter()
            .map(|query| self.count_excluding(&query.range(), query.weekday(), holidays))
            .collect();
        info!(
            queries = queries.len(),
            holidays = holidays.len(),
            total = counts.iter().sum::<u32>(),
            "counted meetings"
        );
        counts
    }
}
