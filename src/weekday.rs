use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ParseError, prelude::*};

/// Day of the week, numbered from Sunday.
///
/// `index()` is the weekday index used throughout the counting code:
/// 0 = Sunday, 1 = Monday, ... 6 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Weekday {
    #[display(fmt = "Sunday")]
    Sunday = 0,
    #[display(fmt = "Monday")]
    Monday = 1,
    #[display(fmt = "Tuesday")]
    Tuesday = 2,
    #[display(fmt = "Wednesday")]
    Wednesday = 3,
    #[display(fmt = "Thursday")]
    Thursday = 4,
    #[display(fmt = "Friday")]
    Friday = 5,
    #[display(fmt = "Saturday")]
    Saturday = 6,
}

impl Weekday {
    /// All weekdays, Sunday first
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Weekday for an index, `None` outside `0..=6`.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 7 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// The weekday `days` days later.
    #[inline]
    pub const fn advance(self, days: u32) -> Self {
        Self::ALL[((self.index() as u32 + days) % 7) as usize]
    }

    /// Days from `self` forward to `other`, in `0..7`.
    #[inline]
    pub const fn days_until(self, other: Self) -> u8 {
        (other.index() + 7 - self.index()) % 7
    }
}

impl FromStr for Weekday {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        Self::ALL
            .into_iter()
            .find(|day| day.to_string().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseError::InvalidWeekday(name.to_owned()))
    }
}

impl Serialize for Weekday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
