//! Shorthand constructors for tests.

use crate::{Date, DateRange, Holiday, Month, Weekday, Year, days_in_month};

pub fn year(value: u16) -> Year {
    Year::new(value).unwrap()
}

pub fn month(value: u8) -> Month {
    Month::new(value).unwrap()
}

pub fn date(y: u16, m: u8, d: u8) -> Date {
    Date::new(y, m, d).unwrap()
}

pub fn range(start: (u16, u8, u8), end: (u16, u8, u8)) -> DateRange {
    DateRange::new(date(start.0, start.1, start.2), date(end.0, end.1, end.2)).unwrap()
}

pub fn fixed(y: u16, m: u8, d: u8) -> Holiday {
    Holiday::fixed(date(y, m, d))
}

pub fn recurring(m: u8, d: u8) -> Holiday {
    Holiday::recurring(m, d).unwrap()
}

/// The date `days` days after `from`.
pub fn plus_days(from: Date, days: u32) -> Date {
    let (mut y, mut m, mut d) = (from.year().get(), from.month().get(), from.day().get());
    for _ in 0..days {
        if d < days_in_month(y, m) {
            d += 1;
        } else if m < 12 {
            m += 1;
            d = 1;
        } else {
            y += 1;
            m = 1;
            d = 1;
        }
    }
    date(y, m, d)
}

/// Counts `weekday` by visiting every day of the range.
pub fn brute_force_count(range: &DateRange, weekday: Weekday) -> u32 {
    let mut current = range.start();
    let mut count = 0;
    loop {
        count += u32::from(current.weekday() == weekday);
        if current == range.end() {
            return count;
        }
        current = plus_days(current, 1);
    }
}
