//! The yearly weekday drift used for recurring holidays must agree with
//! computing every occurrence from scratch, for every year 2000-2099.

use meeting_counter::{
    CounterConfig, Date, DateRange, Holiday, MeetingCounter, RemainderRule, Weekday,
    count_in_range, count_in_range_excluding, intersecting_holidays, weekday_from_date,
};

const MONTH_DAYS: [(u8, u8); 9] = [
    (1, 1),
    (1, 31),
    (2, 28),
    (2, 29),
    (3, 1),
    (7, 4),
    (10, 31),
    (12, 25),
    (12, 31),
];

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::new(y, m, d).unwrap()
}

/// Occurrences of a yearly holiday on `weekday`, computed year by year.
fn brute_force(range: &DateRange, weekday: Weekday, month: u8, day: u8) -> u32 {
    (range.start().year().get()..=range.end().year().get())
        .filter_map(|y| Date::new(y, month, day).ok())
        .filter(|d| range.contains(d) && weekday_from_date(d) == weekday)
        .map(|_| 1)
        .sum()
}

#[test]
fn drift_matches_brute_force_for_whole_years() {
    for (month, day) in MONTH_DAYS {
        let holiday = [Holiday::recurring(month, day).unwrap()];
        for end_year in 2000..=2099 {
            let range = DateRange::new(date(2000, 1, 1), date(end_year, 12, 31)).unwrap();
            for weekday in Weekday::ALL {
                assert_eq!(
                    intersecting_holidays(&range, weekday, &holiday),
                    brute_force(&range, weekday, month, day),
                    "{month:02}-{day:02} on {weekday} in {range}"
                );
            }
        }
    }
}

#[test]
fn drift_matches_brute_force_for_partial_boundary_years() {
    let starts = [(2000, 3, 1), (2003, 7, 4), (2011, 12, 26), (2047, 2, 28)];
    let ends = [(2099, 12, 24), (2060, 1, 1), (2048, 2, 29), (2080, 7, 3)];
    for (month, day) in MONTH_DAYS {
        let holiday = [Holiday::recurring(month, day).unwrap()];
        for start in starts {
            for end in ends {
                let range = DateRange::new(date(start.0, start.1, start.2), date(end.0, end.1, end.2))
                    .unwrap();
                for weekday in Weekday::ALL {
                    assert_eq!(
                        intersecting_holidays(&range, weekday, &holiday),
                        brute_force(&range, weekday, month, day),
                        "{month:02}-{day:02} on {weekday} in {range}"
                    );
                }
            }
        }
    }
}

#[test]
fn every_year_2000_to_2099_weekday_matches_drift() {
    // Single-year ranges take the materialized path, the full span takes the
    // drift path; the per-year sum must equal the full-span count.
    for (month, day) in MONTH_DAYS {
        let holiday = [Holiday::recurring(month, day).unwrap()];
        let full = DateRange::new(date(2000, 1, 1), date(2099, 12, 31)).unwrap();
        for weekday in Weekday::ALL {
            let per_year: u32 = (2000..=2099)
                .map(|y| {
                    let year = DateRange::new(date(y, 1, 1), date(y, 12, 31)).unwrap();
                    intersecting_holidays(&year, weekday, &holiday)
                })
                .sum();
            assert_eq!(intersecting_holidays(&full, weekday, &holiday), per_year);
        }
    }
}

#[test]
fn matching_holiday_removes_exactly_one_meeting() {
    let holiday = [Holiday::recurring(7, 4).unwrap()];
    for y in 2000..=2099 {
        let independence_day = date(y, 7, 4);
        let weekday = independence_day.weekday();
        let range = DateRange::new(date(y, 6, 1), date(y, 8, 31)).unwrap();
        assert_eq!(
            count_in_range_excluding(&range, weekday, &holiday),
            count_in_range(&range, weekday) - 1,
            "{y}"
        );
    }
}

#[test]
fn wrapping_counter_matches_day_by_day_count() {
    let counter =
        MeetingCounter::new(CounterConfig::new().with_remainder_rule(RemainderRule::Wrapping));
    let holidays = [
        Holiday::recurring(1, 1).unwrap(),
        Holiday::recurring(12, 25).unwrap(),
        Holiday::fixed(date(2025, 11, 27)),
    ];
    let range = DateRange::new(date(2023, 10, 2), date(2026, 3, 17)).unwrap();

    for weekday in Weekday::ALL {
        let mut expected = 0;
        for y in 2023..=2026 {
            for m in 1..=12 {
                for d in 1..=meeting_counter::days_in_month(y, m) {
                    let current = date(y, m, d);
                    let is_holiday = holidays.iter().any(|h| h.in_year(current.year()) == Some(current));
                    if range.contains(&current) && current.weekday() == weekday && !is_holiday {
                        expected += 1;
                    }
                }
            }
        }
        assert_eq!(counter.count_excluding(&range, weekday, &holidays), expected, "{weekday}");
    }
}
