/// Smallest supported year
pub const MIN_YEAR: u16 = 1;
/// Maximum supported year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in a common year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Days in a week
pub const DAYS_IN_WEEK: u32 = 7;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Weekday offset of the first day of each month, January first.
pub const MONTH_CODES: [u8; 12] = [0, 3, 3, 6, 1, 4, 6, 2, 5, 0, 3, 5];

/// Weekday offset of each century within the 400-year Gregorian cycle,
/// indexed by `(year / 100) % 4`. The 2000s use 6.
pub const CENTURY_CODES: [u8; 4] = [6, 4, 2, 0];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator used when formatting
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 interval form)
pub const RANGE_SEPARATOR: char = '/';
/// Field separator of meeting rows and holiday lists
pub const FIELD_SEPARATOR: char = ',';
/// Lines starting with this marker are ignored by the text readers
pub const COMMENT_MARKER: char = '#';
