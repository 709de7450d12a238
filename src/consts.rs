/// First NELSC absolute day offset (inclusive)
pub const DAY_MIN: i32 = -35364;
/// Last NELSC absolute day offset (inclusive)
pub const DAY_MAX: i32 = 175_020;

/// First NELSC absolute month offset (inclusive)
pub const MONTH_MIN: i32 = -1197;
/// Last NELSC absolute month offset (inclusive)
pub const MONTH_MAX: i32 = 5926;

/// Earliest NELSC year
pub const YEAR_MIN: i32 = -96;
/// Latest NELSC year
pub const YEAR_MAX: i32 = 479;

/// Days from proleptic Gregorian 1200-03-01 (Gregorian day zero) to NELSC day zero
pub const GREGORIAN_OFFSET: i32 = 264_773;

/// First supported Gregorian day offset, 1582-10-15
pub const GREGORIAN_DAY_MIN: i32 = 139_750;
/// Last supported Gregorian day offset, 9999-12-31
pub const GREGORIAN_DAY_MAX: i32 = 3_214_073;

/// Base-24 digits in value order (uppercase)
pub const BASE24_ALPHABET: &str = "0123456789ABCDEFGMPRTVXY";
/// Largest value of a single base-24 digit
pub const BASE24_DIGIT_MAX: u8 = 23;
/// Smallest value a signed base-24 pair can hold
pub const BASE24_PAIR_MIN: i32 = -96;
/// Largest value a signed base-24 pair can hold
pub const BASE24_PAIR_MAX: i32 = 479;

/// Days in a short (four week) month
pub const DAYS_PER_SHORT_MONTH: i32 = 28;
/// Days in a long (five week) month
pub const DAYS_PER_LONG_MONTH: i32 = 35;
/// Months in a short year
pub const MONTHS_PER_SHORT_YEAR: i32 = 12;
/// Months in a long year
pub const MONTHS_PER_LONG_YEAR: i32 = 13;
/// Days in a week
pub const DAYS_PER_WEEK: i32 = 7;

/// Length of a formatted NELSC date such as `3V:14-1`
pub const NELSC_DATE_LENGTH: usize = 7;
/// Separator between the year and the month of a NELSC date
pub const NELSC_YEAR_SEPARATOR: char = ':';
/// Separator between the week and the weekday of a NELSC date
pub const NELSC_WEEK_SEPARATOR: char = '-';
/// Character position of [`NELSC_YEAR_SEPARATOR`]
pub const NELSC_YEAR_SEPARATOR_POSITION: usize = 2;
/// Character position of [`NELSC_WEEK_SEPARATOR`]
pub const NELSC_WEEK_SEPARATOR_POSITION: usize = 5;

/// Gregorian date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator between the two ends of a printed Gregorian range
pub const RANGE_SEPARATOR: &str = " - ";

/// Full moon week of a short month, as day offsets within the month
pub const FULL_MOON_SHORT: (i32, i32) = (14, 20);
/// Full moon week of a long month, as day offsets within the month
pub const FULL_MOON_LONG: (i32, i32) = (21, 27);

/// Gregorian month the March equinox is assumed to fall in
pub const EQUINOX_MONTH: i32 = 3;
/// Gregorian day the March equinox is assumed to fall on
pub const EQUINOX_DAY: i32 = 20;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;
