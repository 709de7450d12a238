//! Proleptic Gregorian calendar arithmetic.
//!
//! Gregorian day offsets count days since 1200-03-01. Years are handled as
//! March-based internally so that the variable-length February is the last
//! month of the year and every leap day is the last day of its period.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAY_MAX, DAY_MIN, GREGORIAN_CYCLE, GREGORIAN_DAY_MAX,
    GREGORIAN_DAY_MIN, GREGORIAN_OFFSET, LEAP_YEAR_CYCLE,
};

const MONTHS_PER_YEAR: i32 = 12;
/// Months between a March-based and a January-based year start
const MONTH_SHIFT: i32 = 2;

/// Days in an aligned quad century (400 years)
const QUAD_CENTURY_DAYS: i32 = 146_097;
/// Days in an aligned century, not counting the quad century leap day
const CENTURY_DAYS: i32 = 36_524;
/// Days in an aligned quad year (4 years)
const QUAD_YEAR_DAYS: i32 = 1461;
/// Days in a year, not counting the quad year leap day
const YEAR_DAYS: i32 = 365;
const LEAP_YEAR_DAYS: i32 = 366;

const CENTURIES_PER_QUAD_CENTURY: i32 = 4;
const QUAD_YEARS_PER_CENTURY: i32 = 25;
const YEARS_PER_QUAD_YEAR: i32 = 4;

/// Year of Gregorian day zero
const BASE_YEAR: i32 = 1200;
/// Last year that fits the four digit year field
const MAX_YEAR: i32 = 9999;

const FEBRUARY_DAYS: i32 = 28;
const FEBRUARY_DAYS_LEAP: i32 = 29;

/// March-based month lengths; `None` marks February, which varies
const MONTH_PATTERN: [Option<i32>; 12] = [
    Some(31), // March
    Some(30), // April
    Some(31), // May
    Some(30), // June
    Some(31), // July
    Some(31), // August
    Some(30), // September
    Some(31), // October
    Some(30), // November
    Some(31), // December
    Some(31), // January
    None,     // February
];

const YEAR_FIELD_LEN: usize = 4;
const DAY_MONTH_FIELD_MAX: usize = 2;

/// Returns whether the (January-based) year is a Gregorian leap year.
///
/// # Panics
/// Panics if `year` is less than one.
pub const fn is_leap_year(year: i32) -> bool {
    assert!(year >= 1, "leap year rule is undefined before year 1");
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Converts a Gregorian day offset into a date.
///
/// # Panics
/// Panics if `offset` is outside `GREGORIAN_DAY_MIN..=GREGORIAN_DAY_MAX`.
pub fn offset_to_date(offset: i32) -> GregorianDate {
    assert!(
        (GREGORIAN_DAY_MIN..=GREGORIAN_DAY_MAX).contains(&offset),
        "Gregorian day offset {offset} out of range {GREGORIAN_DAY_MIN}..={GREGORIAN_DAY_MAX}"
    );

    let quad_centuries = offset / QUAD_CENTURY_DAYS;
    let rest = offset % QUAD_CENTURY_DAYS;
    let mut centuries = rest / CENTURY_DAYS;
    let rest = rest % CENTURY_DAYS;
    let mut quad_years = rest / QUAD_YEAR_DAYS;
    let rest = rest % QUAD_YEAR_DAYS;
    let mut years = rest / YEAR_DAYS;
    let mut day = rest % YEAR_DAYS;

    // Leap day closing a quad century
    if centuries == CENTURIES_PER_QUAD_CENTURY {
        centuries = CENTURIES_PER_QUAD_CENTURY - 1;
        quad_years = QUAD_YEARS_PER_CENTURY - 1;
        years = YEARS_PER_QUAD_YEAR - 1;
        day = LEAP_YEAR_DAYS - 1;
    }

    // Leap day closing a quad year
    if years == YEARS_PER_QUAD_YEAR {
        years = YEARS_PER_QUAD_YEAR - 1;
        day = LEAP_YEAR_DAYS - 1;
    }

    let mut year = quad_centuries * GREGORIAN_CYCLE
        + centuries * CENTURY_CYCLE
        + quad_years * LEAP_YEAR_CYCLE
        + years
        + BASE_YEAR;

    let mut month = 0;
    for length in MONTH_PATTERN {
        match length {
            Some(days) if day >= days => {
                day -= days;
                month += 1;
            }
            _ => break,
        }
    }

    month += MONTH_SHIFT;
    if month >= MONTHS_PER_YEAR {
        month -= MONTHS_PER_YEAR;
        year += 1;
    }

    GregorianDate {
        year,
        month: month + 1,
        day: day + 1,
    }
}

/// Converts a Gregorian date into a Gregorian day offset.
///
/// # Errors
/// Returns `ParseError::InvalidYear`, `InvalidMonth` or `InvalidDay` if the
/// combination is not a Gregorian date, and
/// `ParseError::GregorianOutOfRange` if the date lies before 1582-10-15.
pub fn date_to_offset(year: i32, month: i32, day: i32) -> Result<i32, ParseError> {
    if year <= BASE_YEAR || year > MAX_YEAR {
        return Err(ParseError::InvalidYear(year));
    }
    if !(1..=MONTHS_PER_YEAR).contains(&month) {
        return Err(ParseError::InvalidMonth { year, month });
    }

    let (march_year, march_month) = to_march_based(year, month);
    if day < 1 || day > march_month_length(march_year, march_month) {
        return Err(ParseError::InvalidDay { year, month, day });
    }

    let offset = compose(march_year, march_month, day - 1);
    if !(GREGORIAN_DAY_MIN..=GREGORIAN_DAY_MAX).contains(&offset) {
        return Err(ParseError::GregorianOutOfRange(offset));
    }
    Ok(offset)
}

/// Gregorian day offset of a date the caller already knows to be valid.
pub(crate) fn offset_of_valid(year: i32, month: i32, day: i32) -> i32 {
    debug_assert!(date_to_offset(year, month, day).is_ok());
    let (march_year, march_month) = to_march_based(year, month);
    compose(march_year, march_month, day - 1)
}

fn to_march_based(year: i32, month: i32) -> (i32, i32) {
    let march_month = month - 1 - MONTH_SHIFT;
    if march_month < 0 {
        (year - 1, march_month + MONTHS_PER_YEAR)
    } else {
        (year, march_month)
    }
}

#[allow(clippy::cast_sign_loss)]
fn march_month_length(march_year: i32, march_month: i32) -> i32 {
    // February belongs to the January-based year after the March-based one
    MONTH_PATTERN[march_month as usize].unwrap_or(if is_leap_year(march_year + 1) {
        FEBRUARY_DAYS_LEAP
    } else {
        FEBRUARY_DAYS
    })
}

#[allow(clippy::cast_sign_loss)]
fn compose(march_year: i32, march_month: i32, day_index: i32) -> i32 {
    let years = march_year - BASE_YEAR;
    let quad_centuries = years / GREGORIAN_CYCLE;
    let years = years % GREGORIAN_CYCLE;
    let centuries = years / CENTURY_CYCLE;
    let years = years % CENTURY_CYCLE;
    let quad_years = years / LEAP_YEAR_CYCLE;
    let years = years % LEAP_YEAR_CYCLE;

    // February is last, so it never precedes the month being located
    let preceding: i32 = MONTH_PATTERN[..march_month as usize]
        .iter()
        .flatten()
        .sum();

    quad_centuries * QUAD_CENTURY_DAYS
        + centuries * CENTURY_DAYS
        + quad_years * QUAD_YEAR_DAYS
        + years * YEAR_DAYS
        + preceding
        + day_index
}

/// Writes `year-month-day` as `YYYY-MM-DD` to `out`.
///
/// # Errors
/// Returns the sink's error if writing fails.
///
/// # Panics
/// Panics if the combination is not a supported Gregorian date.
pub fn print_date<W: fmt::Write + ?Sized>(
    out: &mut W,
    year: i32,
    month: i32,
    day: i32,
) -> fmt::Result {
    assert!(
        date_to_offset(year, month, day).is_ok(),
        "{year}-{month}-{day} is not a supported Gregorian date"
    );
    write!(out, "{year:04}{DATE_SEPARATOR}{month:02}{DATE_SEPARATOR}{day:02}")
}

/// Parses a `YYYY-MM-DD` date at the start of `s`.
///
/// The year takes exactly four digits; month and day take one or two.
/// Leading whitespace is not skipped. On success returns the Gregorian day
/// offset and the input following the date.
///
/// # Errors
/// Returns a `ParseError` describing the first malformed field, or the
/// validation failure of the resulting date.
pub fn scan_date(s: &str) -> Result<(i32, &str), ParseError> {
    let (year, rest) = scan_year(s)?;
    let rest = scan_separator(s, rest)?;
    let (month, rest) = scan_day_month(rest)?;
    let rest = scan_separator(s, rest)?;
    let (day, rest) = scan_day_month(rest)?;
    Ok((date_to_offset(year, month, day)?, rest))
}

fn scan_year(s: &str) -> Result<(i32, &str), ParseError> {
    let mut year = 0;
    let mut chars = s.chars();
    for _ in 0..YEAR_FIELD_LEN {
        let c = chars.next().ok_or(ParseError::UnexpectedEnd)?;
        let digit = c.to_digit(10).ok_or(ParseError::InvalidDigit(c))?;
        year = year * 10 + digit;
    }
    Ok((i32::try_from(year).unwrap_or(i32::MAX), chars.as_str()))
}

fn scan_separator<'a>(whole: &str, rest: &'a str) -> Result<&'a str, ParseError> {
    let mut chars = rest.chars();
    match chars.next() {
        Some(DATE_SEPARATOR) => Ok(chars.as_str()),
        Some(found) => Err(ParseError::InvalidSeparator {
            position: whole.len() - rest.len(),
            expected: DATE_SEPARATOR,
            found,
        }),
        None => Err(ParseError::UnexpectedEnd),
    }
}

fn scan_day_month(s: &str) -> Result<(i32, &str), ParseError> {
    let count = s.bytes().take_while(u8::is_ascii_digit).count();
    if count == 0 {
        return Err(s
            .chars()
            .next()
            .map_or(ParseError::UnexpectedEnd, ParseError::InvalidDigit));
    }
    if count > DAY_MONTH_FIELD_MAX {
        return Err(ParseError::InvalidFormat(s[..count].to_owned()));
    }
    let value = s[..count]
        .bytes()
        .fold(0, |acc, b| acc * 10 + i32::from(b - b'0'));
    Ok((value, &s[count..]))
}

/// A validated Gregorian date within the supported range
/// (1582-10-15 through 9999-12-31).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: i32,
    month: i32,
    day: i32,
}

impl GregorianDate {
    /// Creates a new date, validating the year/month/day combination.
    ///
    /// # Errors
    /// Returns the `ParseError` reported by [`date_to_offset`].
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self, ParseError> {
        date_to_offset(year, month, day)?;
        Ok(Self { year, month, day })
    }

    /// Date of a Gregorian day offset.
    ///
    /// # Panics
    /// Panics if `offset` is outside the supported Gregorian range.
    pub fn from_offset(offset: i32) -> Self {
        offset_to_date(offset)
    }

    /// Date of a NELSC absolute day offset.
    ///
    /// # Panics
    /// Panics if `day` is outside `DAY_MIN..=DAY_MAX`.
    pub fn from_nelsc_day(day: i32) -> Self {
        assert!(
            (DAY_MIN..=DAY_MAX).contains(&day),
            "NELSC day offset {day} out of range {DAY_MIN}..={DAY_MAX}"
        );
        offset_to_date(day + GREGORIAN_OFFSET)
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month of the year, January is 1
    pub const fn month(&self) -> i32 {
        self.month
    }

    /// Day of the month, starting at 1
    pub const fn day(&self) -> i32 {
        self.day
    }

    /// Gregorian day offset of this date
    pub fn offset(&self) -> i32 {
        offset_of_valid(self.year, self.month, self.day)
    }

    /// NELSC absolute day offset of this date.
    ///
    /// # Errors
    /// Returns `ParseError::OutOfRange` if the date lies outside the NELSC
    /// range (1828-04-07 through 2404-04-11).
    pub fn to_nelsc_day(&self) -> Result<i32, ParseError> {
        let day = self.offset() - GREGORIAN_OFFSET;
        if (DAY_MIN..=DAY_MAX).contains(&day) {
            Ok(day)
        } else {
            Err(ParseError::OutOfRange(day))
        }
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        print_date(f, self.year, self.month, self.day)
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let (offset, rest) = scan_date(trimmed)?;
        if !rest.is_empty() {
            return Err(ParseError::TrailingInput(rest.to_owned()));
        }
        Ok(offset_to_date(offset))
    }
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
