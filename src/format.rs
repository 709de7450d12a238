//! The compact NELSC date notation `YY:MW-D`.
//!
//! `YY` is the year as a signed base-24 pair, `M` the one-based month as a
//! base-24 digit, `W` the one-based week of the month and `D` the one-based
//! day of the week, both decimal. A formatted date is always exactly seven
//! characters, e.g. `3V:14-1`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DAY_MAX, DAY_MIN, DAYS_PER_WEEK, NELSC_DATE_LENGTH, NELSC_WEEK_SEPARATOR,
    NELSC_WEEK_SEPARATOR_POSITION as WEEK_SEPARATOR_POS, NELSC_YEAR_SEPARATOR,
    NELSC_YEAR_SEPARATOR_POSITION as YEAR_SEPARATOR_POS, YEAR_MAX, YEAR_MIN,
};
use crate::{ParseError, base24, cycle};

const YEAR_FIELD: usize = 0;
const MONTH_FIELD: usize = 3;
const WEEK_FIELD: usize = 4;
const WEEKDAY_FIELD: usize = 6;

/// Writes the NELSC date for `year`, zero-based `month` of the year and
/// zero-based `day` of the month to `out`.
///
/// # Errors
/// Returns the sink's error if writing fails.
///
/// # Panics
/// Panics if the year is out of range, the month exceeds the year's length
/// or the day exceeds the month's length.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn print_date<W: fmt::Write + ?Sized>(
    out: &mut W,
    year: i32,
    month: i32,
    day: i32,
) -> fmt::Result {
    assert!(
        (YEAR_MIN..=YEAR_MAX).contains(&year),
        "year {year} out of range {YEAR_MIN}..={YEAR_MAX}"
    );
    let months = cycle::year_length(year);
    assert!(
        (0..months).contains(&month),
        "month {month} out of range for a {months}-month year"
    );
    let days = cycle::month_length(cycle::year_to_month(year) + month);
    assert!(
        (0..days).contains(&day),
        "day {day} out of range for a {days}-day month"
    );

    base24::write_pair(out, year)?;
    out.write_char(NELSC_YEAR_SEPARATOR)?;
    // month is at most 12 here
    out.write_char(base24::value_to_digit(month as u8 + 1))?;
    write!(
        out,
        "{}{NELSC_WEEK_SEPARATOR}{}",
        day / DAYS_PER_WEEK + 1,
        day % DAYS_PER_WEEK + 1
    )
}

/// Parses a NELSC date at the start of `s`.
///
/// Exactly seven characters are read; the function never looks past the
/// end of `s` and does not skip leading whitespace. On success returns the
/// NELSC absolute day offset and the input following the date.
///
/// # Errors
/// Returns a `ParseError` if the separators are misplaced, a field is not a
/// valid digit, or the month, week or weekday does not exist in the year
/// and month it names.
pub fn scan_date(s: &str) -> Result<(i32, &str), ParseError> {
    let mut chars = s.chars();
    let mut field = ['\0'; NELSC_DATE_LENGTH];
    for slot in &mut field {
        *slot = chars.next().ok_or(ParseError::UnexpectedEnd)?;
    }
    let rest = chars.as_str();

    for (position, expected) in [
        (YEAR_SEPARATOR_POS, NELSC_YEAR_SEPARATOR),
        (WEEK_SEPARATOR_POS, NELSC_WEEK_SEPARATOR),
    ] {
        if field[position] != expected {
            return Err(ParseError::InvalidSeparator {
                position,
                expected,
                found: field[position],
            });
        }
    }

    let year_text: String = field[YEAR_FIELD..YEAR_SEPARATOR_POS].iter().collect();
    let year = base24::pair_to_value(&year_text)?;
    let month = base24::digit_to_value(field[MONTH_FIELD])
        .map(i32::from)
        .ok_or(ParseError::InvalidDigit(field[MONTH_FIELD]))?;
    let week = decimal(field[WEEK_FIELD])?;
    let weekday = decimal(field[WEEKDAY_FIELD])?;

    // every pair value is a valid year
    let first_month = cycle::year_to_month(year);
    if !(1..=cycle::year_length(year)).contains(&month) {
        return Err(ParseError::InvalidMonth { year, month });
    }
    let absolute_month = first_month + month - 1;

    let weeks = cycle::month_length(absolute_month) / DAYS_PER_WEEK;
    if !(1..=weeks).contains(&week) {
        return Err(ParseError::InvalidWeek { week, weeks });
    }
    if !(1..=DAYS_PER_WEEK).contains(&weekday) {
        return Err(ParseError::InvalidWeekday(weekday));
    }

    let day = cycle::month_to_day(absolute_month) + (week - 1) * DAYS_PER_WEEK + weekday - 1;
    Ok((day, rest))
}

#[allow(clippy::cast_possible_wrap)]
fn decimal(c: char) -> Result<i32, ParseError> {
    c.to_digit(10)
        .map(|d| d as i32)
        .ok_or(ParseError::InvalidDigit(c))
}

/// A validated NELSC calendar date.
///
/// Month and day are zero-based offsets: the first month of a year is 0
/// and the first day of a month is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NelscDate {
    year: i32,
    month: i32,
    day: i32,
}

impl NelscDate {
    /// Creates a new date, validating it against the lengths of its year
    /// and month.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear`, `InvalidMonth` or `InvalidDay`.
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self, ParseError> {
        if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
            return Err(ParseError::InvalidYear(year));
        }
        if !(0..cycle::year_length(year)).contains(&month) {
            return Err(ParseError::InvalidMonth { year, month });
        }
        if !(0..cycle::month_length(cycle::year_to_month(year) + month)).contains(&day) {
            return Err(ParseError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Date of a NELSC absolute day offset.
    ///
    /// # Panics
    /// Panics if `day` is outside `DAY_MIN..=DAY_MAX`.
    pub fn from_day(day: i32) -> Self {
        let (absolute_month, day) = cycle::day_to_month(day);
        let (year, month) = cycle::month_to_year(absolute_month);
        Self { year, month, day }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month of the year
    pub const fn month(&self) -> i32 {
        self.month
    }

    /// Zero-based day of the month
    pub const fn day(&self) -> i32 {
        self.day
    }

    /// One-based week of the month
    pub const fn week(&self) -> i32 {
        self.day / DAYS_PER_WEEK + 1
    }

    /// One-based day of the week
    pub const fn weekday(&self) -> i32 {
        self.day % DAYS_PER_WEEK + 1
    }

    /// Absolute month offset of this date's month
    pub fn absolute_month(&self) -> i32 {
        cycle::year_to_month(self.year) + self.month
    }

    /// NELSC absolute day offset of this date
    pub fn to_day(&self) -> i32 {
        let day = cycle::month_to_day(self.absolute_month()) + self.day;
        debug_assert!((DAY_MIN..=DAY_MAX).contains(&day));
        day
    }
}

impl fmt::Display for NelscDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        print_date(f, self.year, self.month, self.day)
    }
}

impl FromStr for NelscDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let (day, rest) = scan_date(trimmed)?;
        if !rest.is_empty() {
            return Err(ParseError::TrailingInput(rest.to_owned()));
        }
        Ok(Self::from_day(day))
    }
}

impl Serialize for NelscDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for NelscDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
