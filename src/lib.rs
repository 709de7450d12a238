//! Conversions for the NELSC lunisolar calendar.
//!
//! A NELSC date is addressed at three layers: an absolute day offset, an
//! absolute month offset and a year. The [`cycle`] module converts between
//! them, [`gregorian`] links the day layer to the proleptic Gregorian
//! calendar, [`base24`] encodes years as signed base-24 pairs and [`format`]
//! reads and writes the compact `YY:MW-D` notation.
//!
//! ```
//! use nelsc::{GregorianDate, NelscDate, parse_date};
//!
//! let day = parse_date("1925-02-02").unwrap();
//! assert_eq!(day, 0);
//! assert_eq!(NelscDate::from_day(day).to_string(), "00:B3-1");
//! assert_eq!(GregorianDate::from_nelsc_day(day).to_string(), "1925-02-02");
//! ```

mod almanac;
pub mod base24;
mod consts;
pub mod cycle;
pub mod format;
pub mod gregorian;
mod prelude;
mod range;
mod types;

pub use almanac::{
    DayInfo, FullMoonWeek, NewYear, NewYearSummary, full_moon_week, full_moon_weeks, new_years,
};
pub use consts::*;
pub use format::NelscDate;
pub use gregorian::GregorianDate;
pub use range::{GregorianRange, RangeError};
pub use types::{Digit, Pair};

use tracing::trace;

/// Errors produced while parsing or validating calendar values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty date string")]
    EmptyInput,

    #[error("Unexpected end of input")]
    UnexpectedEnd,

    #[error("Invalid digit: {0:?}")]
    InvalidDigit(char),

    #[error("Expected '{expected}' at position {position}, found {found:?}")]
    InvalidSeparator {
        position: usize,
        expected: char,
        found: char,
    },

    #[error("Base-24 digit {0} out of range (must be 0-{max})", max = BASE24_DIGIT_MAX)]
    DigitOutOfRange(u8),

    #[error(
        "Base-24 pair {0} out of range (must be {min} to {max})",
        min = BASE24_PAIR_MIN,
        max = BASE24_PAIR_MAX
    )]
    PairOutOfRange(i32),

    #[error("Invalid year: {0}")]
    InvalidYear(i32),

    #[error("Invalid month {month} for year {year}")]
    InvalidMonth { year: i32, month: i32 },

    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: i32, day: i32 },

    #[error("Invalid week {week} (month has {weeks} weeks)")]
    InvalidWeek { week: i32, weeks: i32 },

    #[error("Invalid day of week: {0} (must be 1-{max})", max = DAYS_PER_WEEK)]
    InvalidWeekday(i32),

    #[error(
        "Day offset {0} is outside the supported range {min}..={max}",
        min = DAY_MIN,
        max = DAY_MAX
    )]
    OutOfRange(i32),

    #[error(
        "Gregorian day offset {0} is outside the supported range {min}..={max}",
        min = GREGORIAN_DAY_MIN,
        max = GREGORIAN_DAY_MAX
    )]
    GregorianOutOfRange(i32),

    #[error("Unexpected trailing input: {0:?}")]
    TrailingInput(String),

    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
}

/// Parses a date in either notation into a NELSC absolute day offset.
///
/// Leading whitespace is skipped. The NELSC notation (`YY:MW-D`) is tried
/// first and the Gregorian notation (`YYYY-MM-DD`) second. A Gregorian date
/// must fall within the NELSC range, 1828-04-07 through 2404-04-11. Only
/// whitespace may follow the date.
///
/// # Errors
/// Returns `ParseError::EmptyInput` for blank input and
/// `ParseError::TrailingInput` if text follows the date. If neither notation
/// matches, input with a `:` in the NELSC year separator position reports
/// the NELSC failure and any other input the Gregorian one.
///
/// # Examples
/// ```
/// use nelsc::{ParseError, cycle, parse_date};
///
/// let first = cycle::month_to_day(cycle::year_to_month(93));
/// assert_eq!(parse_date("  3V:14-1"), Ok(first + 21));
/// assert_eq!(parse_date("1828-04-06"), Err(ParseError::OutOfRange(-35365)));
/// ```
pub fn parse_date(s: &str) -> Result<i32, ParseError> {
    let input = s.trim_start();
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let (day, rest) = match format::scan_date(input) {
        Ok(found) => found,
        Err(nelsc_error) => {
            trace!(input, error = %nelsc_error, "not a NELSC date, trying Gregorian");
            let (offset, rest) = match gregorian::scan_date(input) {
                Ok(found) => found,
                Err(gregorian_error) => {
                    trace!(input, error = %gregorian_error, "not a Gregorian date");
                    let looks_nelsc = input.chars().nth(NELSC_YEAR_SEPARATOR_POSITION)
                        == Some(NELSC_YEAR_SEPARATOR);
                    return Err(if looks_nelsc {
                        nelsc_error
                    } else {
                        gregorian_error
                    });
                }
            };
            let day = offset - GREGORIAN_OFFSET;
            if !(DAY_MIN..=DAY_MAX).contains(&day) {
                return Err(ParseError::OutOfRange(day));
            }
            (day, rest)
        }
    };

    let rest = rest.trim();
    if !rest.is_empty() {
        return Err(ParseError::TrailingInput(rest.to_owned()));
    }
    trace!(input, day, "parsed date");
    Ok(day)
}
