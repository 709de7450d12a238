//! Derived calendar facts: per-day summaries, full moon weeks and the
//! position of each new year relative to the March equinox.
//!
//! Full moons and the equinox are fixed approximations, not astronomical
//! predictions: a full moon week is always the same week of its month and
//! the equinox is always March 20.

use std::fmt;

use tracing::debug;

use crate::consts::{
    EQUINOX_DAY, EQUINOX_MONTH, FULL_MOON_LONG, FULL_MOON_SHORT, GREGORIAN_OFFSET, MONTH_MAX,
    MONTH_MIN, YEAR_MAX, YEAR_MIN,
};
use crate::prelude::*;
use crate::{GregorianDate, GregorianRange, NelscDate, RangeError, base24, cycle, gregorian};

/// Everything the calendar knows about a single NELSC day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayInfo {
    day:            i32,
    absolute_month: i32,
    year:           i32,
    month_of_year:  i32,
    day_of_month:   i32,
    long_month:     bool,
    long_year:      bool,
    gregorian:      GregorianDate,
}

impl DayInfo {
    /// Collects the information for a NELSC absolute day offset.
    ///
    /// # Panics
    /// Panics if `day` is outside `DAY_MIN..=DAY_MAX`.
    pub fn for_day(day: i32) -> Self {
        let (absolute_month, day_of_month) = cycle::day_to_month(day);
        let (year, month_of_year) = cycle::month_to_year(absolute_month);
        Self {
            day,
            absolute_month,
            year,
            month_of_year,
            day_of_month,
            long_month: cycle::is_long_month(absolute_month),
            long_year: cycle::is_long_year(year),
            gregorian: GregorianDate::from_nelsc_day(day),
        }
    }

    /// Collects the information for the first day of an absolute month.
    ///
    /// # Panics
    /// Panics if `month` is outside `MONTH_MIN..=MONTH_MAX`.
    pub fn for_month(month: i32) -> Self {
        Self::for_day(cycle::month_to_day(month))
    }

    pub const fn day(&self) -> i32 {
        self.day
    }

    pub const fn absolute_month(&self) -> i32 {
        self.absolute_month
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month of the year
    pub const fn month_of_year(&self) -> i32 {
        self.month_of_year
    }

    /// Zero-based day of the month
    pub const fn day_of_month(&self) -> i32 {
        self.day_of_month
    }

    pub const fn is_long_month(&self) -> bool {
        self.long_month
    }

    pub const fn is_long_year(&self) -> bool {
        self.long_year
    }

    pub const fn gregorian(&self) -> GregorianDate {
        self.gregorian
    }

    pub fn nelsc_date(&self) -> NelscDate {
        NelscDate::from_day(self.day)
    }
}

const fn length_label(long: bool) -> &'static str {
    if long { "long" } else { "short" }
}

impl fmt::Display for DayInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Day offset:      {}", self.day)?;
        writeln!(f, "Absolute month:  {}", self.absolute_month)?;
        writeln!(f, "NELSC date:      {}", self.nelsc_date())?;
        writeln!(f, "Month length:    {}", length_label(self.long_month))?;
        writeln!(f, "Year length:     {}", length_label(self.long_year))?;
        write!(f, "Gregorian date:  {}", self.gregorian)
    }
}

/// The full moon week of one absolute month, as Gregorian dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{range}")]
pub struct FullMoonWeek {
    month: i32,
    range: GregorianRange,
}

impl FullMoonWeek {
    pub const fn month(&self) -> i32 {
        self.month
    }

    pub const fn range(&self) -> GregorianRange {
        self.range
    }
}

/// Returns the full moon week of `month`.
///
/// Short months have their full moon in the third week, long months in
/// the fourth.
///
/// # Panics
/// Panics if `month` is outside `MONTH_MIN..=MONTH_MAX`.
pub fn full_moon_week(month: i32) -> FullMoonWeek {
    let first = cycle::month_to_day(month) + GREGORIAN_OFFSET;
    let (begin, end) = if cycle::is_long_month(month) {
        FULL_MOON_LONG
    } else {
        FULL_MOON_SHORT
    };
    FullMoonWeek {
        month,
        range: GregorianRange::from_offsets(first + begin, first + end),
    }
}

/// Returns the full moon weeks of every month from `first` through `last`.
///
/// # Errors
/// Returns `RangeError::MonthOutOfRange` if either month is outside
/// `MONTH_MIN..=MONTH_MAX` and `RangeError::InvalidMonthSpan` if
/// `first > last`.
pub fn full_moon_weeks(
    first: i32,
    last: i32,
) -> Result<impl Iterator<Item = FullMoonWeek>, RangeError> {
    for month in [first, last] {
        if !(MONTH_MIN..=MONTH_MAX).contains(&month) {
            return Err(RangeError::MonthOutOfRange(month));
        }
    }
    if first > last {
        return Err(RangeError::InvalidMonthSpan {
            start: first,
            end:   last,
        });
    }
    debug!(first, last, "computing full moon weeks");
    Ok((first..=last).map(full_moon_week))
}

/// Where a NELSC year begins, and how far that is from the equinox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NewYear {
    year:           i32,
    month:          i32,
    day:            i32,
    gregorian:      GregorianDate,
    equinox_offset: i32,
}

impl NewYear {
    /// Computes the start of `year`.
    ///
    /// # Panics
    /// Panics if `year` is outside `YEAR_MIN..=YEAR_MAX`.
    pub fn of(year: i32) -> Self {
        let month = cycle::year_to_month(year);
        let day = cycle::month_to_day(month);
        let start = GregorianDate::from_nelsc_day(day);

        // the first year's equinox precedes the calendar by less than a month
        let equinox_offset = if year == YEAR_MIN {
            -1
        } else {
            let equinox = gregorian::offset_of_valid(start.year(), EQUINOX_MONTH, EQUINOX_DAY)
                - GREGORIAN_OFFSET;
            cycle::day_to_month(equinox).0 - month
        };

        Self {
            year,
            month,
            day,
            gregorian: start,
            equinox_offset,
        }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// First absolute month of the year
    pub const fn month(&self) -> i32 {
        self.month
    }

    /// First absolute day of the year
    pub const fn day(&self) -> i32 {
        self.day
    }

    pub const fn gregorian(&self) -> GregorianDate {
        self.gregorian
    }

    /// Absolute month of the equinox minus the first month of the year
    pub const fn equinox_offset(&self) -> i32 {
        self.equinox_offset
    }
}

impl fmt::Display for NewYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        base24::write_pair(f, self.year)?;
        write!(
            f,
            "  {}  equinox month offset {:2}",
            self.gregorian, self.equinox_offset
        )
    }
}

/// The start of every NELSC year, in order.
pub fn new_years() -> impl Iterator<Item = NewYear> {
    (YEAR_MIN..=YEAR_MAX).map(NewYear::of)
}

/// Extremes over a run of new years.
///
/// Gregorian positions are `(month, day)` pairs compared within the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NewYearSummary {
    earliest:           (i32, i32),
    latest:             (i32, i32),
    min_equinox_offset: i32,
    max_equinox_offset: i32,
}

impl NewYearSummary {
    /// Summarizes the given new years, or `None` if there are none.
    pub fn from_years<I>(years: I) -> Option<Self>
    where
        I: IntoIterator<Item = NewYear>,
    {
        let mut years = years.into_iter();
        let mut summary = Self::starting(&years.next()?);
        years.for_each(|year| summary.record(&year));
        debug!(?summary, "summarized new years");
        Some(summary)
    }

    /// Summarizes every year of the calendar.
    pub fn all() -> Self {
        let mut summary = Self::starting(&NewYear::of(YEAR_MIN));
        new_years().skip(1).for_each(|year| summary.record(&year));
        debug!(?summary, "summarized all new years");
        summary
    }

    const fn starting(year: &NewYear) -> Self {
        let position = (year.gregorian.month(), year.gregorian.day());
        Self {
            earliest:           position,
            latest:             position,
            min_equinox_offset: year.equinox_offset,
            max_equinox_offset: year.equinox_offset,
        }
    }

    fn record(&mut self, year: &NewYear) {
        let position = (year.gregorian.month(), year.gregorian.day());
        self.earliest = self.earliest.min(position);
        self.latest = self.latest.max(position);
        self.min_equinox_offset = self.min_equinox_offset.min(year.equinox_offset);
        self.max_equinox_offset = self.max_equinox_offset.max(year.equinox_offset);
    }

    /// Earliest Gregorian `(month, day)` a year begins on
    pub const fn earliest(&self) -> (i32, i32) {
        self.earliest
    }

    /// Latest Gregorian `(month, day)` a year begins on
    pub const fn latest(&self) -> (i32, i32) {
        self.latest
    }

    pub const fn min_equinox_offset(&self) -> i32 {
        self.min_equinox_offset
    }

    pub const fn max_equinox_offset(&self) -> i32 {
        self.max_equinox_offset
    }
}

impl fmt::Display for NewYearSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Range of first day of year:  {:02}-{:02} - {:02}-{:02}",
            self.earliest.0, self.earliest.1, self.latest.0, self.latest.1
        )?;
        write!(
            f,
            "Range of equinox offsets:    [{}, {}]",
            self.min_equinox_offset, self.max_equinox_offset
        )
    }
}
