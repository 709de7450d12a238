//! The three NELSC cycle layers: absolute days, absolute months and years.
//!
//! Months are 28 or 35 days long following a repeating 32-month pattern.
//! Years are 12 or 13 months long following an 11-year span, repeated 21
//! times into a 231-year pattern whose final year is forced long.
//!
//! Neither pattern starts at day, month or year zero, so every conversion
//! first shifts its input onto the pattern's alignment and then decomposes
//! it with floored (Euclidean) division, which keeps negative offsets on the
//! correct side of a pattern boundary.

use crate::consts::{
    DAY_MAX, DAY_MIN, DAYS_PER_LONG_MONTH, DAYS_PER_SHORT_MONTH, MONTH_MAX, MONTH_MIN,
    MONTHS_PER_LONG_YEAR, MONTHS_PER_SHORT_YEAR, YEAR_MAX, YEAR_MIN,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Length {
    Short,
    Long,
}

impl Length {
    const fn days(self) -> i32 {
        match self {
            Self::Short => DAYS_PER_SHORT_MONTH,
            Self::Long => DAYS_PER_LONG_MONTH,
        }
    }

    const fn months(self) -> i32 {
        match self {
            Self::Short => MONTHS_PER_SHORT_YEAR,
            Self::Long => MONTHS_PER_LONG_YEAR,
        }
    }
}

/// Builds a pattern table from `S`/`L` characters at compile time.
const fn pattern<const N: usize>(layout: &[u8; N]) -> [Length; N] {
    let mut out = [Length::Short; N];
    let mut i = 0;
    while i < N {
        out[i] = match layout[i] {
            b'S' => Length::Short,
            b'L' => Length::Long,
            _ => panic!("pattern characters must be 'S' or 'L'"),
        };
        i += 1;
    }
    out
}

const fn total_days<const N: usize>(table: &[Length; N]) -> i32 {
    let mut sum = 0;
    let mut i = 0;
    while i < N {
        sum += table[i].days();
        i += 1;
    }
    sum
}

const fn total_months<const N: usize>(table: &[Length; N]) -> i32 {
    let mut sum = 0;
    let mut i = 0;
    while i < N {
        sum += table[i].months();
        i += 1;
    }
    sum
}

/// Month lengths, grouped as SSLS SSSLS SSLS SSSLS SSLS SSSLS SSSLS
const MONTH_PATTERN: [Length; 32] = pattern(b"SSLSSSSLSSSLSSSSLSSSLSSSSLSSSSLS");
const MONTH_PATTERN_LEN: i32 = 32;
const DAYS_PER_MONTH_PATTERN: i32 = 945;

/// Year lengths within an 11-year span, grouped as SL SL SSL SSL S
const YEAR_SPAN: [Length; 11] = pattern(b"SLSLSSLSSLS");
const YEAR_SPAN_LEN: i32 = 11;
const MONTHS_PER_YEAR_SPAN: i32 = 136;

const YEAR_PATTERN_LEN: i32 = 231;
/// 21 spans plus the forced-long final year
const MONTHS_PER_YEAR_PATTERN: i32 = 2857;

const _: () = assert!(total_days(&MONTH_PATTERN) == DAYS_PER_MONTH_PATTERN);
const _: () = assert!(total_months(&YEAR_SPAN) == MONTHS_PER_YEAR_SPAN);
const _: () = assert!(
    MONTHS_PER_YEAR_SPAN * (YEAR_PATTERN_LEN / YEAR_SPAN_LEN) + 1 == MONTHS_PER_YEAR_PATTERN
);

/// Days from the first day of year zero to absolute day zero
const YEAR_ZERO_DAYS: i32 = 308;
/// Months from the first month of year zero to absolute month zero
const YEAR_ZERO_MONTHS: i32 = 10;
/// Years from the start of a 231-year pattern to year zero
const YEAR_PATTERN_LEAD_YEARS: i32 = 121;
/// Months from the start of a 231-year pattern to the first month of year zero
const YEAR_PATTERN_LEAD_MONTHS: i32 = 1496;

fn assert_day(day: i32) {
    assert!(
        (DAY_MIN..=DAY_MAX).contains(&day),
        "day offset {day} out of range {DAY_MIN}..={DAY_MAX}"
    );
}

fn assert_month(month: i32) {
    assert!(
        (MONTH_MIN..=MONTH_MAX).contains(&month),
        "month offset {month} out of range {MONTH_MIN}..={MONTH_MAX}"
    );
}

fn assert_year(year: i32) {
    assert!(
        (YEAR_MIN..=YEAR_MAX).contains(&year),
        "year {year} out of range {YEAR_MIN}..={YEAR_MAX}"
    );
}

/// Finds the absolute month containing `day`.
///
/// Returns the month and the zero-based day offset within it.
///
/// # Panics
/// Panics if `day` is outside `DAY_MIN..=DAY_MAX`.
pub fn day_to_month(day: i32) -> (i32, i32) {
    assert_day(day);

    let aligned = day + YEAR_ZERO_DAYS;
    let mut month = aligned.div_euclid(DAYS_PER_MONTH_PATTERN) * MONTH_PATTERN_LEN;
    let mut rest = aligned.rem_euclid(DAYS_PER_MONTH_PATTERN);

    for length in MONTH_PATTERN {
        if rest < length.days() {
            break;
        }
        rest -= length.days();
        month += 1;
    }

    (month - YEAR_ZERO_MONTHS, rest)
}

/// Returns the absolute day offset of the first day of `month`.
///
/// # Panics
/// Panics if `month` is outside `MONTH_MIN..=MONTH_MAX`.
#[allow(clippy::cast_sign_loss)]
pub fn month_to_day(month: i32) -> i32 {
    assert_month(month);

    let aligned = month + YEAR_ZERO_MONTHS;
    let within = aligned.rem_euclid(MONTH_PATTERN_LEN) as usize;
    let partial: i32 = MONTH_PATTERN[..within].iter().map(|l| l.days()).sum();

    aligned.div_euclid(MONTH_PATTERN_LEN) * DAYS_PER_MONTH_PATTERN + partial - YEAR_ZERO_DAYS
}

/// Finds the year containing absolute `month`.
///
/// Returns the year and the zero-based month offset within it.
///
/// # Panics
/// Panics if `month` is outside `MONTH_MIN..=MONTH_MAX`.
pub fn month_to_year(month: i32) -> (i32, i32) {
    assert_month(month);

    let aligned = month + YEAR_ZERO_MONTHS + YEAR_PATTERN_LEAD_MONTHS;
    let mut year = aligned.div_euclid(MONTHS_PER_YEAR_PATTERN) * YEAR_PATTERN_LEN;
    let mut rest = aligned.rem_euclid(MONTHS_PER_YEAR_PATTERN);

    if rest == MONTHS_PER_YEAR_PATTERN - 1 {
        // thirteenth month of the forced-long year closing the pattern
        year += YEAR_PATTERN_LEN - 1;
        rest = MONTHS_PER_LONG_YEAR - 1;
    } else {
        year += rest / MONTHS_PER_YEAR_SPAN * YEAR_SPAN_LEN;
        rest %= MONTHS_PER_YEAR_SPAN;

        for length in YEAR_SPAN {
            if rest < length.months() {
                break;
            }
            rest -= length.months();
            year += 1;
        }
    }

    (year - YEAR_PATTERN_LEAD_YEARS, rest)
}

/// Returns the absolute month offset of the first month of `year`.
///
/// # Panics
/// Panics if `year` is outside `YEAR_MIN..=YEAR_MAX`.
#[allow(clippy::cast_sign_loss)]
pub fn year_to_month(year: i32) -> i32 {
    assert_year(year);

    let aligned = year + YEAR_PATTERN_LEAD_YEARS;
    let within = aligned.rem_euclid(YEAR_PATTERN_LEN);
    // the final, forced-long year is never passed over here
    let partial: i32 = YEAR_SPAN[..(within % YEAR_SPAN_LEN) as usize]
        .iter()
        .map(|l| l.months())
        .sum();

    aligned.div_euclid(YEAR_PATTERN_LEN) * MONTHS_PER_YEAR_PATTERN
        + within / YEAR_SPAN_LEN * MONTHS_PER_YEAR_SPAN
        + partial
        - YEAR_PATTERN_LEAD_MONTHS
        - YEAR_ZERO_MONTHS
}

/// Returns whether `month` is a long (35-day) month.
///
/// # Panics
/// Panics if `month` is outside `MONTH_MIN..=MONTH_MAX`.
pub fn is_long_month(month: i32) -> bool {
    assert_month(month);

    let next = if month < MONTH_MAX {
        month_to_day(month + 1)
    } else {
        DAY_MAX + 1
    };
    next - month_to_day(month) > DAYS_PER_SHORT_MONTH
}

/// Returns whether `year` is a long (13-month) year.
///
/// # Panics
/// Panics if `year` is outside `YEAR_MIN..=YEAR_MAX`.
pub fn is_long_year(year: i32) -> bool {
    assert_year(year);

    let next = if year < YEAR_MAX {
        year_to_month(year + 1)
    } else {
        MONTH_MAX + 1
    };
    next - year_to_month(year) > MONTHS_PER_SHORT_YEAR
}

/// Number of days in `month`
pub fn month_length(month: i32) -> i32 {
    if is_long_month(month) {
        DAYS_PER_LONG_MONTH
    } else {
        DAYS_PER_SHORT_MONTH
    }
}

/// Number of months in `year`
pub fn year_length(year: i32) -> i32 {
    if is_long_year(year) {
        MONTHS_PER_LONG_YEAR
    } else {
        MONTHS_PER_SHORT_YEAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_shapes() {
        let long_months = MONTH_PATTERN.iter().filter(|l| **l == Length::Long).count();
        assert_eq!(long_months, 7);
        let long_years = YEAR_SPAN.iter().filter(|l| **l == Length::Long).count();
        assert_eq!(long_years, 4);
    }

    #[test]
    fn test_day_zero() {
        assert_eq!(day_to_month(0), (0, 14));
        assert_eq!(month_to_year(0), (0, 10));
        assert_eq!(year_to_month(0), -10);
        assert_eq!(month_to_day(-10), -308);
    }

    #[test]
    fn test_range_ends_line_up() {
        assert_eq!(day_to_month(DAY_MIN), (MONTH_MIN, 0));
        assert_eq!(month_to_day(MONTH_MIN), DAY_MIN);
        assert_eq!(day_to_month(DAY_MAX), (MONTH_MAX, DAYS_PER_LONG_MONTH - 1));
        assert_eq!(month_to_year(MONTH_MIN), (YEAR_MIN, 0));
        assert_eq!(year_to_month(YEAR_MIN), MONTH_MIN);
        assert_eq!(month_to_year(MONTH_MAX), (YEAR_MAX, MONTHS_PER_LONG_YEAR - 1));
    }

    #[test]
    fn test_negative_offsets_floor() {
        assert_eq!(day_to_month(-1), (0, 13));
        assert_eq!(day_to_month(-15), (-1, 27));
        assert_eq!(month_to_day(-1), -42);

        let (month, offset) = day_to_month(-309);
        assert_eq!(month, -11);
        assert_eq!(month_to_day(month) + offset, -309);
    }

    #[test]
    fn test_month_lengths_follow_pattern() {
        // year zero starts at month -10, aligned with the pattern start
        let lengths: String = (-10..22)
            .map(|m| if is_long_month(m) { 'L' } else { 'S' })
            .collect();
        assert_eq!(lengths, "SSLSSSSLSSSLSSSSLSSSLSSSSLSSSSLS");
    }

    #[test]
    fn test_year_lengths_follow_span() {
        // the 231-year pattern starts 121 years (11 spans) before year zero
        let lengths: String = (0..11)
            .map(|y| if is_long_year(y) { 'L' } else { 'S' })
            .collect();
        assert_eq!(lengths, "SLSLSSLSSLS");
    }

    #[test]
    fn test_forced_long_year_closes_pattern() {
        // years 109 and -122 would end a 231-year pattern; only 109 is in range
        let last = YEAR_PATTERN_LEN - YEAR_PATTERN_LEAD_YEARS - 1;
        assert_eq!(last, 109);
        assert!(is_long_year(last));
        assert!(!is_long_year(last - 11));

        let thirteenth = year_to_month(last) + MONTHS_PER_LONG_YEAR - 1;
        assert_eq!(month_to_year(thirteenth), (last, 12));
        assert_eq!(month_to_year(thirteenth + 1), (last + 1, 0));
    }

    #[test]
    fn test_boundary_lengths() {
        assert!(is_long_month(MONTH_MAX));
        assert!(is_long_year(YEAR_MAX));
        assert_eq!(month_length(MONTH_MAX), 35);
        assert_eq!(year_length(YEAR_MAX), 13);
    }

    #[test]
    #[should_panic(expected = "day offset")]
    fn test_day_to_month_out_of_range() {
        let _ = day_to_month(DAY_MAX + 1);
    }

    #[test]
    #[should_panic(expected = "month offset")]
    fn test_month_to_day_out_of_range() {
        let _ = month_to_day(MONTH_MIN - 1);
    }

    #[test]
    #[should_panic(expected = "month offset")]
    fn test_month_to_year_out_of_range() {
        let _ = month_to_year(MONTH_MAX + 1);
    }

    #[test]
    #[should_panic(expected = "year")]
    fn test_year_to_month_out_of_range() {
        let _ = year_to_month(YEAR_MIN - 1);
    }

    #[test]
    #[should_panic(expected = "month offset")]
    fn test_is_long_month_out_of_range() {
        let _ = is_long_month(MONTH_MAX + 1);
    }

    #[test]
    #[should_panic(expected = "year")]
    fn test_is_long_year_out_of_range() {
        let _ = is_long_year(YEAR_MAX + 1);
    }
}
