use nelsc::{
    DAY_MAX, DAY_MIN, DAYS_PER_LONG_MONTH, DAYS_PER_SHORT_MONTH, MONTH_MAX, MONTH_MIN,
    MONTHS_PER_LONG_YEAR, MONTHS_PER_SHORT_YEAR, YEAR_MAX, YEAR_MIN, cycle,
};

#[test]
fn day_month_roundtrip_all_days() {
    for d in DAY_MIN..=DAY_MAX {
        let (month, offset) = cycle::day_to_month(d);
        assert!(
            (MONTH_MIN..=MONTH_MAX).contains(&month),
            "day {d} mapped to month {month} outside the range"
        );
        assert!(
            (0..cycle::month_length(month)).contains(&offset),
            "day {d} mapped to offset {offset} past the end of month {month}"
        );
        assert_eq!(
            cycle::month_to_day(month) + offset,
            d,
            "roundtrip failed for day {d}: day_to_month=({month}, {offset})"
        );
    }
}

#[test]
fn month_day_roundtrip_all_months() {
    for m in MONTH_MIN..=MONTH_MAX {
        let first = cycle::month_to_day(m);
        assert_eq!(
            cycle::day_to_month(first),
            (m, 0),
            "roundtrip failed for month {m}: month_to_day={first}"
        );
    }
}

#[test]
fn year_month_roundtrip_all_years() {
    for y in YEAR_MIN..=YEAR_MAX {
        let first = cycle::year_to_month(y);
        assert_eq!(
            cycle::month_to_year(first),
            (y, 0),
            "roundtrip failed for year {y}: year_to_month={first}"
        );
    }
}

#[test]
fn month_year_roundtrip_all_months() {
    for m in MONTH_MIN..=MONTH_MAX {
        let (year, offset) = cycle::month_to_year(m);
        assert!(
            (0..cycle::year_length(year)).contains(&offset),
            "month {m} mapped to offset {offset} past the end of year {year}"
        );
        assert_eq!(cycle::year_to_month(year) + offset, m);
    }
}

#[test]
fn long_month_matches_span() {
    for m in MONTH_MIN..MONTH_MAX {
        let span = cycle::month_to_day(m + 1) - cycle::month_to_day(m);
        assert!(
            span == DAYS_PER_SHORT_MONTH || span == DAYS_PER_LONG_MONTH,
            "month {m} spans {span} days"
        );
        assert_eq!(
            cycle::is_long_month(m),
            span == DAYS_PER_LONG_MONTH,
            "is_long_month({m}) disagrees with its {span}-day span"
        );
    }
    let last = DAY_MAX + 1 - cycle::month_to_day(MONTH_MAX);
    assert_eq!(cycle::is_long_month(MONTH_MAX), last == DAYS_PER_LONG_MONTH);
}

#[test]
fn long_year_matches_span() {
    for y in YEAR_MIN..YEAR_MAX {
        let span = cycle::year_to_month(y + 1) - cycle::year_to_month(y);
        assert!(
            span == MONTHS_PER_SHORT_YEAR || span == MONTHS_PER_LONG_YEAR,
            "year {y} spans {span} months"
        );
        assert_eq!(
            cycle::is_long_year(y),
            span == MONTHS_PER_LONG_YEAR,
            "is_long_year({y}) disagrees with its {span}-month span"
        );
    }
    let last = MONTH_MAX + 1 - cycle::year_to_month(YEAR_MAX);
    assert_eq!(cycle::is_long_year(YEAR_MAX), last == MONTHS_PER_LONG_YEAR);
}

#[test]
fn consecutive_days_advance_by_one() {
    let mut previous = cycle::day_to_month(DAY_MIN);
    for d in DAY_MIN + 1..=DAY_MAX {
        let current = cycle::day_to_month(d);
        let expected = if previous.1 + 1 == cycle::month_length(previous.0) {
            (previous.0 + 1, 0)
        } else {
            (previous.0, previous.1 + 1)
        };
        assert_eq!(current, expected, "day {d} does not follow day {}", d - 1);
        previous = current;
    }
}
