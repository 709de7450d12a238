use nelsc::{
    BASE24_PAIR_MAX, BASE24_PAIR_MIN, DAY_MAX, DAY_MIN, GREGORIAN_DAY_MAX, GREGORIAN_DAY_MIN,
    GREGORIAN_OFFSET, GregorianDate, NelscDate, Pair, base24, format, gregorian, parse_date,
};

#[test]
fn pair_roundtrip_all_values() {
    for v in BASE24_PAIR_MIN..=BASE24_PAIR_MAX {
        let text: String = base24::value_to_pair(v).iter().collect();
        assert_eq!(
            base24::pair_to_value(&text),
            Ok(v),
            "roundtrip failed for {v}: encoded as {text:?}"
        );
        assert_eq!(
            base24::pair_to_value(&text.to_lowercase()),
            Ok(v),
            "lowercase roundtrip failed for {v}"
        );
        assert_eq!(text.parse::<Pair>().map(Pair::get), Ok(v));
    }
}

#[test]
fn pair_reference_values() {
    let cases: &[(&str, i32)] = &[("T0", -96), ("RY", 479), ("YY", -1), ("00", 0), ("3V", 93)];
    for &(text, value) in cases {
        assert_eq!(base24::pair_to_value(text), Ok(value), "pair {text}");
        let encoded: String = base24::value_to_pair(value).iter().collect();
        assert_eq!(encoded, text, "value {value}");
    }
}

#[test]
fn gregorian_roundtrip_full_range() {
    for offset in GREGORIAN_DAY_MIN..=GREGORIAN_DAY_MAX {
        let date = gregorian::offset_to_date(offset);
        assert_eq!(
            gregorian::date_to_offset(date.year(), date.month(), date.day()),
            Ok(offset),
            "roundtrip failed for offset {offset}: {date:?}"
        );
    }
}

#[test]
fn gregorian_text_roundtrip_nelsc_range() {
    for day in DAY_MIN..=DAY_MAX {
        let date = GregorianDate::from_nelsc_day(day);
        let text = date.to_string();
        assert_eq!(
            gregorian::scan_date(&text),
            Ok((day + GREGORIAN_OFFSET, "")),
            "scan failed for {text}"
        );
        assert_eq!(parse_date(&text), Ok(day), "parse failed for {text}");
    }
}

#[test]
fn nelsc_text_roundtrip_all_days() {
    for day in DAY_MIN..=DAY_MAX {
        let date = NelscDate::from_day(day);
        let text = date.to_string();
        assert_eq!(text.len(), 7, "{text:?} for day {day}");
        assert_eq!(
            format::scan_date(&text),
            Ok((day, "")),
            "scan failed for {text} (day {day})"
        );
        assert_eq!(parse_date(&text), Ok(day));
        assert_eq!(date.to_day(), day);
    }
}

#[test]
fn reference_date() {
    let day = parse_date("3V:14-1").unwrap();
    let first = nelsc::cycle::month_to_day(nelsc::cycle::year_to_month(93));
    assert_eq!(day, first + 21);
    assert_eq!(NelscDate::from_day(day).to_string(), "3V:14-1");
    assert_eq!(GregorianDate::from_nelsc_day(day).to_string(), "2017-04-10");
}

#[test]
fn nelsc_day_zero_is_gregorian_anchor() {
    assert_eq!(
        gregorian::offset_to_date(GREGORIAN_OFFSET),
        GregorianDate::new(1925, 2, 2).unwrap()
    );
}

#[test]
fn serde_roundtrip_dates() {
    let nelsc: NelscDate = "3V:14-1".parse().unwrap();
    let json = serde_json::to_string(&nelsc).unwrap();
    assert_eq!(json, r#""3V:14-1""#);
    assert_eq!(serde_json::from_str::<NelscDate>(&json).unwrap(), nelsc);

    let gregorian = GregorianDate::from_nelsc_day(nelsc.to_day());
    let json = serde_json::to_string(&gregorian).unwrap();
    assert_eq!(json, r#""2017-04-10""#);
    assert_eq!(
        serde_json::from_str::<GregorianDate>(&json).unwrap(),
        gregorian
    );

    assert!(serde_json::from_str::<NelscDate>(r#""00:B5-1""#).is_err());
}
