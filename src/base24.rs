//! Signed base-24 numerals.
//!
//! Digits use the alphabet `0123456789ABCDEFGMPRTVXY`. A pair of digits holds
//! a signed value in `-96..=479`: unsigned values above 479 wrap around to the
//! negative range.

use std::fmt;

use crate::ParseError;
use crate::consts::{BASE24_ALPHABET, BASE24_DIGIT_MAX, BASE24_PAIR_MAX, BASE24_PAIR_MIN};

/// Radix of a single digit.
const RADIX: i32 = 24;

/// Number of distinct unsigned pair values (24 * 24).
const UNSIGNED_PAIR_SPAN: i32 = 576;

/// Returns the value of a base-24 digit, or `None` if `c` is not one.
///
/// Alphabetic digits are case insensitive.
pub fn digit_to_value(c: char) -> Option<u8> {
    let upper = c.to_ascii_uppercase();
    BASE24_ALPHABET
        .bytes()
        .position(|b| char::from(b) == upper)
        .and_then(|i| u8::try_from(i).ok())
}

/// Returns the uppercase digit for `value`.
///
/// # Panics
/// Panics if `value` is greater than 23.
pub fn value_to_digit(value: u8) -> char {
    assert!(
        value <= BASE24_DIGIT_MAX,
        "base-24 digit value {value} out of range 0..={BASE24_DIGIT_MAX}"
    );
    char::from(BASE24_ALPHABET.as_bytes()[usize::from(value)])
}

/// Decodes the signed pair at the start of `s`.
///
/// Only the first two characters are read; anything after them is left to
/// the caller. Leading whitespace is not skipped.
///
/// # Errors
/// Returns `ParseError::UnexpectedEnd` if `s` holds fewer than two characters
/// and `ParseError::InvalidDigit` if either character is not a base-24 digit.
pub fn pair_to_value(s: &str) -> Result<i32, ParseError> {
    let mut chars = s.chars();
    let most = chars.next().ok_or(ParseError::UnexpectedEnd)?;
    let most = digit_to_value(most).ok_or(ParseError::InvalidDigit(most))?;
    let least = chars.next().ok_or(ParseError::UnexpectedEnd)?;
    let least = digit_to_value(least).ok_or(ParseError::InvalidDigit(least))?;

    let unsigned = i32::from(most) * RADIX + i32::from(least);
    if unsigned > BASE24_PAIR_MAX {
        Ok(unsigned - UNSIGNED_PAIR_SPAN)
    } else {
        Ok(unsigned)
    }
}

/// Encodes `value` as a signed pair, most significant digit first.
///
/// # Panics
/// Panics if `value` is outside `-96..=479`.
pub fn value_to_pair(value: i32) -> [char; 2] {
    assert!(
        (BASE24_PAIR_MIN..=BASE24_PAIR_MAX).contains(&value),
        "base-24 pair value {value} out of range {BASE24_PAIR_MIN}..={BASE24_PAIR_MAX}"
    );
    let unsigned = if value < 0 {
        value + UNSIGNED_PAIR_SPAN
    } else {
        value
    };
    [digit_at(unsigned / RADIX), digit_at(unsigned % RADIX)]
}

/// Writes `value` as a signed pair to `out`.
///
/// # Errors
/// Returns the sink's error if writing fails.
///
/// # Panics
/// Panics if `value` is outside `-96..=479`.
pub fn write_pair<W: fmt::Write + ?Sized>(out: &mut W, value: i32) -> fmt::Result {
    let [most, least] = value_to_pair(value);
    out.write_char(most)?;
    out.write_char(least)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn digit_at(v: i32) -> char {
    // 0 <= v < 24 for every unsigned pair
    value_to_digit(v as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair_string(value: i32) -> String {
        value_to_pair(value).iter().collect()
    }

    struct Failing;

    impl fmt::Write for Failing {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_digit_to_value() {
        assert_eq!(digit_to_value('0'), Some(0));
        assert_eq!(digit_to_value('9'), Some(9));
        assert_eq!(digit_to_value('A'), Some(10));
        assert_eq!(digit_to_value('G'), Some(16));
        assert_eq!(digit_to_value('M'), Some(17));
        assert_eq!(digit_to_value('Y'), Some(23));
    }

    #[test]
    fn test_digit_to_value_case_insensitive() {
        for (upper, lower) in [('A', 'a'), ('M', 'm'), ('V', 'v'), ('Y', 'y')] {
            assert_eq!(digit_to_value(upper), digit_to_value(lower));
        }
    }

    #[test]
    fn test_digit_to_value_rejects_non_digits() {
        for c in ['H', 'I', 'L', 'N', 'O', 'Q', 'S', 'U', 'W', 'Z', ' ', '\0', ':', 'é'] {
            assert_eq!(digit_to_value(c), None, "{c:?} should not be a digit");
        }
    }

    #[test]
    fn test_value_to_digit_is_uppercase() {
        let digits: String = (0..=BASE24_DIGIT_MAX).map(value_to_digit).collect();
        assert_eq!(digits, BASE24_ALPHABET);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_value_to_digit_out_of_range() {
        let _ = value_to_digit(24);
    }

    #[test]
    fn test_pair_to_value_known_values() {
        assert_eq!(pair_to_value("T0"), Ok(-96));
        assert_eq!(pair_to_value("RY"), Ok(479));
        assert_eq!(pair_to_value("YY"), Ok(-1));
        assert_eq!(pair_to_value("00"), Ok(0));
        assert_eq!(pair_to_value("3V"), Ok(93));
        assert_eq!(pair_to_value("3v"), Ok(93));
    }

    #[test]
    fn test_pair_to_value_ignores_trailing_input() {
        assert_eq!(pair_to_value("10:14-1"), Ok(24));
    }

    #[test]
    fn test_pair_to_value_short_input() {
        assert_eq!(pair_to_value(""), Err(ParseError::UnexpectedEnd));
        assert_eq!(pair_to_value("3"), Err(ParseError::UnexpectedEnd));
    }

    #[test]
    fn test_pair_to_value_bad_digit() {
        assert_eq!(pair_to_value("3Z"), Err(ParseError::InvalidDigit('Z')));
        assert_eq!(pair_to_value(" 3"), Err(ParseError::InvalidDigit(' ')));
    }

    #[test]
    fn test_value_to_pair_known_values() {
        assert_eq!(pair_string(-1), "YY");
        assert_eq!(pair_string(-96), "T0");
        assert_eq!(pair_string(479), "RY");
        assert_eq!(pair_string(0), "00");
    }

    #[test]
    fn test_pair_round_trip() {
        for v in BASE24_PAIR_MIN..=BASE24_PAIR_MAX {
            assert_eq!(pair_to_value(&pair_string(v)), Ok(v), "value {v}");
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_value_to_pair_below_range() {
        let _ = value_to_pair(-97);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_value_to_pair_above_range() {
        let _ = value_to_pair(480);
    }

    #[test]
    fn test_write_pair() {
        let mut out = String::new();
        write_pair(&mut out, 93).unwrap();
        write_pair(&mut out, -1).unwrap();
        assert_eq!(out, "3VYY");
    }

    #[test]
    fn test_write_pair_propagates_sink_error() {
        assert_eq!(write_pair(&mut Failing, 93), Err(fmt::Error));
    }
}
