use crate::ParseError;
use crate::base24;
use crate::consts::{BASE24_DIGIT_MAX, BASE24_PAIR_MAX, BASE24_PAIR_MIN};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single base-24 digit, guaranteed to be in the range `0..=BASE24_DIGIT_MAX` (0..=23)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Into)]
pub struct Digit(u8);

impl Digit {
    /// Creates a new Digit, validating that it's <= `BASE24_DIGIT_MAX`
    ///
    /// # Errors
    /// Returns `ParseError::DigitOutOfRange` if the value is > `BASE24_DIGIT_MAX`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        if value > BASE24_DIGIT_MAX {
            return Err(ParseError::DigitOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the digit value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the uppercase digit character
    pub fn to_char(self) -> char {
        base24::value_to_digit(self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<char> for Digit {
    type Error = ParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        base24::digit_to_value(c)
            .map(Self)
            .ok_or(ParseError::InvalidDigit(c))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Parses exactly one digit, ignoring surrounding whitespace
impl FromStr for Digit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let c = chars.next().ok_or(ParseError::EmptyInput)?;
        if !chars.as_str().is_empty() {
            return Err(ParseError::TrailingInput(chars.as_str().to_owned()));
        }
        Self::try_from(c)
    }
}

/// A signed base-24 pair, guaranteed to be in the range
/// `BASE24_PAIR_MIN..=BASE24_PAIR_MAX` (-96..=479)
///
/// Every pair is also a valid NELSC year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Into)]
pub struct Pair(i32);

impl Pair {
    /// Creates a new Pair, validating the signed range
    ///
    /// # Errors
    /// Returns `ParseError::PairOutOfRange` if the value is outside -96..=479.
    pub fn new(value: i32) -> Result<Self, ParseError> {
        if value < BASE24_PAIR_MIN || value > BASE24_PAIR_MAX {
            return Err(ParseError::PairOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the signed value
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Returns both digits, most significant first
    pub fn to_chars(self) -> [char; 2] {
        base24::value_to_pair(self.0)
    }
}

impl TryFrom<i32> for Pair {
    type Error = ParseError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        base24::write_pair(f, self.0)
    }
}

/// Parses exactly one pair, ignoring surrounding whitespace
impl FromStr for Pair {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let value = base24::pair_to_value(trimmed)?;
        // both digits are ASCII, so byte 2 is a char boundary
        let rest = &trimmed[2..];
        if !rest.is_empty() {
            return Err(ParseError::TrailingInput(rest.to_owned()));
        }
        Ok(Self(value))
    }
}

macro_rules! serde_as_string {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

serde_as_string!(Digit);
serde_as_string!(Pair);
