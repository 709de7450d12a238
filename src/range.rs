use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{GregorianDate, ParseError, RANGE_SEPARATOR, prelude::*};

/// An inclusive span of Gregorian dates.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}{RANGE_SEPARATOR}{end}")]
pub struct GregorianRange {
    start: GregorianDate,
    end:   GregorianDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange {
        start: GregorianDate,
        end:   GregorianDate,
    },

    /// Start month is after end month.
    #[error("Invalid month range: start ({start}) is after end ({end})")]
    InvalidMonthSpan { start: i32, end: i32 },

    /// Month offset outside the NELSC range.
    #[error("Month offset {0} is outside the supported range")]
    MonthOutOfRange(i32),

    /// Error parsing date component.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl GregorianRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: GregorianDate, end: GregorianDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range covering two Gregorian day offsets, inclusive.
    ///
    /// # Panics
    /// Panics if either offset is outside the supported Gregorian range or
    /// `start > end`.
    pub(crate) fn from_offsets(start: i32, end: i32) -> Self {
        assert!(start <= end, "range start {start} is after end {end}");
        Self {
            start: GregorianDate::from_offset(start),
            end:   GregorianDate::from_offset(end),
        }
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> GregorianDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> GregorianDate {
        self.end
    }

    /// Number of days in the range, counting both ends
    pub fn days(&self) -> i32 {
        self.end.offset() - self.start.offset() + 1
    }
}

impl FromStr for GregorianRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!(
                        "Separator '{RANGE_SEPARATOR}' not found despite count == 1"
                    ))
                })?;

                let start = start_str.parse::<GregorianDate>()?;
                let end = end_str.parse::<GregorianDate>()?;

                Self::new(start, end)
            }
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for GregorianRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
