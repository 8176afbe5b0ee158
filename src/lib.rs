mod consts;
mod options;
mod prelude;
mod span;
mod types;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use options::{DiffOptions, Validation};
pub use span::{DateSpan, DiffError, Operand, diff, diff_with};
pub use types::{day_of_year, days_in_month, days_in_year, is_leap_year};

use crate::prelude::*;
use std::str::FromStr;

/// A day/month/year triple as written in `DD-MM-YYYY` text.
///
/// Fields are stored verbatim; whether they name a real calendar day is only
/// checked under [`Validation::Strict`]. Ordering is lexicographic on
/// (year, month, day), which is the declaration order of the fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{day:02}-{month:02}-{year:04}")]
pub struct CalendarDate {
    year:  u16,
    month: u8,
    day:   u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0:?} (expected DD-MM-YYYY)")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { day: u8, month: u8, year: u16 },
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from its components without any range checks
    pub const fn new(day: u8, month: u8, year: u16) -> Self {
        Self { year, month, day }
    }

    /// Parses `DD-MM-YYYY` text, checking only its shape.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` if the text does not start with two
    /// digits, a hyphen, two digits, a hyphen and four digits.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::parse_with(text, Validation::Loose)
    }

    /// Parses `DD-MM-YYYY` text under the given validation policy.
    ///
    /// Only the first ten characters are matched; anything after them is
    /// ignored.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` on a shape mismatch, and under
    /// [`Validation::Strict`] also `InvalidMonth` or `InvalidDay`.
    pub fn parse_with(text: &str, validation: Validation) -> Result<Self, ParseError> {
        let date =
            Self::match_shape(text).ok_or_else(|| ParseError::InvalidFormat(text.to_owned()))?;
        if validation == Validation::Strict {
            date.validate()?;
        }
        Ok(date)
    }

    /// Checks that the month exists and the day exists within that month.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` or `ParseError::InvalidDay`.
    pub fn validate(&self) -> Result<(), ParseError> {
        if self.month == 0 || self.month > MAX_MONTH {
            return Err(ParseError::InvalidMonth(self.month));
        }
        if self.day < MIN_DAY || self.day > days_in_month(self.year, self.month) {
            return Err(ParseError::InvalidDay {
                day:   self.day,
                month: self.month,
                year:  self.year,
            });
        }
        Ok(())
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Whether this date's year has 366 days
    pub const fn is_leap_year(&self) -> bool {
        types::is_leap_year(self.year)
    }

    /// 1-based ordinal of this date within its year
    pub fn day_of_year(&self) -> u16 {
        types::day_of_year(self.year, self.month, self.day)
    }

    fn match_shape(text: &str) -> Option<Self> {
        let bytes = text.as_bytes().get(..DATE_TEXT_LEN)?;
        let (day, rest) = bytes.split_at(DAY_DIGITS);
        let (month, rest) = rest.get(1..)?.split_at(MONTH_DIGITS);
        let year = rest.get(1..)?;

        let is_separator = |b: u8| char::from(b) == DATE_SEPARATOR;
        if !is_separator(bytes[DAY_DIGITS])
            || !is_separator(bytes[DAY_DIGITS + 1 + MONTH_DIGITS])
        {
            return None;
        }

        Some(Self {
            year:  parse_digits(year)?,
            month: u8::try_from(parse_digits(month)?).ok()?,
            day:   u8::try_from(parse_digits(day)?).ok()?,
        })
    }
}

/// Reads a fixed-width group of ASCII digits. At most four digits are ever
/// passed in, so the value always fits.
fn parse_digits(group: &[u8]) -> Option<u16> {
    group.iter().try_fold(0u16, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u16::from(b - b'0'))
    })
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
