use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::{
    CalendarDate, DiffOptions, ParseError, SPAN_SEPARATOR, Validation, days_in_year, prelude::*,
};

/// Which of the two inputs to [`diff`] an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Operand {
    #[display(fmt = "date1")]
    First,
    #[display(fmt = "date2")]
    Second,
}

/// Error type for day-count operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// One input is not a usable `DD-MM-YYYY` date.
    #[error("{operand} is not a valid DD-MM-YYYY date")]
    Format {
        operand: Operand,
        #[source]
        source:  ParseError,
    },

    /// Both inputs name the same day, so nothing lies between them.
    #[error("dates are equal: {0}")]
    EqualDates(CalendarDate),
}

/// Two distinct dates held in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{earlier}{SPAN_SEPARATOR}{later}")]
pub struct DateSpan {
    earlier: CalendarDate,
    later:   CalendarDate,
}

impl DateSpan {
    /// Orders two dates by (year, month, day).
    ///
    /// # Errors
    /// Returns `DiffError::EqualDates` if both dates are the same day.
    pub fn new(a: CalendarDate, b: CalendarDate) -> Result<Self, DiffError> {
        match a.cmp(&b) {
            Ordering::Less => Ok(Self {
                earlier: a,
                later:   b,
            }),
            Ordering::Greater => Ok(Self {
                earlier: b,
                later:   a,
            }),
            Ordering::Equal => Err(DiffError::EqualDates(a)),
        }
    }

    pub const fn earlier(&self) -> CalendarDate {
        self.earlier
    }

    pub const fn later(&self) -> CalendarDate {
        self.later
    }

    /// Returns both dates as an `(earlier, later)` tuple
    pub const fn dates(&self) -> (CalendarDate, CalendarDate) {
        (self.earlier, self.later)
    }

    /// Number of days strictly between the two dates, excluding both ends.
    ///
    /// Within one year this is the ordinal difference minus one. Across years
    /// it is the rest of the earlier year, every whole year in between, and
    /// the days of the later year before the later date. Unchecked components
    /// can make the result negative (e.g. 31 April vs 1 May).
    pub fn days_between(&self) -> i64 {
        let start = i64::from(self.earlier.day_of_year());
        let end = i64::from(self.later.day_of_year());
        trace!(start, end, leap = self.earlier.is_leap_year(), "ordinals");

        let (first_year, last_year) = (self.earlier.year(), self.later.year());
        if first_year == last_year {
            return end - start - 1;
        }

        let rest_of_first = i64::from(days_in_year(first_year)) - start;
        let whole_years = (first_year + 1..last_year)
            .map(|year| i64::from(days_in_year(year)))
            .sum::<i64>();
        trace!(rest_of_first, whole_years, "accumulated years");

        rest_of_first + whole_years + end - 1
    }
}

/// Counts the days strictly between two `DD-MM-YYYY` dates, in either order.
///
/// Only the shape of each string is checked; see [`diff_with`] for stricter
/// validation.
///
/// # Errors
/// Returns `DiffError::Format` for the first malformed input (date1 is checked
/// before date2) and `DiffError::EqualDates` when both name the same day.
pub fn diff(date1: &str, date2: &str) -> Result<i64, DiffError> {
    diff_with(date1, date2, DiffOptions::default())
}

/// Like [`diff`], validating the inputs according to `options`.
///
/// # Errors
/// See [`diff`]. Under [`Validation::Strict`], out-of-range months and days
/// are also reported as `DiffError::Format`.
pub fn diff_with(date1: &str, date2: &str, options: DiffOptions) -> Result<i64, DiffError> {
    let first = parse_operand(date1, Operand::First, options.validation)?;
    let second = parse_operand(date2, Operand::Second, options.validation)?;

    let span = DateSpan::new(first, second)?;
    let days = span.days_between();
    debug!(%span, days, "counted days between");
    Ok(days)
}

fn parse_operand(
    text: &str,
    operand: Operand,
    validation: Validation,
) -> Result<CalendarDate, DiffError> {
    CalendarDate::parse_with(text, validation).map_err(|source| DiffError::Format { operand, source })
}
