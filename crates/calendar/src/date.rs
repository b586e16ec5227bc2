//! Gregorian calendar date derived from epoch seconds.

use std::fmt;

use crate::civil::{day_of_year, month_and_day, year_and_day_of_year};
use crate::error::CalendarError;

/// A proleptic Gregorian date.
///
/// Displays as `M/D/YYYY` without zero padding on month or day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    year: i64,
    month: u8,
    day: u8,
    day_of_year: u16,
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.day_of_year).cmp(&(other.year, other.day_of_year))
    }
}

impl CalendarDate {
    /// Creates a new `CalendarDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month or day is invalid for `year`.
    pub fn new(year: i64, month: u8, day: u8) -> Result<Self, CalendarError> {
        let doy = day_of_year(month, day, year)?;
        Ok(Self {
            year,
            month,
            day,
            day_of_year: doy as u16,
        })
    }

    /// Creates a `CalendarDate` from a year and a zero-based day-of-year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDayOfYear`] if `day_of_year` does not
    /// fit in `year`.
    pub fn from_year_day(year: i64, day_of_year: i64) -> Result<Self, CalendarError> {
        let (month, day) = month_and_day(day_of_year, year)?;
        Ok(Self {
            year,
            month,
            day,
            day_of_year: day_of_year as u16,
        })
    }

    /// Derives the date containing offset-adjusted epoch seconds.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::BeforeEpoch`] for negative seconds.
    pub fn from_epoch_seconds(adjusted_epoch_seconds: i64) -> Result<Self, CalendarError> {
        let (year, doy) = year_and_day_of_year(adjusted_epoch_seconds)?;
        Self::from_year_day(year, doy)
    }

    /// Returns the year.
    pub fn year(self) -> i64 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the zero-based day-of-year (0 for January 1).
    pub fn day_of_year(self) -> i64 {
        i64::from(self.day_of_year)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, self.year)
    }
}
