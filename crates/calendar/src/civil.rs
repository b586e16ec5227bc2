//! Epoch seconds to Gregorian year, day-of-year, month, and day.

use crate::error::CalendarError;
use crate::leap::{days_in_year, is_leap};

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// First year counted by the epoch scan.
pub const EPOCH_YEAR: i64 = 1970;

/// Cumulative days elapsed at the end of each month in a common year.
#[rustfmt::skip]
pub(crate) const CUMULATIVE_DAYS: [i64; 12] =
    [31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];

/// Cumulative days elapsed at the end of each month in a leap year.
#[rustfmt::skip]
pub(crate) const CUMULATIVE_DAYS_LEAP: [i64; 12] =
    [31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366];

fn cumulative_days(year: i64) -> &'static [i64; 12] {
    if is_leap(year) {
        &CUMULATIVE_DAYS_LEAP
    } else {
        &CUMULATIVE_DAYS
    }
}

/// Splits offset-adjusted epoch seconds into `(year, zero-based day-of-year)`.
///
/// Whole days since the epoch are peeled off one year at a time starting from
/// 1970, so the cost grows linearly with the number of years elapsed.
///
/// # Errors
///
/// Returns [`CalendarError::BeforeEpoch`] if `adjusted_epoch_seconds` is
/// negative.
pub fn year_and_day_of_year(adjusted_epoch_seconds: i64) -> Result<(i64, i64), CalendarError> {
    if adjusted_epoch_seconds < 0 {
        return Err(CalendarError::BeforeEpoch {
            seconds: adjusted_epoch_seconds,
        });
    }
    let mut remaining = adjusted_epoch_seconds / SECONDS_PER_DAY;
    let mut year = EPOCH_YEAR;
    loop {
        let length = days_in_year(year);
        if remaining < length {
            return Ok((year, remaining));
        }
        remaining -= length;
        year += 1;
    }
}

/// Resolves a zero-based day-of-year into a one-based `(month, day)` pair.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDayOfYear`] if `day_of_year` is not in
/// `0..days_in_year(year)`.
pub fn month_and_day(day_of_year: i64, year: i64) -> Result<(u8, u8), CalendarError> {
    let length = days_in_year(year);
    if !(0..length).contains(&day_of_year) {
        return Err(CalendarError::InvalidDayOfYear {
            day_of_year,
            year,
            days_in_year: length,
        });
    }
    let table = cumulative_days(year);
    let one_based = day_of_year + 1;
    // The range check above guarantees a match: the last entry equals the year length.
    let index = table
        .iter()
        .position(|&end| end >= one_based)
        .unwrap_or(table.len() - 1);
    let day = if index == 0 {
        one_based
    } else {
        one_based - table[index - 1]
    };
    Ok((index as u8 + 1, day as u8))
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(month: u8, year: i64) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    let table = cumulative_days(year);
    let m = month as usize - 1;
    let start = if m == 0 { 0 } else { table[m - 1] };
    Ok((table[m] - start) as u8)
}

/// Returns the zero-based day-of-year for a one-based `(month, day)` in `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12, or
/// [`CalendarError::InvalidDay`] if `day` is not valid for that month.
pub fn day_of_year(month: u8, day: u8, year: i64) -> Result<i64, CalendarError> {
    let max_day = days_in_month(month, year)?;
    if !(1..=max_day).contains(&day) {
        return Err(CalendarError::InvalidDay {
            day,
            month,
            max_day,
        });
    }
    let m = month as usize - 1;
    let start = if m == 0 { 0 } else { cumulative_days(year)[m - 1] };
    Ok(start + i64::from(day) - 1)
}
