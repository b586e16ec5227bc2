//! Gregorian leap-year rule.

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
///
/// A year is a leap year when it is divisible by 4, except century years,
/// which are leap years only when divisible by 400.
pub const fn is_leap(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `year` (365 or 366).
pub const fn days_in_year(year: i64) -> i64 {
    if is_leap(year) { 366 } else { 365 }
}
