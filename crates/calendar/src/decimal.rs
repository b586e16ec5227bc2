//! Decimal time: the remaining fraction of the local day, scaled to 0..=1000.
//!
//! The value counts down. It reads 1000 only at the exact midnight instant,
//! 999 one nanosecond later, 500 at noon, and 0 during the final
//! 86.4 seconds of the day.

use std::fmt;

use crate::civil::SECONDS_PER_DAY;
use crate::error::CalendarError;
use crate::time_of_day::TimeOfDay;

/// Nanoseconds in one second.
pub const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Nanoseconds in one civil day.
pub const NANOS_PER_DAY: u128 = SECONDS_PER_DAY as u128 * NANOS_PER_SECOND as u128;

/// Full-scale decimal reading, shown only at midnight.
pub const NEW: u32 = 1000;

/// Decimal reading at exact noon.
pub const NOON: u32 = 500;

/// Fixed teatime reading.
pub const TEATIME: u32 = 333;

/// Computes the decimal time for a position within the day.
///
/// Arithmetic is done in `u128`, so the result is exact with floor division.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidSecondsOfDay`] if `seconds_of_day` is not
/// in `0..86400`, or [`CalendarError::InvalidNanoseconds`] if
/// `nanosecond_remainder` is one second or more.
pub fn decimal_time(seconds_of_day: i64, nanosecond_remainder: u32) -> Result<u32, CalendarError> {
    if !(0..SECONDS_PER_DAY).contains(&seconds_of_day) {
        return Err(CalendarError::InvalidSecondsOfDay {
            seconds: seconds_of_day,
        });
    }
    if nanosecond_remainder >= NANOS_PER_SECOND {
        return Err(CalendarError::InvalidNanoseconds {
            nanos: nanosecond_remainder,
        });
    }
    let nanos_today =
        seconds_of_day as u128 * u128::from(NANOS_PER_SECOND) + u128::from(nanosecond_remainder);
    let remaining = NANOS_PER_DAY - nanos_today;
    Ok((remaining * u128::from(NEW) / NANOS_PER_DAY) as u32)
}

/// Named readings that display with a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Exact local midnight (1000).
    New,
    /// Exact local noon (500).
    Noon,
    /// Teatime (333).
    Teatime,
}

/// A decimal time reading in 0..=1000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DecimalTime(u32);

impl DecimalTime {
    /// Creates a `DecimalTime` from seconds since midnight and the sub-second remainder.
    ///
    /// # Errors
    ///
    /// See [`decimal_time`].
    pub fn new(seconds_of_day: i64, nanosecond_remainder: u32) -> Result<Self, CalendarError> {
        decimal_time(seconds_of_day, nanosecond_remainder).map(Self)
    }

    /// Creates a `DecimalTime` from an already-resolved [`TimeOfDay`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidNanoseconds`] if
    /// `nanosecond_remainder` is one second or more.
    pub fn from_time_of_day(
        time: TimeOfDay,
        nanosecond_remainder: u32,
    ) -> Result<Self, CalendarError> {
        Self::new(time.seconds_of_day(), nanosecond_remainder)
    }

    /// Returns the raw value (0..=1000).
    pub fn get(self) -> u32 {
        self.0
    }

    /// Returns the display marker for this reading, if any.
    pub fn marker(self) -> Option<Marker> {
        match self.0 {
            NEW => Some(Marker::New),
            NOON => Some(Marker::Noon),
            TEATIME => Some(Marker::Teatime),
            _ => None,
        }
    }
}

/// Renders `NEW` at midnight and the plain unpadded number otherwise.
impl fmt::Display for DecimalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == NEW {
            f.write_str("NEW")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
