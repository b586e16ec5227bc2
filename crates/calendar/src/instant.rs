//! Epoch instants, offset adjustment, and the combined local reading.

use crate::civil::SECONDS_PER_DAY;
use crate::date::CalendarDate;
use crate::decimal::{DecimalTime, NANOS_PER_SECOND};
use crate::error::CalendarError;
use crate::offset::UtcOffset;
use crate::time_of_day::TimeOfDay;

/// Seconds and sub-second nanoseconds since 1970-01-01T00:00:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    seconds: i64,
    nanoseconds: u32,
}

impl Instant {
    /// The epoch itself.
    pub const EPOCH: Self = Self {
        seconds: 0,
        nanoseconds: 0,
    };

    /// Creates a new `Instant`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidNanoseconds`] if `nanoseconds` is one
    /// second or more.
    pub fn new(seconds: i64, nanoseconds: u32) -> Result<Self, CalendarError> {
        if nanoseconds >= NANOS_PER_SECOND {
            return Err(CalendarError::InvalidNanoseconds { nanos: nanoseconds });
        }
        Ok(Self {
            seconds,
            nanoseconds,
        })
    }

    /// Returns whole seconds since the epoch.
    pub fn seconds(self) -> i64 {
        self.seconds
    }

    /// Returns the sub-second nanoseconds (0..1_000_000_000).
    pub fn nanoseconds(self) -> u32 {
        self.nanoseconds
    }

    /// Shifts this UTC instant into local wall-clock seconds.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Overflow`] if the shift leaves the `i64` range.
    pub fn apply_offset(self, offset: UtcOffset) -> Result<Self, CalendarError> {
        let seconds =
            self.seconds
                .checked_add(offset.seconds())
                .ok_or(CalendarError::Overflow {
                    seconds: self.seconds,
                    hours: offset.hours(),
                })?;
        Ok(Self {
            seconds,
            nanoseconds: self.nanoseconds,
        })
    }

    /// Returns seconds elapsed since the most recent midnight.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::BeforeEpoch`] for negative seconds.
    pub fn seconds_of_day(self) -> Result<i64, CalendarError> {
        if self.seconds < 0 {
            return Err(CalendarError::BeforeEpoch {
                seconds: self.seconds,
            });
        }
        Ok(self.seconds % SECONDS_PER_DAY)
    }
}

/// Local date, wall-clock time, and decimal time for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reading {
    /// Local calendar date.
    pub date: CalendarDate,
    /// Local wall-clock time.
    pub time: TimeOfDay,
    /// Remaining fraction of the local day.
    pub decimal: DecimalTime,
}

impl Reading {
    /// Builds a reading from a UTC instant and an offset.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::BeforeEpoch`] if the local instant precedes
    /// 1970-01-01, or [`CalendarError::Overflow`] if the offset cannot be
    /// applied.
    pub fn new(utc: Instant, offset: UtcOffset) -> Result<Self, CalendarError> {
        Self::from_local(utc.apply_offset(offset)?)
    }

    /// Builds a reading from an instant already shifted to local time.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::BeforeEpoch`] for negative seconds.
    pub fn from_local(local: Instant) -> Result<Self, CalendarError> {
        let date = CalendarDate::from_epoch_seconds(local.seconds)?;
        let time = TimeOfDay::from_seconds_of_day(local.seconds_of_day()?)?;
        let decimal = DecimalTime::from_time_of_day(time, local.nanoseconds)?;
        Ok(Self {
            date,
            time,
            decimal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Marker;

    #[test]
    fn new_rejects_full_second() {
        assert_eq!(
            Instant::new(0, 1_000_000_000).unwrap_err(),
            CalendarError::InvalidNanoseconds {
                nanos: 1_000_000_000
            }
        );
    }

    #[test]
    fn apply_offset_shifts_seconds_only() {
        let utc = Instant::new(1_000_000, 42).unwrap();
        let local = utc.apply_offset(UtcOffset::new(-6).unwrap()).unwrap();
        assert_eq!(local.seconds(), 1_000_000 - 21_600);
        assert_eq!(local.nanoseconds(), 42);
    }

    #[test]
    fn apply_offset_overflow() {
        let utc = Instant::new(i64::MAX, 0).unwrap();
        assert_eq!(
            utc.apply_offset(UtcOffset::MAX).unwrap_err(),
            CalendarError::Overflow {
                seconds: i64::MAX,
                hours: 14,
            }
        );
    }

    #[test]
    fn reading_at_local_midnight() {
        // 2024-03-01T06:00:00Z is local midnight at UTC-6.
        let utc = Instant::new(1_709_272_800, 0).unwrap();
        let reading = Reading::new(utc, UtcOffset::new(-6).unwrap()).unwrap();
        assert_eq!(reading.date, CalendarDate::new(2024, 3, 1).unwrap());
        assert_eq!(reading.time.hms(), (0, 0, 0));
        assert_eq!(reading.decimal.marker(), Some(Marker::New));
    }

    #[test]
    fn reading_offset_crosses_date_line() {
        // 2024-01-01T02:00:00Z at UTC-6 is still 12/31/2023, 20:00.
        let utc = Instant::new(1_704_074_400, 0).unwrap();
        let reading = Reading::new(utc, UtcOffset::new(-6).unwrap()).unwrap();
        assert_eq!(reading.date.to_string(), "12/31/2023");
        assert_eq!(reading.time.hms(), (20, 0, 0));
        assert_eq!(reading.decimal.get(), 166);
    }

    #[test]
    fn reading_before_epoch_rejected() {
        let reading = Reading::new(Instant::EPOCH, UtcOffset::new(-1).unwrap());
        assert_eq!(
            reading.unwrap_err(),
            CalendarError::BeforeEpoch { seconds: -3600 }
        );
    }
}
