//! Wall-clock hour, minute, and second within a day.

use std::fmt;

use crate::civil::SECONDS_PER_DAY;
use crate::error::CalendarError;

/// Hour, minute, and second of a civil day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// Resolves seconds elapsed since local midnight.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidSecondsOfDay`] if `seconds_of_day` is
    /// not in `0..86400`.
    pub fn from_seconds_of_day(seconds_of_day: i64) -> Result<Self, CalendarError> {
        if !(0..SECONDS_PER_DAY).contains(&seconds_of_day) {
            return Err(CalendarError::InvalidSecondsOfDay {
                seconds: seconds_of_day,
            });
        }
        let hour = seconds_of_day / 3600;
        let rest = seconds_of_day % 3600;
        Ok(Self {
            hour: hour as u8,
            minute: (rest / 60) as u8,
            second: (rest % 60) as u8,
        })
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the second (0..=59).
    pub fn second(self) -> u8 {
        self.second
    }

    /// Returns `(hour, minute, second)`.
    pub fn hms(self) -> (u8, u8, u8) {
        (self.hour, self.minute, self.second)
    }

    /// Seconds elapsed since midnight.
    pub fn seconds_of_day(self) -> i64 {
        i64::from(self.hour) * 3600 + i64::from(self.minute) * 60 + i64::from(self.second)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midnight() {
        let t = TimeOfDay::from_seconds_of_day(0).unwrap();
        assert_eq!(t.hms(), (0, 0, 0));
    }

    #[test]
    fn last_second() {
        let t = TimeOfDay::from_seconds_of_day(86_399).unwrap();
        assert_eq!(t.hms(), (23, 59, 59));
        assert_eq!(t.to_string(), "23:59:59");
    }

    #[test]
    fn teatime() {
        let t = TimeOfDay::from_seconds_of_day(16 * 3600 + 5 * 60 + 7).unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (16, 5, 7));
    }

    #[test]
    fn seconds_roundtrip() {
        for s in (0..SECONDS_PER_DAY).step_by(97) {
            assert_eq!(TimeOfDay::from_seconds_of_day(s).unwrap().seconds_of_day(), s);
        }
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            TimeOfDay::from_seconds_of_day(86_400).unwrap_err(),
            CalendarError::InvalidSecondsOfDay { seconds: 86_400 }
        );
        assert!(TimeOfDay::from_seconds_of_day(-1).is_err());
    }
}
