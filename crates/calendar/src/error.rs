//! Error types for the dectime-calendar crate.

/// Error type for all fallible operations in the dectime-calendar crate.
///
/// Every variant describes an input outside the documented domain of one of
/// the conversion functions. The arithmetic itself never fails for valid
/// inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when offset-adjusted epoch seconds fall before 1970-01-01.
    #[error("instant is before the Unix epoch: {seconds} s")]
    BeforeEpoch {
        /// The negative adjusted epoch seconds that were provided.
        seconds: i64,
    },

    /// Returned when a zero-based day-of-year is outside the year's length.
    #[error("invalid day of year: {day_of_year} for year {year} (must be 0..{days_in_year})")]
    InvalidDayOfYear {
        /// The invalid zero-based day-of-year.
        day_of_year: i64,
        /// The year the day-of-year was interpreted in.
        year: i64,
        /// Number of days in that year (365 or 366).
        days_in_year: i64,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a seconds-of-day value is outside 0..86400.
    #[error("invalid seconds of day: {seconds} (must be 0..86400)")]
    InvalidSecondsOfDay {
        /// The invalid seconds-of-day value.
        seconds: i64,
    },

    /// Returned when a sub-second nanosecond count is not below one second.
    #[error("invalid nanoseconds: {nanos} (must be 0..1000000000)")]
    InvalidNanoseconds {
        /// The invalid nanosecond count.
        nanos: u32,
    },

    /// Returned when a UTC offset in hours is outside -12..=14.
    #[error("UTC offset out of range: {hours} (must be -12..=14)")]
    OffsetOutOfRange {
        /// The out-of-range hour offset.
        hours: i32,
    },

    /// Returned when applying an offset would overflow 64-bit epoch seconds.
    #[error("epoch seconds overflow applying offset of {hours} h to {seconds} s")]
    Overflow {
        /// The epoch seconds before adjustment.
        seconds: i64,
        /// The hour offset being applied.
        hours: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_before_epoch() {
        let err = CalendarError::BeforeEpoch { seconds: -3600 };
        assert_eq!(err.to_string(), "instant is before the Unix epoch: -3600 s");
    }

    #[test]
    fn error_invalid_day_of_year() {
        let err = CalendarError::InvalidDayOfYear {
            day_of_year: 365,
            year: 2023,
            days_in_year: 365,
        };
        assert_eq!(
            err.to_string(),
            "invalid day of year: 365 for year 2023 (must be 0..365)"
        );
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 29,
            month: 2,
            max_day: 28,
        };
        assert_eq!(err.to_string(), "invalid day: 29 for month 2 (max 28)");
    }

    #[test]
    fn error_offset_out_of_range() {
        let err = CalendarError::OffsetOutOfRange { hours: 15 };
        assert_eq!(err.to_string(), "UTC offset out of range: 15 (must be -12..=14)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::InvalidMonth { month: 0 };
        let b = CalendarError::InvalidMonth { month: 0 };
        assert_eq!(a, b);

        let c = CalendarError::InvalidMonth { month: 13 };
        assert_ne!(a, c);
    }
}
