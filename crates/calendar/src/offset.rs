//! Whole-hour UTC offsets and the one-line offset text format.

use std::fmt;

use crate::error::CalendarError;

/// A whole-hour offset from UTC, in -12..=14.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UtcOffset(i32);

impl UtcOffset {
    /// Westernmost supported offset.
    pub const MIN: Self = Self(-12);
    /// Easternmost supported offset.
    pub const MAX: Self = Self(14);
    /// UTC itself.
    pub const UTC: Self = Self(0);

    /// Creates a new `UtcOffset` from whole hours east of UTC.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OffsetOutOfRange`] if `hours` is not in -12..=14.
    pub fn new(hours: i32) -> Result<Self, CalendarError> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&hours) {
            return Err(CalendarError::OffsetOutOfRange { hours });
        }
        Ok(Self(hours))
    }

    /// Returns the offset in hours.
    pub fn hours(self) -> i32 {
        self.0
    }

    /// Returns the offset in seconds.
    pub fn seconds(self) -> i64 {
        i64::from(self.0) * 3600
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UTC{:+}", self.0)
    }
}

/// Parses the one-line offset format leniently.
///
/// Leading spaces and newlines are skipped, a single leading `-` negates the
/// result, and ASCII digits are accumulated up to the first other character.
/// Input with no digits yields 0. The magnitude saturates instead of
/// wrapping.
pub fn parse_offset(text: &str) -> i32 {
    let rest = text.trim_start_matches([' ', '\n']);
    let (negative, digits) = match rest.strip_prefix('-') {
        Some(tail) => (true, tail),
        None => (false, rest),
    };
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i32, |acc, b| {
            acc.saturating_mul(10).saturating_add(i32::from(b - b'0'))
        });
    if negative { -magnitude } else { magnitude }
}
