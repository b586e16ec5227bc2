//! # dectime-calendar
//!
//! Pure integer arithmetic turning epoch seconds into a Gregorian date and a
//! decimal time of day.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Instant (UTC)"] -->|".apply_offset()"| B["Instant (local)"]
//!     B -->|"year_and_day_of_year()"| C["(year, day_of_year)"]
//!     C -->|"month_and_day()"| D["CalendarDate"]
//!     B -->|"TimeOfDay::from_seconds_of_day()"| E["TimeOfDay"]
//!     E -->|"DecimalTime::from_time_of_day()"| F["DecimalTime"]
//!     D --> G["Reading"]
//!     E --> G
//!     F --> G
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use dectime_calendar::{Instant, Reading, UtcOffset, parse_offset};
//!
//! let offset = UtcOffset::new(parse_offset("-6\n")).unwrap();
//! // 2024-03-01T18:00:00Z is local noon at UTC-6.
//! let reading = Reading::new(Instant::new(1_709_316_000, 0).unwrap(), offset).unwrap();
//! assert_eq!(reading.date.to_string(), "3/1/2024");
//! assert_eq!(reading.decimal.get(), 500);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `leap` | Gregorian leap-year rule |
//! | `civil` | Epoch seconds to year, day-of-year, month, and day |
//! | `date` | Calendar date value |
//! | `time_of_day` | Hour, minute, second within a day |
//! | `decimal` | Decimal time countdown |
//! | `offset` | UTC offset and its one-line text format |
//! | `instant` | Epoch instants and combined readings |
//! | `error` | Error types |

mod civil;
mod date;
mod decimal;
mod error;
mod instant;
mod leap;
mod offset;
mod time_of_day;

pub use civil::{
    EPOCH_YEAR, SECONDS_PER_DAY, day_of_year, days_in_month, month_and_day, year_and_day_of_year,
};
pub use date::CalendarDate;
pub use decimal::{DecimalTime, Marker, NANOS_PER_DAY, NANOS_PER_SECOND, decimal_time};
pub use error::CalendarError;
pub use instant::{Instant, Reading};
pub use leap::{days_in_year, is_leap};
pub use offset::{UtcOffset, parse_offset};
pub use time_of_day::TimeOfDay;
