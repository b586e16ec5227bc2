//! Sources of the current instant.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use dectime_calendar::Instant;

/// Supplies "now" as seconds and nanoseconds since the Unix epoch, in UTC.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Result<Instant>;
}

/// Reads the operating system's real-time clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<Instant> {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("system clock is set before the Unix epoch")?;
        let seconds =
            i64::try_from(since_epoch.as_secs()).context("system clock out of range")?;
        Ok(Instant::new(seconds, since_epoch.subsec_nanos())?)
    }
}

/// Always reports the same instant.
pub struct FixedClock(pub Instant);

impl Clock for FixedClock {
    fn now(&self) -> Result<Instant> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_after_2020() {
        let now = SystemClock.now().unwrap();
        assert!(now.seconds() > 1_577_836_800);
        assert!(now.nanoseconds() < 1_000_000_000);
    }

    #[test]
    fn fixed_clock_repeats() {
        let instant = Instant::new(1_709_316_000, 7).unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.now().unwrap(), instant);
        assert_eq!(clock.now().unwrap(), instant);
    }
}
