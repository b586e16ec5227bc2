//! Text rendering of a [`Reading`].

use dectime_calendar::{Marker, Reading};

/// How much of a reading to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Print a `Date:` line before the decimal time.
    pub expanded: bool,
}

/// Renders the output lines for `reading`, each terminated by a newline.
pub fn render(reading: &Reading, options: DisplayOptions) -> String {
    let mut out = String::new();
    if options.expanded {
        out.push_str(&format!("Date: {}\n", reading.date));
    }
    out.push_str(&format!("Decimal time: {}", reading.decimal));
    match reading.decimal.marker() {
        Some(Marker::Noon) => out.push_str(" (NOON)"),
        Some(Marker::Teatime) => out.push_str(" (TEATIME)"),
        Some(Marker::New) | None => {}
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use dectime_calendar::{Instant, UtcOffset};

    use super::*;

    fn reading_at(utc_seconds: i64, nanos: u32) -> Reading {
        let offset = UtcOffset::new(-6).unwrap();
        Reading::new(Instant::new(utc_seconds, nanos).unwrap(), offset).unwrap()
    }

    // 2024-03-01T06:00:00Z, local midnight at UTC-6.
    const MIDNIGHT: i64 = 1_709_272_800;

    #[test]
    fn midnight_is_new() {
        let text = render(&reading_at(MIDNIGHT, 0), DisplayOptions::default());
        assert_eq!(text, "Decimal time: NEW\n");
    }

    #[test]
    fn noon_suffix() {
        let text = render(&reading_at(MIDNIGHT + 43_200, 0), DisplayOptions::default());
        assert_eq!(text, "Decimal time: 500 (NOON)\n");
    }

    #[test]
    fn teatime_suffix() {
        let text = render(&reading_at(MIDNIGHT + 57_600, 0), DisplayOptions::default());
        assert_eq!(text, "Decimal time: 333 (TEATIME)\n");
    }

    #[test]
    fn small_values_unpadded() {
        let text = render(&reading_at(MIDNIGHT + 85_800, 0), DisplayOptions::default());
        assert_eq!(text, "Decimal time: 6\n");
    }

    #[test]
    fn expanded_prints_date_first() {
        let options = DisplayOptions { expanded: true };
        let text = render(&reading_at(MIDNIGHT + 3_600, 0), options);
        assert_eq!(text, "Date: 3/1/2024\nDecimal time: 958\n");
    }
}
