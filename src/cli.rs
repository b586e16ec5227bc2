use std::path::PathBuf;

use clap::Parser;
use dectime_calendar::{Instant, NANOS_PER_SECOND};

/// Decimal time: the fraction of the local day remaining, from 1000 down to 0.
#[derive(Debug, Parser)]
#[command(
    name = "dectime",
    version,
    about = "Print the remaining fraction of the local day as decimal time"
)]
pub struct Cli {
    /// Also print the local date before the decimal time.
    #[arg(short, long)]
    pub expanded: bool,

    /// Path to TOML configuration file (default: dectime.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Read the UTC offset from this one-line file.
    #[arg(long)]
    pub offset_file: Option<PathBuf>,

    /// Use this UTC offset in hours instead of reading the offset file.
    #[arg(
        long,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(-12..=14)
    )]
    pub offset: Option<i32>,

    /// Evaluate at a fixed epoch instant (SECONDS[.FRACTION]) instead of now.
    #[arg(long, allow_negative_numbers = true, value_parser = parse_instant)]
    pub at: Option<Instant>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parses `SECONDS[.FRACTION]` into an [`Instant`], with up to nine fraction digits.
fn parse_instant(s: &str) -> Result<Instant, String> {
    let (whole, fraction) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };
    let seconds: i64 = whole
        .parse()
        .map_err(|e| format!("invalid epoch seconds {whole:?}: {e}"))?;
    if fraction.len() > 9 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("invalid fraction {fraction:?}: expected up to 9 digits"));
    }
    let nanos = fraction
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(9)
        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
    // The fraction extends a negative value away from zero ("-0.5" included),
    // while `Instant` nanoseconds always count forward from `seconds`.
    if whole.starts_with('-') && nanos > 0 {
        let seconds = seconds
            .checked_sub(1)
            .ok_or_else(|| format!("epoch seconds out of range: {s:?}"))?;
        return Instant::new(seconds, NANOS_PER_SECOND - nanos).map_err(|e| e.to_string());
    }
    Instant::new(seconds, nanos).map_err(|e| e.to_string())
}
