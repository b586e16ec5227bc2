mod cli;
mod clock;
mod config;
mod convert;
mod display;
mod logging;

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use dectime_calendar::Reading;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::clock::{Clock, FixedClock, SystemClock};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => usage_error(err),
    };
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// Prints usage problems to stdout and exits with the configured status.
fn usage_error(err: clap::Error) -> ! {
    let kind = err.kind();
    if matches!(kind, ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        err.exit()
    }
    print!("{}", err.render());
    process::exit(config::usage_exit_code(kind, config::load(None)))
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    let home = env::var_os("HOME").map(PathBuf::from);
    let settings = convert::build_settings(&cli, &config, home.as_deref())?;
    let offset = settings.offset();
    info!(%offset, "resolved UTC offset");

    let clock: Box<dyn Clock> = match cli.at {
        Some(instant) => Box::new(FixedClock(instant)),
        None => Box::new(SystemClock),
    };
    let now = clock.now()?;
    debug!(seconds = now.seconds(), nanos = now.nanoseconds(), "current instant");

    let reading = Reading::new(now, offset)
        .with_context(|| format!("cannot derive local time at {offset}"))?;
    debug!(date = %reading.date, time = %reading.time, decimal = reading.decimal.get(), "reading");

    io::stdout()
        .lock()
        .write_all(display::render(&reading, settings.display).as_bytes())
        .context("failed to write to stdout")?;
    Ok(())
}
