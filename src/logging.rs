use tracing_subscriber::EnvFilter;

/// Targets that receive the `-v` level; anything else stays at the default.
const CRATE_TARGETS: &[&str] = &["dectime", "dectime_calendar"];

/// Installs the stderr subscriber for the given `-v` count.
///
/// Quiet by default: only out-of-range offset files are reported (warn).
/// `-v` adds the resolved UTC offset, `-vv` shows where it came from
/// (flag, offset file, `~/.utcoffset`, or built-in default), why a file was
/// skipped, the config that was loaded, and the raw clock instant. `-vvv`
/// enables trace output.
///
/// `RUST_LOG` replaces the whole filter when set. Output never touches
/// stdout, which carries only the `Date:` and `Decimal time:` lines.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let directives = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
