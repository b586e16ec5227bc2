use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use dectime_calendar::{UtcOffset, parse_offset};
use serde::Deserialize;
use tracing::{debug, warn};

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "dectime.toml";

/// Offset file looked up in the home directory when none is configured.
pub const DEFAULT_OFFSET_FILE: &str = ".utcoffset";

/// Top-level dectime configuration.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DectimeConfig {
    /// One-line file holding the UTC offset in hours.
    #[serde(default)]
    pub offset_file: Option<PathBuf>,

    /// Offset used when the offset file is absent, unreadable, or out of range.
    #[serde(default = "default_offset")]
    pub default_offset: i32,

    /// Print the date line by default.
    #[serde(default)]
    pub expanded: bool,

    /// Process exit status for command-line usage errors.
    #[serde(default)]
    pub usage_exit_code: i32,
}

impl Default for DectimeConfig {
    fn default() -> Self {
        Self {
            offset_file: None,
            default_offset: default_offset(),
            expanded: false,
            usage_exit_code: 0,
        }
    }
}

fn default_offset() -> i32 {
    -6
}

/// Loads the TOML config.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
/// used when present and built-in defaults otherwise.
pub fn load(path: Option<&Path>) -> Result<DectimeConfig> {
    let path = match path {
        Some(p) => p,
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_PATH);
            if !fallback.is_file() {
                debug!("no config file, using defaults");
                return Ok(DectimeConfig::default());
            }
            fallback
        }
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config: DectimeConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

/// Reads a one-line offset file, falling back to `default` on any failure.
///
/// Read errors and out-of-range values are logged, never returned.
pub fn read_offset_file(path: &Path, default: UtcOffset) -> UtcOffset {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "offset file unreadable, using default");
            return default;
        }
    };
    let hours = parse_offset(&text);
    match UtcOffset::new(hours) {
        Ok(offset) => offset,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring offset file");
            default
        }
    }
}

/// Exit status for a command line that failed to parse.
///
/// Help and version requests always succeed. Other errors use the configured
/// `usage_exit_code`, or 0 when the config cannot be loaded.
pub fn usage_exit_code(kind: ErrorKind, config: Result<DectimeConfig>) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => config.map(|c| c.usage_exit_code).unwrap_or_default(),
    }
}
