//! Merges command-line flags over the TOML config into run settings.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dectime_calendar::UtcOffset;
use tracing::debug;

use crate::cli::Cli;
use crate::config::{DEFAULT_OFFSET_FILE, DectimeConfig, read_offset_file};
use crate::display::DisplayOptions;

/// Where the UTC offset comes from for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OffsetSource {
    /// Given directly on the command line.
    Fixed(UtcOffset),
    /// Read from a one-line offset file.
    File(PathBuf),
    /// No offset configured; use the default.
    Default,
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub offset_source: OffsetSource,
    pub default_offset: UtcOffset,
    pub display: DisplayOptions,
}

impl Settings {
    /// Resolves the UTC offset, reading the offset file if one is configured.
    pub fn offset(&self) -> UtcOffset {
        match &self.offset_source {
            OffsetSource::Fixed(offset) => *offset,
            OffsetSource::File(path) => read_offset_file(path, self.default_offset),
            OffsetSource::Default => self.default_offset,
        }
    }
}

/// Builds [`Settings`]; command-line flags take precedence over the config.
///
/// With no offset file configured anywhere, `<home>/.utcoffset` is used. A
/// missing file there falls back to the default offset without complaint.
pub fn build_settings(
    cli: &Cli,
    config: &DectimeConfig,
    home: Option<&Path>,
) -> Result<Settings> {
    let default_offset = UtcOffset::new(config.default_offset)
        .context("invalid default_offset in config")?;
    let offset_source = if let Some(hours) = cli.offset {
        OffsetSource::Fixed(UtcOffset::new(hours)?)
    } else if let Some(ref path) = cli.offset_file {
        OffsetSource::File(path.clone())
    } else if let Some(ref path) = config.offset_file {
        OffsetSource::File(path.clone())
    } else if let Some(home) = home {
        OffsetSource::File(home.join(DEFAULT_OFFSET_FILE))
    } else {
        OffsetSource::Default
    };
    debug!(source = ?offset_source, "offset source");
    Ok(Settings {
        offset_source,
        default_offset,
        display: DisplayOptions {
            expanded: cli.expanded || config.expanded,
        },
    })
}
