//! Runtime configuration.
//!
//! Everything comes from the environment, with logged defaults. The CLI
//! overrides individual values from its flags after loading.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `EVENTHUB_DATA_DIR` | directory with `clubs.*` / `events.*` data files | built-in fixture |
//! | `EVENTHUB_AUTHENTICATED` | enables viewer-specific filters | `false` |
//! | `EVENTHUB_OUTPUT` | output mode | `auto` |
//!
//! Log verbosity is read separately from `EVENTHUB_LOG` by the binary.

use std::env;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::{info, warn};

use crate::error::{EventHubError, Result};
use crate::output::OutputMode;

pub const DATA_DIR_VAR: &str = "EVENTHUB_DATA_DIR";
pub const AUTHENTICATED_VAR: &str = "EVENTHUB_AUTHENTICATED";
pub const OUTPUT_VAR: &str = "EVENTHUB_OUTPUT";
pub const LOG_VAR: &str = "EVENTHUB_LOG";

/// Data file extensions, in lookup order.
const DATA_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Switches for viewer-dependent behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    /// The viewer is signed in, so "joined" relationships are meaningful.
    pub authenticated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
    pub output: OutputMode,
    pub flags: FeatureFlags,
}

impl Config {
    pub fn from_env() -> Self {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup(DATA_DIR_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        if data_dir.is_none() {
            info!("{DATA_DIR_VAR} not set, using built-in fixture");
        }

        let authenticated = match lookup(AUTHENTICATED_VAR) {
            Some(raw) => parse_bool(&raw).unwrap_or_else(|| {
                warn!("Invalid {AUTHENTICATED_VAR} value '{raw}', using default: false");
                false
            }),
            None => false,
        };

        let output = match lookup(OUTPUT_VAR) {
            Some(raw) => OutputMode::from_str(raw.trim(), true).unwrap_or_else(|_| {
                warn!("Invalid {OUTPUT_VAR} value '{raw}', using default: auto");
                OutputMode::Auto
            }),
            None => OutputMode::Auto,
        };

        Config {
            data_dir,
            output,
            flags: FeatureFlags { authenticated },
        }
    }

    /// The data file for a listing (`"clubs"`, `"events"`), if a data
    /// directory is configured. A configured directory without a matching
    /// file is an error.
    pub fn data_file(&self, listing: &str) -> Result<Option<PathBuf>> {
        let Some(dir) = &self.data_dir else {
            return Ok(None);
        };
        find_data_file(dir, listing).map(Some).ok_or_else(|| {
            EventHubError::Config(format!(
                "no {listing}.json, {listing}.yaml or {listing}.yml in {}",
                dir.display()
            ))
        })
    }
}

fn find_data_file(dir: &Path, listing: &str) -> Option<PathBuf> {
    DATA_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{listing}.{ext}")))
        .find(|path| path.is_file())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
