//! Runtime configuration: built-in defaults, optional TOML file, CLI flags.
//!
//! Config file: ~/.config/castmon/config.toml. Every key is optional; CLI
//! flags override the file, built-in defaults fill the rest. The resolved
//! `Config` is immutable for the lifetime of the process.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;

/// Default device address, same as the endpoint the speaker exposes out of
/// the box on a typical home LAN.
pub const DEFAULT_URL: &str = "http://192.168.8.110:8008/setup/eureka_info?options=detail";

pub const DEFAULT_INTERVAL_SECS: u64 = 5;
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;

/// On-disk configuration. All keys optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub interval_secs: Option<u64>,

    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Path to the user config file, if a config directory exists.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("castmon").join("config.toml"))
    }

    /// Load the config file. `Ok(None)` when the file does not exist.
    pub fn load() -> Result<Option<Self>> {
        let Some(path) = Self::path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let parsed = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(Some(parsed))
    }
}

/// Resolved configuration passed into the poll loop at start.
#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub interval_secs: u64,
    pub timeout_secs: u64,
    pub color: bool,
}

impl Config {
    /// Merge precedence: CLI flag, then config file, then built-in default.
    pub fn resolve(cli: &Cli, file: Option<FileConfig>) -> Self {
        let file = file.unwrap_or_default();
        let interval_secs = cli
            .interval
            .or(file.interval_secs)
            .unwrap_or(DEFAULT_INTERVAL_SECS)
            .max(1);
        let timeout_secs = cli
            .timeout
            .or(file.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .max(1);
        Self {
            url: cli
                .url
                .clone()
                .or(file.url)
                .unwrap_or_else(|| DEFAULT_URL.to_string()),
            interval_secs,
            timeout_secs,
            color: !cli.no_color && console::Term::stdout().features().colors_supported(),
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
