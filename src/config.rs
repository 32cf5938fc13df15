//! Display settings.
//!
//! Read from `<config_dir>/tasklist/config.json`. A missing file means
//! defaults. `TASKLIST_DATE_FORMAT` overrides the file.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "tasklist";
const CONFIG_FILE: &str = "config.json";
pub const DATE_FORMAT_ENV: &str = "TASKLIST_DATE_FORMAT";

/// Month/day/year without padding, as en-US browsers show dates.
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// strftime pattern used for the deadline column.
    pub date_format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the user's config directory, then apply the
    /// environment override. Falls back to defaults on any error.
    pub fn load() -> Self {
        let mut config = match get_config_path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        };
        if let Ok(format) = std::env::var(DATE_FORMAT_ENV) {
            config.set_date_format(&format);
        }
        config
    }

    /// Load from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let mut config: Self =
            serde_json::from_str(&content).context("Failed to parse config file")?;

        if !is_valid_date_format(&config.date_format) {
            tracing::warn!(
                "Ignoring invalid date format {:?} in config",
                config.date_format
            );
            config.date_format = DEFAULT_DATE_FORMAT.to_string();
        }
        Ok(config)
    }

    /// Replace the date format if it is a usable strftime pattern.
    /// Returns whether it was applied.
    pub fn set_date_format(&mut self, format: &str) -> bool {
        if is_valid_date_format(format) {
            self.date_format = format.to_string();
            true
        } else {
            tracing::warn!("Ignoring invalid date format {:?}", format);
            false
        }
    }

    /// Save the current configuration to the user's config directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(&get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}

/// chrono panics when a pattern cannot be rendered from a bare date (unknown
/// specifiers, or time fields like `%H`), so patterns are trial-formatted
/// before they are stored.
pub fn is_valid_date_format(format: &str) -> bool {
    if format.is_empty() {
        return false;
    }
    let Some(sample) = NaiveDate::from_ymd_opt(2025, 1, 10) else {
        return false;
    };
    let mut rendered = String::new();
    write!(rendered, "{}", sample.format(format)).is_ok()
}
