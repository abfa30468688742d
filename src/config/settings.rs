//! User configuration settings
//!
//! Layered configuration: defaults → config file → environment variables

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::checklist::{Grouping, SortOrder};
use crate::error::{ConfigError, Error, Result};

/// Default number of document rows drawn per frame
pub const DEFAULT_VIEWPORT_HEIGHT: usize = 35;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of document rows drawn per frame
    pub viewport_height: usize,

    /// Append each item's timestamp after its content
    pub show_timestamps: bool,

    /// Sort order used when `group` is set
    pub sort: SortOrder,

    /// Regroup the sample items by calendar bucket instead of using the
    /// built-in layout
    pub group: Option<Grouping>,

    /// Enable debug logging
    pub debug: bool,

    /// Log file path (defaults to `ticklist.log` in the temp directory)
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            show_timestamps: true,
            sort: SortOrder::default(),
            group: None,
            debug: false,
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from all sources
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration using `path` as the config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Config = Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Config::default()))
            // Layer config file if it exists
            .merge(Toml::file(path))
            // Layer environment variables (TICKLIST_VIEWPORT_HEIGHT, etc.)
            .merge(Env::prefixed("TICKLIST_"))
            .extract()
            .map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values the UI cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.viewport_height == 0 {
            return Err(ConfigError::InvalidValue {
                key: "viewport_height".to_string(),
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Resolved log file path
    pub fn log_file_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("ticklist.log"))
    }

    /// Save current configuration to the default config file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save current configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|_e| {
                Error::Config(ConfigError::DirectoryCreationFailed(parent.to_path_buf()))
            })?;
        }

        let toml = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveFailed(e.to_string()))?;

        std::fs::write(path, toml).map_err(|e| ConfigError::SaveFailed(e.to_string()))?;

        Ok(())
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("com", "ticklist", "ticklist").ok_or_else(|| {
            Error::Config(ConfigError::LoadFailed(
                "Could not determine home directory".to_string(),
            ))
        })
    }
}
