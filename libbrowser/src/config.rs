//! Configuration management for libbrowser

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::logging::{LogFormat, LoggingConfig};
use crate::tips::{Settings, StaticSettings, TipCatalog, TipPool};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingSection,
    pub tips: TipsConfig,
    /// Fixed settings for hosts without a preferences store of their own
    pub settings: StaticSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub format: LogFormat,
    pub level: String,
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TipsConfig {
    /// Put every built-in tip in the pool, ignoring the settings checks.
    /// Used for testing and demoing.
    pub force_all: bool,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            level: "info".to_string(),
            verbose: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from the default location, or defaults when no
    /// file exists there
    pub fn load_or_default() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig::new(
            self.logging.format,
            self.logging.level.clone(),
            self.logging.verbose,
        )
    }

    /// Build the tip pool from the `[settings]` table
    pub fn default_tip_pool(&self, catalog: &TipCatalog) -> TipPool {
        self.tip_pool(&self.settings, catalog)
    }

    /// Build the tip pool this configuration asks for
    pub fn tip_pool(&self, settings: &dyn Settings, catalog: &TipCatalog) -> TipPool {
        if self.tips.force_all {
            TipPool::force_all(catalog)
        } else {
            TipPool::populate(settings, catalog)
        }
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("LIBBROWSER_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;

    Ok(config_dir.join("libbrowser").join("config.toml"))
}
