//! Configuration management for Watch2gether
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_BANNER, DEFAULT_CURRENTLY_WATCHING_FILE, DEFAULT_ITEMS_FILE, DEFAULT_TITLE,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Data file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Item list, one item per line
    pub items_file: PathBuf,
    /// Holds the currently watching value
    pub currently_watching_file: PathBuf,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Window title
    pub title: String,
    /// Static line shown under the currently watching field
    pub banner: String,
    /// Enable mouse support
    pub mouse_enabled: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to a file
    pub enabled: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            items_file: PathBuf::from(DEFAULT_ITEMS_FILE),
            currently_watching_file: PathBuf::from(DEFAULT_CURRENTLY_WATCHING_FILE),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            banner: DEFAULT_BANNER.to_string(),
            mouse_enabled: true,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("watch2gether.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Ok(xdg_config) = Self::get_default_config_path() {
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.storage.items_file.as_os_str().is_empty() {
            anyhow::bail!("storage.items_file cannot be empty");
        }

        if self.storage.currently_watching_file.as_os_str().is_empty() {
            anyhow::bail!("storage.currently_watching_file cannot be empty");
        }

        // Both files are rewritten in full, so sharing one would clobber the list
        if self.storage.items_file == self.storage.currently_watching_file {
            anyhow::bail!(
                "storage.items_file and storage.currently_watching_file must differ, both are '{}'",
                self.storage.items_file.display()
            );
        }

        if self.ui.title.trim().is_empty() {
            anyhow::bail!("ui.title cannot be empty");
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Watch2gether Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("watch2gether"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
