//! Application configuration loaded from TOML.
//!
//! ```toml
//! [search]
//! base_url = "http://localhost:5000"
//! timeout_seconds = 10
//! allow_partial_results = false
//! ```

use std::path::{Path, PathBuf};

use compare_search::CompareConfig;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Vendor endpoints, timeouts and price formatting.
    pub search: CompareConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// Missing tables and keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Load from `path` if given, else from [`AppConfig::default_config_path`]
    /// when that file exists, else defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be loaded.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Self::default_config_path();
                if default_path.is_file() {
                    tracing::debug!(path = %default_path.display(), "loading default config");
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(mut self, base_url: Option<String>, timeout_seconds: Option<u64>) -> Self {
        if let Some(base_url) = base_url {
            self.search.base_url = base_url;
        }
        if let Some(timeout_seconds) = timeout_seconds {
            self.search.timeout_seconds = timeout_seconds;
        }
        self
    }

    /// Returns the default config file path: `~/.config/compare-products/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config)
                .join("compare-products")
                .join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("compare-products")
                .join("config.toml")
        } else {
            PathBuf::from("/tmp/compare-products-config/config.toml")
        }
    }
}
