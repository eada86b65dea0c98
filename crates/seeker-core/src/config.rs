//! Configuration management for Seeker.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding [`SearchConfig::max_concurrent_fetches`].
pub const ENV_MAX_CONCURRENT_FETCHES: &str = "SEEKER_MAX_CONCURRENT_FETCHES";

/// Environment variable overriding [`LoggingConfig::filter`].
pub const ENV_LOG_FILTER: &str = "SEEKER_LOG_FILTER";

/// Main configuration.
///
/// This is loaded from `~/.config/seeker/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeekerConfig {
    /// Search run settings
    pub search: SearchConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl SeekerConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML or fail validation
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, falling back to defaults if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            tracing::debug!("Loading config from {}", path.display());
            let contents = fs::read_to_string(path)?;
            let config: Self = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `SEEKER_MAX_CONCURRENT_FETCHES`: Override source fetch parallelism
    /// - `SEEKER_LOG_FILTER`: Override the tracing filter directive
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides using `lookup` to read variables.
    ///
    /// Unparsable values are ignored and the configured value is kept.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(ENV_MAX_CONCURRENT_FETCHES) {
            if let Ok(max) = val.parse() {
                self.search.max_concurrent_fetches = max;
                tracing::debug!("Override search.max_concurrent_fetches from env: {}", max);
            }
        }

        if let Some(filter) = lookup(ENV_LOG_FILTER) {
            tracing::debug!("Override logging.filter from env: {}", filter);
            self.logging.filter = filter;
        }
    }

    /// Check value constraints that serde cannot express.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.search.max_concurrent_fetches == 0 {
            return Err(ConfigError::InvalidValue {
                field: "search.max_concurrent_fetches".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logging.filter".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let config_dir = path.parent().ok_or_else(|| ConfigError::InvalidValue {
            field: "config_path".to_string(),
            reason: "no parent directory".to_string(),
        })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/seeker/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("org", "seeker", "seeker").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Search run settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of sources fetched at the same time (1 = one after another)
    pub max_concurrent_fetches: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_concurrent_fetches: 1,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
    /// Include the event target (module path) in log lines
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info,seeker=debug".to_string(),
            with_target: true,
        }
    }
}
