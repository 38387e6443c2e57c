//! Configuration file handling

use crate::feed::RetryConfig;
use crate::routes::Route;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Unable to determine config directory")]
    NoConfigDir,
}

/// User configuration, stored as TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StellarConfig {
    /// Base URL of the StellarFeed API
    pub base_url: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// Page shown on startup
    pub start_page: String,

    /// UI tick interval in milliseconds
    pub tick_rate_ms: u64,

    /// Retry policy for the feed batch
    pub retry: RetryConfig,
}

impl Default for StellarConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 10,
            start_page: Route::Home.path().to_string(),
            tick_rate_ms: 100,
            retry: RetryConfig::default(),
        }
    }
}

impl StellarConfig {
    /// Default location: `<config dir>/stellarfeed/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("stellarfeed").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from a file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: StellarConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| ConfigError::Invalid(format!("base_url '{}': {}", self.base_url, e)))?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::Invalid(format!(
                "base_url '{}' cannot be used as a base URL",
                self.base_url
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.retry.max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "retry.max_attempts must be at least 1".to_string(),
            ));
        }

        let multiplier = self.retry.backoff_multiplier;
        if !multiplier.is_finite() || multiplier < 1.0 {
            return Err(ConfigError::Invalid(
                "retry.backoff_multiplier must be a finite number of at least 1.0".to_string(),
            ));
        }

        if self.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_rate_ms must be greater than 0".to_string(),
            ));
        }

        if Route::from_path(&self.start_page).is_none() {
            return Err(ConfigError::Invalid(format!(
                "start_page '{}' is not one of /, /news, /poems, /about",
                self.start_page
            )));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Startup route; validated configs always resolve
    pub fn start_route(&self) -> Route {
        Route::from_path(&self.start_page).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        let config = StellarConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.start_route(), Route::Home);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = StellarConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, StellarConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = StellarConfig::default();
        config.base_url = "https://stellar.example".to_string();
        config.start_page = "/news".to_string();
        config.retry.max_attempts = 5;
        config.save_to(&path).unwrap();

        let loaded = StellarConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.start_route(), Route::News);
    }

    #[test]
    fn test_partial_file_uses_defaults_for_the_rest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_url = \"http://feed.local:8080\"\n[retry]\nmax_attempts = 1\n").unwrap();

        let config = StellarConfig::load_from(&path).unwrap();
        assert_eq!(config.base_url, "http://feed.local:8080");
        assert_eq!(config.retry.max_attempts, 1);
        assert_eq!(config.retry.base_delay_ms, RetryConfig::default().base_delay_ms);
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn test_validation_failures() {
        let invalid = [
            StellarConfig {
                base_url: "nowhere".to_string(),
                ..StellarConfig::default()
            },
            StellarConfig {
                request_timeout_secs: 0,
                ..StellarConfig::default()
            },
            StellarConfig {
                start_page: "/news/".to_string(),
                ..StellarConfig::default()
            },
            StellarConfig {
                retry: RetryConfig {
                    max_attempts: 0,
                    ..RetryConfig::default()
                },
                ..StellarConfig::default()
            },
            StellarConfig {
                retry: RetryConfig {
                    backoff_multiplier: 0.5,
                    ..RetryConfig::default()
                },
                ..StellarConfig::default()
            },
        ];

        for config in invalid {
            assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))), "{:?}", config);
        }
    }

    #[test]
    fn test_non_finite_backoff_multiplier_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        for value in ["nan", "inf", "-nan"] {
            fs::write(&path, format!("[retry]\nbackoff_multiplier = {}\n", value)).unwrap();
            assert!(
                matches!(StellarConfig::load_from(&path), Err(ConfigError::Invalid(_))),
                "{}",
                value
            );
        }

        fs::write(&path, "[retry]\nbackoff_multiplier = 1.5\n").unwrap();
        let config = StellarConfig::load_from(&path).unwrap();
        assert_eq!(config.retry.backoff_multiplier, 1.5);
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_url = [").unwrap();
        assert!(matches!(StellarConfig::load_from(&path), Err(ConfigError::Parse(_))));
    }
}
