//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Tunables for a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Pause before each computer move, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// How many times a setup question is asked before giving up.
    #[serde(default = "default_max_setup_attempts")]
    max_setup_attempts: u32,

    /// Seed for the computer's random fallback; entropy when unset.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,

    /// Whether terminal output is colored.
    #[serde(default = "default_color")]
    color: bool,
}

fn default_think_delay_ms() -> u64 {
    2000
}

fn default_max_setup_attempts() -> u32 {
    10
}

fn default_color() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            think_delay_ms: default_think_delay_ms(),
            max_setup_attempts: default_max_setup_attempts(),
            seed: None,
            color: default_color(),
        }
    }
}

impl GameConfig {
    /// Computer thinking pause.
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.think_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_partial_file_overrides_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "think_delay_ms = 0\nseed = 99").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.think_delay(), Duration::ZERO);
        assert_eq!(*config.seed(), Some(99));
        assert_eq!(*config.max_setup_attempts(), 10);
        assert!(*config.color());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "think_delay_ms = \"slow\"").unwrap();

        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_setters_chain() {
        let config = GameConfig::default()
            .with_seed(5)
            .with_think_delay_ms(10)
            .with_color(false);
        assert_eq!(*config.seed(), Some(5));
        assert_eq!(config.think_delay(), Duration::from_millis(10));
        assert!(!*config.color());
    }
}
