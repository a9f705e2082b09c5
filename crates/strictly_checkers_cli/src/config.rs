//! Session configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a terminal session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Print the board after every accepted command.
    #[serde(default = "default_show_board")]
    show_board: bool,

    /// Announce the winner and start a new game as soon as one ends.
    #[serde(default)]
    auto_restart: bool,

    /// Log filter used when neither `--log` nor RUST_LOG is set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_show_board() -> bool {
    true
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_board: default_show_board(),
            auto_restart: false,
            log_filter: default_log_filter(),
        }
    }
}

impl SessionConfig {
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

    /// Loads `path` if given and present, otherwise falls back to defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::from_file(path),
            Some(path) => {
                info!(path = %path.display(), "Config file not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Returns the config with board printing switched on or off.
    pub fn with_show_board(mut self, show_board: bool) -> Self {
        self.show_board = show_board;
        self
    }

    /// Returns the config with a different log filter.
    pub fn with_log_filter(mut self, log_filter: impl Into<String>) -> Self {
        self.log_filter = log_filter.into();
        self
    }

    /// Returns the config with automatic restarts switched on or off.
    pub fn with_auto_restart(mut self, auto_restart: bool) -> Self {
        self.auto_restart = auto_restart;
        self
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
