//! Session configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Simulated thinking time before the computer's deferred move
    /// commits, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,
}

fn default_think_delay_ms() -> u64 {
    500
}

impl SessionConfig {
    /// Creates a configuration with the given thinking delay.
    pub fn new(think_delay_ms: u64) -> Self {
        Self { think_delay_ms }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            think_delay_ms = config.think_delay_ms,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Thinking delay as a [`Duration`].
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            think_delay_ms: default_think_delay_ms(),
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
