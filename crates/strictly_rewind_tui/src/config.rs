//! Client configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Largest board side the terminal layout supports.
pub const MAX_BOARD_SIDE: usize = 6;

/// Configuration for the terminal client.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Board side length (3 for classic tic-tac-toe).
    #[serde(default = "default_board_side")]
    board_side: usize,

    /// Initial move-list order.
    #[serde(default = "default_move_order_ascending")]
    move_order_ascending: bool,

    /// File receiving tracing output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_board_side() -> usize {
    3
}

fn default_move_order_ascending() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_rewind.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            board_side: default_board_side(),
            move_order_ascending: default_move_order_ascending(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(board_side = config.board_side, "Config loaded successfully");
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

    /// Applies command-line overrides.
    pub fn with_overrides(
        mut self,
        board_side: Option<usize>,
        log_file: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(side) = board_side {
            debug!(side, "Overriding board side");
            self.board_side = side;
        }
        if let Some(path) = log_file {
            self.log_file = path;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_BOARD_SIDE).contains(&self.board_side) {
            return Err(ConfigError::new(format!(
                "board_side must be between 1 and {}, got {}",
                MAX_BOARD_SIDE, self.board_side
            )));
        }
        Ok(())
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

    #[test]
    fn test_defaults() {
        let config = TuiConfig::default();
        assert_eq!(*config.board_side(), 3);
        assert!(*config.move_order_ascending());
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: TuiConfig = toml::from_str("board_side = 4").unwrap();
        assert_eq!(*config.board_side(), 4);
        assert_eq!(config.log_file(), &PathBuf::from("strictly_rewind.log"));
    }

    #[test]
    fn test_override_rejects_zero_side() {
        let err = TuiConfig::default()
            .with_overrides(Some(0), None)
            .unwrap_err();
        assert!(err.message.contains("board_side"));
    }

    #[test]
    fn test_override_replaces_log_file() {
        let config = TuiConfig::default()
            .with_overrides(None, Some(PathBuf::from("other.log")))
            .unwrap();
        assert_eq!(config.log_file(), &PathBuf::from("other.log"));
    }
}
