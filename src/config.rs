//! Engine configuration, loadable from TOML

use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::board::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, WIN_LENGTH};
use crate::error::ConfigError;
use crate::eval::Weights;

/// Settings shared by the decision aids and the CLI.
///
/// ```toml
/// board_size = 15
/// repetitions = 1
///
/// [weights]
/// FIVE = 100000.0
/// FOUR = 10000.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Side length of new boards
    pub board_size: usize,
    /// Evaluations averaged per optimizer candidate
    pub repetitions: u32,
    /// Pattern weights; keys missing from a `[weights]` table are zero
    pub weights: Weights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            board_size: DEFAULT_BOARD_SIZE,
            repetitions: 1,
            weights: Weights::standard(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(WIN_LENGTH..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Validation(format!(
                "board_size must be in {WIN_LENGTH}..={MAX_BOARD_SIZE}, got {}",
                self.board_size
            )));
        }
        if self.repetitions == 0 {
            return Err(ConfigError::Validation("repetitions must be >= 1".into()));
        }
        if self.weights.as_array().iter().any(|w| !w.is_finite()) {
            return Err(ConfigError::Validation("weights must be finite".into()));
        }
        Ok(())
    }
}
