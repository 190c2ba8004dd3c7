/*!
 * Runtime Configuration
 *
 * Arena sizing and string limits, from defaults, serde sources or the
 * environment
 */

use super::limits::{DEFAULT_CHUNK_SIZE, DEFAULT_MAX_STR_SIZE};
use crate::strings::set_max_str_size;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Environment variable overriding the arena chunk size
pub const ENV_CHUNK_SIZE: &str = "BASEKIT_CHUNK_SIZE";

/// Environment variable overriding the maximum string size
pub const ENV_MAX_STR_SIZE: &str = "BASEKIT_MAX_STR_SIZE";

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    #[diagnostic(
        code(config::invalid_value),
        help("Expected a positive integer number of bytes.")
    )]
    InvalidValue { key: String, value: String },

    #[error("{key} must be greater than zero")]
    #[diagnostic(code(config::zero_value))]
    ZeroValue { key: String },
}

/// Library configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseConfig {
    /// Size of each arena chunk in bytes
    pub chunk_size: usize,
    /// Maximum length accepted by string constructors
    pub max_str_size: usize,
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_str_size: DEFAULT_MAX_STR_SIZE,
        }
    }
}

impl BaseConfig {
    /// Small chunks for short-lived tools that allocate little
    pub const fn compact() -> Self {
        Self {
            chunk_size: 4 * 1024,
            max_str_size: DEFAULT_MAX_STR_SIZE,
        }
    }

    pub const fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub const fn with_max_str_size(mut self, max_str_size: usize) -> Self {
        self.max_str_size = max_str_size;
        self
    }

    /// Defaults overridden by `BASEKIT_CHUNK_SIZE` / `BASEKIT_MAX_STR_SIZE`
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(chunk_size) = read_env(ENV_CHUNK_SIZE)? {
            config.chunk_size = chunk_size;
        }
        if let Some(max_str_size) = read_env(ENV_MAX_STR_SIZE)? {
            config.max_str_size = max_str_size;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroValue {
                key: "chunk_size".into(),
            });
        }
        if self.max_str_size == 0 {
            return Err(ConfigError::ZeroValue {
                key: "max_str_size".into(),
            });
        }
        Ok(())
    }

    /// Install the process-wide settings (the string length guard)
    pub fn apply(&self) -> Result<(), ConfigError> {
        self.validate()?;
        set_max_str_size(self.max_str_size);
        info!(
            chunk_size = self.chunk_size,
            max_str_size = self.max_str_size,
            "Configuration applied"
        );
        Ok(())
    }
}

fn read_env(key: &str) -> Result<Option<usize>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.into(),
                value: raw,
            }),
        Err(_) => Ok(None),
    }
}
