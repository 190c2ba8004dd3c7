/*!
 * Core Module
 * Limits, configuration and error handling
 */

pub mod config;
pub mod errors;
pub mod limits;

// Re-export for convenience
pub use config::{BaseConfig, ConfigError};
pub use errors::*;
