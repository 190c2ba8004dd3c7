/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 *
 * Each subsystem owns its error enum; `BaseError` unifies them for callers
 * that mix arenas, arrays and strings behind a single `?`.
 */

use super::config::ConfigError;
use miette::Diagnostic;
use thiserror::Error;

// Re-export subsystem errors
pub use crate::collections::ArrayError;
pub use crate::memory::ArenaError;
pub use crate::strings::StrError;

/// Unified library error with miette diagnostics
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum BaseError {
    #[error("Arena error: {0}")]
    #[diagnostic(transparent)]
    Arena(#[from] ArenaError),

    #[error("Array error: {0}")]
    #[diagnostic(transparent)]
    Array(#[from] ArrayError),

    #[error("String error: {0}")]
    #[diagnostic(transparent)]
    Str(#[from] StrError),

    #[error("Configuration error: {0}")]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

impl BaseError {
    /// Stable snake_case category, for logs and metrics labels
    pub fn category(&self) -> &'static str {
        match self {
            BaseError::Arena(_) => "arena_error",
            BaseError::Array(_) => "array_error",
            BaseError::Str(_) => "string_error",
            BaseError::Config(_) => "config_error",
        }
    }
}

/// Result type for library operations
pub type BaseResult<T> = std::result::Result<T, BaseError>;
