/*!
 * String Types
 * Errors and the process-wide length guard
 */

use crate::core::limits::DEFAULT_MAX_STR_SIZE;
use crate::memory::ArenaError;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

/// String operation result
pub type StrResult<T> = Result<T, StrError>;

static MAX_STR_SIZE: AtomicUsize = AtomicUsize::new(DEFAULT_MAX_STR_SIZE);

/// Set the maximum length accepted by string constructors
pub fn set_max_str_size(size: usize) {
    MAX_STR_SIZE.store(size, Ordering::Relaxed);
}

/// Current maximum length accepted by string constructors
#[inline]
pub fn max_str_size() -> usize {
    MAX_STR_SIZE.load(Ordering::Relaxed)
}

/// Operation that requires a non-null string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrOp {
    Split,
    SplitLines,
    Copy,
}

impl fmt::Display for StrOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StrOp::Split => write!(f, "split"),
            StrOp::SplitLines => write!(f, "split_lines"),
            StrOp::Copy => write!(f, "copy"),
        }
    }
}

/// String errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum StrError {
    #[error("{0} requires a string value, got null")]
    #[diagnostic(
        code(strings::null_string),
        help("Null strings come from empty C-string input. Check `is_null()` first.")
    )]
    NullString(StrOp),

    #[error("String too long: {len} bytes exceeds the {max} byte limit")]
    #[diagnostic(
        code(strings::too_long),
        help("Raise the limit with `set_max_str_size` or BASEKIT_MAX_STR_SIZE.")
    )]
    TooLong { len: usize, max: usize },

    #[error("Slice {start}..{end} out of bounds for length {len}")]
    #[diagnostic(
        code(strings::slice_out_of_bounds),
        help("Need start <= end <= length; a negative end counts back from the length.")
    )]
    SliceOutOfBounds { start: usize, end: isize, len: usize },

    #[error("Destination too small: needs {needed} bytes, has {available}")]
    #[diagnostic(
        code(strings::destination_too_small),
        help("Copy into a string at least as long as the source.")
    )]
    DestinationTooSmall { needed: usize, available: usize },

    #[error("Formatting failed while writing into the arena")]
    #[diagnostic(
        code(strings::format_failed),
        help("A Display implementation returned an error or produced different output on its second pass.")
    )]
    FormatFailed,

    #[error("Arena error: {0}")]
    #[diagnostic(transparent)]
    Arena(#[from] ArenaError),
}
