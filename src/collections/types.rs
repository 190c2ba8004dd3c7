/*!
 * Collection Types
 * Errors for growable array operations
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Array operation result
pub type ArrayResult<T> = Result<T, ArrayError>;

/// Operation that rejected its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayOp {
    Pop,
    Shift,
    Insert,
    At,
}

impl fmt::Display for ArrayOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArrayOp::Pop => write!(f, "pop"),
            ArrayOp::Shift => write!(f, "shift"),
            ArrayOp::Insert => write!(f, "insert"),
            ArrayOp::At => write!(f, "at"),
        }
    }
}

/// Growable array errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ArrayError {
    #[error("Cannot {0} from an empty array")]
    #[diagnostic(
        code(array::empty),
        help("Check `is_empty()` before removing elements.")
    )]
    Empty(ArrayOp),

    #[error("Index {index} out of bounds for {op} (length {len})")]
    #[diagnostic(
        code(array::index_out_of_bounds),
        help("Valid indices are 0..length (0..=length for insert).")
    )]
    IndexOutOfBounds { op: ArrayOp, index: usize, len: usize },
}
