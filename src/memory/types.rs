/*!
 * Memory Types
 * Common types for arena allocation
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Arena operation result
pub type ArenaResult<T> = Result<T, ArenaError>;

/// Arena errors
///
/// Only caller mistakes are reported here. Running out of system memory is
/// not recoverable and aborts through `std::alloc::handle_alloc_error`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ArenaError {
    #[error("Invalid chunk size: {0} (must be greater than zero)")]
    #[diagnostic(
        code(arena::invalid_chunk_size),
        help("Create the arena with a positive chunk size, e.g. DEFAULT_CHUNK_SIZE.")
    )]
    InvalidChunkSize(usize),

    #[error("Invalid alignment: {0} (must be a power of two)")]
    #[diagnostic(
        code(arena::invalid_alignment),
        help("Use 1, 2, 4, 8, 16, ... or DEFAULT_ALIGNMENT.")
    )]
    InvalidAlignment(usize),

    #[error("Allocation layout overflow: {size} bytes aligned to {align}")]
    #[diagnostic(
        code(arena::layout_overflow),
        help("The request exceeds isize::MAX once rounded up to its alignment.")
    )]
    LayoutOverflow { size: usize, align: usize },
}

/// Arena statistics snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaStats {
    /// Configured size for freshly grown chunks
    pub chunk_size: usize,
    /// Chunks currently linked into the chain
    pub chunk_count: usize,
    /// Sum of all chunk capacities
    pub total_capacity: usize,
    /// Index of the chunk new allocations go to (0 = root)
    pub current_chunk: usize,
    /// Next free byte in the current chunk
    pub offset: usize,
    /// Number of resets performed
    pub generation: u64,
}

/// Round `value` up to the next multiple of `align`
///
/// `align` must be a power of two. Returns `None` on overflow.
#[inline]
pub const fn align_up(value: usize, align: usize) -> Option<usize> {
    let mask = align - 1;
    match value.checked_add(mask) {
        Some(bumped) => Some(bumped & !mask),
        None => None,
    }
}
