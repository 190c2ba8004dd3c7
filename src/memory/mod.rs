/*!
 * Memory Module
 * Chunked arena allocation
 */

pub mod arena;
pub mod types;

// Re-export for convenience
pub use arena::{with_scratch_arena, Arena};
pub use types::*;
