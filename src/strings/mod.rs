/*!
 * Strings Module
 * Arena-backed byte strings and their algorithms
 *
 * Byte-oriented throughout: case conversion and whitespace handling only
 * look at ASCII.
 */

pub mod arena_string;
pub mod ops;
pub mod types;

use crate::collections::GrowVec;

// Re-export for convenience
pub use arena_string::ArenaString;
pub use ops::is_space;
pub use types::*;

/// Standard container for split results
pub type StringVec<'a> = GrowVec<ArenaString<'a>>;
