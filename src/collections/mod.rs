/*!
 * Collections Module
 * Generic growable array, independent of the arena
 */

pub mod grow_vec;
pub mod types;

// Re-export for convenience
pub use grow_vec::{GrowVec, IntoIter};
pub use types::*;
