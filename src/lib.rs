/*!
 * basekit
 * Low-level building blocks: a chunked arena allocator, a growable array and
 * arena-backed byte strings
 *
 * ```
 * use basekit::{Arena, ArenaString};
 *
 * let arena = Arena::new(4096).unwrap();
 * let csv = ArenaString::from_str_in(&arena, "a,b,,c").unwrap();
 * let fields = csv.split(&arena, ",").unwrap();
 *
 * assert_eq!(fields.len(), 4);
 * assert_eq!(fields[2], "");
 * ```
 */

pub mod collections;
pub mod core;
pub mod memory;
pub mod monitoring;
pub mod strings;

// Re-exports
pub use crate::core::{BaseConfig, BaseError, BaseResult, ConfigError};
pub use collections::{ArrayError, ArrayOp, ArrayResult, GrowVec};
pub use memory::{with_scratch_arena, Arena, ArenaError, ArenaResult, ArenaStats};
pub use monitoring::init_tracing;
pub use strings::{max_str_size, set_max_str_size, ArenaString, StrError, StrOp, StrResult, StringVec};
