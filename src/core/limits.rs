/*!
 * Library Limits and Constants
 *
 * Centralized location for sizes, thresholds and growth baselines.
 * Values marked [PERF] trade memory for fewer system allocations.
 */

use std::mem;

// =============================================================================
// ARENA
// =============================================================================

/// Default arena chunk size (64KB)
/// [PERF] Large enough that request-scoped arenas rarely grow a second chunk
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Default allocation alignment: two machine words
/// Suitable for any scalar or pointer-sized structure on 32/64 bit targets
pub const DEFAULT_ALIGNMENT: usize = 2 * mem::size_of::<usize>();

// =============================================================================
// STRINGS
// =============================================================================

/// Default process-wide guard on NUL-terminated string scans
pub const DEFAULT_MAX_STR_SIZE: usize = 10_000;

/// Terminator appended after every arena string
pub const STR_TERMINATOR: u8 = b'\0';

// =============================================================================
// GROWABLE ARRAYS
// =============================================================================

/// First capacity reserved by `push` on an empty array
/// [PERF] Avoids several tiny reallocations for typical split results
pub const VEC_BASE_CAPACITY: usize = 128;

/// First capacity reserved by front/middle insertion on an empty array
pub const VEC_FRONT_BASE_CAPACITY: usize = 2;

/// Capacity multiplier once the baseline is exceeded
pub const VEC_GROWTH_FACTOR: usize = 2;
