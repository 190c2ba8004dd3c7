/*!
 * Arena Chunk
 * One fixed-capacity block in the arena's chunk chain
 */

use super::super::types::{align_up, ArenaError, ArenaResult};
use std::alloc::{self, Layout};
use std::ptr::NonNull;

/// Fixed-capacity heap block owned by an [`Arena`](super::Arena)
///
/// Chunks are linked in creation order by their position in the arena's chain
/// and are only released when the whole arena goes away.
pub(super) struct Chunk {
    base: NonNull<u8>,
    layout: Layout,
}

// SAFETY: a chunk uniquely owns its buffer; moving it to another thread moves
// that ownership along with it.
unsafe impl Send for Chunk {}

impl Chunk {
    /// Allocate a chunk of exactly `capacity` bytes whose base honors `align`
    ///
    /// Aborts through `handle_alloc_error` when the system is out of memory.
    pub fn new(capacity: usize, align: usize) -> ArenaResult<Self> {
        debug_assert!(capacity > 0, "chunk capacity must be non-zero");

        let layout = Layout::from_size_align(capacity, align).map_err(|_| {
            ArenaError::LayoutOverflow {
                size: capacity,
                align,
            }
        })?;

        // SAFETY: layout has a non-zero size.
        let raw = unsafe { alloc::alloc(layout) };
        let base = match NonNull::new(raw) {
            Some(base) => base,
            None => alloc::handle_alloc_error(layout),
        };

        Ok(Self { base, layout })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.layout.size()
    }

    #[inline]
    pub fn base(&self) -> NonNull<u8> {
        self.base
    }

    /// Start offset of a `size`-byte region aligned to `align`, searching at
    /// or after `offset`. `None` when the region would run past the chunk.
    ///
    /// Alignment is applied to the absolute address, so it holds even when the
    /// request is stricter than the chunk's own base alignment.
    #[inline]
    pub fn fit(&self, offset: usize, size: usize, align: usize) -> Option<usize> {
        let base = self.base.as_ptr() as usize;
        let aligned = align_up(base.checked_add(offset)?, align)?;
        let start = aligned - base;
        let end = start.checked_add(size)?;

        (end <= self.capacity()).then_some(start)
    }
}

impl Drop for Chunk {
    fn drop(&mut self) {
        // SAFETY: `base` was returned by `alloc` with exactly this layout.
        unsafe { alloc::dealloc(self.base.as_ptr(), self.layout) }
    }
}
