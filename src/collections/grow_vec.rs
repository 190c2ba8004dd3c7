/*!
 * Growable Array
 * Contiguous, order-preserving container backed by raw reallocation
 */

use super::types::{ArrayError, ArrayOp, ArrayResult};
use crate::core::limits::{VEC_BASE_CAPACITY, VEC_FRONT_BASE_CAPACITY, VEC_GROWTH_FACTOR};
use std::alloc::{self, Layout};
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::mem::{self, ManuallyDrop};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

/// Growable array with amortized O(1) append
///
/// Capacity starts at a baseline (128 for `push`, 2 for front/middle
/// insertion) and doubles from there. It never shrinks until [`GrowVec::free`].
///
/// # Invariants
///
/// - `len <= cap`
/// - `cap == 0` implies no buffer (`ptr` is `None`)
pub struct GrowVec<T> {
    ptr: Option<NonNull<T>>,
    len: usize,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: GrowVec owns its elements exactly like Vec<T> does.
unsafe impl<T: Send> Send for GrowVec<T> {}
unsafe impl<T: Sync> Sync for GrowVec<T> {}

#[cold]
fn capacity_overflow() -> ! {
    panic!("GrowVec capacity overflow")
}

impl<T> GrowVec<T> {
    /// Empty array; no allocation until the first insertion
    #[inline]
    pub const fn new() -> Self {
        Self {
            ptr: None,
            len: 0,
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Empty array with room for exactly `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        let mut vec = Self::new();
        if capacity > 0 {
            vec.reallocate(capacity);
        }
        vec
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append `value` and return its slot
    pub fn push(&mut self, value: T) -> &mut T {
        if self.len == self.cap {
            self.grow(VEC_BASE_CAPACITY);
        }

        // SAFETY: len < cap after growing, so the slot is inside the buffer.
        unsafe {
            let slot = self.buf().add(self.len);
            slot.write(value);
            self.len += 1;
            &mut *slot
        }
    }

    /// Remove and return the last element
    pub fn pop(&mut self) -> ArrayResult<T> {
        if self.len == 0 {
            return Err(ArrayError::Empty(ArrayOp::Pop));
        }

        self.len -= 1;
        // SAFETY: the slot at the old `len - 1` holds a live element, which
        // is no longer counted as live.
        Ok(unsafe { self.buf().add(self.len).read() })
    }

    /// Remove and return the first element, moving the rest down. O(n)
    pub fn shift(&mut self) -> ArrayResult<T> {
        if self.len == 0 {
            return Err(ArrayError::Empty(ArrayOp::Shift));
        }

        // SAFETY: slot 0 is live; the tail move stays inside `0..len`.
        unsafe {
            let buf = self.buf();
            let value = buf.read();
            ptr::copy(buf.add(1), buf, self.len - 1);
            self.len -= 1;
            Ok(value)
        }
    }

    /// Insert at the front, moving everything up. O(n)
    pub fn unshift(&mut self, value: T) -> &mut T {
        if self.len == self.cap {
            self.grow(VEC_FRONT_BASE_CAPACITY);
        }

        // SAFETY: len < cap, so shifting `len` elements up by one stays in
        // bounds and frees slot 0.
        unsafe {
            let buf = self.buf();
            ptr::copy(buf, buf.add(1), self.len);
            buf.write(value);
            self.len += 1;
            &mut *buf
        }
    }

    /// Insert at `index`, moving the tail right. O(n)
    pub fn insert(&mut self, index: usize, value: T) -> ArrayResult<&mut T> {
        if index > self.len {
            return Err(ArrayError::IndexOutOfBounds {
                op: ArrayOp::Insert,
                index,
                len: self.len,
            });
        }

        if self.len == self.cap {
            self.grow(VEC_FRONT_BASE_CAPACITY);
        }

        // SAFETY: index <= len < cap; the tail move stays inside the buffer.
        unsafe {
            let slot = self.buf().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(value);
            self.len += 1;
            Ok(&mut *slot)
        }
    }

    /// Mutable access to the element at `index`
    pub fn at(&mut self, index: usize) -> ArrayResult<&mut T> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfBounds {
                op: ArrayOp::At,
                index,
                len,
            })
    }

    /// Drop every element, keeping the buffer
    pub fn clear(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        self.len = 0;
        // SAFETY: the elements were live and are no longer reachable.
        unsafe { ptr::drop_in_place(live) }
    }

    /// Drop every element and release the buffer
    ///
    /// Leaves an empty array with no buffer; it may be reused afterwards.
    pub fn free(&mut self) {
        self.clear();
        if let Some(ptr) = self.ptr.take() {
            // SAFETY: `ptr` was allocated for `cap` elements.
            unsafe { release(ptr, self.cap) }
        }
        self.cap = 0;
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match self.ptr {
            // SAFETY: the first `len` slots are initialized.
            Some(ptr) => unsafe { slice::from_raw_parts(ptr.as_ptr(), self.len) },
            None => &[],
        }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self.ptr {
            // SAFETY: the first `len` slots are initialized and uniquely ours.
            Some(ptr) => unsafe { slice::from_raw_parts_mut(ptr.as_ptr(), self.len) },
            None => &mut [],
        }
    }

    #[inline]
    fn buf(&self) -> *mut T {
        debug_assert!(self.ptr.is_some(), "GrowVec buffer accessed before allocation");
        self.ptr.map_or(ptr::null_mut(), NonNull::as_ptr)
    }

    /// Baseline capacity when empty, doubling otherwise
    fn grow(&mut self, baseline: usize) {
        let new_cap = if self.cap == 0 {
            baseline
        } else {
            self.cap
                .checked_mul(VEC_GROWTH_FACTOR)
                .unwrap_or_else(|| capacity_overflow())
        };
        self.reallocate(new_cap);
    }

    fn reallocate(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);

        if mem::size_of::<T>() == 0 {
            self.ptr = Some(NonNull::dangling());
            self.cap = new_cap;
            return;
        }

        let new_layout = Layout::array::<T>(new_cap).unwrap_or_else(|_| capacity_overflow());
        if new_layout.size() > isize::MAX as usize {
            capacity_overflow();
        }

        let raw = match self.ptr {
            // SAFETY: new_layout has a non-zero size.
            None => unsafe { alloc::alloc(new_layout) },
            Some(ptr) => {
                let old_layout = Layout::array::<T>(self.cap).unwrap_or_else(|_| capacity_overflow());
                // SAFETY: `ptr` was allocated with `old_layout`; the new size
                // is non-zero and fits isize.
                unsafe { alloc::realloc(ptr.as_ptr().cast(), old_layout, new_layout.size()) }
            }
        };

        let ptr = match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => ptr,
            None => alloc::handle_alloc_error(new_layout),
        };

        self.ptr = Some(ptr);
        self.cap = new_cap;
    }
}

/// Release a buffer of `cap` slots
///
/// # Safety
///
/// `ptr` must come from `GrowVec::reallocate` with this exact capacity and
/// hold no live elements.
unsafe fn release<T>(ptr: NonNull<T>, cap: usize) {
    if mem::size_of::<T>() == 0 || cap == 0 {
        return;
    }
    if let Ok(layout) = Layout::array::<T>(cap) {
        alloc::dealloc(ptr.as_ptr().cast(), layout);
    }
}

impl<T> Drop for GrowVec<T> {
    fn drop(&mut self) {
        self.free();
    }
}

impl<T> Default for GrowVec<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for GrowVec<T> {
    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for GrowVec<T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone> Clone for GrowVec<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.cap);
        for item in self.iter() {
            copy.push(item.clone());
        }
        copy
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for GrowVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowVec<T> {}

impl<T: PartialEq> PartialEq<[T]> for GrowVec<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for GrowVec<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> Extend<T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> IntoIterator for GrowVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let vec = ManuallyDrop::new(self);
        IntoIter {
            buf: vec.ptr,
            cap: vec.cap,
            start: 0,
            end: vec.len,
            _marker: PhantomData,
        }
    }
}

/// Owning iterator over a [`GrowVec`]
pub struct IntoIter<T> {
    buf: Option<NonNull<T>>,
    cap: usize,
    start: usize,
    end: usize,
    _marker: PhantomData<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        let buf = self.buf?;
        // SAFETY: slots in `start..end` are live and each is read once.
        let value = unsafe { buf.as_ptr().add(self.start).read() };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        let buf = self.buf?;
        self.end -= 1;
        // SAFETY: slot `end` was live and is now outside the live range.
        Some(unsafe { buf.as_ptr().add(self.end).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        if let Some(buf) = self.buf {
            // SAFETY: the remaining slots are live; afterwards the buffer
            // holds nothing and can be released with its original capacity.
            unsafe {
                let rest = ptr::slice_from_raw_parts_mut(buf.as_ptr().add(self.start), self.end - self.start);
                ptr::drop_in_place(rest);
                release(buf, self.cap);
            }
        }
    }
}
