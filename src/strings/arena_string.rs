/*!
 * Arena String
 * Byte string whose storage lives in an Arena
 */

use super::types::{max_str_size, StrError, StrOp, StrResult};
use crate::core::limits::STR_TERMINATOR;
use crate::memory::Arena;
use std::fmt::{self, Write as _};
use std::hash::{Hash, Hasher};
use std::str::Utf8Error;
use tracing::warn;

/// `{length, data}` view over arena-owned bytes
///
/// The buffer always holds `len + 1` bytes with a NUL at `len`, so the data
/// can be handed to byte-string consumers as is. The string does not own the
/// memory: it lives as long as the arena borrow `'a`.
///
/// A string with no buffer is the "null" string (no value). It compares
/// equal to the empty string but is distinct from it: see [`is_null`].
///
/// [`is_null`]: ArenaString::is_null
pub struct ArenaString<'a> {
    len: usize,
    data: Option<&'a mut [u8]>,
}

impl<'a> ArenaString<'a> {
    /// The null string
    #[inline]
    pub const fn null() -> Self {
        Self { len: 0, data: None }
    }

    /// Copy a NUL-terminated byte string
    ///
    /// Scanning stops at the first NUL, at the end of `bytes`, or at the
    /// process-wide limit ([`max_str_size`]), whichever comes first. Empty
    /// input yields the null string.
    pub fn from_cstr(arena: &'a Arena, bytes: &[u8]) -> StrResult<Self> {
        let max = max_str_size();
        let window = &bytes[..bytes.len().min(max)];
        let len = memchr::memchr(STR_TERMINATOR, window).unwrap_or(window.len());

        if len == 0 {
            return Ok(Self::null());
        }

        if len == max && bytes.get(max).is_some_and(|&b| b != STR_TERMINATOR) {
            warn!(max, "C string truncated at the maximum string size");
        }

        ArenaString::copy_into(arena, &bytes[..len])
    }

    /// Copy exactly `bytes`, NUL bytes included
    ///
    /// Empty input yields an empty, non-null string.
    pub fn from_bytes(arena: &'a Arena, bytes: &[u8]) -> StrResult<Self> {
        let max = max_str_size();
        if bytes.len() > max {
            return Err(StrError::TooLong {
                len: bytes.len(),
                max,
            });
        }

        ArenaString::copy_into(arena, bytes)
    }

    /// Copy a `&str`
    #[inline]
    pub fn from_str_in(arena: &'a Arena, s: &str) -> StrResult<Self> {
        Self::from_bytes(arena, s.as_bytes())
    }

    /// Format into a buffer sized exactly to the output
    ///
    /// Prefer the [`arena_format!`](crate::arena_format) macro.
    pub fn format_in(arena: &'a Arena, args: fmt::Arguments<'_>) -> StrResult<Self> {
        let mut counter = ByteCounter(0);
        counter
            .write_fmt(args)
            .map_err(|_| StrError::FormatFailed)?;

        let len = counter.0;
        let buf = arena.alloc_chars(len + 1)?;
        let mut writer = SliceWriter {
            buf: &mut buf[..len],
            pos: 0,
        };
        writer.write_fmt(args).map_err(|_| StrError::FormatFailed)?;
        if writer.pos != len {
            return Err(StrError::FormatFailed);
        }

        buf[len] = STR_TERMINATOR;
        Ok(Self {
            len,
            data: Some(buf),
        })
    }

    /// Allocate `bytes.len() + 1` bytes, copy, terminate
    pub(crate) fn copy_into(arena: &'a Arena, bytes: &[u8]) -> StrResult<Self> {
        let len = bytes.len();
        let buf = arena.alloc_chars(len + 1)?;
        buf[..len].copy_from_slice(bytes);
        buf[len] = STR_TERMINATOR;

        Ok(Self {
            len,
            data: Some(buf),
        })
    }

    /// Concatenate into a fresh allocation
    ///
    /// If either side is null the result is a fresh copy of the other side,
    /// never a shared view. Two nulls give null.
    pub fn concat<'b>(&self, arena: &'b Arena, other: &ArenaString<'_>) -> StrResult<ArenaString<'b>> {
        match (self.is_null(), other.is_null()) {
            (true, true) => Ok(ArenaString::null()),
            (true, false) => ArenaString::copy_into(arena, other.as_bytes()),
            (false, true) => ArenaString::copy_into(arena, self.as_bytes()),
            (false, false) => {
                let len = self.len + other.len;
                let buf = arena.alloc_chars(len + 1)?;
                buf[..self.len].copy_from_slice(self.as_bytes());
                buf[self.len..len].copy_from_slice(other.as_bytes());
                buf[len] = STR_TERMINATOR;

                Ok(ArenaString {
                    len,
                    data: Some(buf),
                })
            }
        }
    }

    /// Overwrite this string's bytes with `source`, in place
    ///
    /// The destination must be at least as long as the source; afterwards it
    /// has the source's length.
    pub fn copy_from(&mut self, source: &ArenaString<'_>) -> StrResult<()> {
        let src = match source.data.as_deref() {
            Some(data) => &data[..source.len],
            None => return Err(StrError::NullString(StrOp::Copy)),
        };
        let dst = match self.data.as_deref_mut() {
            Some(data) => data,
            None => return Err(StrError::NullString(StrOp::Copy)),
        };

        if self.len < src.len() {
            return Err(StrError::DestinationTooSmall {
                needed: src.len(),
                available: self.len,
            });
        }

        dst[..src.len()].copy_from_slice(src);
        dst[src.len()] = STR_TERMINATOR;
        self.len = src.len();
        Ok(())
    }

    /// Length in bytes, terminator excluded
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True for the "no value" string
    #[inline(always)]
    pub fn is_null(&self) -> bool {
        self.data.is_none()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match self.data.as_deref() {
            Some(data) => &data[..self.len],
            None => &[],
        }
    }

    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let len = self.len;
        match self.data.as_deref_mut() {
            Some(data) => &mut data[..len],
            None => &mut [],
        }
    }

    /// Bytes including the trailing NUL; `None` for the null string
    #[inline]
    pub fn as_bytes_with_nul(&self) -> Option<&[u8]> {
        self.data.as_deref().map(|data| &data[..=self.len])
    }

    /// UTF-8 view of the bytes
    #[inline]
    pub fn to_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(self.as_bytes())
    }

    /// Set the length and write the terminator after it
    pub(crate) fn truncate_to(&mut self, len: usize) {
        if let Some(data) = self.data.as_deref_mut() {
            debug_assert!(len < data.len());
            data[len] = STR_TERMINATOR;
            self.len = len;
        }
    }
}

/// Counts formatted bytes without storing them
struct ByteCounter(usize);

impl fmt::Write for ByteCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

/// Writes formatted bytes into a fixed slice
struct SliceWriter<'b> {
    buf: &'b mut [u8],
    pos: usize,
}

impl fmt::Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.pos.checked_add(s.len()).ok_or(fmt::Error)?;
        let dst = self.buf.get_mut(self.pos..end).ok_or(fmt::Error)?;
        dst.copy_from_slice(s.as_bytes());
        self.pos = end;
        Ok(())
    }
}

/// Format into an arena, like `format!`
///
/// ```
/// use basekit::{arena_format, Arena};
///
/// let arena = Arena::new(256).unwrap();
/// let s = arena_format!(&arena, "{}-{}", "chunk", 7).unwrap();
/// assert_eq!(s, "chunk-7");
/// ```
#[macro_export]
macro_rules! arena_format {
    ($arena:expr, $($arg:tt)*) => {
        $crate::strings::ArenaString::format_in($arena, ::std::format_args!($($arg)*))
    };
}

impl Default for ArenaString<'_> {
    fn default() -> Self {
        Self::null()
    }
}

impl AsRef<[u8]> for ArenaString<'_> {
    #[inline(always)]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<'b> PartialEq<ArenaString<'b>> for ArenaString<'_> {
    fn eq(&self, other: &ArenaString<'b>) -> bool {
        self.len == other.len && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ArenaString<'_> {}

impl PartialEq<[u8]> for ArenaString<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<str> for ArenaString<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for ArenaString<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Hash for ArenaString<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl fmt::Display for ArenaString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.as_bytes().utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_char(char::REPLACEMENT_CHARACTER)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ArenaString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str("null");
        }
        f.write_char('"')?;
        for chunk in self.as_bytes().utf8_chunks() {
            write!(f, "{}", chunk.valid().escape_debug())?;
            if !chunk.invalid().is_empty() {
                f.write_char(char::REPLACEMENT_CHARACTER)?;
            }
        }
        f.write_char('"')
    }
}
