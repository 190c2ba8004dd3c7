/*!
 * String Operations
 * Split, trim, slice and case conversion over arena strings
 */

use super::arena_string::ArenaString;
use super::types::{StrError, StrOp, StrResult};
use super::StringVec;
use crate::collections::GrowVec;
use crate::memory::Arena;
use memchr::memmem;

/// Whitespace recognized by [`ArenaString::trim`]
#[inline(always)]
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// Inclusive range of the first and last non-whitespace bytes
fn trim_bounds(data: &[u8]) -> Option<(usize, usize)> {
    let first = data.iter().position(|&b| !is_space(b))?;
    let last = data.iter().rposition(|&b| !is_space(b))?;
    Some((first, last))
}

impl<'a> ArenaString<'a> {
    /// Split on every occurrence of `delimiter`
    ///
    /// Matches are found leftmost first; each yields the (possibly empty)
    /// token before it and the remainder after the last match is the final
    /// token, so joining the tokens with `delimiter` gives back the input.
    /// An empty delimiter splits into single bytes. An empty input has no
    /// tokens. Tokens are fresh copies.
    pub fn split<'b>(&self, arena: &'b Arena, delimiter: impl AsRef<[u8]>) -> StrResult<StringVec<'b>> {
        if self.is_null() {
            return Err(StrError::NullString(StrOp::Split));
        }

        let haystack = self.as_bytes();
        let delimiter = delimiter.as_ref();
        let mut tokens = GrowVec::new();

        if delimiter.is_empty() {
            for byte in haystack.chunks(1) {
                tokens.push(ArenaString::copy_into(arena, byte)?);
            }
            return Ok(tokens);
        }

        if haystack.is_empty() {
            return Ok(tokens);
        }

        let finder = memmem::Finder::new(delimiter);
        let mut cursor = 0;
        while let Some(pos) = finder.find(&haystack[cursor..]) {
            tokens.push(ArenaString::copy_into(arena, &haystack[cursor..cursor + pos])?);
            cursor += pos + delimiter.len();
        }
        tokens.push(ArenaString::copy_into(arena, &haystack[cursor..])?);

        Ok(tokens)
    }

    /// Split into lines on `\n`, dropping a `\r` right before it
    ///
    /// A final line without a newline is still returned; a trailing newline
    /// does not add an empty line.
    pub fn split_lines<'b>(&self, arena: &'b Arena) -> StrResult<StringVec<'b>> {
        if self.is_null() {
            return Err(StrError::NullString(StrOp::SplitLines));
        }

        let bytes = self.as_bytes();
        let mut lines = GrowVec::new();
        let mut cursor = 0;

        while cursor < bytes.len() {
            match memchr::memchr(b'\n', &bytes[cursor..]) {
                Some(pos) => {
                    let line = match &bytes[cursor..cursor + pos] {
                        [rest @ .., b'\r'] => rest,
                        line => line,
                    };
                    lines.push(ArenaString::copy_into(arena, line)?);
                    cursor += pos + 1;
                }
                None => {
                    lines.push(ArenaString::copy_into(arena, &bytes[cursor..])?);
                    break;
                }
            }
        }

        Ok(lines)
    }

    /// Strip leading and trailing whitespace in place
    ///
    /// An all-whitespace string becomes empty. The null string is left as is.
    pub fn trim(&mut self) {
        match trim_bounds(self.as_bytes()) {
            Some((first, last)) => {
                let len = last - first + 1;
                if first > 0 {
                    self.as_bytes_mut().copy_within(first..=last, 0);
                }
                self.truncate_to(len);
            }
            None => self.truncate_to(0),
        }
    }

    /// Copy of the byte range `start..end`
    ///
    /// A negative `end` counts back from the length, so `slice(0, -1)` drops
    /// the last byte.
    pub fn slice<'b>(&self, arena: &'b Arena, start: usize, end: isize) -> StrResult<ArenaString<'b>> {
        let len = self.len();
        let out_of_bounds = StrError::SliceOutOfBounds { start, end, len };

        let resolved = if end < 0 {
            isize::try_from(len).ok().and_then(|len| len.checked_add(end))
        } else {
            Some(end)
        };
        let end_index = resolved
            .and_then(|e| usize::try_from(e).ok())
            .ok_or(out_of_bounds.clone())?;

        if start > len || end_index < start || end_index > len {
            return Err(out_of_bounds);
        }

        ArenaString::copy_into(arena, &self.as_bytes()[start..end_index])
    }

    /// ASCII uppercase in place
    #[inline]
    pub fn to_upper(&mut self) {
        self.as_bytes_mut().make_ascii_uppercase();
    }

    /// ASCII lowercase in place
    #[inline]
    pub fn to_lower(&mut self) {
        self.as_bytes_mut().make_ascii_lowercase();
    }
}
