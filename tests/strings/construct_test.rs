/*!
 * String Construction Tests
 * C strings, buffers, concatenation and formatting
 */

use basekit::{arena_format, Arena, ArenaString, StrError};
use pretty_assertions::assert_eq;

#[test]
fn test_from_cstr_stops_at_nul() {
    let arena = Arena::new(256).unwrap();
    let s = ArenaString::from_cstr(&arena, b"hello\0world").unwrap();

    assert_eq!(s, "hello");
    assert_eq!(s.len(), 5);
    assert_eq!(s.as_bytes_with_nul(), Some(&b"hello\0"[..]));
}

#[test]
fn test_empty_cstr_is_null() {
    let arena = Arena::new(64).unwrap();

    let empty = ArenaString::from_cstr(&arena, b"").unwrap();
    let leading_nul = ArenaString::from_cstr(&arena, b"\0abc").unwrap();

    assert!(empty.is_null());
    assert!(leading_nul.is_null());
    assert_eq!(empty.as_bytes_with_nul(), None);
}

#[test]
fn test_from_bytes_keeps_interior_nul() {
    let arena = Arena::new(64).unwrap();
    let s = ArenaString::from_bytes(&arena, b"a\0b").unwrap();

    assert_eq!(s.len(), 3);
    assert_eq!(s.as_bytes(), b"a\0b");

    let empty = ArenaString::from_bytes(&arena, b"").unwrap();
    assert!(!empty.is_null());
    assert!(empty.is_empty());
}

#[test]
fn test_null_equals_empty() {
    let arena = Arena::new(64).unwrap();
    let empty = ArenaString::from_str_in(&arena, "").unwrap();
    let null = ArenaString::null();

    assert_eq!(null, empty);
    assert!(null.is_null() && !empty.is_null());
    assert_eq!(ArenaString::default(), null);
}

#[test]
fn test_equality_is_case_sensitive() {
    let arena = Arena::new(64).unwrap();
    let lower = ArenaString::from_str_in(&arena, "abc").unwrap();
    let upper = ArenaString::from_str_in(&arena, "ABC").unwrap();

    assert_ne!(lower, upper);
    assert!(lower == *b"abc".as_slice());
    assert_eq!(lower, "abc");
}

#[test]
fn test_concat() {
    let arena = Arena::new(128).unwrap();
    let a = ArenaString::from_str_in(&arena, "foo").unwrap();
    let b = ArenaString::from_str_in(&arena, "bar").unwrap();

    let joined = a.concat(&arena, &b).unwrap();
    assert_eq!(joined, "foobar");
    assert_eq!(joined.as_bytes_with_nul(), Some(&b"foobar\0"[..]));
}

#[test]
fn test_concat_with_null_copies() {
    let arena = Arena::new(128).unwrap();
    let a = ArenaString::from_str_in(&arena, "solo").unwrap();
    let null = ArenaString::null();

    let left = null.concat(&arena, &a).unwrap();
    let right = a.concat(&arena, &null).unwrap();

    assert_eq!(left, "solo");
    assert_eq!(right, "solo");
    assert_ne!(left.as_bytes().as_ptr(), a.as_bytes().as_ptr());
    assert_ne!(right.as_bytes().as_ptr(), a.as_bytes().as_ptr());
    assert!(null.concat(&arena, &null).unwrap().is_null());
}

#[test]
fn test_concat_into_another_arena() {
    let source = Arena::new(64).unwrap();
    let target = Arena::new(64).unwrap();
    let a = ArenaString::from_str_in(&source, "ab").unwrap();
    let b = ArenaString::from_str_in(&source, "cd").unwrap();

    let joined = a.concat(&target, &b).unwrap();
    assert_eq!(target.stats().offset, 5);
    assert_eq!(joined, "abcd");
}

#[test]
fn test_copy_from() {
    let arena = Arena::new(128).unwrap();
    let mut dst = ArenaString::from_str_in(&arena, "longer text").unwrap();
    let src = ArenaString::from_str_in(&arena, "short").unwrap();

    dst.copy_from(&src).unwrap();
    assert_eq!(dst, "short");
    assert_eq!(dst.as_bytes_with_nul(), Some(&b"short\0"[..]));

    let mut tiny = ArenaString::from_str_in(&arena, "ab").unwrap();
    assert_eq!(
        tiny.copy_from(&src),
        Err(StrError::DestinationTooSmall {
            needed: 5,
            available: 2
        })
    );
    assert_eq!(tiny, "ab");
}

#[test]
fn test_format_in_arena() {
    let arena = Arena::new(128).unwrap();
    let s = arena_format!(&arena, "{} chunks of {} bytes", 3, 64).unwrap();

    assert_eq!(s, "3 chunks of 64 bytes");
    assert_eq!(arena.stats().offset, s.len() + 1);
}

#[test]
fn test_display_and_debug() {
    let arena = Arena::new(64).unwrap();
    let s = ArenaString::from_str_in(&arena, "hi").unwrap();

    assert_eq!(s.to_string(), "hi");
    assert_eq!(format!("{:?}", s), "\"hi\"");
    assert_eq!(format!("{:?}", ArenaString::null()), "null");
}
