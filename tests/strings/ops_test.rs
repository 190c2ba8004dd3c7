/*!
 * String Operation Tests
 * Trim, slice and case conversion
 */

use basekit::{Arena, ArenaString, StrError};
use pretty_assertions::assert_eq;

#[test]
fn test_trim() {
    let arena = Arena::new(128).unwrap();
    let mut s = ArenaString::from_str_in(&arena, "  a  ").unwrap();

    s.trim();
    assert_eq!(s, "a");
    assert_eq!(s.len(), 1);
    assert_eq!(s.as_bytes_with_nul(), Some(&b"a\0"[..]));
}

#[test]
fn test_trim_mixed_whitespace() {
    let arena = Arena::new(128).unwrap();
    let mut s = ArenaString::from_str_in(&arena, "\t\r\n key = value \n").unwrap();

    s.trim();
    assert_eq!(s, "key = value");
}

#[test]
fn test_trim_all_whitespace() {
    let arena = Arena::new(64).unwrap();
    let mut s = ArenaString::from_str_in(&arena, " \t \n").unwrap();

    s.trim();
    assert!(s.is_empty());
    assert!(!s.is_null());
    assert_eq!(s.as_bytes_with_nul(), Some(&b"\0"[..]));
}

#[test]
fn test_trim_null_untouched() {
    let mut s = ArenaString::null();
    s.trim();
    assert!(s.is_null());
}

#[test]
fn test_slice_negative_end() {
    let arena = Arena::new(128).unwrap();
    let s = ArenaString::from_str_in(&arena, "hello world").unwrap();

    assert_eq!(s.slice(&arena, 0, -6).unwrap(), "hello");
    assert_eq!(s.slice(&arena, 6, 11).unwrap(), "world");
    assert_eq!(s.slice(&arena, 0, -11).unwrap(), "");
    assert_eq!(s.slice(&arena, 11, 11).unwrap(), "");
}

#[test]
fn test_slice_out_of_bounds() {
    let arena = Arena::new(128).unwrap();
    let s = ArenaString::from_str_in(&arena, "hello").unwrap();

    assert_eq!(
        s.slice(&arena, 0, 6).unwrap_err(),
        StrError::SliceOutOfBounds {
            start: 0,
            end: 6,
            len: 5
        }
    );
    assert!(s.slice(&arena, 3, 2).is_err());
    assert!(s.slice(&arena, 6, 6).is_err());
    assert!(s.slice(&arena, 0, -6).is_err());
}

#[test]
fn test_slice_is_a_copy() {
    let arena = Arena::new(128).unwrap();
    let mut s = ArenaString::from_str_in(&arena, "abcdef").unwrap();

    let head = s.slice(&arena, 0, 3).unwrap();
    s.to_upper();

    assert_eq!(head, "abc");
    assert_eq!(s, "ABCDEF");
}

#[test]
fn test_case_conversion_ascii_only() {
    let arena = Arena::new(128).unwrap();
    let mut s = ArenaString::from_str_in(&arena, "MiXeD 123 ü").unwrap();

    s.to_lower();
    assert_eq!(s, "mixed 123 ü");
    s.to_upper();
    assert_eq!(s, "MIXED 123 ü");
    assert!(s.to_str().is_ok());
}
