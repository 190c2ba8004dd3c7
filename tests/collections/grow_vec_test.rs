/*!
 * GrowVec Tests
 * Capacity policy, front/middle insertion and error returns
 */

use basekit::collections::ArrayOp;
use basekit::{ArrayError, GrowVec};
use pretty_assertions::assert_eq;

#[test]
fn test_push_grows_once_past_baseline() {
    let mut vec = GrowVec::new();
    let mut growths = 0;
    let mut last_cap = vec.capacity();

    for i in 0..130u32 {
        vec.push(i);
        if vec.capacity() != last_cap {
            growths += 1;
            last_cap = vec.capacity();
        }
    }

    // 0 -> 128 on the first push, 128 -> 256 on the 129th
    assert_eq!(growths, 2);
    assert_eq!(vec.capacity(), 256);
    assert_eq!(vec.len(), 130);
    assert_eq!(vec[129], 129);
}

#[test]
fn test_with_capacity_then_overflow() {
    let mut vec = GrowVec::with_capacity(128);
    for i in 0..128u8 {
        vec.push(i);
    }
    assert_eq!(vec.capacity(), 128);

    vec.push(0);
    vec.push(1);
    assert_eq!(vec.capacity(), 256);
    assert_eq!(vec.len(), 130);
}

#[test]
fn test_push_returns_slot() {
    let mut vec = GrowVec::new();
    *vec.push(String::from("a")) += "bc";
    assert_eq!(vec, ["abc".to_string()]);
}

#[test]
fn test_pop_and_shift() {
    let mut vec: GrowVec<i32> = [1, 2, 3].into_iter().collect();
    let cap = vec.capacity();

    assert_eq!(vec.pop(), Ok(3));
    assert_eq!(vec.shift(), Ok(1));
    assert_eq!(vec, [2]);
    assert_eq!(vec.capacity(), cap);

    assert_eq!(vec.pop(), Ok(2));
    assert_eq!(vec.pop(), Err(ArrayError::Empty(ArrayOp::Pop)));
    assert_eq!(vec.shift(), Err(ArrayError::Empty(ArrayOp::Shift)));
}

#[test]
fn test_unshift_small_baseline() {
    let mut vec = GrowVec::new();

    vec.unshift(3);
    assert_eq!(vec.capacity(), 2);
    vec.unshift(2);
    vec.unshift(1);
    assert_eq!(vec.capacity(), 4);
    assert_eq!(vec, [1, 2, 3]);
}

#[test]
fn test_insert() {
    let mut vec: GrowVec<char> = "ace".chars().collect();

    *vec.insert(1, 'b').unwrap() = 'B';
    vec.insert(3, 'd').unwrap();
    vec.insert(5, 'f').unwrap();
    assert_eq!(vec, ['a', 'B', 'c', 'd', 'e', 'f']);

    assert_eq!(
        vec.insert(7, 'x'),
        Err(ArrayError::IndexOutOfBounds {
            op: ArrayOp::Insert,
            index: 7,
            len: 6
        })
    );
}

#[test]
fn test_insert_into_empty() {
    let mut vec = GrowVec::new();
    vec.insert(0, "only").unwrap();
    assert_eq!(vec.capacity(), 2);
    assert_eq!(vec, ["only"]);
}

#[test]
fn test_at() {
    let mut vec: GrowVec<u32> = (0..4).collect();

    *vec.at(2).unwrap() *= 10;
    assert_eq!(vec.at(2).map(|v| *v), Ok(20));
    assert_eq!(
        vec.at(4).map(|v| *v),
        Err(ArrayError::IndexOutOfBounds {
            op: ArrayOp::At,
            index: 4,
            len: 4
        })
    );
    assert_eq!(vec.get(4), None);
}

#[test]
fn test_free_and_reuse() {
    let mut vec: GrowVec<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();

    vec.free();
    assert_eq!(vec.len(), 0);
    assert_eq!(vec.capacity(), 0);

    vec.push("c".into());
    assert_eq!(vec.capacity(), 128);
}

#[test]
fn test_iteration() {
    let mut vec: GrowVec<i64> = (1..=5).collect();

    for v in &mut vec {
        *v *= 2;
    }
    let sum: i64 = vec.iter().sum();
    assert_eq!(sum, 30);

    let reversed: Vec<i64> = vec.clone().into_iter().rev().collect();
    assert_eq!(reversed, vec![10, 8, 6, 4, 2]);
    assert_eq!(format!("{:?}", vec), "[2, 4, 6, 8, 10]");
}
