//! Tests for StaticStack.

use super::StaticStack;
use crate::error::CapacityError;

#[test]
fn test_lifo_order() {
    let mut s = StaticStack::<i32, 2>::new();
    s.push(1).unwrap();
    s.push(2).unwrap();
    assert_eq!(s.pop(), Some(2));
    assert_eq!(s.top(), Some(&1));
    assert_eq!(s.len(), 1);
}

#[test]
fn test_empty_stack_reads_none() {
    let mut s = StaticStack::<i32, 1>::new();
    assert!(s.is_empty());
    assert_eq!(s.top(), None);
    assert_eq!(s.pop(), None);
}

#[test]
fn test_push_when_full_fails_and_preserves_state() {
    let mut s = StaticStack::<i32, 2>::from_slice(&[1, 2]).unwrap();
    let before = s;
    assert_eq!(s.push(3), Err(CapacityError { capacity: 2 }));
    assert_eq!(s, before);
    assert_eq!(s.top(), Some(&2));
}

#[test]
fn test_zero_capacity_always_fails() {
    let mut s = StaticStack::<u8, 0>::new();
    assert_eq!(s.push(1), Err(CapacityError { capacity: 0 }));
    assert!(s.is_empty());
}

#[test]
fn test_equality_bottom_to_top() {
    let mut a = StaticStack::<i32, 4>::new();
    a.push(1).unwrap();
    a.push(9).unwrap();
    a.pop();
    a.push(2).unwrap();

    let b = StaticStack::<i32, 4>::from_slice(&[1, 2]).unwrap();
    let c = StaticStack::<i32, 4>::from_slice(&[2, 1]).unwrap();

    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_ne!(b, c);
}

#[test]
fn test_iter_bottom_to_top() {
    let s = StaticStack::<i32, 3>::from_slice(&[3, 1, 2]).unwrap();
    assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
}

#[test]
fn test_const_evaluation() {
    const S: StaticStack<usize, 3> = {
        let mut s = StaticStack::new();
        let _ = s.push(1);
        let _ = s.push(2);
        let _ = s.push(3);
        let _ = s.push(4);
        s
    };
    const LEN: usize = S.len();

    assert_eq!(LEN, 3);
    assert_eq!(S.top(), Some(&3));
}
