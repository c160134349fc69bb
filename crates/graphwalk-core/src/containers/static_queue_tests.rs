//! Tests for StaticQueue.

use super::StaticQueue;
use crate::error::CapacityError;

#[test]
fn test_fifo_order() {
    let mut q = StaticQueue::<i32, 2>::new();
    q.push(1).unwrap();
    q.push(2).unwrap();
    assert_eq!(q.pop(), Some(1));
    assert_eq!(q.front(), Some(&2));
    assert_eq!(q.back(), Some(&2));
    assert_eq!(q.len(), 1);
}

#[test]
fn test_empty_queue_reads_none() {
    let mut q = StaticQueue::<i32, 3>::new();
    assert!(q.is_empty());
    assert_eq!(q.len(), 0);
    assert_eq!(q.front(), None);
    assert_eq!(q.back(), None);
    assert_eq!(q.pop(), None);
    assert!(q.is_empty());
}

#[test]
fn test_push_when_full_fails_and_preserves_state() {
    let mut q = StaticQueue::<i32, 2>::new();
    q.push(1).unwrap();
    q.push(2).unwrap();
    let before = q;

    let err = q.push(3).unwrap_err();
    assert_eq!(err, CapacityError { capacity: 2 });
    assert_eq!(q, before);
    assert_eq!(q.front(), Some(&1));
    assert_eq!(q.back(), Some(&2));
}

#[test]
fn test_zero_capacity_always_fails() {
    let mut q = StaticQueue::<i32, 0>::new();
    assert_eq!(q.push(7), Err(CapacityError { capacity: 0 }));
    assert!(q.is_empty());
    assert_eq!(q.pop(), None);
}

#[test]
fn test_wraps_around_the_ring() {
    let mut q = StaticQueue::<i32, 3>::new();
    for round in 0..10 {
        q.push(round).unwrap();
        q.push(round + 100).unwrap();
        assert_eq!(q.pop(), Some(round));
        assert_eq!(q.pop(), Some(round + 100));
        assert!(q.is_empty());
    }
}

#[test]
fn test_len_after_wrap() {
    let mut q = StaticQueue::<i32, 3>::new();
    q.push(1).unwrap();
    q.push(2).unwrap();
    q.push(3).unwrap();
    q.pop();
    q.pop();
    q.push(4).unwrap();
    q.push(5).unwrap();
    assert_eq!(q.len(), 3);
    assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
}

#[test]
fn test_equality_ignores_rotation() {
    let mut rotated = StaticQueue::<i32, 3>::new();
    rotated.push(0).unwrap();
    rotated.push(0).unwrap();
    rotated.pop();
    rotated.pop();
    rotated.push(1).unwrap();
    rotated.push(2).unwrap();

    let fresh = StaticQueue::<i32, 3>::from_slice(&[1, 2]).unwrap();

    assert_eq!(rotated, fresh);
    assert_eq!(fresh, rotated);
    assert_eq!(rotated, rotated);
}

#[test]
fn test_inequality_on_order_and_length() {
    let a = StaticQueue::<i32, 3>::from_slice(&[1, 2]).unwrap();
    let b = StaticQueue::<i32, 3>::from_slice(&[2, 1]).unwrap();
    let c = StaticQueue::<i32, 3>::from_slice(&[1, 2, 3]).unwrap();
    assert_ne!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_from_slice_overflow() {
    let result = StaticQueue::<i32, 2>::from_slice(&[1, 2, 3]);
    assert_eq!(result.unwrap_err(), CapacityError { capacity: 2 });
}

#[test]
fn test_const_evaluation() {
    const Q: StaticQueue<u32, 4> = {
        let mut q = StaticQueue::new();
        let _ = q.push(10);
        let _ = q.push(20);
        let _ = q.push(30);
        let _ = q.pop();
        q
    };
    const LEN: usize = Q.len();

    assert_eq!(LEN, 2);
    assert_eq!(Q.front(), Some(&20));
    assert_eq!(Q.capacity(), 4);
}

#[test]
fn test_debug_lists_front_to_back() {
    let q = StaticQueue::<i32, 3>::from_slice(&[4, 5]).unwrap();
    assert_eq!(format!("{q:?}"), "[4, 5]");
}
