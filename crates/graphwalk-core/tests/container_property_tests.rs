//! Property tests comparing the bounded containers against std collections.
//!
//! Each test replays a random push/pop script on a bounded container and on
//! its unbounded std counterpart, with pushes past capacity expected to fail
//! without touching the container.

use std::collections::{BinaryHeap, VecDeque};

use graphwalk_core::{CapacityError, PriorityQueue, StaticPriorityQueue, StaticQueue, StaticStack};
use proptest::{
    collection::vec,
    prelude::{any, prop_assert, prop_assert_eq, prop_oneof, Strategy},
    proptest,
    test_runner::Config as ProptestConfig,
};

const CAPACITY: usize = 8;

#[derive(Debug, Clone, Copy)]
enum Op {
    Push(i32),
    Pop,
}

fn script() -> impl Strategy<Value = Vec<Op>> {
    vec(
        prop_oneof![
            3 => any::<i32>().prop_map(Op::Push),
            2 => proptest::strategy::Just(Op::Pop),
        ],
        0..200,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn queue_matches_vecdeque(ops in script()) {
        let mut bounded = StaticQueue::<i32, CAPACITY>::new();
        let mut model = VecDeque::new();
        let (mut pushes, mut pops) = (0usize, 0usize);

        for op in ops {
            match op {
                Op::Push(x) if model.len() == CAPACITY => {
                    let before = bounded;
                    prop_assert_eq!(bounded.push(x), Err(CapacityError { capacity: CAPACITY }));
                    prop_assert_eq!(bounded, before);
                }
                Op::Push(x) => {
                    bounded.push(x).unwrap();
                    model.push_back(x);
                    pushes += 1;
                }
                Op::Pop => {
                    let expected = model.pop_front();
                    if expected.is_some() {
                        pops += 1;
                    }
                    prop_assert_eq!(bounded.pop(), expected);
                }
            }
            prop_assert_eq!(bounded.len(), pushes - pops);
            prop_assert_eq!(bounded.is_empty(), bounded.len() == 0);
            prop_assert_eq!(bounded.front(), model.front());
            prop_assert_eq!(bounded.back(), model.back());
        }
        prop_assert!(bounded.iter().eq(model.iter()));
    }

    #[test]
    fn stack_matches_vec(ops in script()) {
        let mut bounded = StaticStack::<i32, CAPACITY>::new();
        let mut model = Vec::new();

        for op in ops {
            match op {
                Op::Push(x) if model.len() == CAPACITY => {
                    let before = bounded;
                    prop_assert!(bounded.push(x).is_err());
                    prop_assert_eq!(bounded, before);
                }
                Op::Push(x) => {
                    bounded.push(x).unwrap();
                    model.push(x);
                }
                Op::Pop => {
                    prop_assert_eq!(bounded.pop(), model.pop());
                }
            }
            prop_assert_eq!(bounded.len(), model.len());
            prop_assert_eq!(bounded.top(), model.last());
        }
    }

    #[test]
    fn priority_queues_match_binary_heap(ops in script()) {
        let mut bounded = StaticPriorityQueue::<i32, CAPACITY>::new();
        let mut dynamic = PriorityQueue::new();
        let mut model = BinaryHeap::new();

        for op in ops {
            match op {
                Op::Push(x) if model.len() == CAPACITY => {
                    let before = bounded;
                    prop_assert!(bounded.push(x).is_err());
                    prop_assert_eq!(bounded, before);
                }
                Op::Push(x) => {
                    bounded.push(x).unwrap();
                    dynamic.push(x);
                    model.push(x);
                }
                Op::Pop => {
                    let expected = model.pop();
                    prop_assert_eq!(bounded.pop(), expected);
                    prop_assert_eq!(dynamic.pop(), expected);
                }
            }
            prop_assert_eq!(bounded.len(), model.len());
            prop_assert_eq!(bounded.top(), model.peek());
            prop_assert_eq!(dynamic.top(), model.peek());
        }
    }

    #[test]
    fn queue_equality_ignores_rotation(items in vec(any::<u16>(), 0..=CAPACITY), shift in 0..CAPACITY) {
        let fresh = StaticQueue::<u16, CAPACITY>::from_slice(&items).unwrap();

        let mut rotated = StaticQueue::<u16, CAPACITY>::new();
        for _ in 0..shift {
            rotated.push(0).unwrap();
            rotated.pop();
        }
        for &x in &items {
            rotated.push(x).unwrap();
        }

        prop_assert_eq!(&rotated, &fresh);
        prop_assert_eq!(&fresh, &rotated);
    }

    #[test]
    fn priority_equality_ignores_insertion_order(mut items in vec(any::<i8>(), 0..=CAPACITY)) {
        let forward = StaticPriorityQueue::<i8, CAPACITY>::from_slice(&items).unwrap();
        items.reverse();
        let mut pushed = StaticPriorityQueue::<i8, CAPACITY>::new();
        for &x in &items {
            pushed.push(x).unwrap();
        }

        prop_assert_eq!(&forward, &pushed);
        prop_assert_eq!(&pushed, &forward);
    }
}
