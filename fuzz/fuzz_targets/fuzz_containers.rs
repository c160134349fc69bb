//! Fuzz target for the bounded containers.
//!
//! Replays an arbitrary push/pop script on every bounded container and its
//! std counterpart, looking for:
//! - Index wraparound bugs in the ring buffer
//! - Heap order violations after sift-up/sift-down
//! - Pushes past capacity that mutate the container
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_containers
//! ```

#![no_main]

use std::collections::{BinaryHeap, VecDeque};

use arbitrary::Arbitrary;
use graphwalk_core::{StaticPriorityQueue, StaticQueue, StaticStack};
use libfuzzer_sys::fuzz_target;

const CAPACITY: usize = 16;

#[derive(Arbitrary, Debug, Clone, Copy)]
enum Op {
    Push(i16),
    Pop,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut queue = StaticQueue::<i16, CAPACITY>::new();
    let mut stack = StaticStack::<i16, CAPACITY>::new();
    let mut heap = StaticPriorityQueue::<i16, CAPACITY>::new();
    let mut queue_model = VecDeque::new();
    let mut stack_model = Vec::new();
    let mut heap_model = BinaryHeap::new();

    for op in ops {
        match op {
            Op::Push(x) if queue_model.len() == CAPACITY => {
                let (q, s, h) = (queue, stack, heap);
                assert!(queue.push(x).is_err());
                assert!(stack.push(x).is_err());
                assert!(heap.push(x).is_err());
                assert_eq!(queue, q);
                assert_eq!(stack, s);
                assert_eq!(heap, h);
            }
            Op::Push(x) => {
                queue.push(x).unwrap();
                stack.push(x).unwrap();
                heap.push(x).unwrap();
                queue_model.push_back(x);
                stack_model.push(x);
                heap_model.push(x);
            }
            Op::Pop => {
                assert_eq!(queue.pop(), queue_model.pop_front());
                assert_eq!(stack.pop(), stack_model.pop());
                assert_eq!(heap.pop(), heap_model.pop());
            }
        }
        assert_eq!(queue.front(), queue_model.front());
        assert_eq!(stack.top(), stack_model.last());
        assert_eq!(heap.top(), heap_model.peek());
    }
});
