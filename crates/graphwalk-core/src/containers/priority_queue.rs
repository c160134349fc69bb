//! Heap-backed priority queue with an injectable comparator.
//!
//! `std::collections::BinaryHeap` orders by `Ord` on the element itself,
//! which cannot express comparators that borrow external state (such as a
//! graph's node weights). This queue shares the heap primitives of
//! [`StaticPriorityQueue`](super::StaticPriorityQueue) instead.

use std::fmt;

use super::compare::{Compare, NaturalOrder};
use super::heap;

/// Growable priority queue ordered by `C`; the greatest element is on top.
#[derive(Clone)]
pub struct PriorityQueue<T, C = NaturalOrder> {
    items: Vec<T>,
    compare: C,
}

impl<T: Ord> PriorityQueue<T, NaturalOrder> {
    /// Creates an empty max-heap.
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C> PriorityQueue<T, C> {
    /// Creates an empty queue ordered by `compare`.
    #[must_use]
    pub fn with_comparator(compare: C) -> Self {
        Self {
            items: Vec::new(),
            compare,
        }
    }

    /// Creates an empty queue with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, compare: C) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            compare,
        }
    }

    /// Top (greatest) element, if any.
    #[must_use]
    pub fn top(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns true if the queue holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of queued elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates over the contents in heap-layout order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T, C: Compare<T>> PriorityQueue<T, C> {
    /// Heapifies `items` under `compare`.
    #[must_use]
    pub fn from_vec_with(mut items: Vec<T>, compare: C) -> Self {
        heap::make_heap(&mut items, |a, b| compare.compare(a, b));
        Self { items, compare }
    }

    /// Inserts `value` and restores the heap order.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
        let last = self.items.len() - 1;
        let compare = &self.compare;
        heap::sift_up(&mut self.items, last, |a, b| compare.compare(a, b));
    }

    /// Removes and returns the top element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        let value = self.items.pop()?;
        if self.items.is_empty() {
            return Some(value);
        }
        let top = std::mem::replace(&mut self.items[0], value);
        let compare = &self.compare;
        heap::sift_down(&mut self.items, 0, |a, b| compare.compare(a, b));
        Some(top)
    }
}

impl<T: Ord> From<Vec<T>> for PriorityQueue<T, NaturalOrder> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec_with(items, NaturalOrder)
    }
}

impl<T: Ord> Default for PriorityQueue<T, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq, C> PartialEq for PriorityQueue<T, C> {
    fn eq(&self, other: &Self) -> bool {
        heap::same_multiset(self.iter(), other.iter())
    }
}

impl<T: Eq, C> Eq for PriorityQueue<T, C> {}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
