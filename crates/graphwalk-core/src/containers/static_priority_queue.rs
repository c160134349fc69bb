//! Fixed-capacity priority queue backed by a binary heap.

use std::cmp::Ordering;
use std::fmt;

use super::compare::{Compare, NaturalOrder};
use super::heap;
use crate::error::CapacityError;

/// A priority queue holding at most `N` elements.
///
/// The heap lives in a flat array and is ordered by the injected comparator
/// `C`; the element comparing greatest sits on top. Construction and
/// inspection are `const fn`; `push` and `pop` call the comparator and are
/// not.
///
/// Two queues are equal when they hold the same multiset of elements, no
/// matter how the heap happens to be laid out internally.
#[derive(Clone, Copy)]
pub struct StaticPriorityQueue<T, const N: usize, C = NaturalOrder> {
    slots: [Option<T>; N],
    len: usize,
    compare: C,
}

impl<T: Copy, const N: usize> StaticPriorityQueue<T, N, NaturalOrder> {
    /// Creates an empty max-heap.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T: Copy, const N: usize, C> StaticPriorityQueue<T, N, C> {
    /// Creates an empty queue ordered by `compare`.
    #[must_use]
    pub const fn with_comparator(compare: C) -> Self {
        Self {
            slots: [None; N],
            len: 0,
            compare,
        }
    }
}

impl<T: Copy, const N: usize, C: Compare<T>> StaticPriorityQueue<T, N, C> {
    /// Builds a valid heap from `items` under `compare`.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `items` does not fit.
    pub fn from_slice_with(items: &[T], compare: C) -> Result<Self, CapacityError> {
        if items.len() > N {
            return Err(CapacityError { capacity: N });
        }
        let mut queue = Self::with_comparator(compare);
        for (slot, item) in queue.slots.iter_mut().zip(items) {
            *slot = Some(*item);
        }
        queue.len = items.len();
        let compare = &queue.compare;
        heap::make_heap(&mut queue.slots[..queue.len], |a, b| {
            by_slot(compare, a.as_ref(), b.as_ref())
        });
        Ok(queue)
    }

    /// Inserts `value` and restores the heap order.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] when the queue is full or `N == 0`; the
    /// queue is left untouched.
    pub fn push(&mut self, value: T) -> Result<(), CapacityError> {
        if self.len == N {
            return Err(CapacityError { capacity: N });
        }
        self.slots[self.len] = Some(value);
        self.len += 1;
        let compare = &self.compare;
        heap::sift_up(&mut self.slots[..self.len], self.len - 1, |a, b| {
            by_slot(compare, a.as_ref(), b.as_ref())
        });
        Ok(())
    }

    /// Removes and returns the top element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.slots.swap(0, self.len);
        let value = self.slots[self.len].take();
        let compare = &self.compare;
        heap::sift_down(&mut self.slots[..self.len], 0, |a, b| {
            by_slot(compare, a.as_ref(), b.as_ref())
        });
        value
    }
}

impl<T: Copy + Ord, const N: usize> StaticPriorityQueue<T, N, NaturalOrder> {
    /// Builds a max-heap from `items`.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `items` does not fit.
    pub fn from_slice(items: &[T]) -> Result<Self, CapacityError> {
        Self::from_slice_with(items, NaturalOrder)
    }
}

impl<T, const N: usize, C> StaticPriorityQueue<T, N, C> {
    /// Top (greatest) element, if any.
    #[must_use]
    pub const fn top(&self) -> Option<&T> {
        if self.len == 0 {
            None
        } else {
            self.slots[0].as_ref()
        }
    }

    /// Returns true if the queue holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of queued elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Fixed capacity `N`.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// The comparator ordering this queue.
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.compare
    }

    /// Iterates over the contents in heap-layout order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + Clone + '_ {
        self.slots[..self.len].iter().filter_map(Option::as_ref)
    }
}

/// Vacant slots never occur inside the live heap; treat them as equal.
fn by_slot<T, C: Compare<T>>(compare: &C, a: Option<&T>, b: Option<&T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare.compare(a, b),
        _ => Ordering::Equal,
    }
}

impl<T: Copy, const N: usize, C: Default> Default for StaticPriorityQueue<T, N, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: PartialEq, const N: usize, C> PartialEq for StaticPriorityQueue<T, N, C> {
    fn eq(&self, other: &Self) -> bool {
        heap::same_multiset(self.iter(), other.iter())
    }
}

impl<T: Eq, const N: usize, C> Eq for StaticPriorityQueue<T, N, C> {}

impl<T: fmt::Debug, const N: usize, C> fmt::Debug for StaticPriorityQueue<T, N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
