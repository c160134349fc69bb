//! Injectable orderings for the priority queues.

use std::cmp::Ordering;

/// Total order used by the priority queues.
///
/// The element that compares greatest sits on top of the heap.
pub trait Compare<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Natural `Ord` ordering: greatest element first (a max-heap).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Compare<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts another ordering, turning a max-heap into a min-heap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
