//! Binary-heap primitives shared by the static and heap-backed priority queues.
//!
//! The heap is stored implicitly in a slice: the children of slot `i` live at
//! `2i + 1` and `2i + 2`. The element comparing greatest is kept at slot 0.

use std::cmp::Ordering;

/// Moves the element at `index` towards the root until its parent is not smaller.
pub(crate) fn sift_up<E, F>(heap: &mut [E], mut index: usize, cmp: F)
where
    F: Fn(&E, &E) -> Ordering,
{
    while index > 0 {
        let parent = (index - 1) / 2;
        if cmp(&heap[parent], &heap[index]) == Ordering::Less {
            heap.swap(parent, index);
            index = parent;
        } else {
            break;
        }
    }
}

/// Moves the element at `index` towards the leaves until neither child is larger.
pub(crate) fn sift_down<E, F>(heap: &mut [E], mut index: usize, cmp: F)
where
    F: Fn(&E, &E) -> Ordering,
{
    let len = heap.len();
    loop {
        let left = 2 * index + 1;
        if left >= len {
            break;
        }
        let right = left + 1;
        let mut largest = left;
        if right < len && cmp(&heap[left], &heap[right]) == Ordering::Less {
            largest = right;
        }
        if cmp(&heap[index], &heap[largest]) == Ordering::Less {
            heap.swap(index, largest);
            index = largest;
        } else {
            break;
        }
    }
}

/// Rearranges an arbitrary slice into a valid heap (bottom-up heapify).
pub(crate) fn make_heap<E, F>(heap: &mut [E], cmp: F)
where
    F: Fn(&E, &E) -> Ordering,
{
    for index in (0..heap.len() / 2).rev() {
        sift_down(heap, index, &cmp);
    }
}

/// Returns true if `heap` satisfies the heap property under `cmp`.
#[cfg(test)]
pub(crate) fn is_heap<E, F>(heap: &[E], cmp: F) -> bool
where
    F: Fn(&E, &E) -> Ordering,
{
    (1..heap.len()).all(|i| cmp(&heap[(i - 1) / 2], &heap[i]) != Ordering::Less)
}

/// Order-independent multiset comparison without allocating.
///
/// Quadratic, which is fine for frontier-sized contents.
pub(crate) fn same_multiset<'a, T, I>(lhs: I, rhs: I) -> bool
where
    T: PartialEq + 'a,
    I: Iterator<Item = &'a T> + Clone,
{
    let count = |items: I, x: &T| items.filter(|y| *y == x).count();
    lhs.clone().count() == rhs.clone().count()
        && lhs
            .clone()
            .all(|x| count(lhs.clone(), x) == count(rhs.clone(), x))
}
