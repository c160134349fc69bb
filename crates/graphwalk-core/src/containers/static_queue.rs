//! Fixed-capacity FIFO queue backed by a ring buffer.

use std::fmt;

use crate::error::CapacityError;

/// A FIFO queue holding at most `N` elements, usable in `const` contexts.
///
/// Elements live in a fixed array used as a ring buffer. The `front` and
/// `back` cursors both equal `N` while the queue is empty; otherwise they
/// index the oldest and newest element and wrap modulo `N`.
///
/// # Example
///
/// ```rust
/// use graphwalk_core::containers::StaticQueue;
///
/// const QUEUE: StaticQueue<u8, 2> = {
///     let mut q = StaticQueue::new();
///     let _ = q.push(1);
///     let _ = q.push(2);
///     let _ = q.pop();
///     q
/// };
///
/// assert_eq!(QUEUE.front(), Some(&2));
/// assert_eq!(QUEUE.len(), 1);
/// ```
#[derive(Clone, Copy)]
pub struct StaticQueue<T, const N: usize> {
    slots: [Option<T>; N],
    front: usize,
    back: usize,
}

impl<T: Copy, const N: usize> StaticQueue<T, N> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; N],
            front: N,
            back: N,
        }
    }

    /// Creates a queue holding `items`, the first item at the front.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `items` does not fit.
    pub const fn from_slice(items: &[T]) -> Result<Self, CapacityError> {
        let mut queue = Self::new();
        let mut i = 0;
        while i < items.len() {
            if let Err(e) = queue.push(items[i]) {
                return Err(e);
            }
            i += 1;
        }
        Ok(queue)
    }

    /// Appends `value` at the back.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] when the queue is full or `N == 0`; the
    /// queue is left untouched.
    pub const fn push(&mut self, value: T) -> Result<(), CapacityError> {
        if N == 0 {
            return Err(CapacityError { capacity: N });
        }
        if self.front == N {
            self.front = 0;
            self.back = 0;
        } else {
            let next = (self.back + 1) % N;
            if next == self.front {
                return Err(CapacityError { capacity: N });
            }
            self.back = next;
        }
        self.slots[self.back] = Some(value);
        Ok(())
    }

    /// Removes and returns the oldest element, or `None` if empty.
    pub const fn pop(&mut self) -> Option<T> {
        if self.front == N {
            return None;
        }
        let value = self.slots[self.front];
        self.slots[self.front] = None;
        if self.front == self.back {
            self.front = N;
            self.back = N;
        } else {
            self.front = (self.front + 1) % N;
        }
        value
    }
}

impl<T, const N: usize> StaticQueue<T, N> {
    /// Oldest element, if any.
    #[must_use]
    pub const fn front(&self) -> Option<&T> {
        if self.front == N {
            None
        } else {
            self.slots[self.front].as_ref()
        }
    }

    /// Newest element, if any.
    #[must_use]
    pub const fn back(&self) -> Option<&T> {
        if self.back == N {
            None
        } else {
            self.slots[self.back].as_ref()
        }
    }

    /// Returns true if the queue holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.front == N
    }

    /// Number of elements currently queued.
    #[must_use]
    pub const fn len(&self) -> usize {
        if self.front == N {
            0
        } else if self.back >= self.front {
            self.back - self.front + 1
        } else {
            N - self.front + self.back + 1
        }
    }

    /// Fixed capacity `N`.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Iterates from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + Clone + '_ {
        (0..self.len()).filter_map(move |k| self.slots[(self.front + k) % N].as_ref())
    }
}

impl<T: Copy, const N: usize> Default for StaticQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for StaticQueue<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const N: usize> Eq for StaticQueue<T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for StaticQueue<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
