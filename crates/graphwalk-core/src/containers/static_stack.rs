//! Fixed-capacity LIFO stack.

use std::fmt;

use crate::error::CapacityError;

/// A LIFO stack holding at most `N` elements, usable in `const` contexts.
///
/// Backed by a flat array plus a single occupancy counter.
#[derive(Clone, Copy)]
pub struct StaticStack<T, const N: usize> {
    slots: [Option<T>; N],
    len: usize,
}

impl<T: Copy, const N: usize> StaticStack<T, N> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; N],
            len: 0,
        }
    }

    /// Creates a stack holding `items`, the last item on top.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `items` does not fit.
    pub const fn from_slice(items: &[T]) -> Result<Self, CapacityError> {
        let mut stack = Self::new();
        let mut i = 0;
        while i < items.len() {
            if let Err(e) = stack.push(items[i]) {
                return Err(e);
            }
            i += 1;
        }
        Ok(stack)
    }

    /// Pushes `value` on top.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] when the stack is full or `N == 0`; the
    /// stack is left untouched.
    pub const fn push(&mut self, value: T) -> Result<(), CapacityError> {
        if self.len == N {
            return Err(CapacityError { capacity: N });
        }
        self.slots[self.len] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the top element, or `None` if empty.
    pub const fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let value = self.slots[self.len];
        self.slots[self.len] = None;
        value
    }
}

impl<T, const N: usize> StaticStack<T, N> {
    /// Top element, if any.
    #[must_use]
    pub const fn top(&self) -> Option<&T> {
        if self.len == 0 {
            None
        } else {
            self.slots[self.len - 1].as_ref()
        }
    }

    /// Returns true if the stack holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements on the stack.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Fixed capacity `N`.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Iterates from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &T> + Clone + '_ {
        self.slots[..self.len].iter().filter_map(Option::as_ref)
    }
}

impl<T: Copy, const N: usize> Default for StaticStack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for StaticStack<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const N: usize> Eq for StaticStack<T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for StaticStack<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
