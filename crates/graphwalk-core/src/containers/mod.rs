//! Bounded and heap-backed containers used as traversal frontiers.
//!
//! The `Static*` containers hold at most `N` elements in a fixed array, never
//! allocate, and fail with [`CapacityError`](crate::error::CapacityError)
//! instead of growing. `StaticQueue` and `StaticStack` can be driven entirely
//! in `const` contexts.
//!
//! | Container               | Order      | Heap-backed analogue |
//! |-------------------------|------------|----------------------|
//! | [`StaticQueue`]         | FIFO       | `VecDeque`           |
//! | [`StaticStack`]         | LIFO       | `Vec`                |
//! | [`StaticPriorityQueue`] | comparator | [`PriorityQueue`]    |

mod compare;
mod heap;
mod priority_queue;
mod static_priority_queue;
mod static_queue;
mod static_stack;

#[cfg(test)]
mod static_queue_tests;
#[cfg(test)]
mod static_stack_tests;

pub use compare::{Compare, NaturalOrder, Reversed};
pub use priority_queue::PriorityQueue;
pub use static_priority_queue::StaticPriorityQueue;
pub use static_queue::StaticQueue;
pub use static_stack::StaticStack;
