//! #   The Deque.
//!
//! The `Deque` is a double-ended queue, implemented as a growable ring buffer.
//!
//! ##  Under the covers.
//!
//! The elements live in a single buffer of `capacity` slots. The logical front is at index `head`, and the logical
//! back is just before index `tail`, both wrapping around modulo `capacity`. Pushing or popping at either end only
//! moves `head` or `tail`, hence is O(1), without shifting any element.
//!
//! Whenever the buffer is full, it is reallocated with twice the capacity, and the elements are laid out anew from
//! index 0 in logical order. Whenever the `Deque` becomes empty, `head` and `tail` are reset to 0.
//!
//! #   Example
//!
//! ```
//! use arraykit::deque::Deque;
//!
//! let mut deque: Deque<_> = Deque::with_capacity(3);
//! deque.extend([0, 1, 2].iter().copied());
//!
//! assert_eq!(Ok(0), deque.pop_front());
//! assert_eq!(Ok(1), deque.pop_front());
//!
//! deque.extend([100, 101, 102].iter().copied());
//!
//! let elements: Vec<_> = deque.iter().copied().collect();
//! assert_eq!(vec![2, 100, 101, 102], elements);
//!
//! deque.push_front(1);
//! assert_eq!(Ok(&1), deque.front());
//! assert_eq!(Ok(&102), deque.back());
//! ```

mod deque;

pub use self::deque::{Deque, Iter};

use super::allocator;
use super::capacity;
use super::failure;
use super::raw;
use super::root;
