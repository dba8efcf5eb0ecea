//! #   The BinaryHeap.
//!
//! The `BinaryHeap` is a min-heap: `pop` always returns the smallest element, as per the comparator supplied at
//! construction.
//!
//! ##  Under the covers.
//!
//! The elements are stored in a `Vector`, encoding an implicit binary tree: the children of the element at index `i`
//! are at indexes `2 * i + 1` and `2 * i + 2`. The heap property guarantees that no element compares less than its
//! parent, hence the root, at index 0, is the smallest.
//!
//! -   `push` appends the element, then sifts it up towards the root: O(log n), plus amortized O(1) growth.
//! -   `pop` swaps the root with the last element, removes the latter, then sifts the new root down: O(log n).
//! -   `from_slice` and `from_vector` heapify the elements bottom-up: O(n).
//!
//! #   Example: min-heap.
//!
//! ```
//! use arraykit::heap::{BinaryHeap, Natural};
//!
//! let mut heap: BinaryHeap<_> = BinaryHeap::from_slice(&[8, 6, 7, 5, 3, 0, 9], Natural);
//! heap.push(4);
//!
//! let mut sorted = Vec::new();
//! while let Ok(element) = heap.pop() {
//!     sorted.push(element);
//! }
//!
//! assert_eq!(vec![0, 3, 4, 5, 6, 7, 8, 9], sorted);
//! ```
//!
//! #   Example: max-heap.
//!
//! A max-heap is obtained by inverting the comparator, either with `Reversed`, or with a custom closure.
//!
//! ```
//! use arraykit::heap::{BinaryHeap, Reversed};
//!
//! let mut heap: BinaryHeap<_, _> = BinaryHeap::new(Reversed);
//! heap.push(1);
//! heap.push(3);
//! heap.push(2);
//!
//! assert_eq!(Ok(&3), heap.peek());
//!
//! let mut heap: BinaryHeap<_, _> = BinaryHeap::new(|a: &(u32, char), b: &(u32, char)| b.0.cmp(&a.0));
//! heap.push((1, 'a'));
//! heap.push((3, 'c'));
//!
//! assert_eq!(Ok((3, 'c')), heap.pop());
//! ```

mod compare;
mod heap;

pub use self::compare::{Compare, Natural, Reversed};
pub use self::heap::BinaryHeap;

use super::allocator;
use super::failure;
use super::root;
use super::vector;
