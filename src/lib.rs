#![cfg_attr(not(feature = "with-std"), no_std)]
//  Lints
#![allow(clippy::module_inception)]

//! #   The ArrayKit Library
//!
//! A collection of array-backed containers, generic over their elements and their allocator.
//! -   The `Vector`: a growable contiguous array.
//! -   The `Deque`: a growable ring buffer, with O(1) push and pop at both ends.
//! -   The `Queue` and `Stack`: FIFO and LIFO restrictions of the above.
//! -   The `BinaryHeap`: a min-heap over a `Vector`, ordered by a caller-supplied comparator.
//!
//! All containers grow by doubling, support faillible allocations, and never partially mutate on failure.

pub mod allocator;
pub mod deque;
pub mod failure;
pub mod heap;
pub mod queue;
pub mod stack;
pub mod vector;

mod utils;

use self::utils::capacity;
use self::utils::raw;
use self::utils::root;
