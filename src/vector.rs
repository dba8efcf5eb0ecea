//! #   The Vector.
//!
//! The `Vector` is a growable contiguous array, the equivalent of `Vec`, with faillible allocation and a pluggable
//! allocator.
//!
//! ##  Under the covers.
//!
//! Under the covers the `Vector` is a single buffer of `capacity` slots, of which the first `len` are initialized.
//!
//! Whenever an element is added to a full `Vector`, the buffer is reallocated with twice the capacity (or 1, if it
//! was empty), so that appending is amortized O(1).
//!
//! #   Example: basic
//!
//! General usage of `Vector` involve pushing and popping elements at the back, and accessing elements by index.
//!
//! The faillible equivalent exist too: `try_push` and `try_insert` will return a `Result` indicating whether the
//! operation succeeded, and the cause of its failure if it did not.
//!
//! ```
//! use arraykit::failure::Failure;
//! use arraykit::vector::Vector;
//!
//! let mut vec: Vector<_> = Vector::new();
//! vec.push(1);
//! vec.push(2);
//!
//! assert_eq!(2, vec.len());
//! assert_eq!(1, vec[0]);
//!
//! assert_eq!(Ok(2), vec.pop());
//! assert_eq!(Ok(1), vec.pop());
//! assert_eq!(Err(Failure::Empty), vec.pop());
//! ```
//!
//! #   Example: positional edits
//!
//! ```
//! use arraykit::vector::Vector;
//!
//! let mut vec: Vector<_> = Vector::from_slice(&[0, 1, 2, 3, 4]);
//!
//! vec.insert(2, 42);
//! assert_eq!(&[0, 1, 42, 2, 3, 4], vec.as_slice());
//!
//! assert_eq!(Ok(42), vec.erase(2));
//! assert_eq!(&[0, 1, 2, 3, 4], vec.as_slice());
//! ```
//!
//! #   Example: managing capacity
//!
//! -   The `reserve` and `try_reserve` calls allow pre-allocating capacity in advance.
//! -   The `shrink_to_fit` calls allows de-allocating excess capacity.
//! -   The `clear` call drops all elements, but retains the capacity.
//!
//! ```
//! use arraykit::vector::Vector;
//!
//! let mut vec: Vector<i32> = Vector::new();
//! assert_eq!(0, vec.capacity());
//!
//! vec.reserve(5);
//! assert_eq!(5, vec.capacity());
//!
//! vec.extend([1, 2, 3].iter().copied());
//!
//! vec.shrink_to_fit();
//! assert_eq!(3, vec.capacity());
//!
//! vec.clear();
//! assert_eq!(3, vec.capacity());
//!
//! vec.shrink_to_fit();
//! assert_eq!(0, vec.capacity());
//! ```
//!
//! #   Invalidation
//!
//! Any reallocation moves the elements, hence references obtained through `get`, `as_slice` or `iter` cannot be
//! retained across a mutating call; the borrow checker enforces this.

mod vector;

pub use self::vector::Vector;

use super::allocator;
use super::capacity;
use super::failure;
use super::raw;
use super::root;
