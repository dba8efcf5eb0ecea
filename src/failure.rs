//! The Failure and Result types of this library.
//!
//! The collections in this library support faillible allocations. Any method which attempts to allocate memory, or add
//! an element, may fail. The cause of the error is then represented as a `Failure`.
//!
//! All faillible methods which allocate come in two versions:
//!
//! -   A faillible `try_xxx` version, which returns a `Result` with `Failure` as the error type.
//! -   A convenience `xxx` version, which invokes the `try_xxx` version and panics in case of error.
//!
//! Methods which cannot allocate, but may still fail because of an invalid index or an empty collection, only come in
//! the faillible version.
//!
//! A failed operation never modifies the collection it was invoked on.

use thiserror::Error;

use super::root::result;

/// Universal Failure type of this library.
#[derive(Clone, Copy, Debug, Error, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Failure {
    /// The element type is zero-sized, which is not supported.
    #[error("zero-sized elements are not supported")]
    ZeroSizedElement,
    /// The number of bytes to allocate cannot be calculated due to overflowing.
    #[error("the number of bytes to allocate overflows")]
    BytesOverflow,
    /// The number of elements cannot be calculated due to overflowing.
    #[error("the number of elements overflows")]
    ElementsOverflow,
    /// The allocator could not allocate memory.
    #[error("the allocator could not allocate memory")]
    OutOfMemory,
    /// The index is outside of the valid range.
    #[error("index {index} is out of bounds for length {length}")]
    OutOfBounds {
        /// The index requested.
        index: usize,
        /// The length of the collection at the time of the request.
        length: usize,
    },
    /// The collection contains no element.
    #[error("the collection is empty")]
    Empty,
}

impl Failure {
    /// Returns the broad category of the failure.
    ///
    /// #   Example
    ///
    /// ```
    /// use arraykit::failure::{Failure, FailureKind};
    ///
    /// assert_eq!(FailureKind::Allocation, Failure::OutOfMemory.kind());
    /// assert_eq!(FailureKind::Index, Failure::OutOfBounds { index: 3, length: 2 }.kind());
    /// ```
    pub fn kind(&self) -> FailureKind {
        match self {
            Failure::ZeroSizedElement => FailureKind::Argument,
            Failure::BytesOverflow | Failure::ElementsOverflow | Failure::OutOfMemory => FailureKind::Allocation,
            Failure::OutOfBounds { .. } => FailureKind::Index,
            Failure::Empty => FailureKind::Empty,
        }
    }
}

/// Broad category of a `Failure`.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum FailureKind {
    /// Invalid construction parameters.
    Argument,
    /// The backing storage could not be grown.
    Allocation,
    /// The index is outside of the valid range.
    Index,
    /// A removal or peek was attempted on an empty collection.
    Empty,
}

/// Universal Result type of this library.
pub type Result<T> = result::Result<T, Failure>;

//  Returns an OutOfBounds failure if `index` is not strictly less than `length`.
pub(crate) fn check_index(index: usize, length: usize) -> Result<()> {
    if index < length {
        Ok(())
    } else {
        Err(Failure::OutOfBounds { index, length })
    }
}

#[cold]
#[inline(never)]
pub(crate) fn panic_from_failure<T>(failure: Failure) -> T {
    panic!("{}", failure);
}
