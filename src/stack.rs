//! #   The Stack.
//!
//! The `Stack` is a last-in first-out restriction of the `Vector`: elements are pushed and popped at the top, which
//! is the back of the underlying `Vector`.
//!
//! ```
//! use arraykit::failure::Failure;
//! use arraykit::stack::Stack;
//!
//! let mut stack: Stack<_> = Stack::new();
//! stack.push(1);
//! stack.push(2);
//!
//! assert_eq!(Ok(&2), stack.top());
//! assert_eq!(Ok(2), stack.pop());
//! assert_eq!(Ok(1), stack.pop());
//! assert_eq!(Err(Failure::Empty), stack.top());
//! ```

use super::root::fmt;

use super::allocator::Allocator;
use super::failure::{self, Failure, Result};
use super::vector::Vector;

#[cfg(feature = "with-std")]
use super::allocator::DefaultAllocator;

/// `Stack`
#[cfg(not(feature = "with-std"))]
pub struct Stack<T, A: Allocator> {
    storage: Vector<T, A>,
}

/// `Stack`
#[cfg(feature = "with-std")]
pub struct Stack<T, A: Allocator = DefaultAllocator> {
    storage: Vector<T, A>,
}

impl<T, A: Allocator + Default> Stack<T, A> {
    /// Creates a new, empty, instance.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::ZeroSizedElement` if `T` is zero-sized.
    pub fn try_new() -> Result<Self> {
        Vector::try_new().map(|storage| Self { storage })
    }

    /// Creates a new, empty, instance.
    ///
    /// Calling this method is equivalent to calling `try_new` and panicking on error.
    pub fn new() -> Self {
        Self::try_new().unwrap_or_else(failure::panic_from_failure)
    }
}

impl<T, A: Allocator> Stack<T, A> {
    /// Creates a new, empty, instance using `allocator`.
    pub fn try_new_in(allocator: A) -> Result<Self> {
        Vector::try_new_in(allocator).map(|storage| Self { storage })
    }

    /// Returns whether the instance contains any element, or not.
    pub fn is_empty(&self) -> bool { self.storage.is_empty() }

    /// Returns the number of elements contained in the instance.
    pub fn len(&self) -> usize { self.storage.len() }

    /// Returns the number of elements the instance can contain without reallocating.
    pub fn capacity(&self) -> usize { self.storage.capacity() }

    /// Pushes an element on top.
    ///
    /// #   Errors
    ///
    /// Returns an error if the instance cannot grow, in which case the instance is left unmodified.
    pub fn try_push(&mut self, value: T) -> Result<()> { self.storage.try_push(value) }

    /// Pushes an element on top, panicking on error.
    pub fn push(&mut self, value: T) { self.storage.push(value) }

    /// Removes the top element, and returns it.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::Empty` if the instance is empty.
    pub fn pop(&mut self) -> Result<T> { self.storage.pop() }

    /// Returns a reference to the top element.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::Empty` if the instance is empty.
    pub fn top(&self) -> Result<&T> {
        self.storage.as_slice().last().ok_or(Failure::Empty)
    }

    /// Clears the instance, retaining its capacity.
    pub fn clear(&mut self) { self.storage.clear() }
}

impl<T, A: Allocator + Default> Default for Stack<T, A> {
    fn default() -> Self { Self::new() }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Stack<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Stack").field(&self.storage.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {

use super::*;

use crate::utils::tester::*;

#[test]
fn stack_lifo() {
    let mut stack: Stack<_> = Stack::new();

    for i in 0..10 {
        stack.push(i);
        assert_eq!(Ok(&i), stack.top());
    }

    for i in (0..10).rev() {
        assert_eq!(Ok(i), stack.pop());
    }

    assert!(stack.is_empty());
    assert_eq!(Err(Failure::Empty), stack.pop());
    assert_eq!(16, stack.capacity());
}

#[test]
fn stack_push_out_of_memory() {
    let allocator = TestAllocator::with_budget(1);
    let mut stack = Stack::try_new_in(&allocator).unwrap();

    assert_eq!(Ok(()), stack.try_push(1));
    assert_eq!(Err(Failure::OutOfMemory), stack.try_push(2));

    assert_eq!(1, stack.len());
    assert_eq!(Ok(&1), stack.top());
}

#[test]
fn stack_clear() {
    let mut stack: Stack<_> = Stack::new();
    stack.push("a");
    stack.push("b");

    assert_eq!("Stack([\"a\", \"b\"])", format!("{:?}", stack));

    stack.clear();

    assert_eq!(0, stack.len());
    assert_eq!(2, stack.capacity());
}

}
