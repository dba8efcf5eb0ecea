//! #   The Queue.
//!
//! The `Queue` is a first-in first-out restriction of the `Deque`: elements are enqueued at the back, and dequeued
//! from the front. It shares the ring buffer mechanics, and growth policy, of the `Deque`.
//!
//! ```
//! use arraykit::failure::Failure;
//! use arraykit::queue::Queue;
//!
//! let mut queue: Queue<_> = Queue::new();
//! queue.enqueue("a");
//! queue.enqueue("b");
//!
//! assert_eq!(Ok(&"a"), queue.peek());
//! assert_eq!(Ok("a"), queue.dequeue());
//! assert_eq!(Ok("b"), queue.dequeue());
//! assert_eq!(Err(Failure::Empty), queue.dequeue());
//! ```

use super::root::fmt;

use super::allocator::Allocator;
use super::deque::Deque;
use super::failure::{self, Result};

#[cfg(feature = "with-std")]
use super::allocator::DefaultAllocator;

/// `Queue`
#[cfg(not(feature = "with-std"))]
pub struct Queue<T, A: Allocator> {
    deque: Deque<T, A>,
}

/// `Queue`
#[cfg(feature = "with-std")]
pub struct Queue<T, A: Allocator = DefaultAllocator> {
    deque: Deque<T, A>,
}

impl<T, A: Allocator + Default> Queue<T, A> {
    /// Creates a new, empty, instance.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::ZeroSizedElement` if `T` is zero-sized.
    pub fn try_new() -> Result<Self> {
        Deque::try_new().map(|deque| Self { deque })
    }

    /// Creates a new, empty, instance.
    ///
    /// Calling this method is equivalent to calling `try_new` and panicking on error.
    pub fn new() -> Self {
        Self::try_new().unwrap_or_else(failure::panic_from_failure)
    }

    /// Creates a new, empty, instance with a capacity of exactly `capacity`.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        Deque::try_with_capacity(capacity).map(|deque| Self { deque })
    }

    /// Creates a new, empty, instance with a capacity of exactly `capacity`.
    ///
    /// Calling this method is equivalent to calling `try_with_capacity` and panicking on error.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(failure::panic_from_failure)
    }
}

impl<T, A: Allocator> Queue<T, A> {
    /// Creates a new, empty, instance using `allocator`, with a capacity of exactly `capacity`.
    pub fn try_with_capacity_in(capacity: usize, allocator: A) -> Result<Self> {
        Deque::try_with_capacity_in(capacity, allocator).map(|deque| Self { deque })
    }

    /// Returns whether the instance contains any element, or not.
    pub fn is_empty(&self) -> bool { self.deque.is_empty() }

    /// Returns the number of elements contained in the instance.
    pub fn len(&self) -> usize { self.deque.len() }

    /// Returns the number of elements the instance can contain without reallocating.
    pub fn capacity(&self) -> usize { self.deque.capacity() }

    /// Reserves capacity for at least `new_capacity` elements.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<()> { self.deque.try_reserve(new_capacity) }

    /// Reserves capacity for at least `new_capacity` elements, panicking on error.
    pub fn reserve(&mut self, new_capacity: usize) { self.deque.reserve(new_capacity) }

    /// Appends an element to the back.
    ///
    /// #   Errors
    ///
    /// Returns an error if the instance is full and cannot grow, in which case the instance is left unmodified.
    pub fn try_enqueue(&mut self, value: T) -> Result<()> { self.deque.try_push_back(value) }

    /// Appends an element to the back, panicking on error.
    pub fn enqueue(&mut self, value: T) { self.deque.push_back(value) }

    /// Removes the front element, and returns it.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::Empty` if the instance is empty.
    pub fn dequeue(&mut self) -> Result<T> { self.deque.pop_front() }

    /// Returns a reference to the front element, that is the next to be dequeued.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::Empty` if the instance is empty.
    pub fn peek(&self) -> Result<&T> { self.deque.front() }

    /// Clears the instance, retaining its capacity.
    pub fn clear(&mut self) { self.deque.clear() }
}

impl<T, A: Allocator + Default> Default for Queue<T, A> {
    fn default() -> Self { Self::new() }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Queue<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Queue").field(&self.deque).finish()
    }
}
