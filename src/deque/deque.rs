//! The Deque

use super::root::{cmp, fmt, iter, mem, ptr, slice};

use super::allocator::Allocator;
use super::capacity;
use super::failure::{self, Failure, Result};
use super::raw::RawBuffer;

#[cfg(feature = "with-std")]
use super::allocator::DefaultAllocator;

/// Iterator over the elements of a `Deque`, from front to back.
pub type Iter<'a, T> = iter::Chain<slice::Iter<'a, T>, slice::Iter<'a, T>>;

/// `Deque`
#[cfg(not(feature = "with-std"))]
pub struct Deque<T, A: Allocator> {
    allocator: A,
    buffer: RawBuffer<T>,
    head: usize,
    tail: usize,
    length: usize,
}

/// `Deque`
#[cfg(feature = "with-std")]
pub struct Deque<T, A: Allocator = DefaultAllocator> {
    //  Allocator of the buffer.
    allocator: A,
    //  The storage.
    buffer: RawBuffer<T>,
    //  Index of the front element, if any.
    head: usize,
    //  Index one past the back element, modulo capacity.
    tail: usize,
    //  The number of elements, initialized from `head` onwards, wrapping around.
    length: usize,
}

impl<T, A: Allocator + Default> Deque<T, A> {
    /// Creates a new, empty, instance.
    ///
    /// No memory is allocated.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::ZeroSizedElement` if `T` is zero-sized.
    pub fn try_new() -> Result<Self> {
        Self::try_new_in(A::default())
    }

    /// Creates a new, empty, instance.
    ///
    /// Calling this method is equivalent to calling `try_new` and panicking on error.
    pub fn new() -> Self {
        Self::try_new().unwrap_or_else(failure::panic_from_failure)
    }

    /// Creates a new, empty, instance with a capacity of exactly `capacity`.
    ///
    /// #   Errors
    ///
    /// Returns an error if `T` is zero-sized, or if the memory cannot be allocated.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        Self::try_with_capacity_in(capacity, A::default())
    }

    /// Creates a new, empty, instance with a capacity of exactly `capacity`.
    ///
    /// Calling this method is equivalent to calling `try_with_capacity` and panicking on error.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use arraykit::deque::Deque;
    /// let deque: Deque<i32> = Deque::with_capacity(3);
    /// assert_eq!(0, deque.len());
    /// assert_eq!(3, deque.capacity());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(failure::panic_from_failure)
    }
}

impl<T, A: Allocator> Deque<T, A> {
    /// Creates a new, empty, instance using `allocator`.
    pub fn try_new_in(allocator: A) -> Result<Self> {
        Self::try_with_capacity_in(0, allocator)
    }

    /// Creates a new, empty, instance using `allocator`, with a capacity of exactly `capacity`.
    pub fn try_with_capacity_in(capacity: usize, allocator: A) -> Result<Self> {
        let buffer = RawBuffer::try_allocate(capacity, &allocator)?;

        Ok(Self { allocator, buffer, head: 0, tail: 0, length: 0 })
    }

    /// Returns whether the instance contains any element, or not.
    pub fn is_empty(&self) -> bool { self.length == 0 }

    /// Returns the number of elements contained in the instance.
    pub fn len(&self) -> usize { self.length }

    /// Returns the number of elements the instance can contain without reallocating.
    pub fn capacity(&self) -> usize { self.buffer.capacity() }

    /// Returns a reference to the front element.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::Empty` if the instance is empty.
    pub fn front(&self) -> Result<&T> {
        if self.length == 0 {
            return Err(Failure::Empty);
        }

        //  Safety:
        //  -   `head` is the index of the front element, which is initialized.
        Ok(unsafe { &*self.buffer.slot(self.head) })
    }

    /// Returns a reference to the back element.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::Empty` if the instance is empty.
    pub fn back(&self) -> Result<&T> {
        if self.length == 0 {
            return Err(Failure::Empty);
        }

        let index = self.retreat(self.tail);

        //  Safety:
        //  -   `index` is the index of the back element, which is initialized.
        Ok(unsafe { &*self.buffer.slot(index) })
    }

    /// Returns a reference to the ith element, counting from the front.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::OutOfBounds` if `i` is not less than `len`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use arraykit::failure::Failure;
    /// #   use arraykit::deque::Deque;
    /// let mut deque: Deque<_> = Deque::new();
    /// deque.push_back(2);
    /// deque.push_front(1);
    ///
    /// assert_eq!(Ok(&1), deque.get(0));
    /// assert_eq!(Ok(&2), deque.get(1));
    /// assert_eq!(Err(Failure::OutOfBounds { index: 2, length: 2 }), deque.get(2));
    /// ```
    pub fn get(&self, i: usize) -> Result<&T> {
        failure::check_index(i, self.length)?;

        let index = self.physical(i);

        //  Safety:
        //  -   `i` is less than `length`, hence `index` is the index of an initialized element.
        Ok(unsafe { &*self.buffer.slot(index) })
    }

    /// Returns the elements as a pair of slices, which concatenated are in front to back order.
    ///
    /// The second slice is only non-empty if the elements wrap around the end of the buffer.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let first = cmp::min(self.length, self.capacity() - self.head);

        //  Safety:
        //  -   `[head, head + first)` and `[0, length - first)` are initialized, and within bounds.
        unsafe { (self.buffer.slice(self.head, first), self.buffer.slice(0, self.length - first)) }
    }

    /// Returns an iterator over the elements, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        let (first, second) = self.as_slices();
        first.iter().chain(second.iter())
    }

    /// Clears the instance.
    ///
    /// The instance is then empty, although it retains previously allocated memory.
    pub fn clear(&mut self) {
        let (head, length) = (self.head, self.length);
        let first = cmp::min(length, self.capacity() - head);

        //  Set first, in case a Drop panics; the elements of the second range then leak.
        self.head = 0;
        self.tail = 0;
        self.length = 0;

        //  Safety:
        //  -   `[head, head + first)` and `[0, length - first)` are initialized, and no longer considered so.
        unsafe {
            self.buffer.drop_range(head, first);
            self.buffer.drop_range(0, length - first);
        }
    }

    /// Reserves capacity for at least `new_capacity` elements.
    ///
    /// Calling this method has no effect if the capacity is already sufficient; the capacity never decreases.
    ///
    /// When growing, the elements are laid out from index 0 in the new buffer, in front to back order.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, in which case the instance is left unmodified.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }

        self.try_reallocate(new_capacity)
    }

    /// Reserves capacity for at least `new_capacity` elements.
    ///
    /// Calling this method is equivalent to calling `try_reserve` and panicking on error.
    pub fn reserve(&mut self, new_capacity: usize) {
        self.try_reserve(new_capacity).unwrap_or_else(failure::panic_from_failure);
    }

    /// Appends an element to the back.
    ///
    /// #   Errors
    ///
    /// Returns an error if the instance is full and cannot grow, in which case the instance is left unmodified and
    /// `value` is dropped.
    pub fn try_push_back(&mut self, value: T) -> Result<()> {
        self.try_grow_for_one()?;

        //  Safety:
        //  -   The instance is not full, after growing, hence the slot at `tail` is free.
        unsafe { self.buffer.write(self.tail, value) };

        self.tail = self.advance(self.tail);
        self.length += 1;

        Ok(())
    }

    /// Appends an element to the back.
    ///
    /// Calling this method is equivalent to calling `try_push_back` and panicking on error.
    pub fn push_back(&mut self, value: T) {
        self.try_push_back(value).unwrap_or_else(failure::panic_from_failure);
    }

    /// Prepends an element to the front.
    ///
    /// #   Errors
    ///
    /// Returns an error if the instance is full and cannot grow, in which case the instance is left unmodified and
    /// `value` is dropped.
    pub fn try_push_front(&mut self, value: T) -> Result<()> {
        self.try_grow_for_one()?;

        let head = self.retreat(self.head);

        //  Safety:
        //  -   The instance is not full, after growing, hence the slot before `head` is free.
        unsafe { self.buffer.write(head, value) };

        self.head = head;
        self.length += 1;

        Ok(())
    }

    /// Prepends an element to the front.
    ///
    /// Calling this method is equivalent to calling `try_push_front` and panicking on error.
    pub fn push_front(&mut self, value: T) {
        self.try_push_front(value).unwrap_or_else(failure::panic_from_failure);
    }

    /// Removes the front element, and returns it.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::Empty` if the instance is empty.
    pub fn pop_front(&mut self) -> Result<T> {
        if self.length == 0 {
            return Err(Failure::Empty);
        }

        //  Safety:
        //  -   The front element is initialized, and no longer considered so.
        let result = unsafe { self.buffer.read(self.head) };

        self.head = self.advance(self.head);
        self.length -= 1;
        self.normalize();

        Ok(result)
    }

    /// Removes the back element, and returns it.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::Empty` if the instance is empty.
    pub fn pop_back(&mut self) -> Result<T> {
        if self.length == 0 {
            return Err(Failure::Empty);
        }

        self.tail = self.retreat(self.tail);

        //  Safety:
        //  -   The back element is initialized, and no longer considered so.
        let result = unsafe { self.buffer.read(self.tail) };

        self.length -= 1;
        self.normalize();

        Ok(result)
    }

    //  Resets `head` and `tail` once empty.
    fn normalize(&mut self) {
        if self.length == 0 {
            self.head = 0;
            self.tail = 0;
        }
    }

    //  Returns the index following `index`, wrapping around.
    //
    //  Requires a non-zero capacity.
    fn advance(&self, index: usize) -> usize {
        debug_assert!(index < self.capacity());

        let next = index + 1;
        if next == self.capacity() { 0 } else { next }
    }

    //  Returns the index preceeding `index`, wrapping around.
    //
    //  Requires a non-zero capacity.
    fn retreat(&self, index: usize) -> usize {
        debug_assert!(index < self.capacity());

        if index == 0 { self.capacity() - 1 } else { index - 1 }
    }

    //  Returns the index in the buffer of the ith element from the front.
    fn physical(&self, i: usize) -> usize {
        debug_assert!(i < self.capacity());

        //  Cannot overflow: the capacity in bytes is at most `isize::MAX`, hence in elements at most half `usize::MAX`.
        let index = self.head + i;
        if index >= self.capacity() { index - self.capacity() } else { index }
    }

    //  Ensures there is room for one more element, doubling the capacity if necessary.
    fn try_grow_for_one(&mut self) -> Result<()> {
        let required = capacity::one_more(self.length)?;
        let new_capacity = capacity::grown(self.capacity(), required)?;

        self.try_reserve(new_capacity)
    }

    //  Moves the elements to a new buffer of exactly `new_capacity` slots, laying them out from index 0.
    //
    //  The new buffer is allocated before anything is moved, so that on failure the instance is left unmodified.
    fn try_reallocate(&mut self, new_capacity: usize) -> Result<()> {
        debug_assert!(new_capacity > self.length);

        let mut buffer = RawBuffer::try_allocate(new_capacity, &self.allocator)?;

        let first = cmp::min(self.length, self.capacity() - self.head);
        let second = self.length - first;

        //  Safety:
        //  -   `[head, head + first)` and `[0, second)` are initialized, and within bounds.
        //  -   The new buffer has at least `first + second` slots, and does not overlap.
        unsafe {
            ptr::copy_nonoverlapping(self.buffer.slot(self.head), buffer.slot(0), first);
            ptr::copy_nonoverlapping(self.buffer.slot(0), buffer.slot(first), second);
        }

        let old_capacity = self.capacity();

        mem::swap(&mut self.buffer, &mut buffer);

        //  Safety:
        //  -   `buffer` was allocated by `self.allocator`, and its elements were moved out.
        unsafe { buffer.deallocate(&self.allocator) };

        self.head = 0;
        self.tail = self.length;

        log::trace!("Deque: reallocated from {} to {} elements", old_capacity, new_capacity);

        Ok(())
    }
}

impl<T, A: Allocator> Drop for Deque<T, A> {
    fn drop(&mut self) {
        self.clear();

        //  Safety:
        //  -   The buffer was allocated by `self.allocator`.
        unsafe { self.buffer.deallocate(&self.allocator) };
    }
}

impl<T, A: Allocator + Default> Default for Deque<T, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Deque<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, A: Allocator> PartialEq for Deque<T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, A: Allocator> Eq for Deque<T, A> {}

impl<T, A: Allocator + Default> iter::FromIterator<T> for Deque<T, A> {
    fn from_iter<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = T>,
    {
        let mut result = Self::new();
        result.extend(collection);
        result
    }
}

impl<T, A: Allocator> iter::Extend<T> for Deque<T, A> {
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = T>,
    {
        for element in collection {
            self.push_back(element);
        }
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a Deque<T, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}
