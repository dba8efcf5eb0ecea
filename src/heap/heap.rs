//! The BinaryHeap

use super::root::{cmp::Ordering, fmt};

use super::allocator::Allocator;
use super::compare::{Compare, Natural};
use super::failure::{self, Failure, Result};
use super::vector::Vector;

#[cfg(feature = "with-std")]
use super::allocator::DefaultAllocator;

/// `BinaryHeap`
#[cfg(not(feature = "with-std"))]
pub struct BinaryHeap<T, C, A: Allocator> {
    storage: Vector<T, A>,
    compare: C,
}

/// `BinaryHeap`
#[cfg(feature = "with-std")]
pub struct BinaryHeap<T, C = Natural, A: Allocator = DefaultAllocator> {
    //  The elements, in heap order.
    storage: Vector<T, A>,
    //  The order of the elements.
    compare: C,
}

impl<T, C: Compare<T>, A: Allocator + Default> BinaryHeap<T, C, A> {
    /// Creates a new, empty, instance ordered by `compare`.
    ///
    /// No memory is allocated.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::ZeroSizedElement` if `T` is zero-sized.
    pub fn try_new(compare: C) -> Result<Self> {
        Vector::try_new().map(|storage| Self { storage, compare })
    }

    /// Creates a new, empty, instance ordered by `compare`.
    ///
    /// Calling this method is equivalent to calling `try_new` and panicking on error.
    pub fn new(compare: C) -> Self {
        Self::try_new(compare).unwrap_or_else(failure::panic_from_failure)
    }

    /// Creates a new, empty, instance ordered by `compare`, with a capacity of exactly `capacity`.
    ///
    /// #   Errors
    ///
    /// Returns an error if `T` is zero-sized, or if the memory cannot be allocated.
    pub fn try_with_capacity(capacity: usize, compare: C) -> Result<Self> {
        Vector::try_with_capacity(capacity).map(|storage| Self { storage, compare })
    }

    /// Creates a new, empty, instance ordered by `compare`, with a capacity of exactly `capacity`.
    ///
    /// Calling this method is equivalent to calling `try_with_capacity` and panicking on error.
    pub fn with_capacity(capacity: usize, compare: C) -> Self {
        Self::try_with_capacity(capacity, compare).unwrap_or_else(failure::panic_from_failure)
    }

    /// Creates a new instance ordered by `compare`, containing a copy of the elements of `source`.
    ///
    /// The elements are heapified bottom-up, in O(n).
    ///
    /// #   Example
    ///
    /// ```
    /// #   use arraykit::heap::{BinaryHeap, Natural};
    /// let heap: BinaryHeap<_> = BinaryHeap::try_from_slice(&[3, 1, 2], Natural).unwrap();
    ///
    /// assert_eq!(3, heap.len());
    /// assert_eq!(Ok(&1), heap.peek());
    /// ```
    pub fn try_from_slice(source: &[T], compare: C) -> Result<Self>
    where
        T: Clone,
    {
        Vector::try_from_slice(source).map(|storage| Self::from_vector(storage, compare))
    }

    /// Creates a new instance ordered by `compare`, containing a copy of the elements of `source`.
    ///
    /// Calling this method is equivalent to calling `try_from_slice` and panicking on error.
    pub fn from_slice(source: &[T], compare: C) -> Self
    where
        T: Clone,
    {
        Self::try_from_slice(source, compare).unwrap_or_else(failure::panic_from_failure)
    }
}

impl<T, C: Compare<T>, A: Allocator> BinaryHeap<T, C, A> {
    /// Creates a new, empty, instance ordered by `compare`, using `allocator`, with a capacity of exactly `capacity`.
    pub fn try_with_capacity_in(capacity: usize, compare: C, allocator: A) -> Result<Self> {
        Vector::try_with_capacity_in(capacity, allocator).map(|storage| Self { storage, compare })
    }

    /// Creates a new instance ordered by `compare`, taking over the elements and memory of `storage`.
    ///
    /// The elements are heapified bottom-up, in O(n). No memory is allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use arraykit::heap::{BinaryHeap, Natural};
    /// #   use arraykit::vector::Vector;
    /// let storage: Vector<_> = [5, 4, 3, 2, 1].iter().copied().collect();
    /// let heap = BinaryHeap::from_vector(storage, Natural);
    ///
    /// assert_eq!(Ok(&1), heap.peek());
    /// assert_eq!(8, heap.capacity());
    /// ```
    pub fn from_vector(storage: Vector<T, A>, compare: C) -> Self {
        let mut result = Self { storage, compare };
        result.heapify();
        result
    }

    /// Returns the elements, in heap order, and the memory holding them.
    pub fn into_vector(self) -> Vector<T, A> { self.storage }

    /// Returns whether the instance contains any element, or not.
    pub fn is_empty(&self) -> bool { self.storage.is_empty() }

    /// Returns the number of elements contained in the instance.
    pub fn len(&self) -> usize { self.storage.len() }

    /// Returns the number of elements the instance can contain without reallocating.
    pub fn capacity(&self) -> usize { self.storage.capacity() }

    /// Returns the number of levels of the implicit tree: the number of times `len` can be halved before reaching 0.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use arraykit::heap::{BinaryHeap, Natural};
    /// let mut heap: BinaryHeap<_> = BinaryHeap::new(Natural);
    /// assert_eq!(0, heap.height());
    ///
    /// heap.push(1);
    /// assert_eq!(1, heap.height());
    ///
    /// heap.push(2);
    /// heap.push(3);
    /// assert_eq!(2, heap.height());
    ///
    /// heap.push(4);
    /// assert_eq!(3, heap.height());
    /// ```
    pub fn height(&self) -> usize {
        let mut size = self.len();
        let mut height = 0;

        while size != 0 {
            size /= 2;
            height += 1;
        }

        height
    }

    /// Returns the elements, in heap order.
    pub fn as_slice(&self) -> &[T] { self.storage.as_slice() }

    /// Returns a reference to the smallest element.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::Empty` if the instance is empty.
    pub fn peek(&self) -> Result<&T> {
        self.storage.as_slice().first().ok_or(Failure::Empty)
    }

    /// Clears the instance, retaining its capacity.
    pub fn clear(&mut self) { self.storage.clear() }

    /// Reserves capacity for at least `new_capacity` elements.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, in which case the instance is left unmodified.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<()> {
        self.storage.try_reserve(new_capacity)
    }

    /// Reserves capacity for at least `new_capacity` elements.
    ///
    /// Calling this method is equivalent to calling `try_reserve` and panicking on error.
    pub fn reserve(&mut self, new_capacity: usize) {
        self.storage.reserve(new_capacity)
    }

    /// Inserts an element.
    ///
    /// #   Errors
    ///
    /// Returns an error if the instance cannot grow, in which case the instance is left unmodified and `value` is
    /// dropped.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use arraykit::heap::{BinaryHeap, Natural};
    /// let mut heap: BinaryHeap<_> = BinaryHeap::new(Natural);
    ///
    /// assert_eq!(Ok(()), heap.try_push(2));
    /// assert_eq!(Ok(()), heap.try_push(1));
    /// assert_eq!(Ok(&1), heap.peek());
    /// ```
    pub fn try_push(&mut self, value: T) -> Result<()> {
        self.storage.try_push(value)?;

        self.sift_up(self.len() - 1);

        Ok(())
    }

    /// Inserts an element.
    ///
    /// Calling this method is equivalent to calling `try_push` and panicking on error.
    pub fn push(&mut self, value: T) {
        self.try_push(value).unwrap_or_else(failure::panic_from_failure);
    }

    /// Removes the smallest element, and returns it.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::Empty` if the instance is empty.
    pub fn pop(&mut self) -> Result<T> {
        let length = self.len();

        if length == 0 {
            return Err(Failure::Empty);
        }

        self.storage.as_mut_slice().swap(0, length - 1);

        let result = self.storage.pop()?;

        if !self.is_empty() {
            self.sift_down(0);
        }

        Ok(result)
    }

    //  Returns whether the element at `left` is strictly less than the element at `right`.
    fn less(&self, left: usize, right: usize) -> bool {
        let elements = self.storage.as_slice();

        self.compare.compare(&elements[left], &elements[right]) == Ordering::Less
    }

    //  Moves the element at `index` towards the root, until its parent is not greater.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;

            if !self.less(index, parent) {
                break;
            }

            self.storage.as_mut_slice().swap(index, parent);
            index = parent;
        }
    }

    //  Moves the element at `index` towards the leaves, until none of its children is less.
    fn sift_down(&mut self, mut index: usize) {
        let length = self.len();

        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < length && self.less(left, smallest) {
                smallest = left;
            }

            if right < length && self.less(right, smallest) {
                smallest = right;
            }

            if smallest == index {
                break;
            }

            self.storage.as_mut_slice().swap(index, smallest);
            index = smallest;
        }
    }

    //  Establishes the heap property over arbitrary elements, from the parent of the last element down to the root.
    fn heapify(&mut self) {
        for index in (0..self.len() / 2).rev() {
            self.sift_down(index);
        }
    }
}

impl<T, C: Compare<T> + Default, A: Allocator + Default> Default for BinaryHeap<T, C, A> {
    fn default() -> Self { Self::new(C::default()) }
}

impl<T: fmt::Debug, C, A: Allocator> fmt::Debug for BinaryHeap<T, C, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("elements", &self.storage.as_slice())
            .finish()
    }
}
