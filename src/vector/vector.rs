//! The Vector

use super::root::{fmt, iter, mem, ops, ptr, slice};

use super::allocator::Allocator;
use super::capacity;
use super::failure::{self, Failure, Result};
use super::raw::RawBuffer;

#[cfg(feature = "with-std")]
use super::allocator::DefaultAllocator;

//
//  Public Interface
//

/// `Vector`
#[cfg(not(feature = "with-std"))]
pub struct Vector<T, A: Allocator> {
    allocator: A,
    buffer: RawBuffer<T>,
    length: usize,
}

/// `Vector`
#[cfg(feature = "with-std")]
pub struct Vector<T, A: Allocator = DefaultAllocator> {
    //  Allocator of the buffer.
    allocator: A,
    //  The storage, of which the first `length` slots are initialized.
    buffer: RawBuffer<T>,
    //  The number of elements in the vector.
    length: usize,
}

impl<T, A: Allocator + Default> Vector<T, A> {
    /// Creates a new, empty, instance.
    ///
    /// No memory is allocated.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::ZeroSizedElement` if `T` is zero-sized.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use arraykit::failure::Failure;
    /// #   use arraykit::vector::Vector;
    /// let vec: Vector<i32> = Vector::try_new().unwrap();
    /// assert_eq!(0, vec.len());
    /// assert_eq!(0, vec.capacity());
    ///
    /// let vec = Vector::<()>::try_new();
    /// assert_eq!(Some(Failure::ZeroSizedElement), vec.err());
    /// ```
    pub fn try_new() -> Result<Self> {
        Self::try_new_in(A::default())
    }

    /// Creates a new, empty, instance.
    ///
    /// Calling this method is equivalent to calling `try_new` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `T` is zero-sized.
    pub fn new() -> Self {
        Self::try_new().unwrap_or_else(failure::panic_from_failure)
    }

    /// Creates a new, empty, instance with a capacity of exactly `capacity`.
    ///
    /// #   Errors
    ///
    /// Returns an error if `T` is zero-sized, or if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use arraykit::failure::Failure;
    /// #   use arraykit::vector::Vector;
    /// let vec: Vector<i32> = Vector::try_with_capacity(5).unwrap();
    /// assert_eq!(0, vec.len());
    /// assert_eq!(5, vec.capacity());
    ///
    /// let vec = Vector::<i32>::try_with_capacity(usize::MAX);
    /// assert_eq!(Some(Failure::BytesOverflow), vec.err());
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        Self::try_with_capacity_in(capacity, A::default())
    }

    /// Creates a new, empty, instance with a capacity of exactly `capacity`.
    ///
    /// Calling this method is equivalent to calling `try_with_capacity` and panicking on error.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(failure::panic_from_failure)
    }

    /// Creates a new instance containing a copy of the elements of `source`, in order.
    ///
    /// The capacity is exactly the length of `source`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use arraykit::vector::Vector;
    /// let vec: Vector<_> = Vector::try_from_slice(&[3, 1, 2]).unwrap();
    /// assert_eq!(&[3, 1, 2], vec.as_slice());
    /// assert_eq!(3, vec.capacity());
    /// ```
    pub fn try_from_slice(source: &[T]) -> Result<Self>
    where
        T: Clone,
    {
        Self::try_from_slice_in(source, A::default())
    }

    /// Creates a new instance containing a copy of the elements of `source`, in order.
    ///
    /// Calling this method is equivalent to calling `try_from_slice` and panicking on error.
    pub fn from_slice(source: &[T]) -> Self
    where
        T: Clone,
    {
        Self::try_from_slice(source).unwrap_or_else(failure::panic_from_failure)
    }
}

impl<T, A: Allocator> Vector<T, A> {
    /// Creates a new, empty, instance using `allocator`.
    ///
    /// No memory is allocated.
    pub fn try_new_in(allocator: A) -> Result<Self> {
        Self::try_with_capacity_in(0, allocator)
    }

    /// Creates a new, empty, instance using `allocator`, with a capacity of exactly `capacity`.
    pub fn try_with_capacity_in(capacity: usize, allocator: A) -> Result<Self> {
        let buffer = RawBuffer::try_allocate(capacity, &allocator)?;

        Ok(Self { allocator, buffer, length: 0 })
    }

    /// Creates a new instance using `allocator`, containing a copy of the elements of `source`, in order.
    pub fn try_from_slice_in(source: &[T], allocator: A) -> Result<Self>
    where
        T: Clone,
    {
        let mut result = Self::try_with_capacity_in(source.len(), allocator)?;

        for element in source {
            //  Safety:
            //  -   `result.length` is less than `source.len()`, hence within capacity.
            unsafe { result.buffer.write(result.length, element.clone()) };

            //  Incremented one at a time, so that a panicking `clone` drops exactly the elements written so far.
            result.length += 1;
        }

        Ok(result)
    }

    /// Returns whether the instance contains any element, or not.
    pub fn is_empty(&self) -> bool { self.length == 0 }

    /// Returns the number of elements contained in the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use arraykit::vector::Vector;
    /// let mut vec: Vector<_> = Vector::new();
    /// assert_eq!(0, vec.len());
    ///
    /// vec.push(1);
    /// assert_eq!(1, vec.len());
    /// ```
    pub fn len(&self) -> usize { self.length }

    /// Returns the number of elements the instance can contain without reallocating.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use arraykit::vector::Vector;
    /// let mut vec: Vector<_> = Vector::new();
    /// assert_eq!(0, vec.capacity());
    ///
    /// vec.extend([1, 2, 3, 4, 5].iter().copied());
    /// assert_eq!(8, vec.capacity());
    /// ```
    pub fn capacity(&self) -> usize { self.buffer.capacity() }

    /// Returns a slice of all the elements.
    pub fn as_slice(&self) -> &[T] {
        //  Safety:
        //  -   The first `length` elements are initialized.
        unsafe { self.buffer.slice(0, self.length) }
    }

    /// Returns a mutable slice of all the elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        //  Safety:
        //  -   The first `length` elements are initialized.
        unsafe { self.buffer.slice_mut(0, self.length) }
    }

    /// Returns an iterator over the elements, in order.
    pub fn iter(&self) -> slice::Iter<'_, T> { self.as_slice().iter() }

    /// Returns an iterator over the elements, in order, allowing modification.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> { self.as_mut_slice().iter_mut() }

    /// Returns a reference to the ith element.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::OutOfBounds` if `i` is not less than `len`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use arraykit::failure::Failure;
    /// #   use arraykit::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// vec.push(1);
    ///
    /// assert_eq!(Ok(&1), vec.get(0));
    /// assert_eq!(Err(Failure::OutOfBounds { index: 1, length: 1 }), vec.get(1));
    /// ```
    pub fn get(&self, i: usize) -> Result<&T> {
        failure::check_index(i, self.length)?;

        Ok(&self.as_slice()[i])
    }

    /// Returns a mutable reference to the ith element.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::OutOfBounds` if `i` is not less than `len`.
    pub fn get_mut(&mut self, i: usize) -> Result<&mut T> {
        failure::check_index(i, self.length)?;

        Ok(&mut self.as_mut_slice()[i])
    }

    /// Replaces the ith element, returning the previous one.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::OutOfBounds` if `i` is not less than `len`, in which case `value` is dropped.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use arraykit::vector::Vector;
    /// let mut vec: Vector<_> = Vector::from_slice(&[1, 2]);
    ///
    /// assert_eq!(Ok(2), vec.set(1, 7));
    /// assert_eq!(&[1, 7], vec.as_slice());
    /// ```
    pub fn set(&mut self, i: usize, value: T) -> Result<T> {
        self.get_mut(i).map(|slot| mem::replace(slot, value))
    }

    /// Clears the instance.
    ///
    /// The instance is then empty, although it retains previously allocated memory.
    ///
    /// Use `shrink_to_fit` to release excess memory.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use arraykit::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// vec.extend([1, 2, 3].iter().copied());
    ///
    /// vec.clear();
    /// assert_eq!(0, vec.len());
    /// assert_eq!(4, vec.capacity());
    /// ```
    pub fn clear(&mut self) {
        let length = self.length;

        //  Set first, in case a Drop panics.
        self.length = 0;

        //  Safety:
        //  -   The first `length` elements are initialized, and no longer considered so.
        unsafe { self.buffer.drop_range(0, length) };
    }

    /// Reserves capacity for at least `new_capacity` elements.
    ///
    /// Calling this method has no effect if the capacity is already sufficient; the capacity never decreases.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, in which case the instance is left unmodified.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use arraykit::failure::Failure;
    /// #   use arraykit::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    ///
    /// //  BytesOverflow signals that the size of the buffer to allocate, in bytes, overflows.
    /// assert_eq!(Err(Failure::BytesOverflow), vec.try_reserve(usize::MAX));
    /// assert_eq!(0, vec.capacity());
    ///
    /// assert_eq!(Ok(()), vec.try_reserve(6));
    /// assert_eq!(6, vec.capacity());
    ///
    /// assert_eq!(Ok(()), vec.try_reserve(2));
    /// assert_eq!(6, vec.capacity());
    /// ```
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

    /// Shrinks the capacity to exactly `len`.
    ///
    /// If the instance is empty, the memory is released entirely.
    ///
    /// #   Errors
    ///
    /// Returns an error if the smaller buffer cannot be allocated, in which case the instance is left unmodified.
    pub fn try_shrink_to_fit(&mut self) -> Result<()> {
        if self.length == self.capacity() {
            return Ok(());
        }

        self.try_reallocate(self.length)
    }

    /// Shrinks the capacity to exactly `len`.
    ///
    /// Calling this method is equivalent to calling `try_shrink_to_fit` and panicking on error.
    pub fn shrink_to_fit(&mut self) {
        self.try_shrink_to_fit().unwrap_or_else(failure::panic_from_failure);
    }

    /// Appends an element to the back.
    ///
    /// If the instance is full, its capacity is doubled first.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, in which case the instance is left unmodified and `value`
    /// is dropped.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use arraykit::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// assert_eq!(Ok(()), vec.try_push(3));
    /// assert_eq!(3, vec[0]);
    /// assert_eq!(1, vec.capacity());
    ///
    /// assert_eq!(Ok(()), vec.try_push(4));
    /// assert_eq!(2, vec.capacity());
    /// ```
    pub fn try_push(&mut self, value: T) -> Result<()> {
        self.try_grow_for_one()?;

        //  Safety:
        //  -   `length` is less than `capacity`, after growing.
        unsafe { self.buffer.write(self.length, value) };

        self.length += 1;

        Ok(())
    }

    /// Appends an element to the back.
    ///
    /// Calling this method is equivalent to calling `try_push` and panicking on error.
    pub fn push(&mut self, value: T) {
        self.try_push(value).unwrap_or_else(failure::panic_from_failure);
    }

    /// Removes the last element, and returns it.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::Empty` if the instance is empty.
    pub fn pop(&mut self) -> Result<T> {
        if self.length == 0 {
            return Err(Failure::Empty);
        }

        self.length -= 1;

        //  Safety:
        //  -   The element at `length` was initialized, and no longer is considered so.
        Ok(unsafe { self.buffer.read(self.length) })
    }

    /// Inserts an element at position `index`, shifting all elements after it to the right.
    ///
    /// An `index` equal to `len` appends the element.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::OutOfBounds` if `index` is greater than `len`, or an allocation failure if the instance
    /// could not grow. In either case, the instance is left unmodified and `value` is dropped.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use arraykit::failure::Failure;
    /// #   use arraykit::vector::Vector;
    /// let mut vec: Vector<_> = Vector::from_slice(&[1, 3]);
    ///
    /// assert_eq!(Ok(()), vec.try_insert(1, 2));
    /// assert_eq!(Ok(()), vec.try_insert(3, 4));
    /// assert_eq!(Err(Failure::OutOfBounds { index: 5, length: 4 }), vec.try_insert(5, 5));
    ///
    /// assert_eq!(&[1, 2, 3, 4], vec.as_slice());
    /// ```
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.length {
            return Err(Failure::OutOfBounds { index, length: self.length });
        }

        self.try_grow_for_one()?;

        //  Safety:
        //  -   `index` is at most `length`, which is less than `capacity` after growing.
        //  -   The elements in `[index, length)` are initialized, and moved one slot to the right.
        unsafe {
            let slot = self.buffer.slot(index);
            ptr::copy(slot, slot.add(1), self.length - index);
            ptr::write(slot, value);
        }

        self.length += 1;

        Ok(())
    }

    /// Inserts an element at position `index`, shifting all elements after it to the right.
    ///
    /// Calling this method is equivalent to calling `try_insert` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `index` is greater than `len`, or if the instance could not grow.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).unwrap_or_else(failure::panic_from_failure);
    }

    /// Removes the element at position `index`, shifting all elements after it to the left, and returns it.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::OutOfBounds` if `index` is not less than `len`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use arraykit::failure::Failure;
    /// #   use arraykit::vector::Vector;
    /// let mut vec: Vector<_> = Vector::from_slice(&[1, 2, 3]);
    ///
    /// assert_eq!(Ok(1), vec.erase(0));
    /// assert_eq!(Err(Failure::OutOfBounds { index: 2, length: 2 }), vec.erase(2));
    ///
    /// assert_eq!(&[2, 3], vec.as_slice());
    /// ```
    pub fn erase(&mut self, index: usize) -> Result<T> {
        failure::check_index(index, self.length)?;

        //  Safety:
        //  -   `index` is less than `length`.
        //  -   The element at `index` is moved out, and the elements in `(index, length)` moved one slot to the left.
        let result = unsafe {
            let slot = self.buffer.slot(index);
            let result = ptr::read(slot);
            ptr::copy(slot.add(1), slot, self.length - index - 1);
            result
        };

        self.length -= 1;

        Ok(result)
    }

    //  Ensures there is room for one more element, doubling the capacity if necessary.
    fn try_grow_for_one(&mut self) -> Result<()> {
        let required = capacity::one_more(self.length)?;
        let new_capacity = capacity::grown(self.capacity(), required)?;

        self.try_reserve(new_capacity)
    }

    //  Moves the elements to a new buffer of exactly `new_capacity` slots.
    //
    //  The new buffer is allocated before anything is moved, so that on failure the instance is left unmodified.
    fn try_reallocate(&mut self, new_capacity: usize) -> Result<()> {
        debug_assert!(new_capacity >= self.length);

        let mut buffer = RawBuffer::try_allocate(new_capacity, &self.allocator)?;

        //  Safety:
        //  -   Both buffers have at least `length` slots, and do not overlap.
        //  -   The first `length` elements of the current buffer are initialized.
        unsafe { ptr::copy_nonoverlapping(self.buffer.slot(0), buffer.slot(0), self.length) };

        let old_capacity = self.capacity();

        mem::swap(&mut self.buffer, &mut buffer);

        //  Safety:
        //  -   `buffer` was allocated by `self.allocator`, and its elements were moved out.
        unsafe { buffer.deallocate(&self.allocator) };

        log::trace!("Vector: reallocated from {} to {} elements", old_capacity, new_capacity);

        Ok(())
    }
}

impl<T, A: Allocator> Drop for Vector<T, A> {
    fn drop(&mut self) {
        self.clear();

        //  Safety:
        //  -   The buffer was allocated by `self.allocator`.
        unsafe { self.buffer.deallocate(&self.allocator) };
    }
}

impl<T, A: Allocator + Default> Default for Vector<T, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, A: Allocator + Clone> Clone for Vector<T, A> {
    fn clone(&self) -> Self {
        Self::try_from_slice_in(self.as_slice(), self.allocator.clone()).unwrap_or_else(failure::panic_from_failure)
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Vector<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Vector")
            .field("capacity", &self.capacity())
            .field("length", &self.length)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq, A: Allocator> PartialEq for Vector<T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A: Allocator> Eq for Vector<T, A> {}

impl<T, A: Allocator + Default> iter::FromIterator<T> for Vector<T, A> {
    fn from_iter<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = T>,
    {
        let mut result = Self::new();
        result.extend(collection);
        result
    }
}

impl<T, A: Allocator> iter::Extend<T> for Vector<T, A> {
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = T>,
    {
        for element in collection {
            self.push(element);
        }
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a Vector<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<T, A: Allocator> ops::Index<usize> for Vector<T, A> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.get(index).unwrap_or_else(failure::panic_from_failure)
    }
}

impl<T, A: Allocator> ops::IndexMut<usize> for Vector<T, A> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index).unwrap_or_else(failure::panic_from_failure)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::utils::tester::*;

    fn vector_in(allocator: &TestAllocator) -> Vector<i32, &TestAllocator> {
        match Vector::try_new_in(allocator) {
            Ok(vec) => vec,
            Err(failure) => panic!("{}", failure),
        }
    }

    #[test]
    fn trait_debug() {
        use std::fmt::Write;

        let vec: Vector<_> = [1, 2, 3, 4, 5].iter().copied().collect();

        let mut sink = String::new();
        let _ = write!(sink, "{:?}", vec);

        assert_eq!(
            "Vector { capacity: 8, length: 5, elements: [1, 2, 3, 4, 5] }",
            sink
        );
    }

    #[test]
    fn trait_clone() {
        let vec: Vector<_> = Vector::from_slice(&[1, 2, 3]);
        let clone = vec.clone();

        assert_eq!(vec, clone);
        assert_eq!(3, clone.capacity());
    }

    #[test]
    fn new_zero_sized() {
        assert_eq!(Some(Failure::ZeroSizedElement), Vector::<()>::try_new().err());
        assert_eq!(Some(Failure::ZeroSizedElement), Vector::<()>::try_with_capacity(3).err());
    }

    #[test]
    fn with_capacity_out_of_memory() {
        let allocator = TestAllocator::default();

        let vec = Vector::<i32, _>::try_with_capacity_in(4, &allocator);

        assert_eq!(Some(Failure::OutOfMemory), vec.err());
    }

    #[test]
    fn push_doubles_capacity() {
        let allocator = TestAllocator::with_budget(usize::MAX);
        let mut vec = vector_in(&allocator);

        let mut capacities = Vec::new();

        for i in 0..9 {
            vec.push(i);
            capacities.push(vec.capacity());
        }

        assert_eq!(vec![1, 2, 4, 4, 8, 8, 8, 8, 16], capacities);
        assert_eq!(vec![64], allocator.allocation_sizes());
        assert_eq!(&[0, 1, 2, 3, 4, 5, 6, 7, 8], vec.as_slice());
    }

    #[test]
    fn push_out_of_memory() {
        let allocator = TestAllocator::with_budget(2);
        let mut vec = vector_in(&allocator);

        assert_eq!(Ok(()), vec.try_push(1));
        assert_eq!(Ok(()), vec.try_push(2));
        assert_eq!(Err(Failure::OutOfMemory), vec.try_push(3));

        assert_eq!(&[1, 2], vec.as_slice());
        assert_eq!(2, vec.capacity());
    }

    #[test]
    fn insert_out_of_memory() {
        let allocator = TestAllocator::with_budget(1);
        let mut vec = vector_in(&allocator);

        assert_eq!(Ok(()), vec.try_insert(0, 1));
        assert_eq!(Err(Failure::OutOfMemory), vec.try_insert(0, 0));

        assert_eq!(&[1], vec.as_slice());
    }

    #[test]
    fn insert_erase_round_trip() {
        let mut vec: Vector<_> = Vector::from_slice(&[0, 1, 2, 3, 4]);

        vec.insert(2, 42);
        assert_eq!(&[0, 1, 42, 2, 3, 4], vec.as_slice());

        assert_eq!(Ok(42), vec.erase(2));
        assert_eq!(&[0, 1, 2, 3, 4], vec.as_slice());

        vec.insert(5, 5);
        vec.insert(0, -1);
        assert_eq!(&[-1, 0, 1, 2, 3, 4, 5], vec.as_slice());

        assert_eq!(Ok(5), vec.erase(6));
        assert_eq!(Ok(-1), vec.erase(0));
        assert_eq!(&[0, 1, 2, 3, 4], vec.as_slice());
    }

    #[test]
    fn boundaries_on_empty() {
        let mut vec: Vector<i32> = Vector::new();

        assert_eq!(Err(Failure::Empty), vec.pop());
        assert_eq!(Err(Failure::OutOfBounds { index: 0, length: 0 }), vec.erase(0));
        assert_eq!(Err(Failure::OutOfBounds { index: 0, length: 0 }), vec.get(0));
        assert_eq!(Err(Failure::OutOfBounds { index: 0, length: 0 }), vec.set(0, 1));
        assert_eq!(Err(Failure::OutOfBounds { index: 1, length: 0 }), vec.try_insert(1, 1));

        assert_eq!(0, vec.len());
        assert_eq!(0, vec.capacity());
    }

    #[test]
    fn reserve_never_shrinks() {
        let mut vec: Vector<i32> = Vector::with_capacity(8);

        vec.reserve(4);
        assert_eq!(8, vec.capacity());

        vec.reserve(9);
        assert_eq!(9, vec.capacity());
    }

    #[test]
    fn reserve_out_of_memory() {
        let allocator = TestAllocator::with_budget(1);
        let mut vec = vector_in(&allocator);

        vec.push(1);
        assert_eq!(Err(Failure::OutOfMemory), vec.try_reserve(10));

        assert_eq!(1, vec.capacity());
        assert_eq!(&[1], vec.as_slice());
    }

    #[test]
    fn shrink_to_fit() {
        let allocator = TestAllocator::with_budget(usize::MAX);
        let mut vec = vector_in(&allocator);

        vec.extend([1, 2, 3, 4, 5].iter().copied());
        assert_eq!(8, vec.capacity());

        vec.shrink_to_fit();
        assert_eq!(5, vec.capacity());
        assert_eq!(vec![20], allocator.allocation_sizes());
        assert_eq!(&[1, 2, 3, 4, 5], vec.as_slice());

        vec.clear();
        vec.shrink_to_fit();
        assert_eq!(0, vec.capacity());
        assert!(allocator.allocations().is_empty());
    }

    #[test]
    fn shrink_to_fit_out_of_memory() {
        let allocator = TestAllocator::with_budget(1);
        let mut vec = vector_in(&allocator);

        vec.reserve(4);
        vec.push(1);

        assert_eq!(Err(Failure::OutOfMemory), vec.try_shrink_to_fit());
        assert_eq!(4, vec.capacity());
        assert_eq!(&[1], vec.as_slice());
    }

    #[test]
    fn drop_elements() {
        let allocator = TestAllocator::with_budget(usize::MAX);
        let count = SpyCount::zero();

        {
            let mut vec = Vector::try_new_in(&allocator).unwrap();

            for _ in 0..5 {
                vec.push(SpyElement::new(&count));
            }
            assert_eq!(5, count.get());

            drop(vec.pop());
            drop(vec.erase(0));
            assert_eq!(3, count.get());

            assert!(vec.set(0, SpyElement::new(&count)).is_ok());
            assert_eq!(3, count.get());
        }

        assert_eq!(0, count.get());
        assert!(allocator.allocations().is_empty());
    }

    #[test]
    fn panic_drop() {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        let mut vec: Vector<_> = Vector::new();
        vec.push(PanickyDrop::new(0));
        vec.push(PanickyDrop::new(1));
        vec.push(PanickyDrop::panicky(2));
        vec.push(PanickyDrop::new(3));

        let panicked = catch_unwind(AssertUnwindSafe(|| {
            vec.clear();
        }));
        assert!(panicked.is_err());

        assert_eq!(0, vec.len());
    }

    #[test]
    fn random_against_model() {
        use rand::{Rng, SeedableRng};
        use rand::rngs::StdRng;

        let mut rng = StdRng::seed_from_u64(0x5eed);

        let mut vec: Vector<u32> = Vector::new();
        let mut model: Vec<u32> = Vec::new();

        for _ in 0..4096 {
            let value: u32 = rng.random();

            match rng.random_range(0..6) {
                0 | 1 => {
                    vec.push(value);
                    model.push(value);
                },
                2 => {
                    assert_eq!(model.pop().ok_or(Failure::Empty), vec.pop());
                },
                3 => {
                    let index = rng.random_range(0..=model.len());
                    vec.insert(index, value);
                    model.insert(index, value);
                },
                4 => {
                    if model.is_empty() {
                        assert_eq!(Err(Failure::OutOfBounds { index: 0, length: 0 }), vec.erase(0));
                    } else {
                        let index = rng.random_range(0..model.len());
                        assert_eq!(Ok(model.remove(index)), vec.erase(index));
                    }
                },
                _ => {
                    vec.shrink_to_fit();
                    assert_eq!(vec.len(), vec.capacity());
                },
            }

            assert!(vec.len() <= vec.capacity());
            assert_eq!(model.as_slice(), vec.as_slice());
        }
    }
} //  mod tests
