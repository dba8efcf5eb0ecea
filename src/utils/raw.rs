//! Raw memory, maybe uninitialized, suitably sized for a number of T.

use super::root::{hint, marker, ptr, slice};

use crate::allocator::Allocator;
use crate::capacity;
use crate::failure::{Failure, Result};

//  Raw buffer, suitably sized for `capacity` elements of type T.
//
//  A building block for the containers, it:
//  -   Does not track which slots are initialized; this is up to its owner.
//  -   Does not remember its allocator; the owner must pass the very same allocator to `deallocate`.
//  -   Does not deallocate on drop; failing to call `deallocate` leaks the memory.
//
//  Here be dragons...
pub struct RawBuffer<T> {
    ptr: ptr::NonNull<T>,
    capacity: usize,
    _marker: marker::PhantomData<T>,
}

impl<T> RawBuffer<T> {
    //  Creates an empty instance, with no capacity.
    pub const fn dangling() -> Self {
        Self { ptr: ptr::NonNull::dangling(), capacity: 0, _marker: marker::PhantomData }
    }

    //  Allocates a buffer of `capacity` elements.
    //
    //  No memory is allocated if `capacity` is 0.
    //
    //  #   Fails
    //
    //  -   If T is zero-sized.
    //  -   If the number of bytes overflows.
    //  -   If the allocator fails to allocate.
    pub fn try_allocate<A: Allocator>(capacity: usize, allocator: &A) -> Result<Self> {
        capacity::check_element_size::<T>()?;

        if capacity == 0 {
            return Ok(Self::dangling());
        }

        let layout = capacity::array_layout::<T>(capacity)?;

        //  Safety:
        //  -   The size of layout is non-zero, as both capacity and the size of T are.
        let ptr = unsafe { allocator.allocate(layout) };

        let ptr = ptr::NonNull::new(ptr as *mut T).ok_or(Failure::OutOfMemory)?;

        Ok(Self { ptr, capacity, _marker: marker::PhantomData })
    }

    //  Deallocates the buffer, if allocated, leaving an empty instance behind.
    //
    //  The elements are not dropped.
    //
    //  #   Safety
    //
    //  -   Assumes that `allocator` is the allocator used in `try_allocate`.
    pub unsafe fn deallocate<A: Allocator>(&mut self, allocator: &A) {
        if self.capacity == 0 {
            return;
        }

        let layout = match capacity::array_layout::<T>(self.capacity) {
            Ok(layout) => layout,
            Err(_) => {
                //  Safety:
                //  -   Cannot error, it succeeded during the allocation.
                debug_assert!(false, "{} succeeded in allocation!", self.capacity);
                unsafe { hint::unreachable_unchecked() }
            },
        };

        //  Safety:
        //  -   The pointer matches the pointer of the allocation.
        //  -   The layout matches the layout of the allocation.
        unsafe { allocator.deallocate(self.ptr.as_ptr() as *mut u8, layout) };

        *self = Self::dangling();
    }

    //  Returns the number of slots.
    pub fn capacity(&self) -> usize { self.capacity }

    //  Returns a pointer to the slot at `index`.
    //
    //  #   Safety
    //
    //  -   Assumes that `index` is less than or equal to `capacity`.
    pub unsafe fn slot(&self, index: usize) -> *mut T {
        debug_assert!(index <= self.capacity);

        //  Safety:
        //  -   In bounds, or one past the end, as per pre-condition.
        unsafe { self.ptr.as_ptr().add(index) }
    }

    //  Moves the value out of the slot at `index`.
    //
    //  #   Safety
    //
    //  -   Assumes that `index` is less than `capacity`.
    //  -   Assumes that the slot is initialized; it is no longer considered so afterwards.
    pub unsafe fn read(&self, index: usize) -> T {
        debug_assert!(index < self.capacity);

        //  Safety:
        //  -   The slot is initialized, as per pre-condition.
        unsafe { ptr::read(self.slot(index)) }
    }

    //  Writes the value into the slot at `index`.
    //
    //  #   Warning
    //
    //  Does not drop the former value, if any.
    //
    //  #   Safety
    //
    //  -   Assumes that `index` is less than `capacity`.
    pub unsafe fn write(&mut self, index: usize, value: T) {
        debug_assert!(index < self.capacity);

        //  Safety:
        //  -   Exclusive access, due to &mut self.
        unsafe { ptr::write(self.slot(index), value) };
    }

    //  Returns a slice of `length` elements, starting at `start`.
    //
    //  #   Safety
    //
    //  -   Assumes that `start + length` is less than or equal to `capacity`.
    //  -   Assumes that all elements in the range are initialized.
    pub unsafe fn slice(&self, start: usize, length: usize) -> &[T] {
        debug_assert!(start + length <= self.capacity);

        //  Safety:
        //  -   The range is within bounds and initialized, as per pre-condition.
        unsafe { slice::from_raw_parts(self.slot(start), length) }
    }

    //  Returns a mutable slice of `length` elements, starting at `start`.
    //
    //  #   Safety
    //
    //  -   Assumes that `start + length` is less than or equal to `capacity`.
    //  -   Assumes that all elements in the range are initialized.
    pub unsafe fn slice_mut(&mut self, start: usize, length: usize) -> &mut [T] {
        debug_assert!(start + length <= self.capacity);

        //  Safety:
        //  -   The range is within bounds and initialized, as per pre-condition.
        //  -   Exclusive access, due to &mut self.
        unsafe { slice::from_raw_parts_mut(self.slot(start), length) }
    }

    //  Drops `length` elements in place, starting at `start`.
    //
    //  #   Safety
    //
    //  -   Assumes that `start + length` is less than or equal to `capacity`.
    //  -   Assumes that all elements in the range are initialized; they are no longer considered so afterwards.
    pub unsafe fn drop_range(&mut self, start: usize, length: usize) {
        //  Safety:
        //  -   As per pre-conditions.
        unsafe { ptr::drop_in_place(self.slice_mut(start, length) as *mut [T]) };
    }
}

//  Safety:
//  -   The buffer is uniquely owned, like a `Vec<T>`.
unsafe impl<T: Send> Send for RawBuffer<T> {}

//  Safety:
//  -   The buffer only hands out references through &self and &mut self, like a `Vec<T>`.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

#[cfg(test)]
mod tests {

use super::*;

use crate::utils::tester::*;

#[test]
fn raw_allocate_empty() {
    let allocator = TestAllocator::default();

    let buffer = RawBuffer::<u32>::try_allocate(0, &allocator);

    assert_eq!(Some(0), buffer.as_ref().ok().map(RawBuffer::capacity));
    assert!(allocator.allocations().is_empty());
}

#[test]
fn raw_allocate_zero_sized() {
    let allocator = TestAllocator::with_budget(usize::MAX);

    let buffer = RawBuffer::<()>::try_allocate(4, &allocator);

    assert_eq!(Some(Failure::ZeroSizedElement), buffer.err());
}

#[test]
fn raw_allocate_failure() {
    let allocator = TestAllocator::default();

    let buffer = RawBuffer::<u32>::try_allocate(4, &allocator);

    assert_eq!(Some(Failure::OutOfMemory), buffer.err());
}

#[test]
fn raw_allocate_bytes_overflow() {
    let allocator = TestAllocator::with_budget(usize::MAX);

    let buffer = RawBuffer::<u64>::try_allocate(usize::MAX / 2, &allocator);

    assert_eq!(Some(Failure::BytesOverflow), buffer.err());
    assert!(allocator.allocations().is_empty());
}

#[test]
fn raw_allocate_deallocate() {
    let allocator = TestAllocator::with_budget(1);

    let mut buffer = match RawBuffer::<u32>::try_allocate(4, &allocator) {
        Ok(buffer) => buffer,
        Err(failure) => panic!("{}", failure),
    };

    assert_eq!(4, buffer.capacity());
    assert_eq!(vec![16], allocator.allocation_sizes());

    unsafe {
        buffer.write(0, 1);
        buffer.write(1, 2);
        assert_eq!(&[1, 2], buffer.slice(0, 2));
        assert_eq!(2, buffer.read(1));
    }

    unsafe { buffer.deallocate(&allocator) };

    assert_eq!(0, buffer.capacity());
    assert!(allocator.allocations().is_empty());
}

#[test]
fn raw_drop_range() {
    let allocator = TestAllocator::with_budget(1);
    let count = SpyCount::zero();

    let mut buffer = match RawBuffer::<SpyElement<'_>>::try_allocate(4, &allocator) {
        Ok(buffer) => buffer,
        Err(failure) => panic!("{}", failure),
    };

    for index in 0..3 {
        unsafe { buffer.write(index, SpyElement::new(&count)) };
    }
    assert_eq!(3, count.get());

    unsafe { buffer.drop_range(1, 2) };
    assert_eq!(1, count.get());

    unsafe { buffer.drop_range(0, 1) };
    assert_eq!(0, count.get());

    unsafe { buffer.deallocate(&allocator) };
}

}
