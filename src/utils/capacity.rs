//! Capacity computations shared by the containers.
//!
//! All containers follow the same growth policy: an empty container starts at a capacity of 1, and the capacity then
//! doubles until it accomodates the number of elements required. Every computation is checked, so that overflowing
//! is reported as a `Failure` rather than wrapping around.

use super::root::{cmp, mem};

use crate::allocator::Layout;
use crate::failure::{Failure, Result};

//  Returns the capacity to grow to, in order to accomodate `required` elements.
//
//  Returns `current` if it is already sufficient.
pub fn grown(current: usize, required: usize) -> Result<usize> {
    if current >= required {
        return Ok(current);
    }

    let mut result = cmp::max(current, 1);

    while result < required {
        result = result.checked_mul(2).ok_or(Failure::ElementsOverflow)?;
    }

    Ok(result)
}

//  Returns the number of elements required to accomodate one more element.
pub fn one_more(length: usize) -> Result<usize> {
    length.checked_add(1).ok_or(Failure::ElementsOverflow)
}

//  Computes the layout of an array of `capacity` elements of type T.
//
//  #   Fails
//
//  -   If the necessary size overflows, or exceeds `isize::MAX`.
pub fn array_layout<T>(capacity: usize) -> Result<Layout> {
    let size = mem::size_of::<T>();
    let alignment = mem::align_of::<T>();

    let bytes = capacity.checked_mul(size).ok_or(Failure::BytesOverflow)?;

    Layout::from_size_align(bytes, alignment).map_err(|_| Failure::BytesOverflow)
}

//  Checks that T is not zero-sized.
pub fn check_element_size<T>() -> Result<()> {
    if mem::size_of::<T>() == 0 {
        Err(Failure::ZeroSizedElement)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {

use super::*;

#[test]
fn capacity_grown_from_empty() {
    assert_eq!(Ok(0), grown(0, 0));
    assert_eq!(Ok(1), grown(0, 1));
    assert_eq!(Ok(2), grown(0, 2));
    assert_eq!(Ok(4), grown(0, 3));
    assert_eq!(Ok(8), grown(0, 5));
    assert_eq!(Ok(1024), grown(0, 1000));
}

#[test]
fn capacity_grown_from_non_power_of_2() {
    assert_eq!(Ok(3), grown(3, 2));
    assert_eq!(Ok(3), grown(3, 3));
    assert_eq!(Ok(6), grown(3, 4));
    assert_eq!(Ok(12), grown(3, 7));
}

#[test]
fn capacity_grown_overflow() {
    let half = usize::MAX / 2 + 1;

    assert_eq!(Ok(half), grown(half, half));
    assert_eq!(Err(Failure::ElementsOverflow), grown(half, half + 1));
    assert_eq!(Err(Failure::ElementsOverflow), grown(1, usize::MAX));
}

#[test]
fn capacity_one_more() {
    assert_eq!(Ok(1), one_more(0));
    assert_eq!(Ok(8), one_more(7));
    assert_eq!(Err(Failure::ElementsOverflow), one_more(usize::MAX));
}

#[test]
fn capacity_array_layout() {
    fn array_layout_size<T>(capacity: usize) -> Result<usize> {
        array_layout::<T>(capacity).map(|layout| {
            assert_eq!(mem::align_of::<T>(), layout.align());
            layout.size()
        })
    }

    assert_eq!(Ok(0), array_layout_size::<u32>(0));
    assert_eq!(Ok(12), array_layout_size::<u32>(3));
    assert_eq!(Ok(24), array_layout_size::<u64>(3));
    assert_eq!(Ok(48), array_layout_size::<(u64, u8)>(3));

    assert_eq!(Err(Failure::BytesOverflow), array_layout_size::<u64>(usize::MAX / 4));
    assert_eq!(Err(Failure::BytesOverflow), array_layout_size::<u32>(usize::MAX / 4));
}

#[test]
fn capacity_check_element_size() {
    assert_eq!(Ok(()), check_element_size::<u8>());
    assert_eq!(Err(Failure::ZeroSizedElement), check_element_size::<()>());
}

}
