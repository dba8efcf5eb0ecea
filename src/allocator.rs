//! Allocator.
//!
//! The `Allocator` trait allows a user to customize allocation on a per instance basis, without depending on the
//! `alloc` crate.
//!
//! Every container of this library obtains its backing storage through an `Allocator`, and returns it to the very
//! same instance.
use super::root::alloc;

/// Layout, re-exported.
pub type Layout = alloc::Layout;

/// Allocator
pub trait Allocator {
    /// Allocates memory as per the size and alignment requirements.
    ///
    /// May return a null pointer if the allocation cannot be satisfied.
    ///
    /// #   Safety
    ///
    /// -   Assumes that the size of the Layout is non-zero.
    unsafe fn allocate(&self, layout: Layout) -> *mut u8;

    /// Deallocates memory.
    ///
    /// #   Safety
    ///
    /// -   Assumes that `ptr` was allocated by `self.allocate`.
    /// -   Assumes that `ptr` was not already deallocated.
    /// -   Assumes that `layout` matches the layout with which `ptr` was allocated.
    unsafe fn deallocate(&self, ptr: *mut u8, layout: Layout);
}

/// A shared reference to an `Allocator` is an `Allocator`, allowing several containers to draw from one instance.
impl<A: Allocator + ?Sized> Allocator for &A {
    unsafe fn allocate(&self, layout: Layout) -> *mut u8 {
        //  Safety:
        //  -   Forwarding.
        unsafe { (**self).allocate(layout) }
    }

    unsafe fn deallocate(&self, ptr: *mut u8, layout: Layout) {
        //  Safety:
        //  -   Forwarding.
        unsafe { (**self).deallocate(ptr, layout) }
    }
}

/// DefaultAllocator
///
/// A default implementation of the `Allocator` trait, relying on the global allocator.
#[cfg(feature = "with-std")]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DefaultAllocator;

#[cfg(feature = "with-std")]
impl Allocator for DefaultAllocator {
    unsafe fn allocate(&self, layout: Layout) -> *mut u8 {
        //  Safety:
        //  -   The size of `layout` is non-zero, as per pre-condition.
        unsafe { alloc::alloc(layout) }
    }

    unsafe fn deallocate(&self, ptr: *mut u8, layout: Layout) {
        //  Safety:
        //  -   `ptr` and `layout` match a live allocation, as per pre-condition.
        unsafe { alloc::dealloc(ptr, layout) }
    }
}
