use core::alloc::Layout;
use core::ptr::NonNull;

use allocator_api2::alloc::Allocator;

use super::AllocError;
use super::AltAllocator;

/// Lets an allocator from the `allocator_api2` crate back a `GrowArr`.
///
/// A newtype rather than a blanket implementation, so it can coexist with
/// `Global` and the `&A` implementation of `AltAllocator`.
#[derive(Debug, Default, Copy, Clone)]
pub struct Api2<A>(pub A);

impl<A: Allocator> Api2<A> {
    pub const fn new(alloc: A) -> Self {
        return Self(alloc);
    }

    pub fn into_inner(self) -> A {
        return self.0;
    }
}

unsafe impl<A: Allocator> AltAllocator for Api2<A> {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        return self.0.allocate(layout).map_err(|_| AllocError);
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { self.0.deallocate(ptr, layout) };
    }

    #[inline]
    unsafe fn grow(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        let ret = unsafe { self.0.grow(old_ptr, old_layout, new_layout) };
        return ret.map_err(|_| AllocError);
    }

    #[inline]
    unsafe fn shrink(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        let ret = unsafe { self.0.shrink(old_ptr, old_layout, new_layout) };
        return ret.map_err(|_| AllocError);
    }
}
