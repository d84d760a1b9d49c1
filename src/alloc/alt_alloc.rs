use core::alloc::Layout;
use core::ptr::NonNull;

use super::AllocError;

/// The rust allocator API is not stable yet, so `GrowArr` gets its memory through
/// this trait instead. It covers the four requests a growable array makes:
/// the first allocation, growing, shrinking, and the final release.
///
/// Implementors take on the safety requirements of the allocator API:
/// <https://doc.rust-lang.org/std/alloc/trait.Allocator.html>
///
/// Only `allocate` and `deallocate` are required. The default `grow` and `shrink`
/// move the data into a fresh block, which is what a reallocation-free
/// allocator would have to do anyway.
pub unsafe trait AltAllocator {
    /// Allocates a block of memory fitting `layout`.
    ///
    /// Fails with `AllocError` when no memory is available.
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError>;

    /// Releases the block at `ptr`.
    ///
    /// The block must come from this allocator and `layout` must be the
    /// layout it was last allocated, grown, or shrunk with.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Moves the block at `old_ptr` into one fitting the larger `new_layout`.
    ///
    /// On failure `old_ptr` is untouched and still valid. On success only the
    /// returned pointer may be used.
    unsafe fn grow(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        debug_assert!(new_layout.size() >= old_layout.size());
        let new = self.allocate(new_layout)?;
        unsafe { new.cast::<u8>().copy_from_nonoverlapping(old_ptr, old_layout.size()) };
        unsafe { self.deallocate(old_ptr, old_layout) };
        return Ok(new);
    }

    /// Moves the block at `old_ptr` into one fitting the smaller `new_layout`.
    /// Bytes past `new_layout.size()` are lost.
    ///
    /// On failure `old_ptr` is untouched and still valid. On success only the
    /// returned pointer may be used.
    unsafe fn shrink(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        debug_assert!(new_layout.size() <= old_layout.size());
        let new = self.allocate(new_layout)?;
        unsafe { new.cast::<u8>().copy_from_nonoverlapping(old_ptr, new_layout.size()) };
        unsafe { self.deallocate(old_ptr, old_layout) };
        return Ok(new);
    }
}

unsafe impl<A> AltAllocator for &A
where
    A: AltAllocator,
{
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        return (**self).allocate(layout);
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { (**self).deallocate(ptr, layout) };
    }

    #[inline]
    unsafe fn grow(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        return unsafe { (**self).grow(old_ptr, old_layout, new_layout) };
    }

    #[inline]
    unsafe fn shrink(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        return unsafe { (**self).shrink(old_ptr, old_layout, new_layout) };
    }
}
