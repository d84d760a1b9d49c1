use core::alloc::Layout;
use core::ptr::NonNull;

use rust_alloc::alloc;

use super::AllocError;
use super::AltAllocator;

/// Hands every request straight to the global allocator.
///
/// `grow` and `shrink` map onto `realloc`, so the data is only moved when
/// the global allocator cannot resize the block in place.
#[derive(Debug, Default, Copy, Clone)]
pub struct Global;

unsafe impl AltAllocator for Global {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        // The global allocator rejects zero sized layouts. `GrowArr` never
        // asks for one, it tracks zero sized storage without allocating.
        if layout.size() == 0 {
            return Err(AllocError);
        }
        let ptr = unsafe { alloc::alloc(layout) };
        let Some(ptr) = NonNull::new(ptr) else {
            return Err(AllocError);
        };
        return Ok(NonNull::slice_from_raw_parts(ptr, layout.size()));
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { alloc::dealloc(ptr.as_ptr(), layout) };
    }

    unsafe fn grow(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        return unsafe { realloc(old_ptr, old_layout, new_layout) };
    }

    unsafe fn shrink(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        return unsafe { realloc(old_ptr, old_layout, new_layout) };
    }
}

unsafe fn realloc(old_ptr: NonNull<u8>, old_layout: Layout, new_layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
    if new_layout.size() == 0 || new_layout.align() != old_layout.align() {
        return Err(AllocError);
    }
    let new = unsafe { alloc::realloc(old_ptr.as_ptr(), old_layout, new_layout.size()) };
    let Some(new) = NonNull::new(new) else {
        return Err(AllocError);
    };
    return Ok(NonNull::slice_from_raw_parts(new, new_layout.size()));
}
