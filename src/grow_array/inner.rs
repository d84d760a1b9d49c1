use core::alloc::Layout;
use core::ptr::NonNull;

use crate::alloc::AltAllocator;
use crate::types::ErrorReason;
use crate::types::GrowArrErr;
use crate::types::GrowArrResult;
use crate::types::LengthType;

const fn layout_array(layout: Layout, length: usize) -> GrowArrResult<Layout> {
    let lay = layout.pad_to_align();
    let Some(len) = length.checked_mul(lay.size()) else {
        return Err(GrowArrErr::new(ErrorReason::UsizeOverflow));
    };
    // Also rejects anything over isize::MAX.
    let Ok(lay) = Layout::from_size_align(len, layout.align()) else {
        return Err(GrowArrErr::new(ErrorReason::LayoutFailure));
    };
    return Ok(lay);
}

/// The slot buffer behind a `GrowArr`. It knows its capacity but nothing about
/// which slots are live, so every method takes the element type and the caller
/// keeps it consistent.
///
/// Zero sized storage (zero sized `T`) is never allocated, only counted.
pub(crate) struct Inner<A: AltAllocator, L: LengthType> {
    ptr:      NonNull<u8>,
    capacity: L,
    alloc:    A,
}

impl<A: AltAllocator, L: LengthType> Inner<A, L> {
    pub(crate) const fn new_in<T>(alloc: A) -> Self {
        return Self {
            ptr:      NonNull::<T>::dangling().cast(),
            capacity: L::ZERO_VALUE,
            alloc:    alloc,
        };
    }

    pub(crate) fn with_capacity<T>(alloc: A, capacity: L) -> GrowArrResult<Self> {
        let mut inner = Self::new_in::<T>(alloc);
        inner.resize::<T>(capacity)?;
        return Ok(inner);
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> L {
        return self.capacity;
    }

    #[inline]
    pub(crate) const fn as_ptr<T>(&self) -> *mut T {
        return self.ptr.as_ptr().cast();
    }

    fn layout_for<T>(capacity: L) -> GrowArrResult<Layout> {
        let Some(cap) = capacity.to_usize() else {
            return Err(GrowArrErr::new(ErrorReason::UsizeOverflow));
        };
        return layout_array(Layout::new::<T>(), cap);
    }

    /// Moves the buffer to exactly `capacity` slots. When shrinking, the caller
    /// must make sure no live element sits at or past `capacity`.
    ///
    /// On failure the buffer and its capacity are unchanged.
    pub(crate) fn resize<T>(&mut self, capacity: L) -> GrowArrResult<()> {
        let new_layout = Self::layout_for::<T>(capacity)?;
        let old_layout = Self::layout_for::<T>(self.capacity)?;

        if new_layout.size() == old_layout.size() {
            self.capacity = capacity;
            return Ok(());
        }

        if new_layout.size() == 0 {
            self.release::<T>();
            self.capacity = capacity;
            return Ok(());
        }

        let ret = if old_layout.size() == 0 {
            self.alloc.allocate(new_layout)
        } else if new_layout.size() > old_layout.size() {
            unsafe { self.alloc.grow(self.ptr, old_layout, new_layout) }
        } else {
            unsafe { self.alloc.shrink(self.ptr, old_layout, new_layout) }
        };

        let Ok(ptr) = ret else {
            return Err(GrowArrErr::new(ErrorReason::AllocFailure));
        };
        self.ptr = ptr.cast();
        self.capacity = capacity;
        return Ok(());
    }

    /// Gives the buffer back to the allocator. Any live elements must already
    /// have been moved out or dropped.
    pub(crate) fn release<T>(&mut self) {
        if let Ok(layout) = Self::layout_for::<T>(self.capacity) {
            if layout.size() != 0 {
                unsafe { self.alloc.deallocate(self.ptr, layout) };
            }
        }
        self.ptr = NonNull::<T>::dangling().cast();
        self.capacity = L::ZERO_VALUE;
    }
}
