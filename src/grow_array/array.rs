use core::cmp;
use core::fmt;
use core::marker::PhantomData;
use core::ops;
use core::ptr;
use core::slice;

use super::inner::Inner;
use crate::alloc::AltAllocator;
#[cfg(feature = "std_alloc")]
use crate::alloc::Global;
use crate::types::ErrorReason;
use crate::types::GrowArrErr;
use crate::types::GrowArrResult;
use crate::types::LengthType;

/// The smallest capacity a live `GrowArr` will have.
pub const MIN_CAPACITY: u8 = 4;

const SHRINK_DIVISOR: u8 = 4;

/// A growable array with fallible allocation and an optional destructor hook.
///
/// * `A` supplies the memory.
/// * `L` is the type of the length, the capacity, and indices.
/// * `D` is the destructor hook. It receives every element the array discards
///   on its own, that is elements overwritten by `set` and elements still
///   resident when the array is freed. Without a hook those elements are
///   simply dropped.
pub struct GrowArr<T, A: AltAllocator, L: LengthType = usize, D: FnMut(T) = fn(T)> {
    inner:      Inner<A, L>,
    len:        L,
    destructor: Option<D>,
    _ph:        PhantomData<T>,
}

impl<T, A: AltAllocator, L: LengthType> GrowArr<T, A, L> {
    /// Creates an empty array without allocating. Its capacity is zero until
    /// the first push or reserve moves it to the floor.
    pub const fn new_in(alloc: A) -> Self {
        return Self {
            inner:      Inner::new_in::<T>(alloc),
            len:        L::ZERO_VALUE,
            destructor: None,
            _ph:        PhantomData,
        };
    }

    /// Creates an array with room for at least `min_capacity` elements and
    /// never less than `MIN_CAPACITY`.
    pub fn with_capacity_in(alloc: A, min_capacity: L) -> GrowArrResult<Self> {
        return Self::build(alloc, min_capacity, None);
    }
}

impl<T, A: AltAllocator, L: LengthType, D: FnMut(T)> GrowArr<T, A, L, D> {
    /// Like `with_capacity_in`, but the array hands discarded elements to `destructor`.
    pub fn with_destructor_in(alloc: A, min_capacity: L, destructor: D) -> GrowArrResult<Self> {
        return Self::build(alloc, min_capacity, Some(destructor));
    }

    fn build(alloc: A, min_capacity: L, destructor: Option<D>) -> GrowArrResult<Self> {
        let inner = Inner::with_capacity::<T>(alloc, cmp::max(min_capacity, Self::floor()))?;
        return Ok(Self {
            inner:      inner,
            len:        L::ZERO_VALUE,
            destructor: destructor,
            _ph:        PhantomData,
        });
    }

    /// Initializes `target` afresh, keeping only its allocator.
    ///
    /// Whatever `target` still holds is freed first, so this is how a freed
    /// array is brought back into use. Fails with `InvalidArgument` when
    /// `target` is `None`. If the allocation fails the array is left freed.
    pub fn init(target: Option<&mut Self>, min_capacity: L, destructor: Option<D>) -> GrowArrResult<()> {
        let Some(arr) = target else {
            return Err(GrowArrErr::new(ErrorReason::InvalidArgument));
        };
        arr.free();
        arr.inner.resize::<T>(cmp::max(min_capacity, Self::floor()))?;
        arr.destructor = destructor;
        return Ok(());
    }

    #[inline]
    fn floor() -> L {
        return L::from(MIN_CAPACITY);
    }

    #[inline]
    const fn slot_ptr(&self) -> *mut T {
        return self.inner.as_ptr();
    }

    /// Appends `item`, growing the storage if the array is full.
    ///
    /// If growing fails the array is left as it was and `item` is dropped.
    pub fn push(&mut self, item: T) -> GrowArrResult<()> {
        let Some(required) = self.len.checked_add(L::ONE_VALUE) else {
            return Err(GrowArrErr::new(ErrorReason::CapacityOverflow));
        };
        self.grow_to(required)?;

        let loc = unsafe { self.slot_ptr().add(self.len.as_usize()) };
        unsafe { ptr::write(loc, item) };
        self.len += L::ONE_VALUE;
        return Ok(());
    }

    /// Removes the last element and hands it back to the caller. The
    /// destructor is not invoked.
    pub fn pop(&mut self) -> GrowArrResult<T> {
        if self.len == L::ZERO_VALUE {
            return Err(GrowArrErr::new(ErrorReason::Empty));
        }
        self.len -= L::ONE_VALUE;
        let ret = unsafe { ptr::read(self.slot_ptr().add(self.len.as_usize())) };
        self.try_shrink();
        return Ok(ret);
    }

    pub fn get(&self, index: L) -> GrowArrResult<&T> {
        if index >= self.len {
            return Err(GrowArrErr::new(ErrorReason::IndexOutOfBounds));
        }
        return Ok(unsafe { &*self.slot_ptr().add(index.as_usize()) });
    }

    /// Stores `item` at `index`. The previous occupant goes to the destructor,
    /// or is dropped when there is none.
    ///
    /// If `index` is out of bounds nothing changes and `item` is dropped.
    pub fn set(&mut self, index: L, item: T) -> GrowArrResult<()> {
        if index >= self.len {
            return Err(GrowArrErr::new(ErrorReason::IndexOutOfBounds));
        }
        let old = unsafe { ptr::replace(self.slot_ptr().add(index.as_usize()), item) };
        self.discard(old);
        return Ok(());
    }

    /// Places `item` at `index`, moving everything from `index` onwards one
    /// slot to the right. An `index` equal to the length appends.
    pub fn insert(&mut self, index: L, item: T) -> GrowArrResult<()> {
        if index > self.len {
            return Err(GrowArrErr::new(ErrorReason::IndexOutOfBounds));
        }
        let Some(required) = self.len.checked_add(L::ONE_VALUE) else {
            return Err(GrowArrErr::new(ErrorReason::CapacityOverflow));
        };
        self.grow_to(required)?;

        let len = self.len.as_usize();
        let index = index.as_usize();
        unsafe {
            let loc = self.slot_ptr().add(index);
            ptr::copy(loc, loc.add(1), len - index);
            ptr::write(loc, item);
        }
        self.len += L::ONE_VALUE;
        return Ok(());
    }

    /// Takes the element at `index` out of the array, closing the gap, and hands
    /// it back to the caller. The destructor is not invoked.
    pub fn remove(&mut self, index: L) -> GrowArrResult<T> {
        if self.len == L::ZERO_VALUE {
            return Err(GrowArrErr::new(ErrorReason::Empty));
        }
        if index >= self.len {
            return Err(GrowArrErr::new(ErrorReason::IndexOutOfBounds));
        }

        let len = self.len.as_usize();
        let index = index.as_usize();
        let ret = unsafe {
            let loc = self.slot_ptr().add(index);
            let ret = ptr::read(loc);
            ptr::copy(loc.add(1), loc, len - index - 1);
            ret
        };
        self.len -= L::ONE_VALUE;
        self.try_shrink();
        return Ok(ret);
    }

    /// Makes room for at least `additional` more elements using the same
    /// doubling as `push`.
    pub fn reserve(&mut self, additional: L) -> GrowArrResult<()> {
        let Some(required) = self.len.checked_add(additional) else {
            return Err(GrowArrErr::new(ErrorReason::CapacityOverflow));
        };
        return self.grow_to(required);
    }

    /// Pushes every item from `items` in order. Stops at the first failure,
    /// keeping whatever was pushed before it.
    pub fn extend_from_iter<I>(&mut self, items: I) -> GrowArrResult<()>
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.push(item)?;
        }
        return Ok(());
    }

    /// Hands every resident element to the destructor in index order (or drops
    /// them), then releases the storage.
    ///
    /// Afterwards the array is empty, has no capacity, and no destructor. It
    /// can be brought back with `init`. Freeing a freed array does nothing.
    pub fn free(&mut self) {
        let len = self.len.as_usize();
        let base = self.slot_ptr();
        self.len = L::ZERO_VALUE;

        match self.destructor.take() {
            Some(mut destroy) => {
                for i in 0..len {
                    destroy(unsafe { ptr::read(base.add(i)) });
                }
            }
            None => unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base, len)) },
        }
        self.inner.release::<T>();
    }

    fn discard(&mut self, item: T) {
        if let Some(destroy) = self.destructor.as_mut() {
            destroy(item);
        }
    }

    fn grow_to(&mut self, required: L) -> GrowArrResult<()> {
        let capacity = self.capacity();
        if capacity >= required {
            return Ok(());
        }

        let mut new_cap = cmp::max(capacity, Self::floor());
        while new_cap < required {
            let Some(doubled) = new_cap.checked_mul(L::from(2)) else {
                return Err(GrowArrErr::new(ErrorReason::CapacityOverflow));
            };
            new_cap = doubled;
        }
        return self.inner.resize::<T>(new_cap);
    }

    fn try_shrink(&mut self) {
        let capacity = self.capacity();
        if capacity <= Self::floor() || self.len > capacity / L::from(SHRINK_DIVISOR) {
            return;
        }
        let new_cap = cmp::max(capacity / L::from(2), Self::floor());
        // A refused shrink leaves the array valid at its current capacity.
        let _ = self.inner.resize::<T>(new_cap);
    }

    #[inline]
    pub const fn len(&self) -> L {
        return self.len;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.len == L::ZERO_VALUE;
    }

    #[inline]
    pub const fn capacity(&self) -> L {
        return self.inner.capacity();
    }

    /// The length of `arr`, or zero when there is no array.
    pub fn len_of(arr: Option<&Self>) -> L {
        return arr.map_or(L::ZERO_VALUE, Self::len);
    }

    /// The capacity of `arr`, or zero when there is no array.
    pub fn capacity_of(arr: Option<&Self>) -> L {
        return arr.map_or(L::ZERO_VALUE, Self::capacity);
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.slot_ptr(), self.len.as_usize()) }
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        return self.as_slice().iter();
    }
}

#[cfg(feature = "std_alloc")]
impl<T> GrowArr<T, Global> {
    pub const fn new() -> Self {
        return Self::new_in(Global);
    }

    pub fn with_capacity(min_capacity: usize) -> GrowArrResult<Self> {
        return Self::with_capacity_in(Global, min_capacity);
    }
}

#[cfg(feature = "std_alloc")]
impl<T, D: FnMut(T)> GrowArr<T, Global, usize, D> {
    pub fn with_destructor(min_capacity: usize, destructor: D) -> GrowArrResult<Self> {
        return Self::with_destructor_in(Global, min_capacity, destructor);
    }
}

#[cfg(feature = "std_alloc")]
impl<T> Default for GrowArr<T, Global> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T, A: AltAllocator, L: LengthType, D: FnMut(T)> Drop for GrowArr<T, A, L, D> {
    fn drop(&mut self) {
        self.free();
    }
}

impl<T, A: AltAllocator, L: LengthType, D: FnMut(T)> ops::Index<L> for GrowArr<T, A, L, D> {
    type Output = T;

    fn index(&self, index: L) -> &T {
        let Ok(item) = self.get(index) else {
            panic!("index out of bounds for a GrowArr of length {}", self.len.as_usize());
        };
        return item;
    }
}

impl<'a, T, A: AltAllocator, L: LengthType, D: FnMut(T)> IntoIterator for &'a GrowArr<T, A, L, D> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}

impl<T: fmt::Debug, A: AltAllocator, L: LengthType, D: FnMut(T)> fmt::Debug for GrowArr<T, A, L, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowArr")
            .field("len", &self.len.as_usize())
            .field("capacity", &self.capacity().as_usize())
            .field("items", &self.as_slice())
            .finish()
    }
}
