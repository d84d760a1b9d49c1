use core::cmp;
use core::ops;

/// The integer type a `GrowArr` uses for its length, its capacity, and its indices.
///
/// Growth measures overflow against `MAX_VALUE`, so a narrow type also caps how far
/// an array can grow. For example a `u8` array stops doubling at 128 slots.
///
/// It's marked as unsafe since your type must be continuous and ordered
/// under common operations such as addition multiplication like integers.
pub unsafe trait LengthType
where
    Self: Copy,
    Self: cmp::Ord,
    Self: ops::Add<Output = Self>,
    Self: ops::AddAssign,
    Self: ops::Sub<Output = Self>,
    Self: ops::SubAssign,
    Self: ops::Div<Output = Self>,
    Self: From<u8>,
{
    const MAX_VALUE: Self;
    const ONE_VALUE: Self;
    const ZERO_VALUE: Self;

    /// Converts to `usize`, returning `None` if the value does not fit.
    fn to_usize(self) -> Option<usize>;

    /// Converts to `usize` by truncation. Only used on values already known to fit,
    /// such as a length no greater than an allocated capacity.
    fn as_usize(self) -> usize;

    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_length_type {
    ($($typ:ty),+) => {$(
        unsafe impl LengthType for $typ {
            const MAX_VALUE: Self = Self::MAX;
            const ONE_VALUE: Self = 1;
            const ZERO_VALUE: Self = 0;

            #[inline]
            fn to_usize(self) -> Option<usize> {
                return usize::try_from(self).ok();
            }

            #[inline(always)]
            fn as_usize(self) -> usize {
                return self as usize;
            }

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                return self.checked_add(rhs);
            }

            #[inline]
            fn checked_mul(self, rhs: Self) -> Option<Self> {
                return self.checked_mul(rhs);
            }
        }
    )+};
}

impl_length_type!(usize, u8, u16, u32, u64, u128);
