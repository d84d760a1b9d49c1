//! Contains the allocator types and traits used by `GrowArr`. The most important being
//! the `AltAllocator` trait, and the `AllocError` type.
//!
//! If built with the `std_alloc` feature, a wrapper called `Global` is also
//! provided. With the `alloc_api2` feature, `Api2` adapts any allocator from
//! the `allocator_api2` crate.

#[cfg(feature = "alloc_api2")]
mod alloc_api2;
mod alt_alloc;
#[cfg(feature = "std_alloc")]
mod std_alloc;

use core::error::Error;
use core::fmt;

#[cfg(feature = "alloc_api2")]
pub use alloc_api2::Api2;
pub use alt_alloc::AltAllocator;
#[cfg(feature = "std_alloc")]
pub use std_alloc::Global;

/// Returned by an `AltAllocator` when it cannot satisfy a request.
///
/// `GrowArr` turns this into an `OutOfMemory` error, or drops it entirely
/// when the failed request was only an attempt to shrink.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AllocError;

impl Error for AllocError {}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("The allocator could not satisfy the request.")
    }
}
