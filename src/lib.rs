//! # Growable Array
//!
//! The `grow_arr` crate provides a `#[no_std]` growable array, `GrowArr`, that grows and
//! shrinks its backing storage on its own and can optionally take ownership of its elements
//! through a caller-supplied destructor hook.
//!
//! Every operation that can fail returns a `GrowArrResult`. Allocation failures are reported
//! instead of aborting, out of range indices are reported instead of panicking, and removing
//! from an empty array is reported as its own error kind.
//!
//! Storage follows a fixed policy. Capacity never drops below [`MIN_CAPACITY`] while the
//! array is live, it doubles when full, and it halves once occupancy falls to a quarter.
//! A failed shrink is ignored since the array stays correct at the larger capacity.
//!
//! The destructor hook is invoked only when the array itself discards an element: when `set`
//! overwrites a slot, or when `free` (or drop) tears the array down. Elements handed back
//! through `pop` or `remove` belong to the caller again and never reach the hook.
//!
//! The type used for the length, capacity, and indexing operations can be customized, and memory
//! comes from an `AltAllocator`, a stand-in for the unstable `Allocator` trait.
//!
//! # Feature Flags
//! * `std_alloc` - (default) Enables `Global`, an `AltAllocator` backed by the global
//!   allocator, along with the `with_capacity` and `with_destructor` constructors.
//!
//! * `alloc_api2` - Enables `Api2`, an adapter that lets any `allocator_api2` allocator
//!   back a `GrowArr`.

#![no_std]

#[cfg(feature = "std_alloc")]
extern crate alloc as rust_alloc;

#[cfg(test)]
extern crate std;

pub mod alloc;
mod grow_array;
pub mod types;

pub use grow_array::GrowArr;
pub use grow_array::MIN_CAPACITY;
