mod array;
mod inner;

pub use array::GrowArr;
pub use array::MIN_CAPACITY;
