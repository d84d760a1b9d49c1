use core::error::Error;
use core::fmt;

/// The broad category of a failed `GrowArr` operation.
///
/// Several `ErrorReason`s share a kind, for example every way growth can fail
/// is an `OutOfMemory`.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required target was absent.
    InvalidArgument = 1,
    /// An allocation, reallocation, or size computation failed.
    OutOfMemory,
    /// An index fell outside the range the operation accepts.
    OutOfBounds,
    /// A removal was attempted on an empty array.
    Empty,
}

/// The precise reason a `GrowArr` operation failed.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorReason {
    InvalidArgument = 1,
    CapacityOverflow,
    UsizeOverflow,
    LayoutFailure,
    AllocFailure,
    IndexOutOfBounds,
    Empty,
}

impl ErrorReason {
    pub const fn kind(self) -> ErrorKind {
        return match self {
            Self::InvalidArgument => ErrorKind::InvalidArgument,
            Self::CapacityOverflow | Self::UsizeOverflow | Self::LayoutFailure | Self::AllocFailure => {
                ErrorKind::OutOfMemory
            }
            Self::IndexOutOfBounds => ErrorKind::OutOfBounds,
            Self::Empty => ErrorKind::Empty,
        };
    }
}

/// A type alias for `Result<T, GrowArrErr>`
pub type GrowArrResult<T> = Result<T, GrowArrErr>;

/// This is used to indicate an error during a `GrowArr` operation.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GrowArrErr(ErrorReason);

impl GrowArrErr {
    pub(crate) const fn new(reason: ErrorReason) -> Self {
        return Self(reason);
    }

    pub const fn reason(self) -> ErrorReason {
        return self.0;
    }

    pub const fn kind(self) -> ErrorKind {
        return self.0.kind();
    }
}

impl Error for GrowArrErr {}

impl fmt::Display for GrowArrErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ErrorReason::InvalidArgument => f.write_str("No array was given to initialize."),
            ErrorReason::CapacityOverflow => f.write_str("Capacity type overflowed."),
            ErrorReason::UsizeOverflow => f.write_str("usize overflowed."),
            ErrorReason::LayoutFailure => f.write_str("Failed to create layout."),
            ErrorReason::AllocFailure => f.write_str("An allocation failure occurred."),
            ErrorReason::IndexOutOfBounds => f.write_str("Index out of bounds."),
            ErrorReason::Empty => f.write_str("The array is empty."),
        }
    }
}
