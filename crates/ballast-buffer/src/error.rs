//! Buffer-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during buffer operations.
///
/// These cover recoverable resource failures and rejected arguments only.
/// Contract violations (out-of-bounds `Index` access) do not produce an
/// error — they go through the fatal sink and never return.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// Allocating a fresh backing block failed.
    AllocationFailed {
        /// Number of bytes requested.
        requested: usize,
    },
    /// Resizing the existing backing block failed. The buffer is unchanged
    /// and still valid.
    ResizeFailed {
        /// Number of bytes requested.
        requested: usize,
    },
    /// An insert position beyond the current length.
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// The buffer's length at the time of the call.
        len: usize,
    },
    /// The requested element count cannot be represented as a byte size.
    CapacityOverflow,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "unable to allocate {requested} bytes for the buffer")
            }
            Self::ResizeFailed { requested } => {
                write!(f, "unable to resize the buffer to {requested} bytes")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for buffer of length {len}")
            }
            Self::CapacityOverflow => {
                write!(f, "buffer capacity overflows the address space")
            }
        }
    }
}

impl Error for BufferError {}
