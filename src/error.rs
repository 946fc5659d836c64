//! Errors reported by the containers in this crate.

use core::fmt;

/// Why an operation on a [`crate::FixedArray`] or [`crate::GrowableArray`] was rejected.
///
/// A rejected operation never partially applies: the container is left exactly as it was.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArrayError {
    /// Access or mutation at an index past the end of the container.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The container length at the time of the call.
        len: usize,
    },
    /// A literal sequence did not have the exact length a fixed-length container requires.
    SizeMismatch {
        /// The required length.
        expected: usize,
        /// The length that was supplied.
        actual: usize,
    },
    /// Removal from a container that holds no elements.
    EmptyContainer,
}

impl ArrayError {
    /// Returns `Ok(index)` if `index < len`, otherwise [`Self::IndexOutOfBounds`].
    pub(crate) fn check_index(index: usize, len: usize) -> Result<usize, Self> {
        if index < len {
            Ok(index)
        } else {
            log::debug!("index {} rejected, length is {}", index, len);
            Err(Self::IndexOutOfBounds { index, len })
        }
    }

    /// Returns `Ok(())` if `actual == expected`, otherwise [`Self::SizeMismatch`].
    pub(crate) fn check_size(expected: usize, actual: usize) -> Result<(), Self> {
        if actual == expected {
            Ok(())
        } else {
            log::debug!("sequence of {} elements rejected, {} required", actual, expected);
            Err(Self::SizeMismatch { expected, actual })
        }
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index out of array bounds: index {index}, length {len}")
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "sequence length {actual} does not match array length {expected}")
            }
            Self::EmptyContainer => write!(f, "cannot remove an element from an empty array"),
        }
    }
}

impl core::error::Error for ArrayError {}
