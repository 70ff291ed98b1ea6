//! Error types for vexel operations.
//!
//! Vector arithmetic itself never fails: integer components wrap and float
//! components follow IEEE-754. The few fallible entry points are the ones that
//! take caller-supplied indices or buffers.
//!
//! # Overview
//!
//! The [`Error`] enum covers:
//! - Component indexing and swizzling with an index outside `[0, N-1]`
//! - Slice constructors given fewer than `N` elements
//! - Batch operations (Gram-Schmidt) given a destination shorter than the source
//!
//! # Usage
//!
//! ```rust
//! use vexel_core::{Error, Result};
//!
//! fn component(values: &[i32; 3], index: usize) -> Result<i32> {
//!     values
//!         .get(index)
//!         .copied()
//!         .ok_or(Error::index_out_of_range(index, 3))
//! }
//!
//! assert!(component(&[1, 2, 3], 3).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `vexel-math` - indexers, slice constructors, swizzles, orthogonalization

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vector operations.
///
/// Integer division by zero is deliberately absent: it panics from the
/// underlying integer division, exactly like dividing two primitives.
///
/// # Categories
///
/// - **Bounds errors**: [`IndexOutOfRange`](Error::IndexOutOfRange)
/// - **Length errors**: [`InsufficientLength`](Error::InsufficientLength),
///   [`LengthMismatch`](Error::LengthMismatch)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A component index is outside `[0, len - 1]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vexel_core::Error;
    ///
    /// let err = Error::index_out_of_range(3, 3);
    /// assert!(err.to_string().contains("index 3"));
    /// ```
    #[error("index {index} out of range for vector with {len} components")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of components in the vector
        len: usize,
    },

    /// A buffer holds fewer elements than the vector needs.
    #[error("buffer too short: expected at least {expected} elements, got {got}")]
    InsufficientLength {
        /// Minimum number of elements required
        expected: usize,
        /// Number of elements provided
        got: usize,
    },

    /// A destination buffer is shorter than its source.
    ///
    /// Returned by Gram-Schmidt orthogonalization, which writes one output
    /// vector per input vector.
    #[error("destination holds {destination} vectors but source has {source_len}")]
    LengthMismatch {
        /// Destination length
        destination: usize,
        /// Source length
        source_len: usize,
    },
}

impl Error {
    /// Creates an [`Error::IndexOutOfRange`] error.
    #[inline]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Creates an [`Error::InsufficientLength`] error.
    #[inline]
    pub fn insufficient_length(expected: usize, got: usize) -> Self {
        Self::InsufficientLength { expected, got }
    }

    /// Creates an [`Error::LengthMismatch`] error.
    #[inline]
    pub fn length_mismatch(destination: usize, source_len: usize) -> Self {
        Self::LengthMismatch {
            destination,
            source_len,
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Returns `true` if this is a buffer length error.
    #[inline]
    pub fn is_length_error(&self) -> bool {
        matches!(
            self,
            Self::InsufficientLength { .. } | Self::LengthMismatch { .. }
        )
    }
}
