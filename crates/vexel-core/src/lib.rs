//! # vexel-core
//!
//! Core types shared by every vexel vector:
//!
//! - [`Scalar`], [`SignedScalar`], [`FloatScalar`] - Component element types and
//!   their arithmetic kernel (wrapping for integers, IEEE-754 for floats)
//! - [`near_equal`] and friends - Tolerant float comparison used by vector equality
//! - [`Error`], [`Result`] - Failure modes of indexers, slice constructors and
//!   batch operations
//!
//! ## Crate Structure
//!
//! ```text
//! vexel-core (this crate)
//!    ^
//!    |
//!    +-- vexel-math (Vector2/3/4, geometry, conversion matrix)
//!    +-- vexel-bench (benchmarks)
//! ```
//!
//! ## Conversions
//!
//! Element casts between scalar types go through [`num_traits::AsPrimitive`],
//! re-exported here, which gives Rust `as` semantics for every pair of the
//! eleven element types (including `f16` via `half`).

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod scalar;

// Re-exports for convenience
pub use error::*;
pub use half::f16;
pub use num_traits::AsPrimitive;
pub use scalar::{
    is_zero, near_equal, near_equal_f16, near_equal_f64, FloatScalar, Scalar, SignedScalar,
    MAX_ULPS, ZERO_TOLERANCE, ZERO_TOLERANCE_F16, ZERO_TOLERANCE_F64,
};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use vexel_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::scalar::{FloatScalar, Scalar, SignedScalar};
    pub use half::f16;
    pub use num_traits::AsPrimitive;
}
