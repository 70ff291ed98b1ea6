//! # vexel-math
//!
//! Fixed-size numeric vectors over every common element type.
//!
//! - [`Vector2`], [`Vector3`], [`Vector4`] - 2, 3 and 4 component vectors,
//!   generic over a [`Scalar`] element
//! - [`aliases`] - `Byte3`, `Int2`, `Float4`, `Half3` and the rest of the family
//! - [`geometry`] - dot, lerp, reflect, clamp, Gram-Schmidt and friends
//! - [`convert`] - one conversion between any two vectors of the family
//!
//! # Numeric Semantics
//!
//! Integer vectors wrap on overflow (`u8` `255 + 1 == 0`) and panic on
//! division by zero. Float vectors follow IEEE-754. Float vectors compare
//! equal within a small tolerance; integer vectors compare exactly and are
//! the only ones implementing [`Eq`] and [`Hash`](std::hash::Hash).
//!
//! # Usage
//!
//! ```rust
//! use vexel_math::prelude::*;
//!
//! let a = Float3::new(1.0, 0.0, 0.0);
//! let b = Float3::new(0.0, 1.0, 0.0);
//! assert_eq!(a.cross(b), Float3::UNIT_Z);
//! assert_eq!(a.lerp(b, 0.5), Float3::new(0.5, 0.5, 0.0));
//!
//! let pixel = Byte4::new(250, 10, 0, 255) + 10;
//! assert_eq!(pixel, Byte4::new(4, 20, 10, 9));
//!
//! let h: Float4 = Int3::new(1, 2, 3).convert();
//! assert_eq!(h, Float4::new(1.0, 2.0, 3.0, 1.0));
//! ```
//!
//! # Features
//!
//! - `glam` (default) - `From` conversions with `glam` vectors
//! - `serde` - `Serialize`/`Deserialize` on every vector
//!
//! # Dependencies
//!
//! - [`vexel_core`] - Scalar kernel and errors
//! - [`approx`] - Tolerant comparison traits for tests

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod vector;
mod vec2;
mod vec3;
mod vec4;
pub mod aliases;
pub mod convert;
pub mod geometry;
pub mod interp;
#[cfg(feature = "glam")]
mod glam_interop;

pub use aliases::*;
pub use geometry::{orthogonalize, orthonormalize};
pub use vec2::Vector2;
pub use vec3::Vector3;
pub use vec4::Vector4;
pub use vector::Vector;

pub use vexel_core::{
    f16, near_equal, near_equal_f16, near_equal_f64, AsPrimitive, Error, FloatScalar, Result,
    Scalar, SignedScalar,
};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use vexel_math::prelude::*;
/// ```
pub mod prelude {
    pub use crate::aliases::*;
    pub use crate::geometry::{orthogonalize, orthonormalize};
    pub use crate::{Vector, Vector2, Vector3, Vector4};
    pub use vexel_core::prelude::*;
}
