//! Conversions across the whole vector family.
//!
//! One function, [`convert`], covers every pairing of arity and element
//! type. It applies two independent rules:
//!
//! - **Arity**: components present in both vectors are carried over in
//!   order. Extra source components are dropped. Extra destination
//!   components are set to one, so a 3-component point converted to a
//!   4-component vector becomes a homogeneous point with `w = 1`.
//! - **Precision**: each component goes through `as` (via
//!   [`AsPrimitive`]). Float to integer truncates toward zero and saturates
//!   at the target bounds (NaN becomes 0). Integer to integer keeps the low
//!   bits. Float to narrower float rounds to nearest.
//!
//! # Example
//!
//! ```rust
//! use vexel_math::{Byte2, Float3, Int4};
//!
//! let p = Float3::new(1.9, -2.5, 300.0);
//!
//! let q: Int4 = p.convert();
//! assert_eq!(q, Int4::new(1, -2, 300, 1));
//!
//! let b: Byte2 = Int4::new(256 + 7, -1, 0, 0).convert();
//! assert_eq!(b, Byte2::new(7, 255));
//! ```

use crate::vector::Vector;
use vexel_core::{AsPrimitive, Scalar};

/// Converts any vector of the family into any other.
///
/// See the [module documentation](self) for the rules.
#[inline]
pub fn convert<V, W>(value: V) -> W
where
    V: Vector,
    W: Vector,
    V::Scalar: AsPrimitive<W::Scalar>,
{
    W::from_fn(|i| {
        if i < V::DIM {
            value.component(i).as_()
        } else {
            <W::Scalar as Scalar>::ONE
        }
    })
}
