//! 2-component vector type.

use crate::vector::impl_vector;
use crate::Vector3;
use vexel_core::Scalar;

/// A 2-component vector.
///
/// Access via `.x`, `.y` or index `[0]`, `[1]`.
///
/// # Example
///
/// ```rust
/// use vexel_math::UShort2;
///
/// let v = UShort2::new(3, 4);
/// assert_eq!(v.length_squared(), 25);
/// assert_eq!(v.extend(1).z, 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector2<T> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
}

impl_vector!(Vector2, 2, [x: 0, y: 1]);

impl<T: Scalar> Vector2<T> {
    /// Unit X vector (1, 0).
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO);

    /// Unit Y vector (0, 1).
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE);

    /// Appends `z`.
    #[inline]
    pub fn extend(self, z: T) -> Vector3<T> {
        Vector3::new(self.x, self.y, z)
    }
}
