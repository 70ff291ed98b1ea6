//! 4-component vector type.
//!
//! [`Vector4`] doubles as a homogeneous coordinate: growing a 3-component
//! vector through [`convert`](crate::convert::convert) fills `w` with one.

use crate::vector::impl_vector;
use crate::{Vector2, Vector3};
use vexel_core::Scalar;

/// A 4-component vector.
///
/// Access via `.x`, `.y`, `.z`, `.w` or index `[0]` to `[3]`.
///
/// # Example
///
/// ```rust
/// use vexel_math::{Float3, Float4};
///
/// let p = Float4::from_xyz(Float3::new(1.0, 2.0, 3.0), 1.0);
/// assert_eq!(p.w, 1.0);
/// assert_eq!(p.truncate(), Float3::new(1.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector4<T> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
    /// Z component
    pub z: T,
    /// W component
    pub w: T,
}

impl_vector!(Vector4, 4, [x: 0, y: 1, z: 2, w: 3]);

impl<T: Scalar> Vector4<T> {
    /// Unit X vector (1, 0, 0, 0).
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);

    /// Unit Y vector (0, 1, 0, 0).
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO);

    /// Unit Z vector (0, 0, 1, 0).
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO);

    /// Unit W vector (0, 0, 0, 1).
    pub const UNIT_W: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);

    /// Promotes a 3-component vector by appending `w`.
    #[inline]
    pub fn from_xyz(xyz: Vector3<T>, w: T) -> Self {
        Self::new(xyz.x, xyz.y, xyz.z, w)
    }

    /// Promotes a 2-component vector by appending `z` and `w`.
    #[inline]
    pub fn from_xy(xy: Vector2<T>, z: T, w: T) -> Self {
        Self::new(xy.x, xy.y, z, w)
    }

    /// Drops `w`.
    #[inline]
    pub fn truncate(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Byte4, Float4, Long2, Long4, ULong4};

    #[test]
    fn test_vec4_unit_vectors() {
        let sum = Float4::UNIT_X + Float4::UNIT_Y + Float4::UNIT_Z + Float4::UNIT_W;
        assert_eq!(sum, Float4::ONE);
    }

    #[test]
    fn test_vec4_from_xy() {
        let v = Long4::from_xy(Long2::new(1, 2), 3, 4);
        assert_eq!(v, Long4::new(1, 2, 3, 4));
    }

    #[test]
    fn test_vec4_clamp_in_place() {
        let mut v = Byte4::new(0, 50, 100, 250);
        v.clamp_scalar_in_place(10, 200);
        assert_eq!(v, Byte4::new(10, 50, 100, 200));

        let mut v = Byte4::new(0, 50, 100, 250);
        v.clamp_in_place(Byte4::new(1, 60, 0, 0), Byte4::new(2, 70, 90, 255));
        assert_eq!(v, Byte4::new(1, 60, 90, 250));
    }

    #[test]
    fn test_vec4_ulong_wraps() {
        let v = ULong4::splat(u64::MAX) + ULong4::UNIT_W;
        assert_eq!(v, ULong4::new(u64::MAX, u64::MAX, u64::MAX, 0));
    }

    #[test]
    fn test_vec4_display() {
        assert_eq!(Long4::new(1, -2, 3, -4).to_string(), "X:1 Y:-2 Z:3 W:-4");
    }
}
