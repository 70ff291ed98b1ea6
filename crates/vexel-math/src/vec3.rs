//! 3-component vector type.
//!
//! [`Vector3`] is the workhorse of the family: positions, directions and
//! normals in 3D, plus the only arity with a [`cross`](Vector3::cross)
//! product.
//!
//! # Usage
//!
//! ```rust
//! use vexel_math::{Float3, Int3};
//!
//! let a = Float3::new(1.0, 0.0, 0.0);
//! let b = Float3::new(0.0, 1.0, 0.0);
//! assert_eq!(a.cross(b), Float3::UNIT_Z);
//!
//! let v = Int3::new(1, 2, 3) * 2;
//! assert_eq!(v, Int3::new(2, 4, 6));
//! ```

use crate::vector::impl_vector;
use crate::{Vector2, Vector4};
use vexel_core::{FloatScalar, Scalar, SignedScalar};

/// A 3-component vector.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z` or index `[0]`, `[1]`, `[2]`. The fallible
/// [`get`](Vector3::get) and [`set`](Vector3::set) report an out-of-range
/// index as an error instead of panicking.
///
/// # Example
///
/// ```rust
/// use vexel_math::Vector3;
///
/// let mut v = Vector3::new(1u8, 2, 3);
/// assert_eq!(v.x, 1);
/// assert_eq!(v[2], 3);
/// v.set(1, 20).unwrap();
/// assert_eq!(v.y, 20);
/// assert!(v.get(3).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3<T> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
    /// Z component
    pub z: T,
}

impl_vector!(Vector3, 3, [x: 0, y: 1, z: 2]);

impl<T: Scalar> Vector3<T> {
    /// Unit X vector (1, 0, 0).
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);

    /// Unit Y vector (0, 1, 0).
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);

    /// Unit Z vector (0, 0, 1).
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);

    /// Promotes a 2-component vector by appending `z`.
    #[inline]
    pub fn from_xy(xy: Vector2<T>, z: T) -> Self {
        Self::new(xy.x, xy.y, z)
    }

    /// Drops `z`.
    #[inline]
    pub fn truncate(self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// Appends `w`.
    #[inline]
    pub fn extend(self, w: T) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, w)
    }

    /// Cross product.
    ///
    /// Wraps for integer components like every other kernel operation.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        crate::geometry::cross(self, other)
    }
}

impl<T: FloatScalar> Vector3<T> {
    /// Up (0, 1, 0).
    pub const UP: Self = Self::new(T::ZERO, T::ONE, T::ZERO);

    /// Down (0, -1, 0).
    pub const DOWN: Self = Self::new(T::ZERO, <T as SignedScalar>::NEG_ONE, T::ZERO);

    /// Left (-1, 0, 0).
    pub const LEFT: Self = Self::new(<T as SignedScalar>::NEG_ONE, T::ZERO, T::ZERO);

    /// Right (1, 0, 0).
    pub const RIGHT: Self = Self::new(T::ONE, T::ZERO, T::ZERO);

    /// Forward in a left-handed coordinate system (0, 0, 1).
    pub const FORWARD_LH: Self = Self::new(T::ZERO, T::ZERO, T::ONE);

    /// Forward in a right-handed coordinate system (0, 0, -1).
    pub const FORWARD_RH: Self = Self::new(T::ZERO, T::ZERO, <T as SignedScalar>::NEG_ONE);

    /// Backward in a left-handed coordinate system (0, 0, -1).
    pub const BACKWARD_LH: Self = Self::new(T::ZERO, T::ZERO, <T as SignedScalar>::NEG_ONE);

    /// Backward in a right-handed coordinate system (0, 0, 1).
    pub const BACKWARD_RH: Self = Self::new(T::ZERO, T::ZERO, T::ONE);
}

#[cfg(test)]
mod tests {
    use crate::{Byte3, Double3, Float3, Half3, Int3, SByte3};
    use approx::assert_relative_eq;
    use vexel_core::f16;

    #[test]
    fn test_vec3_new() {
        let v = Float3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_splat() {
        assert_eq!(Int3::splat(5), Int3::new(5, 5, 5));
    }

    #[test]
    fn test_vec3_dot() {
        let a = Float3::new(1.0, 2.0, 3.0);
        let b = Float3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_vec3_dot_truncates_bytes() {
        // 16*16*3 = 768 does not fit in a byte
        let v = Byte3::splat(16);
        assert_eq!(v.dot(v), 0);
    }

    #[test]
    fn test_vec3_cross() {
        assert_eq!(Float3::UNIT_X.cross(Float3::UNIT_Y), Float3::UNIT_Z);
        assert_eq!(Float3::UNIT_Y.cross(Float3::UNIT_X), -Float3::UNIT_Z);
        assert_eq!(
            Int3::new(1, 2, 3).cross(Int3::new(4, 5, 6)),
            Int3::new(-3, 6, -3)
        );
    }

    #[test]
    fn test_vec3_ops() {
        let a = Float3::new(1.0, 2.0, 3.0);
        let b = Float3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Float3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Float3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Float3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Float3::new(2.0, 4.0, 6.0));
        assert_eq!(b / a, Float3::new(4.0, 2.5, 2.0));
        assert_eq!(12.0 / b, Float3::new(3.0, 2.4, 2.0));
        assert_eq!(-a, Float3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_vec3_assign_ops() {
        let mut v = Int3::new(1, 2, 3);
        v += Int3::ONE;
        v *= 3;
        v -= 1;
        v /= Int3::new(1, 2, 11);
        assert_eq!(v, Int3::new(5, 4, 1));
    }

    #[test]
    fn test_vec3_byte_wraps() {
        let v = Byte3::new(255, 0, 128);
        assert_eq!(v + 1, Byte3::new(0, 1, 129));
        assert_eq!(v - 1, Byte3::new(254, 255, 127));
        assert_eq!(v * 2, Byte3::new(254, 0, 0));
        assert_eq!(-SByte3::splat(i8::MIN), SByte3::splat(i8::MIN));
    }

    #[test]
    #[should_panic]
    fn test_vec3_integer_divide_by_zero() {
        let _ = Int3::ONE / Int3::new(1, 0, 1);
    }

    #[test]
    fn test_vec3_float_divide_by_zero() {
        let v = Float3::new(1.0, -1.0, 0.0) / 0.0;
        assert_eq!(v.x, f32::INFINITY);
        assert_eq!(v.y, f32::NEG_INFINITY);
        assert!(v.z.is_nan());
        assert!(v.is_nan());
        assert!(!v.is_finite());
    }

    #[test]
    fn test_vec3_index() {
        let mut v = Float3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v[2], 3.0);
        v[2] = 9.0;
        assert_eq!(v.z, 9.0);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_vec3_index_panics() {
        let v = Int3::ZERO;
        let _ = v[3];
    }

    #[test]
    fn test_vec3_get_set() {
        let mut v = Int3::new(7, 8, 9);
        assert_eq!(v.get(2).unwrap(), 9);
        assert!(v.set(0, 70).is_ok());
        assert_eq!(v.x, 70);

        let err = v.get(3).unwrap_err();
        assert!(err.is_bounds_error());
        assert!(v.set(3, 1).is_err());
        assert_eq!(v, Int3::new(70, 8, 9));
    }

    #[test]
    fn test_vec3_get_set_u32() {
        let mut v = Int3::new(7, 8, 9);
        assert_eq!(v.get_u32(1).unwrap(), 8);
        assert!(v.set_u32(2, 90).is_ok());
        assert_eq!(v.z, 90);

        let err = v.get_u32(3).unwrap_err();
        assert_eq!(err, crate::Error::index_out_of_range(3, 3));
        assert!(v.set_u32(u32::MAX, 1).is_err());
        assert_eq!(v, Int3::new(7, 8, 90));
    }

    #[test]
    fn test_vec3_from_slice() {
        assert_eq!(Int3::from_slice(&[1, 2, 3, 4]).unwrap(), Int3::new(1, 2, 3));
        let err = Int3::from_slice(&[1, 2]).unwrap_err();
        assert!(err.is_length_error());
        assert!(Int3::try_from(&[1, 2, 3][..]).is_ok());
    }

    #[test]
    fn test_vec3_promotion() {
        let v = Float3::from_xy(crate::Float2::new(1.0, 2.0), 3.0);
        assert_eq!(v, Float3::new(1.0, 2.0, 3.0));
        assert_eq!(v.truncate(), crate::Float2::new(1.0, 2.0));
        assert_eq!(v.extend(4.0), crate::Float4::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_vec3_directions() {
        assert_eq!(Float3::UP, -Float3::DOWN);
        assert_eq!(Float3::RIGHT, -Float3::LEFT);
        assert_eq!(Float3::FORWARD_LH, Float3::BACKWARD_RH);
        assert_eq!(Float3::FORWARD_RH, Float3::BACKWARD_LH);
        assert_eq!(Double3::FORWARD_RH, Double3::new(0.0, 0.0, -1.0));
        assert_eq!(Half3::DOWN.y, f16::from_f32(-1.0));
    }

    #[test]
    fn test_vec3_length() {
        let v = Float3::new(2.0, 3.0, 6.0);
        assert_eq!(v.length_squared(), 49.0);
        assert_eq!(v.length(), 7.0);
        assert_relative_eq!(v.normalize(), Float3::new(2.0 / 7.0, 3.0 / 7.0, 6.0 / 7.0));
        assert!(v.normalize().is_normalized());
        assert_eq!(Float3::ZERO.normalize(), Float3::ZERO);
    }

    #[test]
    fn test_vec3_min_max_element() {
        let v = Int3::new(4, -2, 9);
        assert_eq!(v.min_element(), -2);
        assert_eq!(v.max_element(), 9);
        assert_eq!(v.abs(), Int3::new(4, 2, 9));
    }

    #[test]
    fn test_vec3_display() {
        assert_eq!(Int3::new(1, 2, 3).to_string(), "X:1 Y:2 Z:3");
        assert_eq!(
            format!("{:.2}", Float3::new(1.0, 0.5, 0.25)),
            "X:1.00 Y:0.50 Z:0.25"
        );
    }

    #[test]
    fn test_vec3_swizzle() {
        let v = Int3::new(10, 20, 30);
        assert_eq!(v.swizzle3(2, 1, 0).unwrap(), Int3::new(30, 20, 10));
        assert_eq!(v.swizzle2(0, 0).unwrap(), crate::Int2::new(10, 10));
        assert_eq!(
            v.swizzle4(0, 1, 2, 2).unwrap(),
            crate::Int4::new(10, 20, 30, 30)
        );
        assert!(v.swizzle3(0, 1, 3).unwrap_err().is_bounds_error());
    }
}
