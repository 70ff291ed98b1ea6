//! Conversions to and from [`glam`] vectors.
//!
//! Enabled by the `glam` feature (on by default). Only element types glam
//! provides are covered: `f32`, `f64`, `i32` and `u32`.

use crate::{Vector2, Vector3, Vector4};

macro_rules! impl_glam_from {
    ($($t:ty: $g2:ty, $g3:ty, $g4:ty;)*) => {
        $(
            impl From<$g2> for Vector2<$t> {
                #[inline]
                fn from(v: $g2) -> Self {
                    Self::new(v.x, v.y)
                }
            }

            impl From<Vector2<$t>> for $g2 {
                #[inline]
                fn from(v: Vector2<$t>) -> $g2 {
                    <$g2>::new(v.x, v.y)
                }
            }

            impl From<$g3> for Vector3<$t> {
                #[inline]
                fn from(v: $g3) -> Self {
                    Self::new(v.x, v.y, v.z)
                }
            }

            impl From<Vector3<$t>> for $g3 {
                #[inline]
                fn from(v: Vector3<$t>) -> $g3 {
                    <$g3>::new(v.x, v.y, v.z)
                }
            }

            impl From<$g4> for Vector4<$t> {
                #[inline]
                fn from(v: $g4) -> Self {
                    Self::new(v.x, v.y, v.z, v.w)
                }
            }

            impl From<Vector4<$t>> for $g4 {
                #[inline]
                fn from(v: Vector4<$t>) -> $g4 {
                    <$g4>::new(v.x, v.y, v.z, v.w)
                }
            }
        )*
    };
}

impl_glam_from! {
    f32: glam::Vec2, glam::Vec3, glam::Vec4;
    f64: glam::DVec2, glam::DVec3, glam::DVec4;
    i32: glam::IVec2, glam::IVec3, glam::IVec4;
    u32: glam::UVec2, glam::UVec3, glam::UVec4;
}

#[cfg(test)]
mod tests {
    use crate::{Double4, Float3, Int2, UInt3};

    #[test]
    fn test_glam_roundtrip() {
        let v = Float3::new(1.0, 2.0, 3.0);
        let g: glam::Vec3 = v.into();
        assert_eq!(g, glam::Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Float3::from(g), v);
    }

    #[test]
    fn test_glam_interop_ops() {
        let a: glam::IVec2 = Int2::new(1, 2).into();
        let b = Int2::from(a * 3);
        assert_eq!(b, Int2::new(3, 6));

        let d: glam::DVec4 = Double4::UNIT_W.into();
        assert_eq!(d, glam::DVec4::W);

        let u = UInt3::from(glam::UVec3::splat(7));
        assert_eq!(u, UInt3::splat(7));
    }
}
