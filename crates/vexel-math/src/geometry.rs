//! Geometric operations over any vector of the family.
//!
//! Every function here is generic over [`Vector`] and is written once in
//! terms of the element kernel from [`Scalar`]. The inherent methods on
//! [`Vector2`](crate::Vector2), [`Vector3`] and [`Vector4`](crate::Vector4)
//! forward to these.
//!
//! Integer vectors use the same formulas as float vectors. Products and sums
//! wrap, so e.g. the dot product of two large byte vectors is the low eight
//! bits of the true sum.
//!
//! # Usage
//!
//! ```rust
//! use vexel_math::{geometry, Float3, Int2};
//!
//! assert_eq!(geometry::dot(Int2::new(1, 2), Int2::new(3, 4)), 11);
//!
//! let mut basis = [Float3::ZERO; 2];
//! geometry::orthogonalize(
//!     &mut basis,
//!     &[Float3::new(1.0, 0.0, 0.0), Float3::new(1.0, 1.0, 0.0)],
//! )
//! .unwrap();
//! assert_eq!(basis[1], Float3::new(0.0, 1.0, 0.0));
//! ```

use crate::interp;
use crate::vector::Vector;
use crate::Vector3;
use tracing::{debug, trace};
use vexel_core::{Error, FloatScalar, Result, Scalar};

/// Dot product.
#[inline]
pub fn dot<V: Vector>(a: V, b: V) -> V::Scalar {
    (0..V::DIM).fold(<V::Scalar as Scalar>::ZERO, |acc, i| {
        acc.scalar_add(a.component(i).scalar_mul(b.component(i)))
    })
}

/// Squared length, `dot(v, v)`.
#[inline]
pub fn length_squared<V: Vector>(v: V) -> V::Scalar {
    dot(v, v)
}

/// Squared distance between two points.
///
/// For integer vectors the difference wraps before squaring. Wrapping keeps
/// the result congruent to the exact value modulo `2^BITS`, which is the
/// value a wider intermediate would narrow to.
#[inline]
pub fn distance_squared<V: Vector>(a: V, b: V) -> V::Scalar {
    let d = a.zip_components(b, Scalar::scalar_sub);
    dot(d, d)
}

/// Linear interpolation.
///
/// Computes `(1 - amount) * start + amount * end` per component in floating
/// point and narrows back to the element type. `amount` is not clamped.
#[inline]
pub fn lerp<V: Vector>(start: V, end: V, amount: f32) -> V {
    start.zip_components(end, |a, b| Scalar::lerp(a, b, amount))
}

/// Smooth-step interpolation: `amount` goes through
/// [`interp::smooth_step`] before the linear interpolation.
#[inline]
pub fn smooth_step<V: Vector>(start: V, end: V, amount: f32) -> V {
    lerp(start, end, interp::smooth_step(amount))
}

/// Point in barycentric coordinates relative to a triangle.
///
/// Per component: `v1 + amount1 * (v2 - v1) + amount2 * (v3 - v1)`.
#[inline]
pub fn barycentric<V: Vector>(v1: V, v2: V, v3: V, amount1: f32, amount2: f32) -> V {
    V::from_fn(|i| {
        Scalar::barycentric(
            v1.component(i),
            v2.component(i),
            v3.component(i),
            amount1,
            amount2,
        )
    })
}

/// Component-wise minimum.
#[inline]
pub fn min<V: Vector>(a: V, b: V) -> V {
    a.zip_components(b, |a, b| if a < b { a } else { b })
}

/// Component-wise maximum.
#[inline]
pub fn max<V: Vector>(a: V, b: V) -> V {
    a.zip_components(b, |a, b| if a > b { a } else { b })
}

#[inline]
fn clamp_component<T: Scalar>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamps each component to the matching components of `[min, max]`.
///
/// `min` wins when a bound pair is inverted and the value lies below it.
#[inline]
pub fn clamp<V: Vector>(value: V, min: V, max: V) -> V {
    V::from_fn(|i| clamp_component(value.component(i), min.component(i), max.component(i)))
}

/// Clamps each component to `[min, max]`.
#[inline]
pub fn clamp_scalar<V: Vector>(value: V, min: V::Scalar, max: V::Scalar) -> V {
    value.map_components(|c| clamp_component(c, min, max))
}

/// Reflects `vector` off a surface with the given `normal`.
///
/// `vector - 2 * dot(vector, normal) * normal`. The normal is expected to
/// be unit length; integer vectors follow the same formula with wrapping.
#[inline]
pub fn reflect<V: Vector>(vector: V, normal: V) -> V {
    let one = <V::Scalar as Scalar>::ONE;
    let scale = one.scalar_add(one).scalar_mul(dot(vector, normal));
    vector.zip_components(normal, |v, n| v.scalar_sub(scale.scalar_mul(n)))
}

/// Cross product of two 3-component vectors.
#[inline]
pub fn cross<T: Scalar>(left: Vector3<T>, right: Vector3<T>) -> Vector3<T> {
    Vector3::new(
        left.y.scalar_mul(right.z).scalar_sub(left.z.scalar_mul(right.y)),
        left.z.scalar_mul(right.x).scalar_sub(left.x.scalar_mul(right.z)),
        left.x.scalar_mul(right.y).scalar_sub(left.y.scalar_mul(right.x)),
    )
}

fn check_batch(op: &'static str, destination: usize, source: usize) -> Result<()> {
    if destination < source {
        debug!(destination, source, "{op}: destination too short");
        return Err(Error::length_mismatch(destination, source));
    }
    trace!(destination, source, "{op}");
    Ok(())
}

/// Orthogonalizes `source` into `destination` with modified Gram-Schmidt.
///
/// Each source vector has its projection onto every previously written
/// destination vector removed, in order. Vectors late in a long batch
/// accumulate rounding error; this is inherent to the method.
///
/// Works for every element type. Integer vectors divide by `dot(d, d)`, so
/// a zero vector earlier in the batch panics like any integer division by
/// zero. Float vectors produce NaN in the same case.
///
/// Entries of `destination` past `source.len()` are left untouched.
///
/// # Errors
///
/// [`Error::LengthMismatch`] if `destination` is shorter than `source`.
pub fn orthogonalize<V: Vector>(destination: &mut [V], source: &[V]) -> Result<()> {
    check_batch("orthogonalize", destination.len(), source.len())?;

    for (i, &value) in source.iter().enumerate() {
        let mut v = value;
        for &d in &destination[..i] {
            let scale = dot(d, v).scalar_div(dot(d, d));
            v = v.zip_components(d, |a, b| a.scalar_sub(scale.scalar_mul(b)));
        }
        destination[i] = v;
    }
    Ok(())
}

/// Orthonormalizes `source` into `destination`.
///
/// Like [`orthogonalize`], but every written vector is normalized, so the
/// projection only needs `dot(d, v)`.
///
/// # Errors
///
/// [`Error::LengthMismatch`] if `destination` is shorter than `source`.
pub fn orthonormalize<V>(destination: &mut [V], source: &[V]) -> Result<()>
where
    V: Vector,
    V::Scalar: FloatScalar,
{
    check_batch("orthonormalize", destination.len(), source.len())?;

    for (i, &value) in source.iter().enumerate() {
        let mut v = value;
        for &d in &destination[..i] {
            let scale = dot(d, v);
            v = v.zip_components(d, |a, b| a.scalar_sub(scale.scalar_mul(b)));
        }
        destination[i] = normalize(v);
    }
    Ok(())
}

/// Length (magnitude).
#[inline]
pub fn length<V>(v: V) -> V::Scalar
where
    V: Vector,
    V::Scalar: FloatScalar,
{
    length_squared(v).scalar_sqrt()
}

/// Distance between two points.
#[inline]
pub fn distance<V>(a: V, b: V) -> V::Scalar
where
    V: Vector,
    V::Scalar: FloatScalar,
{
    distance_squared(a, b).scalar_sqrt()
}

/// Scales `v` to unit length.
///
/// A vector whose length is near zero is returned unchanged.
#[inline]
pub fn normalize<V>(v: V) -> V
where
    V: Vector,
    V::Scalar: FloatScalar,
{
    let len = length(v);
    if len.near_eq(<V::Scalar as Scalar>::ZERO) {
        return v;
    }
    v.map_components(|c| c.scalar_div(len))
}

/// Builds a vector of type `W` from component indices into `value`.
///
/// Only the first `W::DIM` indices are used.
///
/// # Errors
///
/// - [`Error::InsufficientLength`] if fewer than `W::DIM` indices are given
/// - [`Error::IndexOutOfRange`] if an index is not a component of `V`
pub fn swizzle<V, W>(value: V, indices: &[usize]) -> Result<W>
where
    V: Vector,
    W: Vector<Scalar = V::Scalar>,
{
    if indices.len() < W::DIM {
        trace!(expected = W::DIM, got = indices.len(), "swizzle: too few indices");
        return Err(Error::insufficient_length(W::DIM, indices.len()));
    }
    let indices = &indices[..W::DIM];
    if let Some(&index) = indices.iter().find(|&&i| i >= V::DIM) {
        trace!(index, len = V::DIM, "swizzle: index out of range");
        return Err(Error::index_out_of_range(index, V::DIM));
    }
    Ok(W::from_fn(|i| value.component(indices[i])))
}
