//! Scalar element types for vector components.
//!
//! Every vector in the family stores components of one [`Scalar`] type:
//!
//! | Rust type | Bits | Kind            |
//! |-----------|------|-----------------|
//! | `u8`      | 8    | unsigned int    |
//! | `i8`      | 8    | signed int      |
//! | `u16`     | 16   | unsigned int    |
//! | `i16`     | 16   | signed int      |
//! | `u32`     | 32   | unsigned int    |
//! | `i32`     | 32   | signed int      |
//! | `u64`     | 64   | unsigned int    |
//! | `i64`     | 64   | signed int      |
//! | `f16`     | 16   | IEEE-754 half   |
//! | `f32`     | 32   | IEEE-754 single |
//! | `f64`     | 64   | IEEE-754 double |
//!
//! # Arithmetic
//!
//! The `scalar_*` kernel methods define component arithmetic for the whole
//! family. Integer kernels wrap: the result is what a wider intermediate
//! truncated back to the element width would give, so `255u8 + 1` is `0`.
//! Float kernels are plain IEEE-754.
//!
//! # Equality
//!
//! Integer components compare exactly. Float components compare with
//! [`near_equal`] (and its `f64`/`f16` variants): an absolute tolerance first,
//! then a [`MAX_ULPS`] distance on the bit patterns.
//!
//! # Dependencies
//!
//! - `half` crate for `f16` support

use half::f16;
use std::fmt;

/// Absolute tolerance under which two `f32` values are considered equal.
pub const ZERO_TOLERANCE: f32 = 1e-6;

/// Absolute tolerance under which two `f64` values are considered equal.
pub const ZERO_TOLERANCE_F64: f64 = 1e-12;

/// Absolute tolerance under which two `f16` values are considered equal.
pub const ZERO_TOLERANCE_F16: f32 = 1e-3;

/// Maximum distance in units of least precision for near-equality.
pub const MAX_ULPS: u32 = 4;

/// Returns `true` if `a` is within [`ZERO_TOLERANCE`] of zero.
#[inline]
pub fn is_zero(a: f32) -> bool {
    a.abs() < ZERO_TOLERANCE
}

/// Compares two `f32` values for near-equality.
///
/// Values closer than [`ZERO_TOLERANCE`] are equal. Otherwise both must have
/// the same sign and be at most [`MAX_ULPS`] representable values apart.
/// Bit-identical values (including identical NaNs and infinities) are equal.
///
/// # Example
///
/// ```rust
/// use vexel_core::scalar::near_equal;
///
/// assert!(near_equal(0.1 + 0.2, 0.3));
/// assert!(near_equal(1.0e9, 1.0e9 + 64.0));
/// assert!(!near_equal(1.0, 1.001));
/// ```
#[inline]
pub fn near_equal(a: f32, b: f32) -> bool {
    if is_zero(a - b) {
        return true;
    }
    let a_bits = a.to_bits() as i32;
    let b_bits = b.to_bits() as i32;
    if (a_bits < 0) != (b_bits < 0) {
        return false;
    }
    a_bits.wrapping_sub(b_bits).unsigned_abs() <= MAX_ULPS
}

/// Compares two `f64` values for near-equality.
///
/// Same policy as [`near_equal`] with [`ZERO_TOLERANCE_F64`].
#[inline]
pub fn near_equal_f64(a: f64, b: f64) -> bool {
    if (a - b).abs() < ZERO_TOLERANCE_F64 {
        return true;
    }
    let a_bits = a.to_bits() as i64;
    let b_bits = b.to_bits() as i64;
    if (a_bits < 0) != (b_bits < 0) {
        return false;
    }
    a_bits.wrapping_sub(b_bits).unsigned_abs() <= u64::from(MAX_ULPS)
}

/// Compares two `f16` values for near-equality.
///
/// Same policy as [`near_equal`] with [`ZERO_TOLERANCE_F16`].
#[inline]
pub fn near_equal_f16(a: f16, b: f16) -> bool {
    if (a.to_f32() - b.to_f32()).abs() < ZERO_TOLERANCE_F16 {
        return true;
    }
    let a_bits = a.to_bits() as i16;
    let b_bits = b.to_bits() as i16;
    if (a_bits < 0) != (b_bits < 0) {
        return false;
    }
    a_bits.wrapping_sub(b_bits).unsigned_abs() <= MAX_ULPS as u16
}

/// Trait for vector component types.
///
/// Implemented for the eleven primitive numeric types of the family.
///
/// # Constants
///
/// - [`BITS`](Scalar::BITS) - Bit width of the type
/// - [`IS_FLOAT`](Scalar::IS_FLOAT) - Whether this is a floating-point type
/// - [`ZERO`](Scalar::ZERO) / [`ONE`](Scalar::ONE) - Additive/multiplicative identity
///
/// # Example
///
/// ```
/// use vexel_core::Scalar;
///
/// assert_eq!(250u8.scalar_add(10), 4);
/// assert_eq!(3i32.scalar_mul(4), 12);
/// assert_eq!(Scalar::lerp(0.0f32, 10.0, 0.25), 2.5);
/// ```
pub trait Scalar:
    Copy + Default + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Number of bits in the type.
    const BITS: u32;

    /// Whether this is a floating-point type.
    const IS_FLOAT: bool;

    /// Whether the type can represent negative values.
    const IS_SIGNED: bool;

    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// Short type name, e.g. `"u8"`.
    const NAME: &'static str;

    /// Adds two components. Wraps for integers.
    fn scalar_add(self, rhs: Self) -> Self;

    /// Subtracts two components. Wraps for integers.
    fn scalar_sub(self, rhs: Self) -> Self;

    /// Multiplies two components. Wraps for integers.
    fn scalar_mul(self, rhs: Self) -> Self;

    /// Divides two components.
    ///
    /// # Panics
    ///
    /// Integer types panic when `rhs` is zero.
    fn scalar_div(self, rhs: Self) -> Self;

    /// Linear interpolation `(1 - amount) * self + amount * to`.
    ///
    /// Computed in floating point and narrowed back to `Self`. `amount` is
    /// not clamped, so values outside `[0, 1]` extrapolate.
    fn lerp(self, to: Self, amount: f32) -> Self;

    /// Barycentric combination `self + amount1 * (v2 - self) + amount2 * (v3 - self)`.
    fn barycentric(self, v2: Self, v3: Self, amount1: f32, amount2: f32) -> Self;

    /// Equality used by vectors: exact for integers, tolerant for floats.
    fn near_eq(self, other: Self) -> bool;

    /// Hash code of a single component, combined by vectors with a 397 multiplier.
    fn hash_code(self) -> i32;
}

/// Scalars that can be negated.
pub trait SignedScalar: Scalar {
    /// The value `-1`.
    const NEG_ONE: Self;

    /// Negates the value. Wraps for integers (`-i8::MIN == i8::MIN`).
    fn scalar_neg(self) -> Self;

    /// Absolute value. Wraps for integers (`i8::MIN.abs() == i8::MIN`).
    fn scalar_abs(self) -> Self;
}

/// Floating-point scalars.
pub trait FloatScalar: SignedScalar {
    /// Square root.
    fn scalar_sqrt(self) -> Self;

    /// Returns `true` if the value is NaN.
    fn scalar_is_nan(self) -> bool;

    /// Returns `true` if the value is neither infinite nor NaN.
    fn scalar_is_finite(self) -> bool;
}

macro_rules! impl_int_scalar {
    ($($t:ident: $bits:literal, signed = $signed:literal, hash = $hash:expr;)*) => {
        $(
            impl Scalar for $t {
                const BITS: u32 = $bits;
                const IS_FLOAT: bool = false;
                const IS_SIGNED: bool = $signed;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const NAME: &'static str = stringify!($t);

                #[inline]
                fn scalar_add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn scalar_sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline]
                fn scalar_mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline]
                fn scalar_div(self, rhs: Self) -> Self {
                    self.wrapping_div(rhs)
                }

                #[inline]
                fn lerp(self, to: Self, amount: f32) -> Self {
                    let amount = f64::from(amount);
                    // Truncate through i128 so out-of-range results wrap
                    (((1.0 - amount) * self as f64 + amount * to as f64) as i128) as $t
                }

                #[inline]
                fn barycentric(self, v2: Self, v3: Self, amount1: f32, amount2: f32) -> Self {
                    let v1 = self as f64;
                    let (amount1, amount2) = (f64::from(amount1), f64::from(amount2));
                    ((v1 + amount1 * (v2 as f64 - v1) + amount2 * (v3 as f64 - v1)) as i128) as $t
                }

                #[inline]
                fn near_eq(self, other: Self) -> bool {
                    self == other
                }

                #[inline]
                fn hash_code(self) -> i32 {
                    ($hash)(self)
                }
            }
        )*
    };
}

impl_int_scalar! {
    u8: 8, signed = false, hash = |v: u8| i32::from(v);
    i8: 8, signed = true, hash = |v: i8| i32::from(v);
    u16: 16, signed = false, hash = |v: u16| i32::from(v);
    i16: 16, signed = true, hash = |v: i16| i32::from(v);
    u32: 32, signed = false, hash = |v: u32| v as i32;
    i32: 32, signed = true, hash = |v: i32| v;
    u64: 64, signed = false, hash = |v: u64| (v as i32) ^ ((v >> 32) as i32);
    i64: 64, signed = true, hash = |v: i64| (v as i32) ^ ((v >> 32) as i32);
}

macro_rules! impl_signed_int_scalar {
    ($($t:ident),*) => {
        $(
            impl SignedScalar for $t {
                const NEG_ONE: Self = -1;

                #[inline]
                fn scalar_neg(self) -> Self {
                    self.wrapping_neg()
                }

                #[inline]
                fn scalar_abs(self) -> Self {
                    self.wrapping_abs()
                }
            }
        )*
    };
}

impl_signed_int_scalar!(i8, i16, i32, i64);

impl Scalar for f32 {
    const BITS: u32 = 32;
    const IS_FLOAT: bool = true;
    const IS_SIGNED: bool = true;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const NAME: &'static str = "f32";

    #[inline]
    fn scalar_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn scalar_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn scalar_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn scalar_div(self, rhs: Self) -> Self {
        self / rhs
    }

    #[inline]
    fn lerp(self, to: Self, amount: f32) -> Self {
        (1.0 - amount) * self + amount * to
    }

    #[inline]
    fn barycentric(self, v2: Self, v3: Self, amount1: f32, amount2: f32) -> Self {
        self + amount1 * (v2 - self) + amount2 * (v3 - self)
    }

    #[inline]
    fn near_eq(self, other: Self) -> bool {
        near_equal(self, other)
    }

    #[inline]
    fn hash_code(self) -> i32 {
        // -0.0 == 0.0, so both must hash alike
        if self == 0.0 { 0 } else { self.to_bits() as i32 }
    }
}

impl Scalar for f64 {
    const BITS: u32 = 64;
    const IS_FLOAT: bool = true;
    const IS_SIGNED: bool = true;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const NAME: &'static str = "f64";

    #[inline]
    fn scalar_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn scalar_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn scalar_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn scalar_div(self, rhs: Self) -> Self {
        self / rhs
    }

    #[inline]
    fn lerp(self, to: Self, amount: f32) -> Self {
        let amount = f64::from(amount);
        (1.0 - amount) * self + amount * to
    }

    #[inline]
    fn barycentric(self, v2: Self, v3: Self, amount1: f32, amount2: f32) -> Self {
        let (amount1, amount2) = (f64::from(amount1), f64::from(amount2));
        self + amount1 * (v2 - self) + amount2 * (v3 - self)
    }

    #[inline]
    fn near_eq(self, other: Self) -> bool {
        near_equal_f64(self, other)
    }

    #[inline]
    fn hash_code(self) -> i32 {
        let bits = if self == 0.0 { 0 } else { self.to_bits() };
        (bits as i32) ^ ((bits >> 32) as i32)
    }
}

impl Scalar for f16 {
    const BITS: u32 = 16;
    const IS_FLOAT: bool = true;
    const IS_SIGNED: bool = true;
    const ZERO: Self = f16::ZERO;
    const ONE: Self = f16::ONE;
    const NAME: &'static str = "f16";

    #[inline]
    fn scalar_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn scalar_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn scalar_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn scalar_div(self, rhs: Self) -> Self {
        self / rhs
    }

    #[inline]
    fn lerp(self, to: Self, amount: f32) -> Self {
        f16::from_f32(Scalar::lerp(self.to_f32(), to.to_f32(), amount))
    }

    #[inline]
    fn barycentric(self, v2: Self, v3: Self, amount1: f32, amount2: f32) -> Self {
        f16::from_f32(Scalar::barycentric(
            self.to_f32(),
            v2.to_f32(),
            v3.to_f32(),
            amount1,
            amount2,
        ))
    }

    #[inline]
    fn near_eq(self, other: Self) -> bool {
        near_equal_f16(self, other)
    }

    #[inline]
    fn hash_code(self) -> i32 {
        if self == f16::ZERO {
            0
        } else {
            i32::from(self.to_bits())
        }
    }
}

impl SignedScalar for f32 {
    const NEG_ONE: Self = -1.0;

    #[inline]
    fn scalar_neg(self) -> Self {
        -self
    }

    #[inline]
    fn scalar_abs(self) -> Self {
        self.abs()
    }
}

impl SignedScalar for f64 {
    const NEG_ONE: Self = -1.0;

    #[inline]
    fn scalar_neg(self) -> Self {
        -self
    }

    #[inline]
    fn scalar_abs(self) -> Self {
        self.abs()
    }
}

impl SignedScalar for f16 {
    const NEG_ONE: Self = f16::NEG_ONE;

    #[inline]
    fn scalar_neg(self) -> Self {
        -self
    }

    #[inline]
    fn scalar_abs(self) -> Self {
        f16::from_bits(self.to_bits() & 0x7fff)
    }
}

impl FloatScalar for f32 {
    #[inline]
    fn scalar_sqrt(self) -> Self {
        self.sqrt()
    }

    #[inline]
    fn scalar_is_nan(self) -> bool {
        self.is_nan()
    }

    #[inline]
    fn scalar_is_finite(self) -> bool {
        self.is_finite()
    }
}

impl FloatScalar for f64 {
    #[inline]
    fn scalar_sqrt(self) -> Self {
        self.sqrt()
    }

    #[inline]
    fn scalar_is_nan(self) -> bool {
        self.is_nan()
    }

    #[inline]
    fn scalar_is_finite(self) -> bool {
        self.is_finite()
    }
}

impl FloatScalar for f16 {
    #[inline]
    fn scalar_sqrt(self) -> Self {
        f16::from_f32(self.to_f32().sqrt())
    }

    #[inline]
    fn scalar_is_nan(self) -> bool {
        self.is_nan()
    }

    #[inline]
    fn scalar_is_finite(self) -> bool {
        self.is_finite()
    }
}
