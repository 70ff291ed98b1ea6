//! Shared surface of the vector family.
//!
//! [`Vector`] is the arity-erased view every vector type implements: a fixed
//! number of components of one [`Scalar`] type, readable by index and
//! constructible from a per-index function. Generic algorithms in
//! [`geometry`](crate::geometry) and [`convert`](crate::convert) are written
//! once against it.
//!
//! The concrete types ([`Vector2`](crate::Vector2), [`Vector3`](crate::Vector3),
//! [`Vector4`](crate::Vector4)) get their common inherent methods, operators and
//! trait impls from the `impl_vector!` macro in this module, so every arity has
//! exactly the same surface.

use std::fmt;
use vexel_core::Scalar;

/// A fixed-size vector of [`Scalar`] components.
///
/// # Example
///
/// ```rust
/// use vexel_math::{Int3, Vector};
///
/// let v = Int3::from_fn(|i| i as i32 * 10);
/// assert_eq!(v, Int3::new(0, 10, 20));
/// assert_eq!(v.component(2), 20);
/// assert_eq!(Int3::DIM, 3);
/// ```
pub trait Vector: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Component type.
    type Scalar: Scalar;

    /// Number of components.
    const DIM: usize;

    /// Returns the component at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= Self::DIM`. Use the inherent `get` for a fallible
    /// lookup.
    fn component(&self, index: usize) -> Self::Scalar;

    /// Builds a vector by calling `f` with each component index in order.
    fn from_fn<F: FnMut(usize) -> Self::Scalar>(f: F) -> Self;

    /// Applies `f` to every component.
    #[inline]
    fn map_components<F>(self, mut f: F) -> Self
    where
        F: FnMut(Self::Scalar) -> Self::Scalar,
    {
        Self::from_fn(|i| f(self.component(i)))
    }

    /// Combines two vectors component by component.
    #[inline]
    fn zip_components<F>(self, other: Self, mut f: F) -> Self
    where
        F: FnMut(Self::Scalar, Self::Scalar) -> Self::Scalar,
    {
        Self::from_fn(|i| f(self.component(i), other.component(i)))
    }
}

/// Binary operator in both vector-vector and vector-scalar shapes, plus the
/// compound-assignment forms.
macro_rules! impl_vector_op {
    ($name:ident, $op:ident, $method:ident, $assign_op:ident, $assign_method:ident, $kernel:ident, [$($field:ident),+]) => {
        impl<T: $crate::Scalar> ::std::ops::$op for $name<T> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self { $($field: $crate::Scalar::$kernel(self.$field, rhs.$field)),+ }
            }
        }

        impl<T: $crate::Scalar> ::std::ops::$op<T> for $name<T> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self {
                Self { $($field: $crate::Scalar::$kernel(self.$field, rhs)),+ }
            }
        }

        impl<T: $crate::Scalar> ::std::ops::$assign_op for $name<T> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = ::std::ops::$op::$method(*self, rhs);
            }
        }

        impl<T: $crate::Scalar> ::std::ops::$assign_op<T> for $name<T> {
            #[inline]
            fn $assign_method(&mut self, rhs: T) {
                *self = ::std::ops::$op::$method(*self, rhs);
            }
        }
    };
}

/// Scalar-on-the-left operators (`2 * v`) for one concrete element type.
macro_rules! impl_scalar_lhs_op {
    ($name:ident, [$($field:ident),+], $t:ty) => {
        impl ::std::ops::Add<$name<$t>> for $t {
            type Output = $name<$t>;

            #[inline]
            fn add(self, rhs: $name<$t>) -> $name<$t> {
                $name { $($field: $crate::Scalar::scalar_add(self, rhs.$field)),+ }
            }
        }

        impl ::std::ops::Sub<$name<$t>> for $t {
            type Output = $name<$t>;

            #[inline]
            fn sub(self, rhs: $name<$t>) -> $name<$t> {
                $name { $($field: $crate::Scalar::scalar_sub(self, rhs.$field)),+ }
            }
        }

        impl ::std::ops::Mul<$name<$t>> for $t {
            type Output = $name<$t>;

            #[inline]
            fn mul(self, rhs: $name<$t>) -> $name<$t> {
                $name { $($field: $crate::Scalar::scalar_mul(self, rhs.$field)),+ }
            }
        }

        impl ::std::ops::Div<$name<$t>> for $t {
            type Output = $name<$t>;

            #[inline]
            fn div(self, rhs: $name<$t>) -> $name<$t> {
                $name { $($field: $crate::Scalar::scalar_div(self, rhs.$field)),+ }
            }
        }
    };
}

macro_rules! impl_scalar_lhs_ops {
    ($name:ident, $fields:tt) => {
        $crate::vector::impl_scalar_lhs_op!($name, $fields, u8);
        $crate::vector::impl_scalar_lhs_op!($name, $fields, i8);
        $crate::vector::impl_scalar_lhs_op!($name, $fields, u16);
        $crate::vector::impl_scalar_lhs_op!($name, $fields, i16);
        $crate::vector::impl_scalar_lhs_op!($name, $fields, u32);
        $crate::vector::impl_scalar_lhs_op!($name, $fields, i32);
        $crate::vector::impl_scalar_lhs_op!($name, $fields, u64);
        $crate::vector::impl_scalar_lhs_op!($name, $fields, i64);
        $crate::vector::impl_scalar_lhs_op!($name, $fields, $crate::f16);
        $crate::vector::impl_scalar_lhs_op!($name, $fields, f32);
        $crate::vector::impl_scalar_lhs_op!($name, $fields, f64);
    };
}

/// Generates the surface shared by every arity.
///
/// `$name` must be a `#[repr(C)]` struct generic over `T` whose fields are
/// listed in order with their component index.
macro_rules! impl_vector {
    ($name:ident, $dim:literal, [$($field:ident: $index:literal),+]) => {
        impl<T: $crate::Scalar> $name<T> {
            /// All components zero.
            pub const ZERO: Self = Self { $($field: T::ZERO),+ };

            /// All components one.
            pub const ONE: Self = Self { $($field: T::ONE),+ };

            /// Number of components.
            pub const DIM: usize = $dim;

            /// Creates a vector from its components.
            #[inline]
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }

            /// Creates a vector with all components set to `value`.
            #[inline]
            pub fn splat(value: T) -> Self {
                Self { $($field: value),+ }
            }

            /// Creates a vector from an array of components.
            #[inline]
            pub fn from_array(values: [T; $dim]) -> Self {
                Self { $($field: values[$index]),+ }
            }

            /// Converts to an array of components.
            #[inline]
            pub fn to_array(self) -> [T; $dim] {
                [$(self.$field),+]
            }

            /// Creates a vector from the first components of a slice.
            ///
            /// Extra elements are ignored.
            ///
            /// # Errors
            ///
            /// [`Error::InsufficientLength`](crate::Error::InsufficientLength)
            /// if the slice holds fewer elements than the vector has components.
            pub fn from_slice(values: &[T]) -> $crate::Result<Self> {
                if values.len() < $dim {
                    ::tracing::trace!(
                        vector = stringify!($name),
                        expected = $dim,
                        got = values.len(),
                        "slice too short"
                    );
                    return Err($crate::Error::insufficient_length($dim, values.len()));
                }
                Ok(Self { $($field: values[$index]),+ })
            }

            /// Returns the component at `index`.
            ///
            /// # Errors
            ///
            /// [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if
            /// `index` is not a valid component index.
            #[inline]
            pub fn get(&self, index: usize) -> $crate::Result<T> {
                match index {
                    $($index => Ok(self.$field),)+
                    _ => Err($crate::Error::index_out_of_range(index, $dim)),
                }
            }

            /// Sets the component at `index`.
            ///
            /// # Errors
            ///
            /// [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if
            /// `index` is not a valid component index. The vector is left
            /// unchanged in that case.
            #[inline]
            pub fn set(&mut self, index: usize, value: T) -> $crate::Result<()> {
                match index {
                    $($index => self.$field = value,)+
                    _ => return Err($crate::Error::index_out_of_range(index, $dim)),
                }
                Ok(())
            }

            /// [`get`](Self::get) with an unsigned 32-bit index.
            ///
            /// # Errors
            ///
            /// [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if
            /// `index` is not a valid component index.
            #[inline]
            pub fn get_u32(&self, index: u32) -> $crate::Result<T> {
                self.get(index as usize)
            }

            /// [`set`](Self::set) with an unsigned 32-bit index.
            ///
            /// # Errors
            ///
            /// [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if
            /// `index` is not a valid component index.
            #[inline]
            pub fn set_u32(&mut self, index: u32, value: T) -> $crate::Result<()> {
                self.set(index as usize, value)
            }

            /// Applies `f` to every component.
            #[inline]
            pub fn map<F: FnMut(T) -> T>(self, mut f: F) -> Self {
                Self { $($field: f(self.$field)),+ }
            }

            /// Dot product. Wraps for integer components.
            #[inline]
            pub fn dot(self, other: Self) -> T {
                $crate::geometry::dot(self, other)
            }

            /// Squared length, `dot(self, self)`.
            #[inline]
            pub fn length_squared(self) -> T {
                $crate::geometry::length_squared(self)
            }

            /// Squared distance to `other`.
            #[inline]
            pub fn distance_squared(self, other: Self) -> T {
                $crate::geometry::distance_squared(self, other)
            }

            /// Linear interpolation towards `end`. `amount` is not clamped.
            #[inline]
            pub fn lerp(self, end: Self, amount: f32) -> Self {
                $crate::geometry::lerp(self, end, amount)
            }

            /// Cubic (smooth-step) interpolation towards `end`.
            #[inline]
            pub fn smooth_step(self, end: Self, amount: f32) -> Self {
                $crate::geometry::smooth_step(self, end, amount)
            }

            /// Point in barycentric coordinates relative to the triangle
            /// `(self, value2, value3)`.
            #[inline]
            pub fn barycentric(self, value2: Self, value3: Self, amount1: f32, amount2: f32) -> Self {
                $crate::geometry::barycentric(self, value2, value3, amount1, amount2)
            }

            /// Component-wise minimum.
            #[inline]
            pub fn min(self, other: Self) -> Self {
                $crate::geometry::min(self, other)
            }

            /// Component-wise maximum.
            #[inline]
            pub fn max(self, other: Self) -> Self {
                $crate::geometry::max(self, other)
            }

            /// Clamps each component to the matching components of `[min, max]`.
            #[inline]
            pub fn clamp(self, min: Self, max: Self) -> Self {
                $crate::geometry::clamp(self, min, max)
            }

            /// Clamps each component to `[min, max]`.
            #[inline]
            pub fn clamp_scalar(self, min: T, max: T) -> Self {
                $crate::geometry::clamp_scalar(self, min, max)
            }

            /// In-place form of [`clamp`](Self::clamp).
            #[inline]
            pub fn clamp_in_place(&mut self, min: Self, max: Self) {
                *self = self.clamp(min, max);
            }

            /// In-place form of [`clamp_scalar`](Self::clamp_scalar).
            #[inline]
            pub fn clamp_scalar_in_place(&mut self, min: T, max: T) {
                *self = self.clamp_scalar(min, max);
            }

            /// Reflects the vector off a surface with the given normal.
            #[inline]
            pub fn reflect(self, normal: Self) -> Self {
                $crate::geometry::reflect(self, normal)
            }

            /// Returns the smallest component.
            #[inline]
            pub fn min_element(self) -> T {
                let values = self.to_array();
                values[1..]
                    .iter()
                    .fold(values[0], |min, &v| if v < min { v } else { min })
            }

            /// Returns the largest component.
            #[inline]
            pub fn max_element(self) -> T {
                let values = self.to_array();
                values[1..]
                    .iter()
                    .fold(values[0], |max, &v| if v > max { v } else { max })
            }

            /// Returns `true` if every component equals zero.
            #[inline]
            pub fn is_zero(self) -> bool {
                self == Self::ZERO
            }

            /// Combined hash code, `h = h * 397 ^ c` over the components in order.
            #[inline]
            pub fn hash_code(&self) -> i32 {
                let mut hash = 0i32;
                $(hash = hash.wrapping_mul(397) ^ $crate::Scalar::hash_code(self.$field);)+
                hash
            }

            /// Casts every component to `U`, keeping the arity.
            #[inline]
            pub fn cast<U: $crate::Scalar>(self) -> $name<U>
            where
                T: $crate::AsPrimitive<U>,
            {
                $name { $($field: $crate::AsPrimitive::<U>::as_(self.$field)),+ }
            }

            /// Converts to any vector of the family.
            ///
            /// See [`convert`](crate::convert::convert) for the arity and
            /// precision rules.
            #[inline]
            pub fn convert<W>(self) -> W
            where
                W: $crate::Vector,
                T: $crate::AsPrimitive<W::Scalar>,
            {
                $crate::convert::convert(self)
            }

            /// Builds a 2-component vector from component indices of `self`.
            ///
            /// # Errors
            ///
            /// [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if any
            /// index is not a valid component index.
            #[inline]
            pub fn swizzle2(self, x: usize, y: usize) -> $crate::Result<$crate::Vector2<T>> {
                $crate::geometry::swizzle(self, &[x, y])
            }

            /// Builds a 3-component vector from component indices of `self`.
            ///
            /// # Errors
            ///
            /// [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if any
            /// index is not a valid component index.
            #[inline]
            pub fn swizzle3(self, x: usize, y: usize, z: usize) -> $crate::Result<$crate::Vector3<T>> {
                $crate::geometry::swizzle(self, &[x, y, z])
            }

            /// Builds a 4-component vector from component indices of `self`.
            ///
            /// # Errors
            ///
            /// [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if any
            /// index is not a valid component index.
            #[inline]
            pub fn swizzle4(
                self,
                x: usize,
                y: usize,
                z: usize,
                w: usize,
            ) -> $crate::Result<$crate::Vector4<T>> {
                $crate::geometry::swizzle(self, &[x, y, z, w])
            }
        }

        impl<T: $crate::SignedScalar> $name<T> {
            /// Component-wise absolute value.
            #[inline]
            pub fn abs(self) -> Self {
                Self { $($field: $crate::SignedScalar::scalar_abs(self.$field)),+ }
            }
        }

        impl<T: $crate::FloatScalar> $name<T> {
            /// Length (magnitude) of the vector.
            #[inline]
            pub fn length(self) -> T {
                $crate::geometry::length(self)
            }

            /// Distance to `other`.
            #[inline]
            pub fn distance(self, other: Self) -> T {
                $crate::geometry::distance(self, other)
            }

            /// Scales the vector to unit length. Near-zero vectors are returned
            /// unchanged.
            #[inline]
            pub fn normalize(self) -> Self {
                $crate::geometry::normalize(self)
            }

            /// Returns `true` if the squared length is near one.
            #[inline]
            pub fn is_normalized(self) -> bool {
                $crate::Scalar::near_eq(self.length_squared(), T::ONE)
            }

            /// Returns `true` if any component is NaN.
            #[inline]
            pub fn is_nan(self) -> bool {
                $($crate::FloatScalar::scalar_is_nan(self.$field))||+
            }

            /// Returns `true` if all components are finite.
            #[inline]
            pub fn is_finite(self) -> bool {
                $($crate::FloatScalar::scalar_is_finite(self.$field))&&+
            }
        }

        impl<T: $crate::Scalar> $crate::Vector for $name<T> {
            type Scalar = T;

            const DIM: usize = $dim;

            #[inline]
            fn component(&self, index: usize) -> T {
                self[index]
            }

            #[inline]
            fn from_fn<F: FnMut(usize) -> T>(mut f: F) -> Self {
                Self { $($field: f($index)),+ }
            }
        }

        impl<T: $crate::Scalar> ::std::ops::Index<usize> for $name<T> {
            type Output = T;

            #[inline]
            fn index(&self, index: usize) -> &T {
                match index {
                    $($index => &self.$field,)+
                    _ => panic!(
                        "index out of bounds: {} has {} components but index is {}",
                        stringify!($name),
                        $dim,
                        index
                    ),
                }
            }
        }

        impl<T: $crate::Scalar> ::std::ops::IndexMut<usize> for $name<T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut T {
                match index {
                    $($index => &mut self.$field,)+
                    _ => panic!(
                        "index out of bounds: {} has {} components but index is {}",
                        stringify!($name),
                        $dim,
                        index
                    ),
                }
            }
        }

        $crate::vector::impl_vector_op!($name, Add, add, AddAssign, add_assign, scalar_add, [$($field),+]);
        $crate::vector::impl_vector_op!($name, Sub, sub, SubAssign, sub_assign, scalar_sub, [$($field),+]);
        $crate::vector::impl_vector_op!($name, Mul, mul, MulAssign, mul_assign, scalar_mul, [$($field),+]);
        $crate::vector::impl_vector_op!($name, Div, div, DivAssign, div_assign, scalar_div, [$($field),+]);
        $crate::vector::impl_scalar_lhs_ops!($name, [$($field),+]);

        impl<T: $crate::SignedScalar> ::std::ops::Neg for $name<T> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($field: $crate::SignedScalar::scalar_neg(self.$field)),+ }
            }
        }

        // Tolerant for float components, exact for integers
        impl<T: $crate::Scalar> PartialEq for $name<T> {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                $($crate::Scalar::near_eq(self.$field, other.$field))&&+
            }
        }

        impl<T: $crate::Scalar + Eq> Eq for $name<T> {}

        impl<T: $crate::Scalar + Eq> ::std::hash::Hash for $name<T> {
            #[inline]
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                state.write_i32(self.hash_code());
            }
        }

        impl<T: $crate::Scalar> ::std::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                const LABELS: [&str; 4] = ["X", "Y", "Z", "W"];
                for (i, (label, value)) in LABELS.iter().zip(self.to_array()).enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}:", label)?;
                    ::std::fmt::Display::fmt(&value, f)?;
                }
                Ok(())
            }
        }

        impl<T: $crate::Scalar> From<[T; $dim]> for $name<T> {
            #[inline]
            fn from(values: [T; $dim]) -> Self {
                Self::from_array(values)
            }
        }

        impl<T: $crate::Scalar> From<$name<T>> for [T; $dim] {
            #[inline]
            fn from(v: $name<T>) -> [T; $dim] {
                v.to_array()
            }
        }

        impl<T: $crate::Scalar> TryFrom<&[T]> for $name<T> {
            type Error = $crate::Error;

            #[inline]
            fn try_from(values: &[T]) -> $crate::Result<Self> {
                Self::from_slice(values)
            }
        }

        impl<T> ::approx::AbsDiffEq for $name<T>
        where
            T: $crate::Scalar + ::approx::AbsDiffEq<Epsilon = T>,
        {
            type Epsilon = T;

            #[inline]
            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            #[inline]
            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                $(::approx::AbsDiffEq::abs_diff_eq(&self.$field, &other.$field, epsilon))&&+
            }
        }

        impl<T> ::approx::RelativeEq for $name<T>
        where
            T: $crate::Scalar + ::approx::RelativeEq<Epsilon = T>,
        {
            #[inline]
            fn default_max_relative() -> T {
                T::default_max_relative()
            }

            #[inline]
            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                $(::approx::RelativeEq::relative_eq(&self.$field, &other.$field, epsilon, max_relative))&&+
            }
        }

        impl<T> ::approx::UlpsEq for $name<T>
        where
            T: $crate::Scalar + ::approx::UlpsEq<Epsilon = T>,
        {
            #[inline]
            fn default_max_ulps() -> u32 {
                T::default_max_ulps()
            }

            #[inline]
            fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
                $(::approx::UlpsEq::ulps_eq(&self.$field, &other.$field, epsilon, max_ulps))&&+
            }
        }
    };
}

pub(crate) use impl_scalar_lhs_op;
pub(crate) use impl_scalar_lhs_ops;
pub(crate) use impl_vector;
pub(crate) use impl_vector_op;
