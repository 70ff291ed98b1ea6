//! Scalar interpolation helpers.
//!
//! Stateless functions that shape an `f32` interpolation amount before it
//! reaches the per-component [`Scalar::lerp`](crate::Scalar::lerp).
//!
//! # Usage
//!
//! ```rust
//! use vexel_math::interp::{saturate, smooth_step};
//!
//! assert_eq!(saturate(1.5), 1.0);
//! assert_eq!(smooth_step(0.5), 0.5);
//! ```

/// Clamps a value to [0, 1].
///
/// NaN maps to 0.
#[inline]
pub fn saturate(value: f32) -> f32 {
    if value > 1.0 {
        1.0
    } else if value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Hermite smooth-step of an interpolation amount.
///
/// The amount is clamped to [0, 1] first, so the curve maps [0, 1] onto
/// [0, 1] monotonically with zero slope at both ends.
///
/// # Formula
///
/// `t * t * (3 - 2 * t)` where `t = saturate(amount)`
///
/// # Example
///
/// ```rust
/// use vexel_math::interp::smooth_step;
///
/// assert_eq!(smooth_step(-1.0), 0.0);
/// assert_eq!(smooth_step(2.0), 1.0);
/// assert!(smooth_step(0.25) < 0.25);
/// ```
#[inline]
pub fn smooth_step(amount: f32) -> f32 {
    let t = saturate(amount);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturate() {
        assert_eq!(saturate(-0.5), 0.0);
        assert_eq!(saturate(0.5), 0.5);
        assert_eq!(saturate(1.5), 1.0);
        assert_eq!(saturate(f32::NAN), 0.0);
    }

    #[test]
    fn test_smooth_step_endpoints() {
        assert_eq!(smooth_step(0.0), 0.0);
        assert_eq!(smooth_step(0.5), 0.5);
        assert_eq!(smooth_step(1.0), 1.0);
    }

    #[test]
    fn test_smooth_step_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = smooth_step(i as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }
}
