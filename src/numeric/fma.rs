// ============================================================================
// Fused Multiply-Add Primitive
// Correctly-rounded a * b + c for every precision the compensated path accepts
// ============================================================================

use super::precision::Precision;
use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating-point scalar with a correctly-rounded fused multiply-add.
///
/// This is the capability bound of the compensated path. The trait is sealed:
/// it is implemented for `f32` and `f64` only, because those are the types
/// for which `mul_add` is guaranteed to round once (hardware instruction or
/// a correctly-rounded libm `fma`). Any other scalar type is rejected at
/// compile time instead of being routed through a two-rounding `a * b + c`.
///
/// ```compile_fail
/// use compensated_cross::prelude::*;
///
/// // i32 has no fused multiply-add, so the compensated path refuses it.
/// let u = Vector3::new(1i32, 2, 3);
/// let _ = compensated_cross(u, u);
/// ```
pub trait FmaFloat:
    sealed::Sealed
    + Copy
    + Debug
    + Display
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Precision tag of this scalar type
    const PRECISION: Precision;

    /// Additive identity
    const ZERO: Self;

    /// Gap between 1.0 and the next representable value (twice the unit roundoff)
    const EPSILON: Self;

    /// `self * b + c` rounded once.
    fn fused_mul_add(self, b: Self, c: Self) -> Self;

    /// Exact widening to f64.
    fn to_f64(self) -> f64;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Check that the value is neither NaN nor infinite.
    fn is_finite(self) -> bool;

    /// Map the bit pattern onto a monotone integer line.
    ///
    /// Adjacent representable values differ by exactly one; `-0.0` and
    /// `+0.0` both map to zero.
    fn to_ordered_bits(self) -> i64;
}

impl FmaFloat for f32 {
    const PRECISION: Precision = Precision::Single;
    const ZERO: Self = 0.0;
    const EPSILON: Self = f32::EPSILON;

    #[inline(always)]
    fn fused_mul_add(self, b: Self, c: Self) -> Self {
        self.mul_add(b, c)
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline(always)]
    fn abs(self) -> Self {
        f32::abs(self)
    }

    #[inline(always)]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }

    #[inline]
    fn to_ordered_bits(self) -> i64 {
        let bits = self.to_bits() as i32;
        if bits < 0 {
            i32::MIN as i64 - bits as i64
        } else {
            bits as i64
        }
    }
}

impl FmaFloat for f64 {
    const PRECISION: Precision = Precision::Double;
    const ZERO: Self = 0.0;
    const EPSILON: Self = f64::EPSILON;

    #[inline(always)]
    fn fused_mul_add(self, b: Self, c: Self) -> Self {
        self.mul_add(b, c)
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline(always)]
    fn abs(self) -> Self {
        f64::abs(self)
    }

    #[inline(always)]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    #[inline]
    fn to_ordered_bits(self) -> i64 {
        let bits = self.to_bits() as i64;
        if bits < 0 {
            i64::MIN - bits
        } else {
            bits
        }
    }
}

/// `a * b + c` computed with a single final rounding.
///
/// # Example
/// ```
/// use compensated_cross::numeric::fma;
///
/// let a = 0.1_f64;
/// let p = a * a;
/// // The rounding error of the plain multiply, recovered exactly.
/// let err = fma(a, a, -p);
/// assert!(err != 0.0);
/// assert!(err.abs() <= f64::EPSILON * p);
/// ```
#[inline(always)]
pub fn fma<F: FmaFloat>(a: F, b: F, c: F) -> F {
    a.fused_mul_add(b, c)
}
