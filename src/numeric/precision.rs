// ============================================================================
// Precision Tags and Explicit Casts
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// IEEE 754 binary precision of a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Precision {
    /// binary32 (`f32`)
    Single,
    /// binary64 (`f64`)
    Double,
}

impl Precision {
    /// Storage width in bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Precision::Single => 32,
            Precision::Double => 64,
        }
    }

    /// Significand width including the implicit leading bit.
    #[inline]
    pub const fn mantissa_digits(self) -> u32 {
        match self {
            Precision::Single => f32::MANTISSA_DIGITS,
            Precision::Double => f64::MANTISSA_DIGITS,
        }
    }

    /// Unit roundoff (half the machine epsilon) as f64.
    #[inline]
    pub fn unit_roundoff(self) -> f64 {
        match self {
            Precision::Single => f32::EPSILON as f64 * 0.5,
            Precision::Double => f64::EPSILON * 0.5,
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::Single => write!(f, "f32"),
            Precision::Double => write!(f, "f64"),
        }
    }
}

/// Explicit per-value cast between floating-point precisions.
///
/// Narrowing rounds to nearest (ties to even) in the target precision;
/// widening is exact. No `From`/`Into` bridge exists between precisions, so
/// every precision change is spelled out at the call site.
pub trait PrecisionCast<G> {
    /// Cast `self` into the target precision.
    fn cast(self) -> G;
}

impl PrecisionCast<f32> for f32 {
    #[inline(always)]
    fn cast(self) -> f32 {
        self
    }
}

impl PrecisionCast<f64> for f32 {
    #[inline(always)]
    fn cast(self) -> f64 {
        self as f64
    }
}

impl PrecisionCast<f32> for f64 {
    #[inline(always)]
    fn cast(self) -> f32 {
        self as f32
    }
}

impl PrecisionCast<f64> for f64 {
    #[inline(always)]
    fn cast(self) -> f64 {
        self
    }
}
