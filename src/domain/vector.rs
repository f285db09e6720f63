// ============================================================================
// Vector3
// Three-component value type shared by every cross-product kernel
// ============================================================================

use crate::numeric::{FmaFloat, PrecisionCast};
use std::fmt;
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A three-component vector whose components share one scalar precision.
///
/// `Vector3` is a plain `Copy` value: kernels take it by value and return a
/// fresh one. Changing precision goes through [`Vector3::convert`], which
/// casts each component independently.
///
/// # Example
/// ```
/// use compensated_cross::domain::Vector3;
///
/// let u = Vector3::new(0.6_f64, 0.2, 0.3);
/// let narrowed: Vector3<f32> = u.convert();
/// let widened: Vector3<f64> = narrowed.convert();
/// assert_eq!(widened.convert::<f32>(), narrowed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector3<F> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F> Vector3<F> {
    /// Create a vector from its three components.
    #[inline]
    pub const fn new(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    /// Apply `f` to each component independently.
    #[inline]
    pub fn map<G>(self, mut f: impl FnMut(F) -> G) -> Vector3<G> {
        Vector3 {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }

    /// Components as `[x, y, z]`.
    #[inline]
    pub fn to_array(self) -> [F; 3] {
        [self.x, self.y, self.z]
    }

    /// Convert to another precision, rounding each component to nearest.
    ///
    /// Narrowing (`f64` to `f32`) is lossy; widening is exact.
    #[inline]
    pub fn convert<G>(self) -> Vector3<G>
    where
        F: PrecisionCast<G>,
    {
        self.map(PrecisionCast::cast)
    }
}

impl<F: FmaFloat> Vector3<F> {
    /// The zero vector.
    pub const ZERO: Self = Self::new(F::ZERO, F::ZERO, F::ZERO);

    /// Check that every component is finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Largest absolute component.
    #[inline]
    pub fn max_abs(self) -> F {
        let [x, y, z] = self.map(FmaFloat::abs).to_array();
        let xy = if x >= y { x } else { y };
        if xy >= z {
            xy
        } else {
            z
        }
    }
}

/// Free-function form of [`Vector3::convert`].
#[inline]
pub fn convert<F, G>(v: Vector3<F>) -> Vector3<G>
where
    F: PrecisionCast<G>,
{
    v.convert()
}

impl<F: Neg<Output = F>> Neg for Vector3<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(Neg::neg)
    }
}

impl<F> From<[F; 3]> for Vector3<F> {
    #[inline]
    fn from([x, y, z]: [F; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<F> From<Vector3<F>> for [F; 3] {
    #[inline]
    fn from(v: Vector3<F>) -> Self {
        v.to_array()
    }
}

impl<F: fmt::Display> fmt::Display for Vector3<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
