// ============================================================================
// Cross Products
// Compensated (FMA two-product) and naive reference implementations
// ============================================================================

use crate::domain::Vector3;
use crate::numeric::{compensated_difference, FmaFloat};
use std::ops::{Mul, Sub};

/// Cross product `u × v` with an FMA-recovered correction per component.
///
/// Each component is a 2x2 determinant evaluated by
/// [`compensated_difference`], with its own product pair; nothing is shared
/// or reassociated across components. For nearly parallel inputs the result
/// stays within a few ULPs of the exact cross product, where
/// [`naive_cross`] can lose most of its significant digits.
///
/// Kept out of line so that generated code and benchmark timings do not
/// depend on the caller.
///
/// # Example
/// ```
/// use compensated_cross::prelude::*;
///
/// let u = Vector3::new(1.0_f64, 0.0, 0.0);
/// let v = Vector3::new(0.0_f64, 1.0, 0.0);
/// assert_eq!(compensated_cross(u, v), Vector3::new(0.0, 0.0, 1.0));
/// ```
#[inline(never)]
pub fn compensated_cross<F: FmaFloat>(u: Vector3<F>, v: Vector3<F>) -> Vector3<F> {
    Vector3::new(
        compensated_difference(u.y, u.z, v.y, v.z),
        compensated_difference(u.z, u.x, v.z, v.x),
        compensated_difference(u.x, u.y, v.x, v.y),
    )
}

/// Textbook cross product `u × v` with no compensation.
///
/// Reference baseline only. Uses the same component permutation as
/// [`compensated_cross`] so results compare component by component.
#[inline(never)]
pub fn naive_cross<F>(u: Vector3<F>, v: Vector3<F>) -> Vector3<F>
where
    F: Copy + Mul<Output = F> + Sub<Output = F>,
{
    Vector3::new(
        u.y * v.z - u.z * v.y,
        u.z * v.x - u.x * v.z,
        u.x * v.y - u.y * v.x,
    )
}
