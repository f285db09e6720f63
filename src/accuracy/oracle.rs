// ============================================================================
// Exact Oracle
// Arbitrary-precision reference values for accuracy measurement
// ============================================================================

use crate::domain::Vector3;
use crate::numeric::{FmaFloat, NumericError, NumericResult, PrecisionCast};
use num_rational::BigRational;
use num_traits::ToPrimitive;

/// Exact rational value of a finite float.
///
/// # Errors
/// Returns `NonFinite` for NaN and infinities.
pub fn exact_value<F: FmaFloat>(x: F) -> NumericResult<BigRational> {
    // Widening to f64 is exact for every supported precision.
    BigRational::from_float(x.to_f64()).ok_or(NumericError::NonFinite)
}

/// Exact rational components of a finite vector.
pub fn exact_vector<F: FmaFloat>(v: Vector3<F>) -> NumericResult<Vector3<BigRational>> {
    Ok(Vector3::new(
        exact_value(v.x)?,
        exact_value(v.y)?,
        exact_value(v.z)?,
    ))
}

/// Exact cross product of two finite vectors.
///
/// # Example
/// ```
/// use compensated_cross::accuracy::exact_cross;
/// use compensated_cross::domain::Vector3;
/// use num_rational::BigRational;
///
/// let w = exact_cross(Vector3::new(1.0_f64, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0)).unwrap();
/// assert_eq!(w.x, BigRational::from_integer((-3).into()));
/// ```
pub fn exact_cross<F: FmaFloat>(
    u: Vector3<F>,
    v: Vector3<F>,
) -> NumericResult<Vector3<BigRational>> {
    let u = exact_vector(u)?;
    let v = exact_vector(v)?;
    Ok(Vector3::new(
        determinant(&u.y, &u.z, &v.y, &v.z),
        determinant(&u.z, &u.x, &v.z, &v.x),
        determinant(&u.x, &u.y, &v.x, &v.y),
    ))
}

/// Exact error `a * b - round(a * b)` of one floating-point multiply.
pub fn exact_product_error<F: FmaFloat>(a: F, b: F) -> NumericResult<BigRational> {
    let rounded = exact_value(a * b)?;
    Ok(exact_value(a)? * exact_value(b)? - rounded)
}

/// Round an exact value to the nearest `F`.
///
/// Goes through f64, so f32 targets may see a double rounding; that is
/// only ever one ULP and is used for reporting, never for assertions.
pub fn round_exact<F>(x: &BigRational) -> NumericResult<F>
where
    F: FmaFloat,
    f64: PrecisionCast<F>,
{
    let wide = x.to_f64().ok_or(NumericError::NonFinite)?;
    Ok(wide.cast())
}

fn determinant(
    ux: &BigRational,
    uy: &BigRational,
    vx: &BigRational,
    vy: &BigRational,
) -> BigRational {
    ux * vy - uy * vx
}
