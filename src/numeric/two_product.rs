// ============================================================================
// Two-Product Error-Free Transform
// Compensated evaluation of a 2x2 determinant ux*vy - uy*vx
// ============================================================================

use super::fma::{fma, FmaFloat};

/// A rounded product together with its exact rounding error.
///
/// `a * b == product + error` holds exactly in real arithmetic as long as
/// the product does not underflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ProductPair<F> {
    pub(crate) product: F,
    pub(crate) error: F,
}

impl<F: FmaFloat> ProductPair<F> {
    /// Split `a * b` into its rounded value and the error of that rounding.
    #[inline(always)]
    pub(crate) fn split(a: F, b: F) -> Self {
        let product = a * b;
        // |a*b - product| <= ulp(product) / 2, so the fused result is exact.
        let error = fma(a, b, -product);
        Self { product, error }
    }
}

/// Compute `ux * vy - uy * vx` with one FMA-recovered correction term.
///
/// The first product is split into `(p, r)`; the second product is fused
/// into `p` with a single rounding, and `r` is added back last. The result
/// is within about one ULP of the exact determinant, even when the two
/// products nearly cancel.
///
/// The operation order is part of the contract: reassociating the final
/// addition changes which rounding errors cancel.
///
/// # Example
/// ```
/// use compensated_cross::numeric::compensated_difference;
///
/// let a = 1.0 + 2f64.powi(-30);
/// let b = 1.0 + 2f64.powi(-29);
/// // a*a - b*1 == 2^-60 exactly; the naive form returns 0.
/// assert_eq!(compensated_difference(a, b, 1.0, a), 2f64.powi(-60));
/// assert_eq!(a * a - b * 1.0, 0.0);
/// ```
#[inline]
pub fn compensated_difference<F: FmaFloat>(ux: F, uy: F, vx: F, vy: F) -> F {
    let pair = ProductPair::split(ux, vy);
    pair.error + fma(-vx, uy, pair.product)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_recovers_rounding_error() {
        let a = 1.0 + 2f64.powi(-30);
        let pair = ProductPair::split(a, a);
        assert_eq!(pair.product, 1.0 + 2f64.powi(-29));
        assert_eq!(pair.error, 2f64.powi(-60));
    }

    #[test]
    fn test_split_exact_product_has_zero_error() {
        let pair = ProductPair::split(3.0_f32, 0.5);
        assert_eq!(pair.product, 1.5);
        assert_eq!(pair.error, 0.0);
    }

    #[test]
    fn test_difference_of_identical_products_is_zero() {
        // x*y - x*y: both the rounded part and the correction cancel.
        let (x, y) = (0.3_f64, 0.7_f64);
        assert_eq!(compensated_difference(x, x, y, y), 0.0);
        assert_eq!(compensated_difference(0.3_f32, 0.3, 0.7, 0.7), 0.0);
    }

    #[test]
    fn test_difference_recovers_cancelled_bits_f32() {
        let a = 1.0 + 2f32.powi(-13);
        let b = 1.0 + 2f32.powi(-12);
        assert_eq!(compensated_difference(a, b, 1.0, a), 2f32.powi(-26));
        assert_eq!(a * a - b, 0.0);
    }

    #[test]
    fn test_difference_without_cancellation() {
        // 2*5 - 3*4 = -2, exactly representable everywhere.
        assert_eq!(compensated_difference(2.0_f64, 3.0, 4.0, 5.0), -2.0);
    }

    #[test]
    fn test_difference_propagates_nan() {
        assert!(compensated_difference(f64::NAN, 1.0, 1.0, 1.0).is_nan());
        assert!(compensated_difference(1.0_f32, 1.0, f32::INFINITY, 1.0).is_infinite());
    }
}
