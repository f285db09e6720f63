// ============================================================================
// Accuracy Metrics
// Relative error and ULP distance of kernel results against the exact oracle
// ============================================================================

use super::oracle::{exact_cross, exact_value, round_exact};
use crate::domain::Vector3;
use crate::harness::{ComparisonReport, Variant};
use crate::numeric::{FmaFloat, NumericResult, Precision, PrecisionCast};
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};
use std::fmt;

/// Number of representable values between `a` and `b`.
///
/// Zero for equal values (including `-0.0` against `+0.0`). Any NaN gives
/// `u64::MAX`.
pub fn ulp_distance<F: FmaFloat>(a: F, b: F) -> u64 {
    if a.partial_cmp(&b).is_none() {
        return u64::MAX;
    }
    let diff = a.to_ordered_bits() as i128 - b.to_ordered_bits() as i128;
    u64::try_from(diff.unsigned_abs()).unwrap_or(u64::MAX)
}

/// `|approx - exact| / |exact|`, rounded to f64.
///
/// Both zero gives 0; exact zero with a nonzero approximation gives infinity.
pub fn relative_error<F: FmaFloat>(approx: F, exact: &BigRational) -> NumericResult<f64> {
    let diff = (exact_value(approx)? - exact).abs();
    ratio_of(&diff, &exact.abs())
}

/// `max_i |approx_i - exact_i| / max_i |exact_i|`.
pub fn normwise_relative_error<F: FmaFloat>(
    approx: Vector3<F>,
    exact: &Vector3<BigRational>,
) -> NumericResult<f64> {
    let approx = [approx.x, approx.y, approx.z];
    let exact = [&exact.x, &exact.y, &exact.z];

    let mut worst_diff = BigRational::zero();
    let mut largest = BigRational::zero();
    for (a, e) in approx.into_iter().zip(exact) {
        let diff = (exact_value(a)? - e).abs();
        if diff > worst_diff {
            worst_diff = diff;
        }
        let magnitude = e.abs();
        if magnitude > largest {
            largest = magnitude;
        }
    }
    ratio_of(&worst_diff, &largest)
}

/// Largest per-component ULP distance between `approx` and the correctly
/// rounded exact result.
pub fn max_ulp_distance<F>(approx: Vector3<F>, exact: &Vector3<BigRational>) -> NumericResult<u64>
where
    F: FmaFloat,
    f64: PrecisionCast<F>,
{
    let mut worst = 0;
    for (a, e) in [(approx.x, &exact.x), (approx.y, &exact.y), (approx.z, &exact.z)] {
        worst = worst.max(ulp_distance(a, round_exact::<F>(e)?));
    }
    Ok(worst)
}

fn ratio_of(numer: &BigRational, denom: &BigRational) -> NumericResult<f64> {
    if denom.is_zero() {
        return Ok(if numer.is_zero() { 0.0 } else { f64::INFINITY });
    }
    Ok((numer / denom).to_f64().unwrap_or(f64::INFINITY))
}

// ============================================================================
// Running Statistics
// ============================================================================

/// Running error statistics of one variant.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ErrorStats {
    samples: usize,
    max_relative: f64,
    sum_relative: f64,
    max_ulps: u64,
}

impl ErrorStats {
    /// Fold one sample into the statistics.
    pub fn record(&mut self, relative: f64, ulps: u64) {
        self.samples += 1;
        self.max_relative = self.max_relative.max(relative);
        self.sum_relative += relative;
        self.max_ulps = self.max_ulps.max(ulps);
    }

    #[inline]
    pub fn samples(&self) -> usize {
        self.samples
    }

    #[inline]
    pub fn max_relative(&self) -> f64 {
        self.max_relative
    }

    /// Mean normwise relative error (0 with no samples).
    pub fn mean_relative(&self) -> f64 {
        if self.samples == 0 {
            0.0
        } else {
            self.sum_relative / self.samples as f64
        }
    }

    #[inline]
    pub fn max_ulps(&self) -> u64 {
        self.max_ulps
    }
}

impl fmt::Display for ErrorStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "max rel {:.3e}, mean rel {:.3e}, max {} ulp",
            self.max_relative,
            self.mean_relative(),
            self.max_ulps
        )
    }
}

/// Error statistics of every variant over a sweep of comparisons.
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyReport {
    entries: Vec<(Variant, ErrorStats)>,
}

impl AccuracyReport {
    pub fn new() -> Self {
        Self {
            entries: Variant::ALL
                .iter()
                .map(|&variant| (variant, ErrorStats::default()))
                .collect(),
        }
    }

    /// Measure every result of `report` against the exact cross product of
    /// the inputs that variant actually received.
    ///
    /// # Errors
    /// Returns `NonFinite` when an input or result is NaN or infinite.
    pub fn record(&mut self, report: &ComparisonReport) -> NumericResult<()> {
        let narrowed = report.inputs_for(Variant::NaiveSingle);
        let exact_narrowed = exact_cross(narrowed.u, narrowed.v)?;
        let exact_original = exact_cross(report.pair.u, report.pair.v)?;

        for result in &report.results {
            let exact = if result.variant.uses_narrowed_inputs() {
                &exact_narrowed
            } else {
                &exact_original
            };
            let relative = normwise_relative_error(result.value, exact)?;
            let ulps = match result.variant.precision() {
                Precision::Single => max_ulp_distance(result.value.convert::<f32>(), exact)?,
                Precision::Double => max_ulp_distance(result.value, exact)?,
            };
            self.stats_mut(result.variant).record(relative, ulps);
        }
        Ok(())
    }

    /// Statistics of one variant.
    pub fn stats(&self, variant: Variant) -> ErrorStats {
        self.entries
            .iter()
            .find(|(v, _)| *v == variant)
            .map(|(_, stats)| *stats)
            .unwrap_or_default()
    }

    /// Variants with their statistics in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Variant, ErrorStats)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of comparisons recorded.
    pub fn samples(&self) -> usize {
        self.entries.first().map(|(_, s)| s.samples()).unwrap_or(0)
    }

    fn stats_mut(&mut self, variant: Variant) -> &mut ErrorStats {
        // Entries hold every variant from construction.
        let index = Variant::ALL
            .iter()
            .position(|v| *v == variant)
            .unwrap_or_default();
        &mut self.entries[index].1
    }
}

impl Default for AccuracyReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{Comparison, NearParallelGenerator, VectorPair};
    use crate::numeric::NumericError;
    use crate::platform::FmaPolicy;

    #[test]
    fn test_ulp_distance_neighbours() {
        let x = 1.0_f64;
        let next = f64::from_bits(x.to_bits() + 1);
        assert_eq!(ulp_distance(x, x), 0);
        assert_eq!(ulp_distance(x, next), 1);
        assert_eq!(ulp_distance(next, x), 1);
    }

    #[test]
    fn test_ulp_distance_across_zero() {
        assert_eq!(ulp_distance(0.0_f32, -0.0), 0);
        let tiny = f32::from_bits(1);
        assert_eq!(ulp_distance(tiny, -tiny), 2);
        assert_eq!(ulp_distance(f64::NAN, 1.0), u64::MAX);
    }

    #[test]
    fn test_relative_error_edge_cases() {
        let zero = BigRational::zero();
        assert_eq!(relative_error(0.0_f64, &zero).unwrap(), 0.0);
        assert_eq!(relative_error(1e-300_f64, &zero).unwrap(), f64::INFINITY);

        let two = exact_value(2.0_f64).unwrap();
        assert_eq!(relative_error(2.0_f64, &two).unwrap(), 0.0);
        assert_eq!(relative_error(3.0_f64, &two).unwrap(), 0.5);
        assert_eq!(relative_error(f64::NAN, &two), Err(NumericError::NonFinite));
    }

    #[test]
    fn test_normwise_uses_largest_component() {
        let exact = Vector3::new(4.0_f64, -8.0, 0.0).map(|c| exact_value(c).unwrap());
        let approx = Vector3::new(5.0_f64, -8.0, 0.0);
        assert_eq!(normwise_relative_error(approx, &exact).unwrap(), 0.125);
    }

    #[test]
    fn test_error_stats_accumulate() {
        let mut stats = ErrorStats::default();
        assert_eq!(stats.mean_relative(), 0.0);
        stats.record(1e-16, 0);
        stats.record(3e-16, 2);
        assert_eq!(stats.samples(), 2);
        assert_eq!(stats.max_relative(), 3e-16);
        assert!((stats.mean_relative() - 2e-16).abs() < 1e-30);
        assert_eq!(stats.max_ulps(), 2);
    }

    #[test]
    fn test_report_on_scenario() {
        let pair = VectorPair::perturbed(
            Vector3::new(0.6, 0.2, 0.3),
            1e-7,
            [0.1, 0.05, 0.2, 0.1, 0.15, 0.05],
        );
        let comparison = Comparison::new(FmaPolicy::AllowSoftware).unwrap();
        let mut report = AccuracyReport::new();
        report.record(&comparison.run(&pair)).unwrap();

        assert_eq!(report.samples(), 1);
        let compensated = report.stats(Variant::CompensatedSingle);
        let naive = report.stats(Variant::NaiveSingle);
        assert!(compensated.max_relative() <= 2.0 * f32::EPSILON as f64);
        assert!(naive.max_relative() > compensated.max_relative());
    }

    #[test]
    fn test_compensated_stays_within_bound_over_sweep() {
        let comparison = Comparison::new(FmaPolicy::AllowSoftware).unwrap();
        let mut report = AccuracyReport::new();
        for pair in NearParallelGenerator::new(20201212, 1e-7).take(200) {
            report.record(&comparison.run(&pair)).unwrap();
        }

        assert_eq!(report.samples(), 200);
        for variant in [
            Variant::CompensatedSingle,
            Variant::CompensatedWidened,
            Variant::CompensatedDouble,
        ] {
            let bound = 2.0 * variant.precision().unit_roundoff() * 2.0;
            let stats = report.stats(variant);
            assert!(
                stats.max_relative() <= bound,
                "{}: {}",
                variant,
                stats.max_relative()
            );
            assert!(stats.max_ulps() <= 3, "{}: {}", variant, stats.max_ulps());
        }
        assert!(
            report.stats(Variant::NaiveSingle).max_relative()
                > report.stats(Variant::CompensatedSingle).max_relative()
        );
    }
}
