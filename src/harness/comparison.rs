// ============================================================================
// Kernel Comparison
// Runs naive and compensated kernels across precisions on one input pair
// ============================================================================

use super::generator::VectorPair;
use crate::domain::Vector3;
use crate::engine::{create_kernel, KernelKind};
use crate::interfaces::CrossKernel;
use crate::numeric::{NumericResult, Precision};
use crate::platform::FmaPolicy;
use std::fmt;
use std::sync::Arc;

/// One kernel/precision/input combination of the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Naive kernel on inputs narrowed to f32
    NaiveSingle,
    /// Compensated kernel on inputs narrowed to f32
    CompensatedSingle,
    /// Naive kernel in f64 on the f32-narrowed inputs
    NaiveWidened,
    /// Compensated kernel in f64 on the f32-narrowed inputs
    CompensatedWidened,
    /// Compensated kernel in f64 on the original inputs
    CompensatedDouble,
}

impl Variant {
    /// All variants in report order.
    pub const ALL: [Variant; 5] = [
        Variant::NaiveSingle,
        Variant::CompensatedSingle,
        Variant::NaiveWidened,
        Variant::CompensatedWidened,
        Variant::CompensatedDouble,
    ];

    /// Precision the kernel computes in.
    pub fn precision(self) -> Precision {
        match self {
            Variant::NaiveSingle | Variant::CompensatedSingle => Precision::Single,
            _ => Precision::Double,
        }
    }

    /// Kernel used by this variant.
    pub fn kernel(self) -> KernelKind {
        match self {
            Variant::NaiveSingle | Variant::NaiveWidened => KernelKind::Naive,
            _ => KernelKind::Compensated,
        }
    }

    /// Whether the inputs went through f32 before the kernel ran.
    pub fn uses_narrowed_inputs(self) -> bool {
        !matches!(self, Variant::CompensatedDouble)
    }

    /// Short label for reports.
    pub fn label(self) -> &'static str {
        match self {
            Variant::NaiveSingle => "naive f32",
            Variant::CompensatedSingle => "compensated f32",
            Variant::NaiveWidened => "naive f64 (f32 inputs)",
            Variant::CompensatedWidened => "compensated f64 (f32 inputs)",
            Variant::CompensatedDouble => "compensated f64",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result vector of one variant, widened to f64 (exact for f32 results).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantResult {
    pub variant: Variant,
    pub value: Vector3<f64>,
}

/// All five results for one input pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    /// Original double-precision inputs
    pub pair: VectorPair,
    /// Results in [`Variant::ALL`] order
    pub results: [VariantResult; 5],
}

impl ComparisonReport {
    /// Result of one variant.
    pub fn get(&self, variant: Variant) -> Vector3<f64> {
        self.results
            .iter()
            .find(|r| r.variant == variant)
            .map(|r| r.value)
            .unwrap_or_default()
    }

    /// Inputs as the kernels of `variant` saw them, widened to f64.
    pub fn inputs_for(&self, variant: Variant) -> VectorPair {
        if variant.uses_narrowed_inputs() {
            VectorPair::new(
                self.pair.u.convert::<f32>().convert(),
                self.pair.v.convert::<f32>().convert(),
            )
        } else {
            self.pair
        }
    }
}

/// Naive and compensated kernels at both precisions.
pub struct Comparison {
    naive_single: Arc<dyn CrossKernel<f32>>,
    compensated_single: Arc<dyn CrossKernel<f32>>,
    naive_double: Arc<dyn CrossKernel<f64>>,
    compensated_double: Arc<dyn CrossKernel<f64>>,
}

impl Comparison {
    /// Build all four kernels.
    ///
    /// # Errors
    /// Fails with `HardwareFmaUnavailable` when the policy cannot be met.
    pub fn new(policy: FmaPolicy) -> NumericResult<Self> {
        Ok(Self {
            naive_single: create_kernel(KernelKind::Naive, policy)?,
            compensated_single: create_kernel(KernelKind::Compensated, policy)?,
            naive_double: create_kernel(KernelKind::Naive, policy)?,
            compensated_double: create_kernel(KernelKind::Compensated, policy)?,
        })
    }

    /// Run every variant on `pair`.
    pub fn run(&self, pair: &VectorPair) -> ComparisonReport {
        let uf: Vector3<f32> = pair.u.convert();
        let vf: Vector3<f32> = pair.v.convert();
        let ud: Vector3<f64> = uf.convert();
        let vd: Vector3<f64> = vf.convert();

        let results = [
            VariantResult {
                variant: Variant::NaiveSingle,
                value: self.naive_single.cross(uf, vf).convert(),
            },
            VariantResult {
                variant: Variant::CompensatedSingle,
                value: self.compensated_single.cross(uf, vf).convert(),
            },
            VariantResult {
                variant: Variant::NaiveWidened,
                value: self.naive_double.cross(ud, vd),
            },
            VariantResult {
                variant: Variant::CompensatedWidened,
                value: self.compensated_double.cross(ud, vd),
            },
            VariantResult {
                variant: Variant::CompensatedDouble,
                value: self.compensated_double.cross(pair.u, pair.v),
            },
        ];

        ComparisonReport {
            pair: *pair,
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{compensated_cross, naive_cross};

    fn scenario() -> VectorPair {
        VectorPair::perturbed(
            Vector3::new(0.6, 0.2, 0.3),
            1e-7,
            [0.1, 0.05, 0.2, 0.1, 0.15, 0.05],
        )
    }

    #[test]
    fn test_variant_metadata() {
        assert_eq!(Variant::ALL.len(), 5);
        assert_eq!(Variant::NaiveSingle.precision(), Precision::Single);
        assert_eq!(Variant::CompensatedDouble.precision(), Precision::Double);
        assert_eq!(Variant::NaiveWidened.kernel(), KernelKind::Naive);
        assert_eq!(Variant::CompensatedWidened.kernel(), KernelKind::Compensated);
        assert!(!Variant::CompensatedDouble.uses_narrowed_inputs());
        assert_eq!(Variant::CompensatedSingle.to_string(), "compensated f32");
    }

    #[test]
    fn test_report_order_matches_all() {
        let report = Comparison::new(FmaPolicy::AllowSoftware)
            .unwrap()
            .run(&scenario());
        let order: Vec<_> = report.results.iter().map(|r| r.variant).collect();
        assert_eq!(order, Variant::ALL.to_vec());
    }

    #[test]
    fn test_results_match_free_functions() {
        let pair = scenario();
        let report = Comparison::new(FmaPolicy::AllowSoftware).unwrap().run(&pair);

        let uf: Vector3<f32> = pair.u.convert();
        let vf: Vector3<f32> = pair.v.convert();
        assert_eq!(
            report.get(Variant::NaiveSingle),
            naive_cross(uf, vf).convert::<f64>()
        );
        assert_eq!(
            report.get(Variant::CompensatedSingle),
            compensated_cross(uf, vf).convert::<f64>()
        );
        assert_eq!(
            report.get(Variant::CompensatedDouble),
            compensated_cross(pair.u, pair.v)
        );
    }

    #[test]
    fn test_widened_inputs_lose_perturbation_detail() {
        let report = Comparison::new(FmaPolicy::AllowSoftware)
            .unwrap()
            .run(&scenario());
        let narrowed = report.inputs_for(Variant::CompensatedWidened);
        assert_ne!(narrowed, report.pair);
        assert_eq!(report.inputs_for(Variant::CompensatedDouble), report.pair);

        // Rounding the inputs to f32 changes the answer far more than the
        // compensated arithmetic's own error.
        let upstream = report.get(Variant::CompensatedWidened);
        let direct = report.get(Variant::CompensatedDouble);
        assert!((upstream.z - direct.z).abs() > 1e-10);
    }
}
