// ============================================================================
// Kernel Factory
// Creates cross-product kernels from a kind and an FMA policy
// ============================================================================

use super::kernels::{CompensatedKernel, NaiveKernel};
use crate::interfaces::CrossKernel;
use crate::numeric::{FmaFloat, NumericResult};
use crate::platform::FmaPolicy;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which cross-product implementation to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KernelKind {
    /// Plain multiply-subtract (reference baseline)
    Naive,
    /// FMA two-product per component
    Compensated,
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelKind::Naive => write!(f, "naive"),
            KernelKind::Compensated => write!(f, "compensated"),
        }
    }
}

/// Create a kernel of the requested kind.
///
/// The FMA policy only constrains the compensated kernel; the naive kernel
/// performs no fused operations.
///
/// # Errors
/// Returns `HardwareFmaUnavailable` when a compensated kernel is requested
/// under `FmaPolicy::RequireHardware` on a CPU without the instruction.
///
/// # Example
/// ```
/// use compensated_cross::prelude::*;
///
/// let kernel = create_kernel::<f32>(KernelKind::Compensated, FmaPolicy::AllowSoftware).unwrap();
/// assert_eq!(kernel.name(), "Compensated");
/// ```
pub fn create_kernel<F: FmaFloat>(
    kind: KernelKind,
    policy: FmaPolicy,
) -> NumericResult<Arc<dyn CrossKernel<F>>> {
    let kernel: Arc<dyn CrossKernel<F>> = match kind {
        KernelKind::Naive => Arc::new(NaiveKernel::new()),
        KernelKind::Compensated => {
            let kernel = CompensatedKernel::with_policy(policy)?;
            let precision = F::PRECISION;
            tracing::debug!(
                %precision,
                fma = %kernel.fma_support(),
                "Built compensated kernel"
            );
            Arc::new(kernel)
        },
    };
    Ok(kernel)
}

/// Create a naive kernel (for comparison).
pub fn create_naive_kernel<F: FmaFloat>() -> Arc<dyn CrossKernel<F>> {
    Arc::new(NaiveKernel::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Vector3;

    #[test]
    fn test_create_naive_kernel() {
        let kernel = create_kernel::<f64>(KernelKind::Naive, FmaPolicy::RequireHardware).unwrap();
        assert_eq!(kernel.name(), "Naive");
        assert_eq!(create_naive_kernel::<f32>().name(), "Naive");
    }

    #[test]
    fn test_create_compensated_kernel() {
        let kernel =
            create_kernel::<f64>(KernelKind::Compensated, FmaPolicy::AllowSoftware).unwrap();
        assert_eq!(kernel.name(), "Compensated");

        let u = Vector3::new(1.0, 2.0, 3.0);
        let v = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(kernel.cross(u, v), Vector3::new(-3.0, 6.0, -3.0));
    }

    #[test]
    fn test_require_hardware_matches_detection() {
        use crate::platform::FmaSupport;

        let result = create_kernel::<f32>(KernelKind::Compensated, FmaPolicy::RequireHardware);
        match FmaSupport::detect() {
            FmaSupport::Hardware => assert!(result.is_ok()),
            FmaSupport::Software => assert!(result.is_err()),
        }
    }

    #[test]
    fn test_kernel_kind_display() {
        assert_eq!(KernelKind::Naive.to_string(), "naive");
        assert_eq!(KernelKind::Compensated.to_string(), "compensated");
    }

    #[test]
    fn test_kernel_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Arc<dyn CrossKernel<f64>>>();
    }
}
