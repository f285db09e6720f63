// ============================================================================
// Cross Kernels
// CrossKernel implementations wrapping the naive and compensated products
// ============================================================================

use super::cross::{compensated_cross, naive_cross};
use crate::domain::Vector3;
use crate::interfaces::CrossKernel;
use crate::numeric::{FmaFloat, NumericResult};
use crate::platform::{FmaPolicy, FmaSupport};
use std::ops::{Mul, Sub};

/// Reference kernel: plain multiply-subtract per component.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveKernel;

impl NaiveKernel {
    /// Create a new naive kernel.
    pub fn new() -> Self {
        Self
    }
}

impl<F> CrossKernel<F> for NaiveKernel
where
    F: Copy + Mul<Output = F> + Sub<Output = F> + Send + Sync,
{
    fn cross(&self, u: Vector3<F>, v: Vector3<F>) -> Vector3<F> {
        naive_cross(u, v)
    }

    fn name(&self) -> &'static str {
        "Naive"
    }
}

/// FMA two-product kernel.
///
/// Construction records how FMA is executed on this CPU and enforces the
/// requested [`FmaPolicy`]; the kernel never falls back to an unfused
/// multiply-add.
#[derive(Debug, Clone, Copy)]
pub struct CompensatedKernel {
    support: FmaSupport,
}

impl CompensatedKernel {
    /// Create a compensated kernel that accepts either FMA implementation.
    pub fn new() -> Self {
        Self {
            support: FmaSupport::detect(),
        }
    }

    /// Create a compensated kernel under `policy`.
    ///
    /// # Errors
    /// Returns `HardwareFmaUnavailable` if the policy requires the FMA
    /// instruction and this CPU does not have it.
    pub fn with_policy(policy: FmaPolicy) -> NumericResult<Self> {
        Self::with_support(policy, FmaSupport::detect())
    }

    /// Create a compensated kernel against an explicit support level.
    pub(crate) fn with_support(policy: FmaPolicy, support: FmaSupport) -> NumericResult<Self> {
        policy.check(support)?;
        Ok(Self { support })
    }

    /// How FMA is executed by this kernel.
    #[inline]
    pub fn fma_support(&self) -> FmaSupport {
        self.support
    }
}

impl Default for CompensatedKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FmaFloat> CrossKernel<F> for CompensatedKernel {
    fn cross(&self, u: Vector3<F>, v: Vector3<F>) -> Vector3<F> {
        compensated_cross(u, v)
    }

    fn name(&self) -> &'static str {
        "Compensated"
    }
}
