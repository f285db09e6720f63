// ============================================================================
// Cross Kernel Interface
// Defines the contract for interchangeable cross-product implementations
// ============================================================================

use crate::domain::Vector3;

/// Strategy interface for cross-product kernels.
///
/// Implementations: `NaiveKernel` (reference baseline) and
/// `CompensatedKernel` (FMA two-product).
///
/// # Thread Safety
/// Kernels hold no mutable state and must be `Send + Sync`, so a single
/// `Arc<dyn CrossKernel<F>>` can be shared across threads.
///
/// # Component Order
/// Every kernel uses the same index permutation, so outputs can be compared
/// component by component:
/// - `x = u.y * v.z - u.z * v.y`
/// - `y = u.z * v.x - u.x * v.z`
/// - `z = u.x * v.y - u.y * v.x`
pub trait CrossKernel<F>: Send + Sync {
    /// Compute `u × v`.
    fn cross(&self, u: Vector3<F>, v: Vector3<F>) -> Vector3<F>;

    /// Get the kernel name for logging and reports.
    fn name(&self) -> &'static str;
}
