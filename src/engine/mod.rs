// ============================================================================
// Engine Module
// Cross-product computations and the kernels built on them
// ============================================================================

mod cross;
mod kernels;

pub mod factory;

pub use cross::{compensated_cross, naive_cross};
pub use factory::{create_kernel, create_naive_kernel, KernelKind};
pub use kernels::{CompensatedKernel, NaiveKernel};
