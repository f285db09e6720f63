// ============================================================================
// Domain Module
// Value types and configuration shared across kernels and the harness
// ============================================================================

pub mod config;
pub mod vector;

pub use config::ComparisonConfig;
pub use vector::{convert, Vector3};
