// ============================================================================
// Compensated Cross Product Library
// Error-compensated 3D cross products built on fused multiply-add
// ============================================================================

//! # Compensated Cross
//!
//! A 3D cross product that stays accurate when the inputs are nearly
//! parallel, where the textbook formula loses most of its significant digits
//! to cancellation.
//!
//! ## Features
//!
//! - **Two-product transform** on a correctly-rounded FMA, one per component
//! - **Compile-time capability bound**: only `f32` and `f64` are accepted
//! - **Runtime FMA detection** with an optional hardware-only policy
//! - **Exact rational oracle** for measuring relative and ULP error
//! - **Comparison harness** printing C-style decimal and hex-float output
//!
//! ## Example
//!
//! ```rust
//! use compensated_cross::prelude::*;
//!
//! let u = Vector3::new(1.0_f64, 2.0, 3.0);
//! let v = Vector3::new(4.0, 5.0, 6.0);
//! assert_eq!(compensated_cross(u, v), Vector3::new(-3.0, 6.0, -3.0));
//!
//! // The same operation behind the kernel interface
//! let kernel = create_kernel::<f32>(KernelKind::Compensated, FmaPolicy::AllowSoftware).unwrap();
//! println!("{}: {}", kernel.name(), kernel.cross(u.convert(), v.convert()));
//! ```

pub mod accuracy;
pub mod domain;
pub mod engine;
pub mod harness;
pub mod interfaces;
#[cfg(feature = "logging")]
pub mod logging;
pub mod numeric;
pub mod platform;

// Re-exports for convenience
pub mod prelude {
    pub use crate::accuracy::{exact_cross, AccuracyReport, ErrorStats};
    pub use crate::domain::{convert, ComparisonConfig, Vector3};
    pub use crate::engine::{
        compensated_cross, create_kernel, create_naive_kernel, naive_cross, CompensatedKernel,
        KernelKind, NaiveKernel,
    };
    pub use crate::harness::{
        Comparison, ComparisonReport, ComparisonRunner, NearParallelGenerator, OutputFormat,
        Variant, VectorPair,
    };
    pub use crate::interfaces::{CrossKernel, LoggingSink, NoOpSink, ReportSink, StdoutSink};
    pub use crate::numeric::{
        compensated_difference, fma, FmaFloat, NumericError, NumericResult, Precision,
    };
    pub use crate::platform::{CpuCapabilities, FmaPolicy, FmaSupport};
}
