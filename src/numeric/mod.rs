// ============================================================================
// Numeric Module
// Error-free floating-point building blocks for the compensated cross product
// ============================================================================
//
// This module provides:
// - FmaFloat: sealed capability bound for scalars with a correctly-rounded FMA
// - fma: the single-rounding a * b + c primitive
// - compensated_difference: the two-product transform for ux*vy - uy*vx
// - Precision / PrecisionCast: precision tags and explicit casts
// - NumericError: error types for capability checks and the exact oracle
//
// Design principles:
// - No emulated FMA: unsupported precisions fail to compile
// - Exactly one correction term per product (no double-double accumulation)
// - Operation order is fixed; nothing is reassociated

mod errors;
mod fma;
mod precision;
mod two_product;

pub use errors::{NumericError, NumericResult};
pub use fma::{fma, FmaFloat};
pub use precision::{Precision, PrecisionCast};
pub use two_product::compensated_difference;
