// ============================================================================
// Harness Module
// Input generation, kernel comparison, and output formatting
// ============================================================================

mod comparison;
pub mod format;
mod generator;
mod runner;

pub use comparison::{Comparison, ComparisonReport, Variant, VariantResult};
pub use format::{DecimalExp, HexFloat, OutputFormat};
pub use generator::{NearParallelGenerator, VectorPair};
pub use runner::{ComparisonRunner, RunSummary};
