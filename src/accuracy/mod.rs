// ============================================================================
// Accuracy Module
// Exact rational oracle and error metrics for kernel results
// ============================================================================

mod metrics;
mod oracle;

pub use metrics::{
    max_ulp_distance, normwise_relative_error, relative_error, ulp_distance, AccuracyReport,
    ErrorStats,
};
pub use oracle::{exact_cross, exact_product_error, exact_value, exact_vector, round_exact};
