// ============================================================================
// Numeric Errors
// Error types for capability checks and exact accuracy analysis
// ============================================================================

use std::fmt;

/// Errors surfaced around the compensated arithmetic.
///
/// The cross-product kernels themselves are total over finite inputs; these
/// errors only come from construction-time checks and the exact oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Hardware FMA was required but the CPU does not provide it
    HardwareFmaUnavailable,
    /// A NaN or infinity reached an operation defined only on finite reals
    NonFinite,
    /// A configuration value is out of range
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::HardwareFmaUnavailable => write!(
                f,
                "hardware fma unavailable: refusing to build the compensated kernel"
            ),
            NumericError::NonFinite => {
                write!(f, "non-finite value: exact arithmetic needs finite inputs")
            },
            NumericError::InvalidInput => write!(f, "invalid input: value out of range"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
