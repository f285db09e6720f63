// ============================================================================
// Platform Module
// Hardware capability detection for the compensated arithmetic
//
// Usage:
// ```ignore
// use compensated_cross::platform::{CpuCapabilities, FmaPolicy};
//
// let caps = CpuCapabilities::detect();
// FmaPolicy::RequireHardware.check(caps.fma)?;
// ```
// ============================================================================

mod detector;

pub use detector::{Architecture, CpuCapabilities, FmaPolicy, FmaSupport};
