// ============================================================================
// CPU Detection
// Runtime detection of fused multiply-add support
// ============================================================================

use crate::numeric::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// CPU architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Architecture {
    /// x86_64 (Intel/AMD 64-bit)
    X86_64,
    /// aarch64 (ARM 64-bit, including Apple Silicon)
    Aarch64,
    /// Unknown or unsupported architecture
    Other,
}

impl Architecture {
    /// Detect the current CPU architecture.
    #[inline]
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            Architecture::X86_64
        }
        #[cfg(target_arch = "aarch64")]
        {
            Architecture::Aarch64
        }
        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            Architecture::Other
        }
    }
}

impl std::fmt::Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Architecture::X86_64 => write!(f, "x86_64"),
            Architecture::Aarch64 => write!(f, "aarch64"),
            Architecture::Other => write!(f, "other"),
        }
    }
}

/// How `mul_add` is carried out on this CPU.
///
/// Both levels round once. `Software` means the correctly-rounded libm
/// `fma` routine, which is exact but much slower than the instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FmaSupport {
    /// Correctly-rounded library routine
    Software,
    /// Native fused multiply-add instruction
    Hardware,
}

impl FmaSupport {
    /// Detect FMA support for the current CPU.
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            if is_x86_feature_detected!("fma") {
                return FmaSupport::Hardware;
            }
            return FmaSupport::Software;
        }

        #[cfg(target_arch = "aarch64")]
        {
            // FMADD is part of the base aarch64 ISA
            FmaSupport::Hardware
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            return FmaSupport::Software;
        }
    }
}

impl std::fmt::Display for FmaSupport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FmaSupport::Software => write!(f, "software fma (libm)"),
            FmaSupport::Hardware => write!(f, "hardware fma"),
        }
    }
}

/// Which FMA implementations the compensated kernel may run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FmaPolicy {
    /// Accept the correctly-rounded libm routine when no instruction exists
    #[default]
    AllowSoftware,
    /// Refuse to build the compensated kernel without the instruction
    RequireHardware,
}

impl FmaPolicy {
    /// Check this policy against detected support.
    ///
    /// # Errors
    /// Returns `HardwareFmaUnavailable` when hardware is required but the
    /// CPU only offers the software routine.
    pub fn check(self, support: FmaSupport) -> NumericResult<()> {
        match (self, support) {
            (FmaPolicy::RequireHardware, FmaSupport::Software) => {
                Err(NumericError::HardwareFmaUnavailable)
            },
            _ => Ok(()),
        }
    }
}

/// Detected CPU capabilities.
#[derive(Debug, Clone, Copy)]
pub struct CpuCapabilities {
    /// The CPU architecture
    pub architecture: Architecture,
    /// How fused multiply-add is executed
    pub fma: FmaSupport,
}

impl CpuCapabilities {
    /// Detect CPU capabilities at runtime.
    pub fn detect() -> Self {
        Self {
            architecture: Architecture::detect(),
            fma: FmaSupport::detect(),
        }
    }
}

impl std::fmt::Display for CpuCapabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CPU: {} with {}", self.architecture, self.fma)
    }
}
