// ============================================================================
// Comparison Configuration
// Settings for the naive vs compensated comparison harness
// ============================================================================

use crate::harness::format::OutputFormat;
use crate::numeric::{NumericError, NumericResult};
use crate::platform::FmaPolicy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for one comparison run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComparisonConfig {
    /// Seed of the input generator
    pub seed: u64,

    /// Scale of the perturbation that makes `v` nearly parallel to `u`
    pub epsilon: f64,

    /// Number of generated vector pairs
    /// 1 prints the five result vectors; more also runs an accuracy sweep
    pub trials: usize,

    /// Output formats, printed in this order
    pub formats: Vec<OutputFormat>,

    /// Whether the compensated kernel may run on a software FMA
    pub fma_policy: FmaPolicy,
}

impl ComparisonConfig {
    /// Seed used when none is given
    pub const DEFAULT_SEED: u64 = 20201212;

    /// Default perturbation scale
    pub const DEFAULT_EPSILON: f64 = 1.0e-7;

    /// Create a configuration with the given seed and default settings
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            epsilon: Self::DEFAULT_EPSILON,
            trials: 1,
            formats: vec![OutputFormat::Decimal, OutputFormat::Hex],
            fma_policy: FmaPolicy::default(),
        }
    }

    /// Builder method: Set perturbation scale
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Builder method: Set number of trials
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Builder method: Set output formats
    pub fn with_formats(mut self, formats: Vec<OutputFormat>) -> Self {
        self.formats = formats;
        self
    }

    /// Builder method: Set FMA policy
    pub fn with_fma_policy(mut self, policy: FmaPolicy) -> Self {
        self.fma_policy = policy;
        self
    }

    /// Check the configuration before any vectors are generated.
    ///
    /// # Errors
    /// Returns `InvalidInput` if epsilon is not a positive finite number or
    /// if no trials are requested.
    pub fn validate(&self) -> NumericResult<()> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(NumericError::InvalidInput);
        }
        if self.trials == 0 {
            return Err(NumericError::InvalidInput);
        }
        Ok(())
    }

    /// Whether this run should aggregate errors over many pairs.
    #[inline]
    pub fn is_sweep(&self) -> bool {
        self.trials > 1
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl ComparisonConfig {
    /// Accuracy sweep over `trials` pairs without per-vector printing
    pub fn accuracy_sweep(seed: u64, trials: usize) -> Self {
        Self::new(seed)
            .with_trials(trials)
            .with_formats(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ComparisonConfig::default();
        assert_eq!(config.seed, 20201212);
        assert_eq!(config.epsilon, 1.0e-7);
        assert_eq!(config.trials, 1);
        assert_eq!(config.formats, vec![OutputFormat::Decimal, OutputFormat::Hex]);
        assert_eq!(config.fma_policy, FmaPolicy::AllowSoftware);
        assert!(config.validate().is_ok());
        assert!(!config.is_sweep());
    }

    #[test]
    fn test_builder_methods() {
        let config = ComparisonConfig::new(7)
            .with_epsilon(1e-9)
            .with_trials(100)
            .with_formats(vec![OutputFormat::Hex])
            .with_fma_policy(FmaPolicy::RequireHardware);

        assert_eq!(config.seed, 7);
        assert_eq!(config.epsilon, 1e-9);
        assert_eq!(config.trials, 100);
        assert_eq!(config.formats, vec![OutputFormat::Hex]);
        assert_eq!(config.fma_policy, FmaPolicy::RequireHardware);
        assert!(config.is_sweep());
    }

    #[test]
    fn test_validate_rejects_bad_epsilon() {
        for epsilon in [0.0, -1e-7, f64::NAN, f64::INFINITY] {
            let config = ComparisonConfig::default().with_epsilon(epsilon);
            assert_eq!(config.validate(), Err(NumericError::InvalidInput));
        }
    }

    #[test]
    fn test_validate_rejects_zero_trials() {
        let config = ComparisonConfig::default().with_trials(0);
        assert_eq!(config.validate(), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_accuracy_sweep_preset() {
        let config = ComparisonConfig::accuracy_sweep(1, 1000);
        assert!(config.is_sweep());
        assert!(config.formats.is_empty());
        assert!(config.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_json_roundtrip() {
        let config = ComparisonConfig::new(42).with_formats(vec![OutputFormat::Hex]);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ComparisonConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
