// ============================================================================
// Comparison Runner
// Drives generator, kernels, accuracy accounting, and report output
// ============================================================================

use super::comparison::{Comparison, ComparisonReport};
use super::generator::NearParallelGenerator;
use crate::accuracy::AccuracyReport;
use crate::domain::ComparisonConfig;
use crate::interfaces::ReportSink;
use crate::numeric::NumericResult;
use crate::platform::CpuCapabilities;
use std::sync::Arc;

/// Outcome of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Results of the first generated pair
    pub first: ComparisonReport,
    /// Error statistics over every trial
    pub accuracy: AccuracyReport,
}

/// Runs the naive vs compensated comparison for one configuration.
pub struct ComparisonRunner {
    config: ComparisonConfig,
    comparison: Comparison,
    sink: Arc<dyn ReportSink>,
}

impl ComparisonRunner {
    /// Validate `config` and build the kernels.
    ///
    /// # Errors
    /// Returns `InvalidInput` for a bad configuration and
    /// `HardwareFmaUnavailable` when the FMA policy cannot be met.
    pub fn new(config: ComparisonConfig, sink: Arc<dyn ReportSink>) -> NumericResult<Self> {
        config.validate()?;

        let caps = CpuCapabilities::detect();
        tracing::info!("{}", caps);

        let comparison = Comparison::new(config.fma_policy)?;
        Ok(Self {
            config,
            comparison,
            sink,
        })
    }

    #[inline]
    pub fn config(&self) -> &ComparisonConfig {
        &self.config
    }

    /// Generate `trials` pairs, report the first, and measure all of them.
    ///
    /// The sink gets the first pair's results and, for sweeps, the
    /// accumulated statistics.
    ///
    /// # Errors
    /// Returns `NonFinite` if a generated pair or result is not finite.
    pub fn run(&self) -> NumericResult<RunSummary> {
        let mut generator = NearParallelGenerator::from_config(&self.config);
        let mut accuracy = AccuracyReport::new();

        let first = self.comparison.run(&generator.next_pair());
        self.sink.on_report(&first);
        accuracy.record(&first)?;

        for pair in generator.take(self.config.trials - 1) {
            accuracy.record(&self.comparison.run(&pair))?;
        }

        tracing::debug!(
            seed = self.config.seed,
            trials = self.config.trials,
            epsilon = self.config.epsilon,
            "Comparison finished"
        );

        if self.config.is_sweep() {
            self.sink.on_summary(&accuracy);
        }
        Ok(RunSummary { first, accuracy })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::Variant;
    use crate::interfaces::NoOpSink;
    use crate::numeric::NumericError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingSink {
        reports: AtomicUsize,
        summaries: AtomicUsize,
    }

    impl ReportSink for CountingSink {
        fn on_report(&self, _report: &ComparisonReport) {
            self.reports.fetch_add(1, Ordering::Relaxed);
        }

        fn on_summary(&self, _summary: &AccuracyReport) {
            self.summaries.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ComparisonConfig::default().with_trials(0);
        let result = ComparisonRunner::new(config, Arc::new(NoOpSink));
        assert_eq!(result.err(), Some(NumericError::InvalidInput));
    }

    #[test]
    fn test_config_is_kept() {
        let config = ComparisonConfig::new(99).with_trials(3).with_epsilon(1e-6);
        let runner = ComparisonRunner::new(config.clone(), Arc::new(NoOpSink)).unwrap();
        assert_eq!(runner.config(), &config);
    }

    #[test]
    fn test_single_trial_reports_without_summary() {
        let sink = Arc::new(CountingSink::default());
        let runner = ComparisonRunner::new(ComparisonConfig::default(), sink.clone()).unwrap();
        let summary = runner.run().unwrap();

        assert_eq!(sink.reports.load(Ordering::Relaxed), 1);
        assert_eq!(sink.summaries.load(Ordering::Relaxed), 0);
        assert_eq!(summary.accuracy.samples(), 1);
    }

    #[test]
    fn test_sweep_emits_summary() {
        let sink = Arc::new(CountingSink::default());
        let config = ComparisonConfig::accuracy_sweep(7, 50);
        let runner = ComparisonRunner::new(config, sink.clone()).unwrap();
        let summary = runner.run().unwrap();

        assert_eq!(sink.reports.load(Ordering::Relaxed), 1);
        assert_eq!(sink.summaries.load(Ordering::Relaxed), 1);
        assert_eq!(summary.accuracy.samples(), 50);
        assert!(
            summary.accuracy.stats(Variant::CompensatedDouble).max_relative()
                <= 2.0 * f64::EPSILON
        );
    }

    #[test]
    fn test_run_is_deterministic() {
        let config = ComparisonConfig::default().with_trials(10);
        let a = ComparisonRunner::new(config.clone(), Arc::new(NoOpSink))
            .unwrap()
            .run()
            .unwrap();
        let b = ComparisonRunner::new(config, Arc::new(NoOpSink))
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.first.pair, NearParallelGenerator::new(20201212, 1e-7).next_pair());
    }
}
