// ============================================================================
// Report Sink Interface
// Defines the contract for consuming comparison results
// ============================================================================

use crate::accuracy::AccuracyReport;
use crate::harness::format::OutputFormat;
use crate::harness::ComparisonReport;
use std::fmt::Write as _;

/// Receiver of comparison output.
/// Implementations can print, log, or discard results.
pub trait ReportSink: Send + Sync {
    /// Handle the five results of one input pair
    fn on_report(&self, report: &ComparisonReport);

    /// Handle the accumulated statistics of a sweep
    fn on_summary(&self, _summary: &AccuracyReport) {}
}

/// Render a comparison report in one format.
///
/// The inputs come first, then one line per variant with aligned labels.
pub fn render_report(report: &ComparisonReport, format: OutputFormat) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}]", format);
    let _ = writeln!(out, "{:<30}: {}", "u", format.render(report.pair.u));
    let _ = writeln!(out, "{:<30}: {}", "v", format.render(report.pair.v));
    for result in &report.results {
        let _ = writeln!(out, "{:<30}: {}", result.variant.label(), format.render(result.value));
    }
    out
}

/// Render sweep statistics, one line per variant.
pub fn render_summary(summary: &AccuracyReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "accuracy over {} pairs", summary.samples());
    for (variant, stats) in summary.iter() {
        let _ = writeln!(out, "{:<30}: {}", variant.label(), stats);
    }
    out
}

/// Sink that prints to stdout in each configured format.
pub struct StdoutSink {
    formats: Vec<OutputFormat>,
}

impl StdoutSink {
    pub fn new(formats: Vec<OutputFormat>) -> Self {
        Self { formats }
    }
}

impl ReportSink for StdoutSink {
    fn on_report(&self, report: &ComparisonReport) {
        for format in &self.formats {
            println!("{}", render_report(report, *format));
        }
    }

    fn on_summary(&self, summary: &AccuracyReport) {
        print!("{}", render_summary(summary));
    }
}

/// Logging sink
pub struct LoggingSink;

impl ReportSink for LoggingSink {
    fn on_report(&self, report: &ComparisonReport) {
        for result in &report.results {
            tracing::debug!(variant = %result.variant, value = %result.value, "Cross product");
        }
    }

    fn on_summary(&self, summary: &AccuracyReport) {
        for (variant, stats) in summary.iter() {
            tracing::info!(
                %variant,
                samples = stats.samples(),
                max_relative = stats.max_relative(),
                max_ulps = stats.max_ulps(),
                "Accuracy summary"
            );
        }
    }
}

/// No-op sink for testing and benchmarks
pub struct NoOpSink;

impl ReportSink for NoOpSink {
    fn on_report(&self, _report: &ComparisonReport) {
        // Do nothing
    }
}
