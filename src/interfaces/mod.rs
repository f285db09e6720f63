// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod cross_kernel;
mod report_sink;

pub use cross_kernel::CrossKernel;
pub use report_sink::{render_report, render_summary, LoggingSink, NoOpSink, ReportSink, StdoutSink};
