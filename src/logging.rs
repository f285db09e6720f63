// ============================================================================
// Logging Setup
// tracing-subscriber installation for binaries and demos
// ============================================================================

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level used when `RUST_LOG` is unset or names no directive.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Filter built from `RUST_LOG`, falling back to [`DEFAULT_LEVEL`].
///
/// Invalid directives are skipped rather than rejected.
pub fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(DEFAULT_LEVEL.into())
        .from_env_lossy()
}

/// Filter built from an explicit directive string, with the same fallback
/// as [`env_filter`].
pub fn filter_from(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(DEFAULT_LEVEL.into())
        .parse_lossy(directives)
}

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`.
///
/// Stdout stays free for report output.
pub fn init() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter())
        .init();
}
