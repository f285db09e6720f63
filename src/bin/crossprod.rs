//! Compare naive and compensated cross products on nearly parallel vectors.
//!
//! Usage:
//!   crossprod                    Default seed, one pair, decimal and hex output
//!   crossprod 42                 Seed 42
//!   crossprod --trials 10000     Also report error statistics over 10000 pairs
//!   crossprod --format hex       Hex-float output only
//!
//! Set RUST_LOG=debug to see CPU detection, kernel construction, and run details.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use compensated_cross::domain::ComparisonConfig;
use compensated_cross::harness::{ComparisonRunner, OutputFormat};
use compensated_cross::interfaces::StdoutSink;
use compensated_cross::platform::FmaPolicy;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// %24.16e decimal exponential
    Decimal,
    /// %A hexadecimal float
    Hex,
    /// Decimal, then hex
    Both,
}

impl FormatArg {
    fn formats(self) -> Vec<OutputFormat> {
        match self {
            FormatArg::Decimal => vec![OutputFormat::Decimal],
            FormatArg::Hex => vec![OutputFormat::Hex],
            FormatArg::Both => vec![OutputFormat::Decimal, OutputFormat::Hex],
        }
    }
}

#[derive(Parser)]
#[command(name = "crossprod")]
#[command(about = "Naive vs FMA-compensated cross products on nearly parallel vectors")]
struct Args {
    /// Random seed
    #[arg(default_value_t = ComparisonConfig::DEFAULT_SEED)]
    seed: u64,

    /// Perturbation scale between u and v
    #[arg(short, long, default_value_t = ComparisonConfig::DEFAULT_EPSILON)]
    epsilon: f64,

    /// Number of vector pairs; more than one adds an accuracy summary
    #[arg(short = 'n', long, default_value_t = 1)]
    trials: usize,

    /// Output format of the result vectors
    #[arg(short, long, value_enum, default_value_t = FormatArg::Both)]
    format: FormatArg,

    /// Fail instead of using the software FMA routine
    #[arg(long)]
    require_hardware_fma: bool,
}

fn main() -> Result<()> {
    compensated_cross::logging::init();

    let args = Args::parse();

    let policy = if args.require_hardware_fma {
        FmaPolicy::RequireHardware
    } else {
        FmaPolicy::AllowSoftware
    };
    let config = ComparisonConfig::new(args.seed)
        .with_epsilon(args.epsilon)
        .with_trials(args.trials)
        .with_formats(args.format.formats())
        .with_fma_policy(policy);

    let sink = Arc::new(StdoutSink::new(config.formats.clone()));
    let runner = ComparisonRunner::new(config, sink).context("invalid comparison setup")?;
    let summary = runner.run().context("comparison failed")?;
    tracing::info!(
        seed = runner.config().seed,
        pairs = summary.accuracy.samples(),
        "Done"
    );
    Ok(())
}
