// ============================================================================
// Basic Usage Example
// ============================================================================

use compensated_cross::accuracy::normwise_relative_error;
use compensated_cross::harness::{DecimalExp, HexFloat};
use compensated_cross::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Compensated Cross Product Example ===\n");

    let caps = CpuCapabilities::detect();
    println!("{}", caps);
    for precision in [Precision::Single, Precision::Double] {
        println!(
            "{}: {} bits, {}-bit significand, unit roundoff {:e}",
            precision,
            precision.bits(),
            precision.mantissa_digits(),
            precision.unit_roundoff()
        );
    }
    println!();

    // Two nearly parallel vectors
    let generator = NearParallelGenerator::new(ComparisonConfig::DEFAULT_SEED, 1e-7);
    let pair = VectorPair::perturbed(
        Vector3::new(0.6, 0.2, 0.3),
        generator.epsilon(),
        [0.1, 0.05, 0.2, 0.1, 0.15, 0.05],
    );
    println!("u = {}", pair.u);
    println!("v = {}", pair.v);
    println!("angle = {:e} rad\n", pair.angle());

    // Single precision: naive vs compensated against the exact answer
    let uf: Vector3<f32> = pair.u.convert();
    let vf: Vector3<f32> = pair.v.convert();
    let exact = match exact_cross(uf, vf) {
        Ok(exact) => exact,
        Err(e) => {
            eprintln!("exact oracle failed: {}", e);
            return;
        },
    };

    let naive = naive_cross(uf, vf);
    let compensated = compensated_cross(uf, vf);
    for (name, w) in [("naive", naive), ("compensated", compensated)] {
        let error = normwise_relative_error(w, &exact).unwrap_or(f64::NAN);
        println!("{:<12} f32: {}  (relative error {:.2e})", name, w, error);
    }

    // Component-level output in both C formats
    println!();
    for c in compensated.convert::<f64>().to_array() {
        println!("{} {}", DecimalExp(c), HexFloat(c));
    }

    // Full harness with a short accuracy sweep
    let config = ComparisonConfig::accuracy_sweep(ComparisonConfig::DEFAULT_SEED, 1000);
    let runner = match ComparisonRunner::new(config, Arc::new(StdoutSink::new(Vec::new()))) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("cannot build runner: {}", e);
            return;
        },
    };
    println!(
        "\nRunning a {}-pair sweep (seed {})...",
        runner.config().trials,
        runner.config().seed
    );
    if let Err(e) = runner.run() {
        eprintln!("sweep failed: {}", e);
    }

    println!("\n=== Example Complete ===");
}
