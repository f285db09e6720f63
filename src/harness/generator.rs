// ============================================================================
// Near-Parallel Input Generator
// Seeded source of vector pairs that stress catastrophic cancellation
// ============================================================================

use crate::domain::{ComparisonConfig, Vector3};
use crate::engine::compensated_cross;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Two double-precision input vectors for one comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorPair {
    pub u: Vector3<f64>,
    pub v: Vector3<f64>,
}

impl VectorPair {
    /// Wrap an explicit pair.
    pub fn new(u: Vector3<f64>, v: Vector3<f64>) -> Self {
        Self { u, v }
    }

    /// Build `v` by nudging each component of `u` along the other two.
    ///
    /// With `c = coefficients`:
    /// - `v.x = u.x + eps * (c[0] * u.y + c[1] * u.z)`
    /// - `v.y = u.y + eps * (c[2] * u.z + c[3] * u.x)`
    /// - `v.z = u.z + eps * (c[4] * u.x + c[5] * u.y)`
    pub fn perturbed(u: Vector3<f64>, epsilon: f64, coefficients: [f64; 6]) -> Self {
        let c = coefficients;
        let v = Vector3::new(
            u.x + epsilon * (c[0] * u.y + c[1] * u.z),
            u.y + epsilon * (c[2] * u.z + c[3] * u.x),
            u.z + epsilon * (c[4] * u.x + c[5] * u.y),
        );
        Self { u, v }
    }

    /// Angle between `u` and `v` in radians.
    pub fn angle(&self) -> f64 {
        let w = compensated_cross(self.u, self.v);
        let sin_part = (w.x * w.x + w.y * w.y + w.z * w.z).sqrt();
        let cos_part = self.u.x * self.v.x + self.u.y * self.v.y + self.u.z * self.v.z;
        sin_part.atan2(cos_part)
    }
}

/// Seeded generator of nearly parallel vector pairs.
///
/// `u` has independent components in `[0, 1)`; `v` is `u` plus an
/// `epsilon`-scaled perturbation whose coefficients are drawn from
/// `[-0.5, 0.5)`. The generator owns its RNG, so two generators with the
/// same seed produce the same sequence.
pub struct NearParallelGenerator {
    rng: ChaCha8Rng,
    epsilon: f64,
}

impl NearParallelGenerator {
    /// Create a generator from a seed and perturbation scale.
    pub fn new(seed: u64, epsilon: f64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            epsilon,
        }
    }

    /// Create a generator from a comparison configuration.
    pub fn from_config(config: &ComparisonConfig) -> Self {
        Self::new(config.seed, config.epsilon)
    }

    /// Perturbation scale.
    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Uniform draw from `[-0.5, 0.5)`.
    #[inline]
    fn centered(&mut self) -> f64 {
        self.rng.gen::<f64>() - 0.5
    }

    /// Draw the next pair.
    pub fn next_pair(&mut self) -> VectorPair {
        let u = Vector3::new(
            self.centered() + 0.5,
            self.centered() + 0.5,
            self.centered() + 0.5,
        );
        let mut coefficients = [0.0; 6];
        for c in coefficients.iter_mut() {
            *c = self.centered();
        }
        VectorPair::perturbed(u, self.epsilon, coefficients)
    }
}

impl Iterator for NearParallelGenerator {
    type Item = VectorPair;

    fn next(&mut self) -> Option<VectorPair> {
        Some(self.next_pair())
    }
}
