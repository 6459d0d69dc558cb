//! Seeded Gaussian noise source
//! Location: src/device/noise.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

/// Whether a zero-sigma update still consumes a sample from the generator.
///
/// The generated value is `0.0` either way. The choice only affects which
/// samples later noisy updates observe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseDraw {
    /// Leave the generator untouched when sigma is zero
    #[default]
    SkipWhenZero,
    /// Draw on every update, matching a generator that never special-cases zero
    Always,
}

/// Zero-mean normal noise generator owned by a single device
#[derive(Debug, Clone)]
pub struct GaussianNoise {
    seed: u64,
    rng: StdRng,
}

impl GaussianNoise {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed the generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw one sample with standard deviation `sigma`.
    ///
    /// The sign of `sigma` is irrelevant to the distribution, so negative
    /// values are accepted.
    pub fn sample(&mut self, sigma: f64) -> f64 {
        let z: f64 = self.rng.sample(StandardNormal);
        z * sigma
    }

    /// Draw according to `policy`, returning exactly `0.0` for a zero sigma
    pub fn sample_with(&mut self, sigma: f64, policy: NoiseDraw) -> f64 {
        match policy {
            NoiseDraw::SkipWhenZero if sigma == 0.0 => 0.0,
            NoiseDraw::Always if sigma == 0.0 => {
                // advance the stream, discard the value
                let _ = self.sample(1.0);
                0.0
            }
            _ => self.sample(sigma),
        }
    }
}
