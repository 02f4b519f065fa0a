//! Random sources backed by the `rand` crate.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stride_core::config::FeatureConfig;
use stride_core::traits::IRandomSource;
use tracing::debug;

/// Draws from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl IRandomSource for ThreadRngSource {
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Reproducible draws from a seeded `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IRandomSource for SeededSource {
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        self.rng.gen_range(low..=high)
    }
}

/// Pick the source described by the config: seeded when a seed is set.
pub fn source_from_config(config: &FeatureConfig) -> Box<dyn IRandomSource> {
    match config.seed {
        Some(seed) => {
            debug!(seed, "using seeded feature source");
            Box::new(SeededSource::new(seed))
        }
        None => Box::new(ThreadRngSource),
    }
}
