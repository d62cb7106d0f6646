// src/rng.rs
//! Random number generation for the Monte Carlo pricer
//!
//! Requirements on the random source:
//! 1. **Reproducibility**: same seed → bit-identical simulation run
//! 2. **Parallel safety**: every path owns an independent stream
//! 3. **Statistical quality**: i.i.d. standard-normal draws
//!
//! Each simulated path derives its own generator from `(base_seed, path_id)`,
//! so results do not depend on thread count or scheduling order.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Factory handing out one deterministic RNG stream per simulated path
#[derive(Debug, Clone, Copy)]
pub struct RngFactory {
    base_seed: u64,
}

impl RngFactory {
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Create the RNG stream for a specific path
    pub fn path_rng(&self, path_id: u64) -> StdRng {
        StdRng::seed_from_u64(self.base_seed.wrapping_add(path_id))
    }
}

/// Draw a standard normal variate Z ~ N(0,1)
pub fn normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}
