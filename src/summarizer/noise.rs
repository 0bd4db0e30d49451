//! Tie-break noise sources
//!
//! A small non-negative perturbation is added to every score before ranking
//! so that exact ties do not always resolve the same way. The source is
//! created per request and passed into the scorer; nothing is global.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces tie-break noise in `[0, bound]`
pub trait NoiseSource {
    /// Draw the next noise value
    fn sample(&mut self) -> f64;

    /// Largest value `sample` can return
    fn bound(&self) -> f64;
}

/// Uniform noise in `[0, bound]` drawn from a caller-owned RNG
#[derive(Debug, Clone)]
pub struct UniformNoise<R = StdRng> {
    rng: R,
    bound: f64,
}

impl UniformNoise<StdRng> {
    /// Fresh, non-reproducible noise for one request
    pub fn from_entropy(bound: f64) -> Self {
        Self::with_rng(StdRng::from_entropy(), bound)
    }

    /// Reproducible noise from a fixed seed
    pub fn seeded(bound: f64, seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), bound)
    }
}

impl<R: Rng> UniformNoise<R> {
    /// Wrap an existing RNG; negative or non-finite bounds become 0
    pub fn with_rng(rng: R, bound: f64) -> Self {
        let bound = if bound.is_finite() && bound > 0.0 {
            bound
        } else {
            0.0
        };
        Self { rng, bound }
    }
}

impl<R: Rng> NoiseSource for UniformNoise<R> {
    fn sample(&mut self) -> f64 {
        if self.bound == 0.0 {
            return 0.0;
        }
        self.rng.gen_range(0.0..=self.bound)
    }

    fn bound(&self) -> f64 {
        self.bound
    }
}

/// No noise at all; ranking becomes fully deterministic
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    #[inline]
    fn sample(&mut self) -> f64 {
        0.0
    }

    #[inline]
    fn bound(&self) -> f64 {
        0.0
    }
}
