//! Random source threaded through initialization and mutation.
//!
//! Every stochastic decision in the crate goes through [`RandomSource`],
//! which is implemented for any [`rand::Rng`]. Passing a seeded generator
//! from [`create_rng`] makes a whole run reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform draws used by [`Individual`](super::Individual) and
/// [`Population`](super::Population).
pub trait RandomSource {
    /// Draws an integer uniformly from the inclusive range `[lo, hi]`.
    ///
    /// # Panics
    /// Panics if `lo > hi`.
    fn draw_int(&mut self, lo: i64, hi: i64) -> i64;

    /// Draws a real number uniformly from the half-open range `[lo, hi)`.
    ///
    /// # Panics
    /// Panics if `lo >= hi`.
    fn draw_real(&mut self, lo: f64, hi: f64) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn draw_int(&mut self, lo: i64, hi: i64) -> i64 {
        self.random_range(lo..=hi)
    }

    fn draw_real(&mut self, lo: f64, hi: f64) -> f64 {
        self.random_range(lo..hi)
    }
}

/// Creates a deterministic generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
