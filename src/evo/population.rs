//! Fixed-size population and its generational update.

use super::individual::Individual;
use super::random::RandomSource;
use super::target::Target;
use crate::error::{EvoError, Result};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::borrow::Cow;

/// A fixed-size set of candidates evolving toward one target.
///
/// Each [`update`](Self::update) runs one generation:
/// evaluate → select → mutate. Selection copies the single fittest member
/// into every slot, and slot 0 is never mutated, so [`best`](Self::best)
/// always holds the fittest individual found so far.
#[derive(Debug, Clone)]
pub struct Population {
    target: Target,
    members: Vec<Individual>,
    max_length: usize,
    generation: usize,
    parallel: bool,
}

impl Population {
    /// Creates `size` random individuals bounded by `target.max_length()`.
    ///
    /// # Errors
    /// Returns [`EvoError::EmptyPopulation`] if `size` is 0.
    pub fn new<R: RandomSource + ?Sized>(
        target: Target,
        size: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if size == 0 {
            return Err(EvoError::EmptyPopulation);
        }

        let max_length = target.max_length();
        let members = (0..size)
            .map(|_| Individual::random(max_length, rng))
            .collect();

        Ok(Self {
            target,
            members,
            max_length,
            generation: 0,
            parallel: false,
        })
    }

    /// Enables rayon evaluation (requires the `parallel` feature).
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Advances one generation.
    pub fn update<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        self.evaluate();
        self.select_next_generation();
        self.mutate(rng);
        self.generation += 1;
    }

    /// The elite member. After any update this is the fittest individual
    /// found so far.
    pub fn best(&self) -> &Individual {
        &self.members[0]
    }

    /// Content of the elite member.
    pub fn best_string(&self) -> Cow<'_, str> {
        self.best().text()
    }

    /// Returns `true` once the elite member matches the target exactly.
    pub fn is_converged(&self) -> bool {
        self.best().matches(&self.target)
    }

    /// Number of completed updates.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The string the population evolves toward.
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// All members; index 0 is the elite.
    pub fn members(&self) -> &[Individual] {
        &self.members
    }

    /// Length bound applied to every member.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`: construction rejects empty populations.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether evaluation uses rayon when the `parallel` feature is on.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    fn evaluate(&mut self) {
        let target = &self.target;

        #[cfg(feature = "parallel")]
        if self.parallel {
            self.members.par_iter_mut().for_each(|ind| {
                ind.evaluate(target);
            });
            return;
        }

        for ind in &mut self.members {
            ind.evaluate(target);
        }
    }

    // Overwrites every member with the first member of minimum error.
    fn select_next_generation(&mut self) {
        let mut best_idx = 0;
        for (i, ind) in self.members.iter().enumerate().skip(1) {
            if ind.error() < self.members[best_idx].error() {
                best_idx = i;
            }
        }

        let best = self.members[best_idx].clone();
        self.members.fill(best);
    }

    // Slot 0 is the elite and stays untouched.
    fn mutate<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let max_length = self.max_length;
        for ind in self.members.iter_mut().skip(1) {
            ind.mutate(max_length, rng);
        }
    }
}
