//! Convergence loop.
//!
//! [`EvoRunner`] drives a [`Population`] one generation at a time until its
//! elite matches the target, the generation cap is hit, or the run is
//! cancelled.

use super::config::EvoConfig;
use super::individual::Individual;
use super::population::Population;
use super::random::create_rng;
use super::target::Target;
use crate::error::Result;
use log::{debug, info, warn};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Snapshot handed to the per-generation callback.
#[derive(Debug, Clone, Copy)]
pub struct GenerationReport<'a> {
    /// Generations completed so far (1 after the first update).
    pub generation: usize,

    /// Error of the elite member.
    pub best_error: u64,

    /// The elite member.
    pub best: &'a Individual,
}

/// One console line: `Gen: {generation:>3} | Error: {best_error:>5} | "{best}"`.
///
/// Widths are minimums; wider values are printed in full.
impl fmt::Display for GenerationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Gen: {:>3} | Error: {:>5} | \"{}\"",
            self.generation, self.best_error, self.best
        )
    }
}

/// Result of a run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EvoResult {
    /// Content of the best individual found.
    pub best: String,

    /// Error of `best` against the target.
    pub best_error: u64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether `best` matches the target exactly.
    pub converged: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Elite error at the end of each generation.
    pub error_history: Vec<u64>,
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_strevo::evo::{EvoConfig, EvoRunner, Target};
///
/// let config = EvoConfig::default()
///     .with_population_size(100)
///     .with_max_generations(10_000)
///     .with_seed(42);
/// let result = EvoRunner::run(&Target::from("Hi"), &config).unwrap();
/// assert!(result.converged);
/// assert_eq!(result.best, "Hi");
/// ```
pub struct EvoRunner;

impl EvoRunner {
    /// Runs until convergence or the configured generation cap.
    ///
    /// # Errors
    /// Returns the validation error if `config` is invalid.
    pub fn run(target: &Target, config: &EvoConfig) -> Result<EvoResult> {
        Self::run_with_cancel(target, config, None, |_| {})
    }

    /// Runs with an optional cancellation token and a per-generation
    /// callback.
    ///
    /// If `cancel` is set to `true`, the loop stops before the next
    /// generation and returns the best individual found so far.
    pub fn run_with_cancel<F>(
        target: &Target,
        config: &EvoConfig,
        cancel: Option<Arc<AtomicBool>>,
        mut on_generation: F,
    ) -> Result<EvoResult>
    where
        F: FnMut(&GenerationReport<'_>),
    {
        config.validate()?;

        if !target.is_reachable() {
            warn!(
                "target {:?} has characters outside 32..=126; the run cannot converge",
                target.as_str()
            );
        }

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut population = Population::new(target.clone(), config.population_size, &mut rng)?
            .with_parallel(config.parallel);

        let mut error_history = Vec::new();
        let mut cancelled = false;

        while !population.is_converged() {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            if let Some(cap) = config.max_generations {
                if population.generation() >= cap {
                    break;
                }
            }

            population.update(&mut rng);

            let best = population.best();
            error_history.push(best.error());
            debug!(
                "generation {} best error {} {:?}",
                population.generation(),
                best.error(),
                best.text()
            );

            on_generation(&GenerationReport {
                generation: population.generation(),
                best_error: best.error(),
                best,
            });
        }

        // Re-evaluate so the result is valid even when no update ran.
        let mut best = population.best().clone();
        let best_error = best.evaluate(target);
        let converged = best_error == 0;

        info!(
            "stopped after {} generations (converged: {}, cancelled: {}, best error: {})",
            population.generation(),
            converged,
            cancelled,
            best_error
        );

        Ok(EvoResult {
            best: best.text().into_owned(),
            best_error,
            generations: population.generation(),
            converged,
            cancelled,
            error_history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
