//! Run configuration.
//!
//! [`EvoConfig`] holds the few knobs a run has: population size, an
//! optional generation cap, an optional seed and parallel evaluation.

use crate::error::{EvoError, Result};

/// Configuration for a string evolution run.
///
/// # Defaults
///
/// ```
/// use u_strevo::evo::EvoConfig;
///
/// let config = EvoConfig::default();
/// assert_eq!(config.population_size, 1000);
/// assert_eq!(config.max_generations, None);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_strevo::evo::EvoConfig;
///
/// let config = EvoConfig::default()
///     .with_population_size(200)
///     .with_max_generations(5_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvoConfig {
    /// Number of individuals in the population. Must be at least 1.
    pub population_size: usize,

    /// Generation cap.
    ///
    /// `None` runs until the target is matched, which may be never.
    pub max_generations: Option<usize>,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from system entropy.
    pub seed: Option<u64>,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled. Evaluation is
    /// pure, so results are identical either way.
    pub parallel: bool,
}

impl Default for EvoConfig {
    fn default() -> Self {
        Self {
            population_size: 1000,
            max_generations: None,
            seed: None,
            parallel: false,
        }
    }
}

impl EvoConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Caps the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Removes the generation cap.
    pub fn unbounded(mut self) -> Self {
        self.max_generations = None;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(EvoError::EmptyPopulation);
        }
        if self.max_generations == Some(0) {
            return Err(EvoError::ZeroGenerationCap);
        }
        Ok(())
    }
}
