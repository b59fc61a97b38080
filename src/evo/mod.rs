//! String evolution.
//!
//! Evolves a population of random printable-ASCII strings toward a target.
//! There is one fitness function, one mutation policy and one selection
//! policy: every generation the single fittest candidate is copied into
//! every slot, and all copies except the first are mutated.
//!
//! # Key Types
//!
//! - [`Individual`]: a candidate string with a cached error
//! - [`Population`]: fixed-size candidate set; one [`update`](Population::update) per generation
//! - [`Target`]: the reference string and its derived length bound
//! - [`EvoConfig`]: population size, generation cap, seed, parallelism
//! - [`EvoRunner`]: the convergence loop, returning an [`EvoResult`]
//! - [`RandomSource`]: the random draws threaded through every operation
//!
//! # Error
//!
//! An individual's error against a target is
//! `(|len(target) - len(content)| * 128 + sum |target[i] - content[i]|)^2`,
//! summing over the indices present in both strings. It is 0 exactly when
//! the two strings are equal.
//!
//! # Termination
//!
//! The loop is not guaranteed to terminate: a target with characters outside
//! the printable range can never be matched. Use
//! [`EvoConfig::with_max_generations`] or a cancellation flag to bound a run.

mod config;
pub mod individual;
mod population;
pub mod random;
mod runner;
mod target;

pub use config::EvoConfig;
pub use individual::Individual;
pub use population::Population;
pub use random::{create_rng, RandomSource};
pub use runner::{EvoResult, EvoRunner, GenerationReport};
pub use target::Target;
