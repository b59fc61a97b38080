//! Error type shared by the evolution components.

use thiserror::Error;

/// Errors raised while configuring or seeding a string evolution run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvoError {
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    #[error("max_generations must be at least 1 (use None for an unbounded run)")]
    ZeroGenerationCap,

    #[error("character {ch:?} at index {index} is outside the printable ASCII range 32..=126")]
    NonPrintable { ch: char, index: usize },
}

pub type Result<T> = std::result::Result<T, EvoError>;
