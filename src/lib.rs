//! Toy evolutionary string search.
//!
//! Evolves random printable strings toward a target string using a squared
//! distance error, random resize and character-shift mutation, and
//! copy-the-best selection with a preserved elite.
//!
//! - [`evo`]: individuals, population, runner and configuration
//! - [`error`]: the crate error type
//!
//! ```
//! use u_strevo::evo::{create_rng, Population, Target};
//!
//! let mut rng = create_rng(42);
//! let mut population = Population::new(Target::from("Hi"), 100, &mut rng).unwrap();
//! while !population.is_converged() && population.generation() < 10_000 {
//!     population.update(&mut rng);
//! }
//! assert_eq!(population.best_string(), "Hi");
//! ```

pub mod error;
pub mod evo;

pub use error::{EvoError, Result};
