pub mod chromosome;
pub mod crossover;
pub mod error;
pub mod evaluation;
pub mod generator;
pub mod individual;
pub mod mutation;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use chromosome::Chromosome;
pub use error::{GeneticError, Result};
pub use individual::{Fitness, Individual};
