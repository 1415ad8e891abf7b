//! # Generators
//!
//! A `Generator` produces fresh individuals, one per call, and initial populations on
//! top of that. [`MultipleValueGenerator`] fills a fixed-length value list with
//! independent draws from a user-supplied random-value function.
//!
//! The value function receives the shared [`RandomNumberGenerator`], which keeps seeded
//! runs reproducible. Functions that do not need randomness can simply ignore it.
//!
//! ## Example
//!
//! ```rust
//! use agefit::generator::{Generator, MultipleValueGenerator};
//! use agefit::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let generator = MultipleValueGenerator::new(|rng: &mut RandomNumberGenerator| rng.gen_bool(0.5), 8);
//!
//! let population = generator.generate_population(4, &mut rng);
//! assert_eq!(population.len(), 4);
//! assert!(population.iter().all(|c| c.len() == 8));
//! ```

use std::fmt;

use tracing::trace;

use crate::chromosome::{Chromosome, Gene};
use crate::rng::RandomNumberGenerator;

/// Trait for types that create new individuals from scratch.
pub trait Generator<C> {
    /// Creates one new individual.
    fn generate(&self, rng: &mut RandomNumberGenerator) -> C;

    /// Creates `size` new individuals, in generation order.
    fn generate_population(&self, size: usize, rng: &mut RandomNumberGenerator) -> Vec<C> {
        trace!(size, "generating population");
        (0..size).map(|_| self.generate(rng)).collect()
    }
}

/// Generates [`Chromosome`]s of a fixed length whose values are drawn one at a time
/// from a random-value function.
///
/// The length is a `usize`, so a negative length cannot be configured. A length of zero
/// is accepted and yields empty chromosomes, which mutation and crossover reject.
#[derive(Clone)]
pub struct MultipleValueGenerator<F> {
    random_value_function: F,
    values_per_chromosome: usize,
}

impl<F> MultipleValueGenerator<F> {
    /// Creates a generator drawing `values_per_chromosome` values per chromosome.
    pub fn new<T>(random_value_function: F, values_per_chromosome: usize) -> Self
    where
        F: Fn(&mut RandomNumberGenerator) -> T,
    {
        Self {
            random_value_function,
            values_per_chromosome,
        }
    }
}

impl<F> fmt::Debug for MultipleValueGenerator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultipleValueGenerator")
            .field("values_per_chromosome", &self.values_per_chromosome)
            .finish_non_exhaustive()
    }
}

impl<T, F> Generator<Chromosome<T>> for MultipleValueGenerator<F>
where
    T: Gene,
    F: Fn(&mut RandomNumberGenerator) -> T,
{
    fn generate(&self, rng: &mut RandomNumberGenerator) -> Chromosome<T> {
        let values = (0..self.values_per_chromosome)
            .map(|_| (self.random_value_function)(rng))
            .collect();
        Chromosome::new(values)
    }
}
