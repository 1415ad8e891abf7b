//! # Mutation
//!
//! A `Mutation` creates one child from one parent. The parent is only read; the child is
//! an independent copy that starts out unevaluated.
//!
//! [`SinglePointMutation`] overwrites one uniformly chosen position of the copy with a
//! fresh value from a user-supplied mutation function. The index is drawn first, then the
//! value, both from the shared [`RandomNumberGenerator`].
//!
//! ## Example
//!
//! ```rust
//! use agefit::chromosome::Chromosome;
//! use agefit::mutation::{Mutation, SinglePointMutation};
//! use agefit::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(3);
//! let mut mutation = SinglePointMutation::new(|_: &mut RandomNumberGenerator| true);
//!
//! let parent = Chromosome::new(vec![false; 6]);
//! let child = mutation.mutate(&parent, &mut rng).unwrap();
//!
//! assert_eq!(parent.distance(&child), Ok(1));
//! ```

use std::fmt;

use tracing::trace;

use crate::chromosome::{Chromosome, Gene};
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Trait for operators that derive one child from one parent.
pub trait Mutation<C> {
    /// Produces a mutated copy of `parent`.
    ///
    /// # Errors
    ///
    /// Implementations return an error instead of producing a child when the parent does
    /// not satisfy their preconditions. The parent is never modified.
    fn mutate(&mut self, parent: &C, rng: &mut RandomNumberGenerator) -> Result<C>;
}

/// Replaces the value at one random position of a [`Chromosome`].
///
/// The child keeps the parent's genetic age. It differs from the parent in at most one
/// position: exactly one when the drawn value differs from the value it replaces.
#[derive(Clone)]
pub struct SinglePointMutation<F> {
    mutation_function: F,
    mutation_point: Option<usize>,
}

impl<F> SinglePointMutation<F> {
    pub fn new<T>(mutation_function: F) -> Self
    where
        F: Fn(&mut RandomNumberGenerator) -> T,
    {
        Self {
            mutation_function,
            mutation_point: None,
        }
    }

    /// Returns the position overwritten by the last successful mutation.
    pub fn mutation_point(&self) -> Option<usize> {
        self.mutation_point
    }
}

impl<F> fmt::Debug for SinglePointMutation<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglePointMutation")
            .field("mutation_point", &self.mutation_point)
            .finish_non_exhaustive()
    }
}

impl<T, F> Mutation<Chromosome<T>> for SinglePointMutation<F>
where
    T: Gene,
    F: Fn(&mut RandomNumberGenerator) -> T,
{
    /// # Errors
    ///
    /// Returns [`GeneticError::EmptyChromosome`] if the parent holds no values.
    fn mutate(
        &mut self,
        parent: &Chromosome<T>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Chromosome<T>> {
        if parent.is_empty() {
            return Err(GeneticError::EmptyChromosome);
        }

        let mut child = parent.clone();
        let point = rng.gen_index(parent.len());
        child.values_mut()[point] = (self.mutation_function)(rng);
        self.mutation_point = Some(point);

        trace!(point, "single-point mutation");
        Ok(child)
    }
}
