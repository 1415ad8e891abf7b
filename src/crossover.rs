//! # Crossover
//!
//! A `Crossover` creates two children from two parents. Parents are only read; children
//! are independent copies that start out unevaluated.
//!
//! [`SinglePointCrossover`] draws one cut point `k` uniformly from `[0, len)` and swaps
//! the tails of the two value lists:
//!
//! ```text
//! child 1 = parent 1[..k] + parent 2[k..]
//! child 2 = parent 2[..k] + parent 1[k..]
//! ```
//!
//! Both children inherit the greater of the two parental genetic ages.
//!
//! ## Example
//!
//! ```rust
//! use agefit::chromosome::Chromosome;
//! use agefit::crossover::{Crossover, SinglePointCrossover};
//! use agefit::individual::Individual;
//! use agefit::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(5);
//! let mut crossover = SinglePointCrossover::new();
//!
//! let parent_1 = Chromosome::new(vec![0, 0, 0, 0]).with_genetic_age(1);
//! let parent_2 = Chromosome::new(vec![1, 1, 1, 1]).with_genetic_age(4);
//!
//! let (child_1, child_2) = crossover.crossover(&parent_1, &parent_2, &mut rng).unwrap();
//! let k = crossover.crossover_point();
//!
//! assert!(child_1.values()[..k].iter().all(|&v| v == 0));
//! assert!(child_1.values()[k..].iter().all(|&v| v == 1));
//! assert_eq!(child_2.genetic_age(), 4);
//! ```

use tracing::trace;

use crate::chromosome::{Chromosome, Gene};
use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Trait for operators that derive two children from two parents.
pub trait Crossover<C> {
    /// Produces two children from `parent_1` and `parent_2`.
    ///
    /// # Errors
    ///
    /// Implementations return an error instead of producing children when the parents do
    /// not satisfy their preconditions. Parents are never modified.
    fn crossover(
        &mut self,
        parent_1: &C,
        parent_2: &C,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(C, C)>;
}

/// Exchanges the tails of two equal-length [`Chromosome`]s at one random cut point.
#[derive(Debug, Clone, Default)]
pub struct SinglePointCrossover {
    crossover_point: usize,
}

impl SinglePointCrossover {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cut point used by the last crossover.
    pub fn crossover_point(&self) -> usize {
        self.crossover_point
    }

    /// Exchanges the tails of the parents at an explicit cut point `k` in `[0, len]`.
    ///
    /// `k = 0` yields children whose contents equal `(parent_2, parent_1)`; `k = len`
    /// yields children whose contents equal `(parent_1, parent_2)`.
    ///
    /// # Errors
    ///
    /// - [`GeneticError::LengthMismatch`] if the parents differ in length.
    /// - [`GeneticError::EmptyChromosome`] if the parents hold no values.
    /// - [`GeneticError::Configuration`] if `k` is beyond the end of the values.
    pub fn crossover_at<T: Gene>(
        parent_1: &Chromosome<T>,
        parent_2: &Chromosome<T>,
        k: usize,
    ) -> Result<(Chromosome<T>, Chromosome<T>)> {
        check_parents(parent_1, parent_2)?;
        if k > parent_1.len() {
            return Err(GeneticError::Configuration(format!(
                "Crossover point {} is beyond chromosome length {}",
                k,
                parent_1.len()
            )));
        }

        let (head_1, tail_1) = parent_1.values().split_at(k);
        let (head_2, tail_2) = parent_2.values().split_at(k);
        let age = parent_1.genetic_age().max(parent_2.genetic_age());

        let mut child_1 = parent_1.clone();
        let mut child_2 = parent_2.clone();
        child_1.replace_values(head_1.iter().chain(tail_2).cloned().collect());
        child_2.replace_values(head_2.iter().chain(tail_1).cloned().collect());
        child_1.set_genetic_age(age);
        child_2.set_genetic_age(age);

        Ok((child_1, child_2))
    }
}

fn check_parents<T: Gene>(parent_1: &Chromosome<T>, parent_2: &Chromosome<T>) -> Result<()> {
    if parent_1.len() != parent_2.len() {
        return Err(GeneticError::LengthMismatch {
            left: parent_1.len(),
            right: parent_2.len(),
        });
    }
    if parent_1.is_empty() {
        return Err(GeneticError::EmptyChromosome);
    }
    Ok(())
}

impl<T: Gene> Crossover<Chromosome<T>> for SinglePointCrossover {
    /// # Errors
    ///
    /// Returns [`GeneticError::LengthMismatch`] for parents of different lengths and
    /// [`GeneticError::EmptyChromosome`] for empty parents. No random draw is made and
    /// the stored cut point is left unchanged when the call fails.
    fn crossover(
        &mut self,
        parent_1: &Chromosome<T>,
        parent_2: &Chromosome<T>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Chromosome<T>, Chromosome<T>)> {
        check_parents(parent_1, parent_2)?;

        let point = rng.gen_index(parent_1.len());
        let children = Self::crossover_at(parent_1, parent_2, point)?;
        self.crossover_point = point;

        trace!(point, "single-point crossover");
        Ok(children)
    }
}
