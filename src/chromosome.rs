//! # Chromosome
//!
//! `Chromosome<T>` is an individual whose genome is an ordered list of scalar values
//! (bools, integers or floats). The length of the list is fixed for the lifetime of an
//! instance: values can be overwritten in place but never pushed or removed.
//!
//! Any write access to the values resets the fitness to [`Fitness::Unevaluated`], so a
//! stale score can never outlive the genome it was computed for.
//!
//! ## Example
//!
//! ```rust
//! use agefit::chromosome::Chromosome;
//! use agefit::individual::{Fitness, Individual};
//!
//! let mut parent = Chromosome::new(vec![true, false, true]).with_genetic_age(2);
//! parent.set_fitness(1.0);
//!
//! let mut child = parent.clone();
//! child.values_mut()[1] = true;
//!
//! assert_eq!(child.fitness(), Fitness::Unevaluated);
//! assert_eq!(parent.fitness(), Fitness::Evaluated(1.0));
//! assert_eq!(parent.distance(&child), Ok(1));
//! ```

use std::fmt::{self, Debug};

use crate::error::{GeneticError, Result};
use crate::individual::{Fitness, Individual};

/// Marker trait for the scalar values a chromosome can hold.
pub trait Gene: Clone + PartialEq + Debug {}

impl<T> Gene for T where T: Clone + PartialEq + Debug {}

/// An individual represented by a fixed-length list of values.
///
/// Cloning produces a fully independent chromosome with the same values, fitness and
/// genetic age. Operators clone their parents and vary the clone.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome<T> {
    values: Vec<T>,
    fitness: Fitness,
    genetic_age: u64,
}

impl<T: Gene> Chromosome<T> {
    /// Creates an unevaluated chromosome of age 0 holding `values`.
    pub fn new(values: Vec<T>) -> Self {
        Self {
            values,
            fitness: Fitness::Unevaluated,
            genetic_age: 0,
        }
    }

    pub fn with_genetic_age(mut self, genetic_age: u64) -> Self {
        self.genetic_age = genetic_age;
        self
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns the values for in-place modification and marks the chromosome unevaluated.
    pub fn values_mut(&mut self) -> &mut [T] {
        self.fitness = Fitness::Unevaluated;
        &mut self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn set_genetic_age(&mut self, genetic_age: u64) {
        self.genetic_age = genetic_age;
    }

    pub fn invalidate_fitness(&mut self) {
        self.fitness = Fitness::Unevaluated;
    }

    /// Counts the positions at which `self` and `other` hold different values.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::LengthMismatch`] when the chromosomes differ in length;
    /// positions beyond the shorter list are never compared or padded.
    pub fn distance(&self, other: &Self) -> Result<usize> {
        if self.len() != other.len() {
            return Err(GeneticError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }

        Ok(self
            .values
            .iter()
            .zip(other.values.iter())
            .filter(|(a, b)| a != b)
            .count())
    }

    /// Replaces the whole value list, keeping the length and resetting the fitness.
    pub(crate) fn replace_values(&mut self, values: Vec<T>) {
        debug_assert_eq!(values.len(), self.values.len());
        self.values = values;
        self.fitness = Fitness::Unevaluated;
    }
}

impl<T: Gene> Individual for Chromosome<T> {
    fn fitness(&self) -> Fitness {
        self.fitness
    }

    fn set_fitness(&mut self, score: f64) {
        self.fitness = Fitness::Evaluated(score);
    }

    fn genetic_age(&self) -> u64 {
        self.genetic_age
    }
}

impl<T: Gene> fmt::Display for Chromosome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_chromosome() {
        let chromosome = Chromosome::new(vec![1, 2, 3]);

        assert_eq!(chromosome.values(), &[1, 2, 3]);
        assert_eq!(chromosome.len(), 3);
        assert_eq!(chromosome.genetic_age(), 0);
        assert!(!chromosome.is_evaluated());
    }

    #[test]
    fn test_values_mut_clears_fitness() {
        let mut chromosome = Chromosome::new(vec![0.5, 1.5]);
        chromosome.set_fitness(3.0);
        assert!(chromosome.is_evaluated());

        chromosome.values_mut()[0] = 2.5;

        assert_eq!(chromosome.values(), &[2.5, 1.5]);
        assert_eq!(chromosome.fitness(), Fitness::Unevaluated);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut parent = Chromosome::new(vec![false, false]).with_genetic_age(4);
        parent.set_fitness(2.0);

        let mut copy = parent.clone();
        assert_eq!(copy, parent);

        copy.values_mut()[0] = true;
        copy.set_genetic_age(9);

        assert_eq!(parent.values(), &[false, false]);
        assert_eq!(parent.genetic_age(), 4);
        assert_eq!(parent.fitness(), Fitness::Evaluated(2.0));
    }

    #[test]
    fn test_distance() {
        let a = Chromosome::new(vec![true, false, true, true]);
        let b = Chromosome::new(vec![true, true, false, true]);

        assert_eq!(a.distance(&b), Ok(2));
        assert_eq!(b.distance(&a), Ok(2));
        assert_eq!(a.distance(&a), Ok(0));
    }

    #[test]
    fn test_distance_length_mismatch() {
        let a = Chromosome::new(vec![1, 2, 3]);
        let b = Chromosome::new(vec![1, 2]);

        assert_eq!(
            a.distance(&b),
            Err(GeneticError::LengthMismatch { left: 3, right: 2 })
        );
    }

    #[test]
    fn test_display() {
        let chromosome = Chromosome::new(vec![true, false]);
        assert_eq!(chromosome.to_string(), "[true, false]");
    }

    #[test]
    fn test_invalidate_fitness() {
        let mut chromosome = Chromosome::new(vec![1u8]);
        chromosome.set_fitness(0.0);
        chromosome.invalidate_fitness();
        assert!(!chromosome.is_evaluated());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_keeps_fitness_and_age() {
        let mut chromosome = Chromosome::new(vec![1.5f64, -2.0]).with_genetic_age(6);
        chromosome.set_fitness(0.75);

        let json = serde_json::to_string(&chromosome).unwrap();
        let restored: Chromosome<f64> = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, chromosome);
    }
}
