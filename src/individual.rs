//! # Individual Trait
//!
//! The `Individual` trait defines what survivor selection needs to know about a member of
//! the population: its fitness and its genetic age. [`Chromosome`](crate::chromosome::Chromosome)
//! implements it, and so can any other representation that wants to be ranked by
//! [`AgeFitnessSelection`](crate::selection::AgeFitnessSelection).
//!
//! ## Fitness
//!
//! Fitness is an explicit sum type rather than a score paired with a "set" flag. A freshly
//! created or freshly varied individual is [`Fitness::Unevaluated`]; an evaluator turns it
//! into [`Fitness::Evaluated`]. Lower scores are better.
//!
//! ## Implementing the Trait
//!
//! ```rust
//! use agefit::individual::{Fitness, Individual};
//!
//! #[derive(Clone, Debug)]
//! struct Candidate {
//!     fitness: Fitness,
//!     age: u64,
//! }
//!
//! impl Individual for Candidate {
//!     fn fitness(&self) -> Fitness {
//!         self.fitness
//!     }
//!
//!     fn set_fitness(&mut self, score: f64) {
//!         self.fitness = Fitness::Evaluated(score);
//!     }
//!
//!     fn genetic_age(&self) -> u64 {
//!         self.age
//!     }
//! }
//!
//! let mut candidate = Candidate { fitness: Fitness::Unevaluated, age: 3 };
//! assert!(!candidate.is_evaluated());
//! candidate.set_fitness(0.25);
//! assert_eq!(candidate.fitness().score(), Some(0.25));
//! ```

use std::fmt::{self, Debug};

/// The fitness of an individual. Lower scores are better.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Fitness {
    /// The individual has not been scored since its values last changed.
    #[default]
    Unevaluated,
    /// The score assigned by the last evaluation.
    Evaluated(f64),
}

impl Fitness {
    /// Returns the score, or `None` when unevaluated.
    pub fn score(&self) -> Option<f64> {
        match self {
            Fitness::Evaluated(score) => Some(*score),
            Fitness::Unevaluated => None,
        }
    }

    pub fn is_evaluated(&self) -> bool {
        matches!(self, Fitness::Evaluated(_))
    }
}

impl fmt::Display for Fitness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fitness::Evaluated(score) => write!(f, "{}", score),
            Fitness::Unevaluated => write!(f, "unevaluated"),
        }
    }
}

/// Trait for types that can take part in age-fitness survivor selection.
///
/// Types implementing this trait must also implement `Clone` and `Debug` so that
/// selection can return owned survivors and report on them.
pub trait Individual: Clone + Debug {
    /// Returns the current fitness.
    fn fitness(&self) -> Fitness;

    /// Records a score produced by an evaluator.
    fn set_fitness(&mut self, score: f64);

    /// Returns the genetic age. Younger individuals are preferred by selection.
    fn genetic_age(&self) -> u64;

    /// Returns `true` when the individual carries a valid fitness.
    fn is_evaluated(&self) -> bool {
        self.fitness().is_evaluated()
    }
}
