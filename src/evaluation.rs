//! # Evaluation
//!
//! Fitness evaluation sits outside the genetic operators. A [`Challenge`] maps an
//! individual to a score (lower is better), and [`Evaluation`] applies a challenge to the
//! unevaluated members of a population while counting how many scores it computed.
//!
//! Selection requires every individual to be evaluated first; running an `Evaluation`
//! over the combined parents and offspring is the usual way to satisfy that.
//!
//! ## Example
//!
//! ```rust
//! use agefit::chromosome::Chromosome;
//! use agefit::evaluation::Evaluation;
//! use agefit::individual::Individual;
//!
//! let count_false = |c: &Chromosome<bool>| c.values().iter().filter(|&&v| !v).count() as f64;
//! let mut evaluation = Evaluation::new(count_false);
//!
//! let mut population = vec![
//!     Chromosome::new(vec![true, false]),
//!     Chromosome::new(vec![false, false]),
//! ];
//! evaluation.evaluate(&mut population).unwrap();
//!
//! assert_eq!(population[1].fitness().score(), Some(2.0));
//! assert_eq!(evaluation.eval_count(), 2);
//!
//! // Already evaluated individuals are not scored again.
//! evaluation.evaluate(&mut population).unwrap();
//! assert_eq!(evaluation.eval_count(), 2);
//! ```

use tracing::trace;

use crate::error::{GeneticError, Result};
use crate::individual::Individual;

/// Scores an individual. Lower scores are better.
pub trait Challenge<C> {
    fn score(&self, individual: &C) -> f64;
}

impl<C, F> Challenge<C> for F
where
    F: Fn(&C) -> f64,
{
    fn score(&self, individual: &C) -> f64 {
        self(individual)
    }
}

/// Applies a [`Challenge`] to individuals and counts the evaluations performed.
#[derive(Debug, Clone)]
pub struct Evaluation<Ch> {
    challenge: Ch,
    eval_count: usize,
}

impl<Ch> Evaluation<Ch> {
    pub fn new(challenge: Ch) -> Self {
        Self {
            challenge,
            eval_count: 0,
        }
    }

    /// Returns the number of scores computed so far.
    pub fn eval_count(&self) -> usize {
        self.eval_count
    }

    /// Scores `individual` unconditionally and stores the result.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::FitnessCalculation`] if the score is NaN or infinite. The
    /// individual keeps its previous fitness in that case.
    pub fn evaluate_one<C>(&mut self, individual: &mut C) -> Result<f64>
    where
        C: Individual,
        Ch: Challenge<C>,
    {
        let score = self.checked_score(individual)?;
        individual.set_fitness(score);
        Ok(score)
    }

    /// Scores every unevaluated member of `population`, each exactly once.
    ///
    /// Returns the number of individuals scored by this call.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::FitnessCalculation`] if any score is NaN or infinite. All
    /// scores are computed before any fitness is written, so a failed call leaves the
    /// population unchanged.
    pub fn evaluate<C>(&mut self, population: &mut [C]) -> Result<usize>
    where
        C: Individual,
        Ch: Challenge<C>,
    {
        let scores = population
            .iter()
            .enumerate()
            .filter(|(_, individual)| !individual.is_evaluated())
            .map(|(index, individual)| Ok((index, self.checked_score(individual)?)))
            .collect::<Result<Vec<_>>>()?;

        for &(index, score) in &scores {
            population[index].set_fitness(score);
        }

        trace!(
            evaluated = scores.len(),
            population = population.len(),
            total = self.eval_count,
            "evaluated population"
        );
        Ok(scores.len())
    }

    fn checked_score<C>(&mut self, individual: &C) -> Result<f64>
    where
        Ch: Challenge<C>,
    {
        let score = self.challenge.score(individual);
        self.eval_count += 1;

        if !score.is_finite() {
            return Err(GeneticError::FitnessCalculation(format!(
                "Non-finite fitness score encountered: {}",
                score
            )));
        }
        Ok(score)
    }
}
