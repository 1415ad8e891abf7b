//! Pareto dominance over the two selection objectives, fitness and genetic age.
//!
//! Both objectives are minimised. `a` dominates `b` when it is no worse in either
//! objective and strictly better in at least one. Individuals with identical objectives
//! do not dominate each other, so duplicates all sit on the same front.
//!
//! The front is found by sorting on `(fitness, age)` and sweeping once, which keeps the
//! per-attempt check in [`AgeFitnessSelection`](super::AgeFitnessSelection) at
//! `O(n log n)`.

use std::cmp::Ordering;

use crate::error::{GeneticError, Result};
use crate::individual::Individual;

/// The pair of objectives an individual is ranked by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Objectives {
    pub fitness: f64,
    pub age: u64,
}

impl Objectives {
    pub fn new(fitness: f64, age: u64) -> Self {
        Self { fitness, age }
    }

    /// Reads the objectives of `individual`, which sits at `index` in its population.
    ///
    /// # Errors
    ///
    /// - [`GeneticError::UnevaluatedIndividual`] if the individual has no fitness.
    /// - [`GeneticError::InvalidNumericValue`] if the fitness is NaN or infinite.
    pub fn of<I: Individual>(individual: &I, index: usize) -> Result<Self> {
        let fitness = individual
            .fitness()
            .score()
            .ok_or(GeneticError::UnevaluatedIndividual { index })?;

        if !fitness.is_finite() {
            return Err(GeneticError::InvalidNumericValue(format!(
                "Individual at index {} has non-finite fitness {}",
                index, fitness
            )));
        }

        Ok(Self::new(fitness, individual.genetic_age()))
    }
}

/// Returns `true` if `a` dominates `b`.
pub fn dominates(a: &Objectives, b: &Objectives) -> bool {
    a.fitness <= b.fitness && a.age <= b.age && (a.fitness < b.fitness || a.age < b.age)
}

/// Flags every entry of `objectives` that is dominated by another entry.
///
/// Fitness values are expected to be finite; [`Objectives::of`] rejects anything else.
pub fn dominated_mask(objectives: &[Objectives]) -> Vec<bool> {
    let mut order: Vec<usize> = (0..objectives.len()).collect();
    order.sort_by(|&a, &b| {
        let (a, b) = (&objectives[a], &objectives[b]);
        match a.fitness.total_cmp(&b.fitness) {
            Ordering::Equal => a.age.cmp(&b.age),
            other => other,
        }
    });

    let mut dominated = vec![false; objectives.len()];
    // Youngest age among entries with strictly lower fitness.
    let mut best_age_before: Option<u64> = None;
    let mut start = 0;

    while start < order.len() {
        let fitness = objectives[order[start]].fitness;
        let group_age = objectives[order[start]].age;
        let mut end = start;

        while end < order.len() && (end == start || objectives[order[end]].fitness == fitness) {
            let age = objectives[order[end]].age;
            dominated[order[end]] =
                best_age_before.is_some_and(|best| best <= age) || group_age < age;
            end += 1;
        }

        best_age_before = Some(best_age_before.map_or(group_age, |best| best.min(group_age)));
        start = end;
    }

    dominated
}

/// Returns the indices of the non-dominated entries, in input order.
pub fn pareto_front(objectives: &[Objectives]) -> Vec<usize> {
    dominated_mask(objectives)
        .into_iter()
        .enumerate()
        .filter_map(|(index, dominated)| (!dominated).then_some(index))
        .collect()
}

/// Returns the indices of the dominated entries, in input order.
pub fn dominated(objectives: &[Objectives]) -> Vec<usize> {
    dominated_mask(objectives)
        .into_iter()
        .enumerate()
        .filter_map(|(index, dominated)| dominated.then_some(index))
        .collect()
}

/// Returns `true` if no entry dominates another.
pub fn is_single_front(objectives: &[Objectives]) -> bool {
    !dominated_mask(objectives).into_iter().any(|dominated| dominated)
}
