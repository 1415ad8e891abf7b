use tracing::{debug, trace, warn};

use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::options::AgeFitnessOptions;
use crate::selection::pareto::{self, Objectives};
use crate::selection::selection_strategy::SelectionStrategy;

/// Age-fitness Pareto survivor selection.
///
/// Individuals are ranked by two minimised objectives, fitness and genetic age. Selection
/// removes individuals one at a time until the target size is reached:
///
/// 1. Draw a sample of up to `selection_size` distinct individuals from the current
///    survivors.
/// 2. Find the sampled individuals that are dominated by another sampled individual.
/// 3. If there are any, remove one of them, chosen uniformly at random. Otherwise the
///    attempt removes nothing.
///
/// An individual dominated inside a sample is dominated in the whole population, so
/// members of the global Pareto front are never removed. Selection stops early once the
/// survivors form a single front, returning more individuals than requested.
///
/// Once the attempt cap from [`AgeFitnessOptions`] is used up, each further attempt skips
/// sampling and removes a uniformly chosen survivor that is dominated in the whole
/// population. Small samples can miss the one pair that exposes a dominated individual, so
/// this keeps the result equal to the target size or to a single front.
///
/// The number of attempts made by the last call, no-op and post-cap attempts included, is
/// available through [`AgeFitnessSelection::selection_attempts`].
///
/// # Examples
///
/// ```
/// use agefit::chromosome::Chromosome;
/// use agefit::individual::Individual;
/// use agefit::rng::RandomNumberGenerator;
/// use agefit::selection::{AgeFitnessSelection, SelectionStrategy};
///
/// // Three individuals trading fitness against age: none dominates another.
/// let mut population = vec![
///     Chromosome::new(vec![false, false]),
///     Chromosome::new(vec![false, true]).with_genetic_age(1),
///     Chromosome::new(vec![true, true]).with_genetic_age(2),
/// ];
/// for (score, individual) in population.iter_mut().rev().enumerate() {
///     individual.set_fitness(score as f64);
/// }
///
/// let mut rng = RandomNumberGenerator::from_seed(0);
/// let mut selection = AgeFitnessSelection::default();
/// let survivors = selection.select(&population, 1, &mut rng).unwrap();
///
/// assert_eq!(survivors, population);
/// assert_eq!(selection.selection_attempts(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AgeFitnessSelection {
    options: AgeFitnessOptions,
    selection_attempts: usize,
}

impl AgeFitnessSelection {
    pub fn new(options: AgeFitnessOptions) -> Self {
        Self {
            options,
            selection_attempts: 0,
        }
    }

    /// Sets the number of individuals sampled per attempt.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if `selection_size` is below 2.
    pub fn with_selection_size(mut self, selection_size: usize) -> Result<Self> {
        self.options.set_selection_size(selection_size)?;
        Ok(self)
    }

    /// Sets the maximum number of attempts per call.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if `max_attempts` is zero.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Result<Self> {
        self.options.set_max_attempts(max_attempts)?;
        Ok(self)
    }

    /// Returns the number of attempts made by the last call to `select`.
    pub fn selection_attempts(&self) -> usize {
        self.selection_attempts
    }

    /// Runs one attempt over the survivors listed in `alive`.
    ///
    /// Returns the position in `alive` of the individual to remove, if the sample held a
    /// dominated individual.
    fn attempt(
        &self,
        alive: &[usize],
        objectives: &[Objectives],
        rng: &mut RandomNumberGenerator,
    ) -> Option<usize> {
        let sample = rng.sample_indices(alive.len(), self.options.selection_size());
        let sampled: Vec<Objectives> = sample.iter().map(|&i| objectives[alive[i]]).collect();

        let dominated = pareto::dominated(&sampled);
        if dominated.is_empty() {
            return None;
        }

        let chosen = dominated[rng.gen_index(dominated.len())];
        Some(sample[chosen])
    }
}

impl<C> SelectionStrategy<C> for AgeFitnessSelection
where
    C: Individual,
{
    fn select(
        &mut self,
        population: &[C],
        target_population_size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<C>> {
        if target_population_size > population.len() {
            return Err(GeneticError::TargetSizeOutOfRange {
                target: target_population_size,
                available: population.len(),
            });
        }

        let objectives = population
            .iter()
            .enumerate()
            .map(|(index, individual)| Objectives::of(individual, index))
            .collect::<Result<Vec<_>>>()?;

        self.selection_attempts = 0;
        let attempt_cap = self.options.attempt_cap(population.len());
        let mut alive: Vec<usize> = (0..population.len()).collect();
        let mut alive_objectives = objectives.clone();

        while alive.len() > target_population_size {
            let dominated = pareto::dominated(&alive_objectives);
            if dominated.is_empty() {
                debug!(
                    survivors = alive.len(),
                    target = target_population_size,
                    "survivors form a single Pareto front"
                );
                break;
            }

            if self.selection_attempts == attempt_cap {
                warn!(
                    attempts = self.selection_attempts,
                    survivors = alive.len(),
                    dominated = dominated.len(),
                    target = target_population_size,
                    "selection attempt cap reached, removing dominated survivors directly"
                );
            }

            self.selection_attempts += 1;
            let removal = if self.selection_attempts > attempt_cap {
                Some(dominated[rng.gen_index(dominated.len())])
            } else {
                self.attempt(&alive, &objectives, rng)
            };

            match removal {
                Some(position) => {
                    let removed = alive.remove(position);
                    alive_objectives.remove(position);
                    debug!(
                        attempt = self.selection_attempts,
                        removed,
                        fitness = objectives[removed].fitness,
                        age = objectives[removed].age,
                        "removed dominated individual"
                    );
                }
                None => trace!(
                    attempt = self.selection_attempts,
                    "sample is non-dominated, nothing removed"
                ),
            }
        }

        debug!(
            attempts = self.selection_attempts,
            survivors = alive.len(),
            target = target_population_size,
            "age-fitness selection finished"
        );

        Ok(alive.into_iter().map(|i| population[i].clone()).collect())
    }
}
