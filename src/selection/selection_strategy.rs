use std::fmt::Debug;

use crate::error::Result;
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Trait for survivor selection strategies.
///
/// A selection strategy shrinks an evaluated population toward a target size, deciding
/// which individuals survive into the next generation. The input population is only read;
/// survivors are returned as clones in their original relative order.
///
/// # Examples
///
/// ```
/// use agefit::chromosome::Chromosome;
/// use agefit::error::Result;
/// use agefit::individual::Individual;
/// use agefit::rng::RandomNumberGenerator;
/// use agefit::selection::{AgeFitnessSelection, SelectionStrategy};
///
/// fn main() -> Result<()> {
///     let mut population: Vec<Chromosome<bool>> = vec![
///         Chromosome::new(vec![true, true]),
///         Chromosome::new(vec![false, true]).with_genetic_age(3),
///         Chromosome::new(vec![false, false]).with_genetic_age(5),
///     ];
///     for individual in population.iter_mut() {
///         let zeros = individual.values().iter().filter(|&&v| !v).count();
///         individual.set_fitness(zeros as f64);
///     }
///
///     let mut rng = RandomNumberGenerator::from_seed(1);
///     let mut selection = AgeFitnessSelection::default();
///     let survivors = selection.select(&population, 1, &mut rng)?;
///
///     assert_eq!(survivors.len(), 1);
///     assert_eq!(survivors[0].values(), &[true, true]);
///
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy<C>: Debug
where
    C: Individual,
{
    /// Selects the survivors of `population`, aiming for `target_population_size`.
    ///
    /// # Arguments
    ///
    /// * `population` - The evaluated population to select from.
    /// * `target_population_size` - The number of survivors to aim for.
    /// * `rng` - The random number generator every random decision is drawn from.
    ///
    /// # Returns
    ///
    /// The surviving individuals.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The target exceeds the population size
    /// - An individual has not been evaluated
    fn select(
        &mut self,
        population: &[C],
        target_population_size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<C>>;
}
