pub mod age_fitness;
pub mod options;
pub mod pareto;
pub mod selection_strategy;

pub use age_fitness::AgeFitnessSelection;
pub use options::{AgeFitnessOptions, AgeFitnessOptionsBuilder};
pub use pareto::Objectives;
pub use selection_strategy::SelectionStrategy;
