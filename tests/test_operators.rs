use agefit::{
    chromosome::Chromosome,
    crossover::{Crossover, SinglePointCrossover},
    error::GeneticError,
    evaluation::Evaluation,
    generator::{Generator, MultipleValueGenerator},
    individual::{Fitness, Individual},
    mutation::{Mutation, SinglePointMutation},
    rng::RandomNumberGenerator,
    selection::{AgeFitnessSelection, SelectionStrategy},
};

const POPULATION_SIZE: usize = 20;
const GENOME_LENGTH: usize = 8;

fn count_false(chromosome: &Chromosome<bool>) -> f64 {
    chromosome.values().iter().filter(|&&v| !v).count() as f64
}

fn coin_flip(rng: &mut RandomNumberGenerator) -> bool {
    rng.gen_bool(0.5)
}

#[test]
fn test_mutation_differs_in_one_position() {
    let mut rng = RandomNumberGenerator::from_seed(10);
    let generator = MultipleValueGenerator::new(coin_flip, GENOME_LENGTH);
    let mut mutation = SinglePointMutation::new(|_: &mut RandomNumberGenerator| 7u8);

    for parent in generator.generate_population(POPULATION_SIZE, &mut rng) {
        let parent = Chromosome::new(
            parent.values().iter().map(|&v| v as u8).collect::<Vec<u8>>(),
        );
        let child = mutation.mutate(&parent, &mut rng).unwrap();

        assert_eq!(parent.distance(&child), Ok(1));
        assert_eq!(child.fitness(), Fitness::Unevaluated);
    }
}

#[test]
fn test_crossover_children_recombine_parents() {
    let mut rng = RandomNumberGenerator::from_seed(11);
    let generator = MultipleValueGenerator::new(
        |rng: &mut RandomNumberGenerator| rng.gen_uniform(-1.0, 1.0),
        GENOME_LENGTH,
    );
    let mut crossover = SinglePointCrossover::new();

    for _ in 0..POPULATION_SIZE {
        let parent_1 = generator.generate(&mut rng).with_genetic_age(rng.gen_index(5) as u64);
        let parent_2 = generator.generate(&mut rng).with_genetic_age(rng.gen_index(5) as u64);

        let (child_1, child_2) = crossover.crossover(&parent_1, &parent_2, &mut rng).unwrap();
        let k = crossover.crossover_point();

        assert_eq!(child_1.values()[..k], parent_1.values()[..k]);
        assert_eq!(child_1.values()[k..], parent_2.values()[k..]);
        assert_eq!(child_2.values()[..k], parent_2.values()[..k]);
        assert_eq!(child_2.values()[k..], parent_1.values()[k..]);

        let age = parent_1.genetic_age().max(parent_2.genetic_age());
        assert_eq!(child_1.genetic_age(), age);
        assert_eq!(child_2.genetic_age(), age);
    }
}

#[test]
fn test_operators_reject_bad_parents() {
    let mut rng = RandomNumberGenerator::from_seed(12);
    let mut crossover = SinglePointCrossover::new();
    let mut mutation = SinglePointMutation::new(coin_flip);

    let short = Chromosome::new(vec![true]);
    let long = Chromosome::new(vec![true, false]);
    let empty: Chromosome<bool> = Chromosome::new(Vec::new());

    assert_eq!(
        crossover.crossover(&short, &long, &mut rng),
        Err(GeneticError::LengthMismatch { left: 1, right: 2 })
    );
    assert_eq!(
        mutation.mutate(&empty, &mut rng),
        Err(GeneticError::EmptyChromosome)
    );
    assert_eq!(short.values(), &[true]);
}

#[test]
fn test_generation_cycle() {
    let mut rng = RandomNumberGenerator::from_seed(13);
    let generator = MultipleValueGenerator::new(coin_flip, GENOME_LENGTH);
    let mut crossover = SinglePointCrossover::new();
    let mut mutation = SinglePointMutation::new(coin_flip);
    let mut evaluation = Evaluation::new(count_false);
    let mut selection = AgeFitnessSelection::default();

    let mut population = generator.generate_population(POPULATION_SIZE, &mut rng);
    evaluation.evaluate(&mut population).unwrap();
    assert_eq!(evaluation.eval_count(), POPULATION_SIZE);

    for generation in 0..5 {
        let mut offspring = Vec::with_capacity(POPULATION_SIZE);
        for pair in population.chunks(2) {
            if let [parent_1, parent_2] = pair {
                let (child_1, child_2) = crossover.crossover(parent_1, parent_2, &mut rng).unwrap();
                offspring.push(child_1);
                offspring.push(mutation.mutate(&child_2, &mut rng).unwrap());
            }
        }
        for individual in population.iter_mut() {
            individual.set_genetic_age(individual.genetic_age() + 1);
        }

        let before = evaluation.eval_count();
        evaluation.evaluate(&mut offspring).unwrap();
        assert_eq!(evaluation.eval_count(), before + offspring.len());

        population.extend(offspring);
        // Aging keeps the evaluated fitness valid.
        assert!(population.iter().all(|c| c.is_evaluated()));

        population = selection.select(&population, POPULATION_SIZE, &mut rng).unwrap();
        assert!(
            population.len() >= POPULATION_SIZE,
            "generation {} shrank below the target",
            generation
        );
    }
}
