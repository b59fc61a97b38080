//! Property tests for evaluation, mutation and the generational update.

use proptest::prelude::*;
use u_strevo::evo::individual::{MAX_CHAR, MIN_CHAR};
use u_strevo::evo::{create_rng, Individual, Population, Target};

fn printable() -> impl Strategy<Value = String> {
    "[ -~]{0,24}"
}

proptest! {
    #[test]
    fn zero_error_iff_exact_match(content in printable(), target in printable()) {
        let target_ref = Target::from(target.as_str());
        let mut individual = Individual::from_text(&content).unwrap();
        let error = individual.evaluate(&target_ref);
        prop_assert_eq!(error == 0, content == target);
        prop_assert_eq!(individual.matches(&target_ref), content == target);
    }

    #[test]
    fn evaluate_is_deterministic(content in printable(), target in "\\PC{0,16}") {
        let target = Target::from(target.as_str());
        let mut individual = Individual::from_text(&content).unwrap();
        let first = individual.evaluate(&target);
        let second = individual.evaluate(&target);
        prop_assert_eq!(first, second);
        prop_assert_eq!(individual.error(), first);
    }

    #[test]
    fn error_is_square_of_distance(content in printable(), target in printable()) {
        let mut individual = Individual::from_text(&content).unwrap();
        let error = individual.evaluate(&Target::from(target.as_str()));
        let root = (error as f64).sqrt().round() as u64;
        prop_assert_eq!(root * root, error);
        prop_assert!(root >= content.len().abs_diff(target.len()) as u64 * 128);
    }

    #[test]
    fn mutation_keeps_range_and_length(content in printable(), seed in any::<u64>(), max_length in 0usize..48) {
        let mut rng = create_rng(seed);
        let mut individual = Individual::from_text(&content).unwrap();
        for _ in 0..20 {
            individual.mutate(max_length.max(content.len()), &mut rng);
            prop_assert!(individual.len() <= max_length.max(content.len()));
            prop_assert!(individual.as_bytes().iter().all(|&c| (MIN_CHAR..=MAX_CHAR).contains(&c)));
        }
    }

    #[test]
    fn random_individuals_respect_bounds(seed in any::<u64>(), max_length in 0usize..64) {
        let mut rng = create_rng(seed);
        let individual = Individual::random(max_length, &mut rng);
        prop_assert!(individual.len() <= max_length);
        prop_assert!(individual.as_bytes().iter().all(|&c| (MIN_CHAR..=MAX_CHAR).contains(&c)));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn elite_error_never_increases(target in "[ -~]{1,12}", seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        let mut population = Population::new(Target::from(target.as_str()), 30, &mut rng).unwrap();
        let mut previous = u64::MAX;
        for _ in 0..40 {
            population.update(&mut rng);
            let current = population.best().error();
            prop_assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn elite_survives_mutation(target in "[ -~]{1,12}", seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        let mut population = Population::new(Target::from(target.as_str()), 30, &mut rng).unwrap();
        let target = population.target().clone();
        for _ in 0..10 {
            let mut candidates = population.members().to_vec();
            let errors: Vec<u64> = candidates.iter_mut().map(|m| m.evaluate(&target)).collect();
            let min = errors.iter().copied().min().unwrap();
            let first_min = errors.iter().position(|&e| e == min).unwrap();

            population.update(&mut rng);

            prop_assert_eq!(population.best().as_bytes(), candidates[first_min].as_bytes());
            prop_assert_eq!(population.best().error(), min);
        }
    }
}
