use minext_domain::{
    DatasetInput, MovementPlan, OpinionDataset, ResultInterpreter, SolveStatus,
    distribution_extremism, final_distribution, movement_used, weighted_cost,
};
use minext_model::ModelBuilder;
use proptest::prelude::*;

const EPS: f64 = 1e-6;

fn dataset(input: DatasetInput) -> OpinionDataset {
    OpinionDataset::try_new(input).expect("dataset build failed")
}

#[test]
fn zero_movement_cap_keeps_everyone_in_place() {
    let dataset = dataset(DatasetInput {
        total_population: 12,
        opinion_count: 3,
        populations: vec![5, 4, 3],
        extremism: vec![3.0, 1.0, 0.0],
        activation_costs: vec![0.0, 0.0, 0.0],
        transfer_costs: vec![vec![0.0; 3]; 3],
        max_cost: 1_000.0,
        max_movement: 0,
    });
    let initial = dataset.initial_extremism();

    let solution = ModelBuilder::build(&dataset).solve();
    assert_eq!(solution.status, SolveStatus::Optimal);
    let objective = solution.objective_value.expect("objective");
    assert!((objective - initial).abs() < EPS);

    let result = ResultInterpreter::interpret(&solution, &dataset);
    assert_eq!(result.plan.total_moved(), 0);
    assert_eq!(result.final_distribution, vec![5, 4, 3]);
}

#[test]
fn equal_extremism_needs_no_moves() {
    let dataset = dataset(DatasetInput {
        total_population: 9,
        opinion_count: 3,
        populations: vec![2, 3, 4],
        extremism: vec![1.5, 1.5, 1.5],
        activation_costs: vec![1.0, 1.0, 1.0],
        transfer_costs: vec![vec![1.0; 3]; 3],
        max_cost: 1e9,
        max_movement: 1_000_000,
    });

    let solution = ModelBuilder::build(&dataset).solve();
    assert_eq!(solution.status, SolveStatus::Optimal);
    let objective = solution.objective_value.expect("objective");
    assert!((objective - dataset.initial_extremism()).abs() < EPS);

    let result = ResultInterpreter::interpret(&solution, &dataset);
    assert!(result.plan.is_idle());
}

#[test]
fn self_transfers_consume_supply_but_not_cost() {
    // Moving everyone from bin 0 to bin 1 is worth it; self-transfers can only
    // take supply away, so the optimum leaves x[0][0] at zero.
    let dataset = dataset(DatasetInput {
        total_population: 4,
        opinion_count: 2,
        populations: vec![4, 1],
        extremism: vec![2.0, 0.0],
        activation_costs: vec![0.0, 0.0],
        transfer_costs: vec![vec![0.0, 1.0], vec![1.0, 0.0]],
        max_cost: 8.0,
        max_movement: 100,
    });

    let solution = ModelBuilder::build(&dataset).solve();
    let result = ResultInterpreter::interpret(&solution, &dataset);

    assert_eq!(result.plan.get(0, 1), 4);
    assert_eq!(result.plan.get(0, 0), 0);
    // 4 * 1 * (1 + 4/4)
    assert!((weighted_cost(&dataset, &result.plan) - 8.0).abs() < EPS);
}

fn small_dataset() -> impl Strategy<Value = DatasetInput> {
    (2usize..=3).prop_flat_map(|m| {
        (
            prop::collection::vec(0u64..=6, m),
            prop::collection::vec(0.0f64..=5.0, m),
            prop::collection::vec(0.0f64..=3.0, m),
            prop::collection::vec(prop::collection::vec(0.0f64..=4.0, m), m),
            0.0f64..=60.0,
            0u64..=8,
        )
            .prop_map(move |(populations, extremism, activation_costs, transfer_costs, max_cost, max_movement)| {
                let total = populations.iter().sum::<u64>().max(1);
                DatasetInput {
                    total_population: total,
                    opinion_count: m,
                    populations,
                    extremism,
                    activation_costs,
                    transfer_costs,
                    max_cost,
                    max_movement,
                }
            })
    })
}

/// Best objective over every integer plan, enumerated exhaustively.
///
/// Self-transfers only use up supply, so they stay at zero here.
fn exhaustive_optimum(dataset: &OpinionDataset) -> f64 {
    let m = dataset.opinion_count();
    let pairs: Vec<(usize, usize)> = (0..m)
        .flat_map(|from| (0..m).map(move |to| (from, to)))
        .filter(|(from, to)| from != to)
        .collect();
    let mut counts = vec![0u64; m * m];
    let mut best = dataset.initial_extremism();
    search(dataset, &pairs, 0, &mut counts, &mut best);
    best
}

fn search(
    dataset: &OpinionDataset,
    pairs: &[(usize, usize)],
    next: usize,
    counts: &mut [u64],
    best: &mut f64,
) {
    let m = dataset.opinion_count();
    let plan = MovementPlan::from_fn(m, |from, to| counts[from * m + to]);
    let caps = dataset.caps();
    if movement_used(&plan) > caps.max_movement
        || (0..m).any(|bin| plan.supply_used(bin) > dataset.populations()[bin])
    {
        return;
    }

    let Some(&(from, to)) = pairs.get(next) else {
        if weighted_cost(dataset, &plan) <= caps.max_cost + EPS {
            let extremism = distribution_extremism(dataset, &final_distribution(dataset, &plan));
            *best = best.min(extremism);
        }
        return;
    };

    let idx = from * m + to;
    for count in 0..=dataset.populations()[from] {
        counts[idx] = count;
        search(dataset, pairs, next + 1, counts, best);
    }
    counts[idx] = 0;
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn solved_plans_respect_every_constraint(input in small_dataset()) {
        let dataset = dataset(input);
        let solution = ModelBuilder::build(&dataset).solve();

        // The idle plan is always feasible for non-negative caps.
        prop_assert_eq!(solution.status, SolveStatus::Optimal);
        for value in &solution.values {
            prop_assert!(*value > -EPS);
            prop_assert!((value - value.round()).abs() < EPS);
        }

        let result = ResultInterpreter::interpret(&solution, &dataset);
        for (bin, &population) in dataset.populations().iter().enumerate() {
            prop_assert!(result.plan.supply_used(bin) <= population);
        }
        prop_assert!(weighted_cost(&dataset, &result.plan) <= dataset.caps().max_cost + EPS);
        prop_assert!(movement_used(&result.plan) <= dataset.caps().max_movement);

        let objective = solution.objective_value.expect("objective");
        prop_assert!(objective <= dataset.initial_extremism() + EPS);
        let achieved = distribution_extremism(&dataset, &result.final_distribution);
        prop_assert!((objective - achieved).abs() < 1e-4);
        prop_assert!(result.final_distribution.iter().all(|&population| population >= 0));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn solver_matches_exhaustive_search(input in small_dataset()) {
        let dataset = dataset(input);
        let solution = ModelBuilder::build(&dataset).solve();
        prop_assert_eq!(solution.status, SolveStatus::Optimal);

        let objective = solution.objective_value.expect("objective");
        let expected = exhaustive_optimum(&dataset);
        prop_assert!((objective - expected).abs() < 1e-4, "solver {objective} vs exhaustive {expected}");
    }
}
