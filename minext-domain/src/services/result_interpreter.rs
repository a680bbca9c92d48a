use crate::{
    model::{MovementPlan, OpinionDataset},
    services::plan_evaluator::final_distribution,
    solution::Solution,
};

#[derive(Debug, Clone, PartialEq)]
pub struct InterpretedResult {
    pub plan: MovementPlan,
    pub final_distribution: Vec<i64>,
}

pub struct ResultInterpreter;

impl ResultInterpreter {
    /// Rounds the solver's `x[i][j]` values into integer transfers.
    ///
    /// A solution without an assignment yields an idle plan, so the final
    /// distribution equals the initial one.
    pub fn interpret(solution: &Solution, dataset: &OpinionDataset) -> InterpretedResult {
        let m = dataset.opinion_count();
        let plan = if solution.status.has_assignment() {
            MovementPlan::from_fn(m, |from, to| {
                let value = solution.values.get(from * m + to).copied().unwrap_or(0.0);
                round_bankers(value).max(0) as u64
            })
        } else {
            MovementPlan::empty(m)
        };
        let final_distribution = final_distribution(dataset, &plan);

        InterpretedResult {
            plan,
            final_distribution,
        }
    }
}

fn round_bankers(value: f64) -> i64 {
    value.round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::DatasetInput, solution::SolveStatus};
    use rstest::rstest;

    fn dataset() -> OpinionDataset {
        OpinionDataset::try_new(DatasetInput {
            total_population: 10,
            opinion_count: 2,
            populations: vec![10, 0],
            extremism: vec![1.0, 0.0],
            activation_costs: vec![0.0, 5.0],
            transfer_costs: vec![vec![0.0, 1.0], vec![1.0, 0.0]],
            max_cost: 100.0,
            max_movement: 10,
        })
        .expect("valid dataset")
    }

    #[test]
    fn rounds_solver_noise_to_integers() {
        let solution = Solution::optimal(0.0, vec![0.000_000_3, 9.999_999_8, -0.000_000_1, 0.0]);
        let result = ResultInterpreter::interpret(&solution, &dataset());

        assert_eq!(result.plan.get(0, 1), 10);
        assert_eq!(result.plan.get(0, 0), 0);
        assert_eq!(result.plan.get(1, 0), 0);
        assert_eq!(result.final_distribution, vec![0, 10]);
    }

    #[rstest]
    #[case::infeasible(SolveStatus::Infeasible)]
    #[case::unbounded(SolveStatus::Unbounded)]
    #[case::not_solved(SolveStatus::NotSolved)]
    #[case::error(SolveStatus::Error)]
    fn statuses_without_assignment_give_idle_plan(#[case] status: SolveStatus) {
        let result = ResultInterpreter::interpret(&Solution::without_assignment(status), &dataset());

        assert!(result.plan.is_idle());
        assert_eq!(result.plan.size(), 2);
        assert_eq!(result.final_distribution, vec![10, 0]);
    }

    #[test]
    fn largest_accepted_population_stays_non_negative() {
        let dataset = OpinionDataset::try_new(DatasetInput {
            total_population: 1,
            opinion_count: 2,
            populations: vec![i64::MAX as u64, 0],
            extremism: vec![1.0, 0.0],
            activation_costs: vec![0.0, 5.0],
            transfer_costs: vec![vec![0.0, 1.0], vec![1.0, 0.0]],
            max_cost: 100.0,
            max_movement: 10,
        })
        .expect("valid dataset");

        let result =
            ResultInterpreter::interpret(&Solution::without_assignment(SolveStatus::Infeasible), &dataset);
        assert_eq!(result.final_distribution, vec![i64::MAX, 0]);
    }
}
