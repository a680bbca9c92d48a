use std::time::Duration;

use crate::{
    model::{MovementPlan, OpinionDataset},
    services::plan_evaluator::{movement_used, weighted_cost},
    solution::Solution,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SolveMetrics {
    pub extremism_initial: f64,
    /// Objective value; absent when the solver produced no assignment.
    pub extremism_final: Option<f64>,
    /// Always zero: nobody has moved before optimization.
    pub cost_initial: f64,
    pub cost_final: f64,
    /// Configured ceiling `maxM`, not an achieved quantity.
    pub movement_cap: u64,
    pub movement_used: u64,
    pub solve_duration: Duration,
}

pub struct MetricsCalculator;

impl MetricsCalculator {
    pub fn compute(
        dataset: &OpinionDataset,
        solution: &Solution,
        plan: &MovementPlan,
        solve_duration: Duration,
    ) -> SolveMetrics {
        SolveMetrics {
            extremism_initial: dataset.initial_extremism(),
            extremism_final: solution.objective_value,
            cost_initial: 0.0,
            cost_final: weighted_cost(dataset, plan),
            movement_cap: dataset.caps().max_movement,
            movement_used: movement_used(plan),
            solve_duration,
        }
    }
}
