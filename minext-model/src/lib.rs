#![warn(clippy::uninlined_format_args)]

use good_lp::{
    Constraint, Expression, ProblemVariables, ResolutionError, Solution as _, SolverModel,
    Variable, default_solver, variable, variables,
};
use minext_domain::{OpinionDataset, Solution, SolveStatus};

/// Integer program for one dataset: variables `x[i][j]`, the extremism
/// objective and the supply, cost and movement constraints.
pub struct MinExtModel {
    size: usize,
    vars: ProblemVariables,
    transfers: Vec<Variable>,
    objective: Expression,
    // sum p[j] * ext[j]; the solver only sees the variable part
    objective_offset: f64,
    constraints: Vec<Constraint>,
}

pub struct ModelBuilder;

impl ModelBuilder {
    pub fn build(dataset: &OpinionDataset) -> MinExtModel {
        let m = dataset.opinion_count();
        let populations = dataset.populations();
        let extremism = dataset.extremism();
        let caps = dataset.caps();

        let mut vars = variables!();
        let mut transfers: Vec<Variable> = Vec::with_capacity(m * m);
        for _ in 0..m * m {
            transfers.push(vars.add(variable().integer().min(0.0)));
        }
        let x = |from: usize, to: usize| transfers[from * m + to];

        // sum_j final_p[j] * ext[j] expands to the constant initial extremism plus
        // (ext[j] - ext[i]) for every person moved from i to j.
        let mut objective = Expression::with_capacity(m * m);
        for from in 0..m {
            for to in 0..m {
                if from != to {
                    objective.add_mul(extremism[to] - extremism[from], x(from, to));
                }
            }
        }

        let mut constraints = Vec::with_capacity(m + 2);

        // Supply: sum_j x[i][j] <= p[i], x[i][i] included
        for (from, &population) in populations.iter().enumerate() {
            let mut supply = Expression::with_capacity(m);
            for to in 0..m {
                supply.add_mul(1.0, x(from, to));
            }
            constraints.push(supply.leq(population as f64));
        }

        // Cost budget over cross-bin moves only
        let mut cost = Expression::with_capacity(m * m);
        for from in 0..m {
            for to in 0..m {
                if from != to {
                    cost.add_mul(dataset.cost_coefficient(from, to), x(from, to));
                }
            }
        }
        constraints.push(cost.leq(caps.max_cost));

        // Movement budget over all pairs; |i - i| = 0 keeps self-transfers out
        let mut movement = Expression::with_capacity(m * m);
        for from in 0..m {
            for to in 0..m {
                movement.add_mul(OpinionDataset::distance(from, to) as f64, x(from, to));
            }
        }
        constraints.push(movement.leq(caps.max_movement as f64));

        MinExtModel {
            size: m,
            vars,
            transfers,
            objective,
            objective_offset: dataset.initial_extremism(),
            constraints,
        }
    }
}

impl MinExtModel {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn variable_count(&self) -> usize {
        self.transfers.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Runs the in-process integer solver. Blocking.
    pub fn solve(self) -> Solution {
        let MinExtModel {
            vars,
            transfers,
            objective,
            objective_offset,
            constraints,
            ..
        } = self;

        let objective_expr = objective.clone();
        let mut problem = vars.minimise(objective).using(default_solver);
        #[cfg(feature = "coin_cbc")]
        problem.set_parameter("log", "0");

        for constraint in constraints {
            problem = problem.with(constraint);
        }

        match problem.solve() {
            Ok(solution) => {
                let values = transfers.iter().map(|&var| solution.value(var)).collect();
                let objective_value = objective_offset + objective_expr.eval_with(&solution);
                Solution::optimal(objective_value, values)
            }
            Err(ResolutionError::Infeasible) => Solution::without_assignment(SolveStatus::Infeasible),
            Err(ResolutionError::Unbounded) => Solution::without_assignment(SolveStatus::Unbounded),
            Err(_) => Solution::without_assignment(SolveStatus::Error),
        }
    }
}
