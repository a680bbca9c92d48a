use minext_application::PlanSolver;
use minext_domain::{OpinionDataset, Solution};
use minext_model::ModelBuilder;

/// Solves the integer program in-process through `good_lp`.
#[derive(Default)]
pub struct GoodLpPlanSolver;

impl PlanSolver for GoodLpPlanSolver {
    fn solve(&self, dataset: &OpinionDataset) -> Solution {
        let model = ModelBuilder::build(dataset);
        tracing::debug!(
            variables = model.variable_count(),
            constraints = model.constraint_count(),
            "model built"
        );
        model.solve()
    }
}
