use crate::model::{MovementPlan, OpinionDataset};

/// `p[j] + inflow(j) - outflow(j)` for every bin, saturating at the `i64` range.
pub fn final_distribution(dataset: &OpinionDataset, plan: &MovementPlan) -> Vec<i64> {
    dataset
        .populations()
        .iter()
        .enumerate()
        .map(|(bin, &population)| {
            let total =
                i128::from(population) + i128::from(plan.inflow(bin)) - i128::from(plan.outflow(bin));
            i64::try_from(total).unwrap_or(if total < 0 { i64::MIN } else { i64::MAX })
        })
        .collect()
}

/// Left-hand side of the cost budget, self-transfers excluded.
pub fn weighted_cost(dataset: &OpinionDataset, plan: &MovementPlan) -> f64 {
    plan.transfers()
        .filter(|transfer| !transfer.is_kept())
        .map(|transfer| transfer.count as f64 * dataset.cost_coefficient(transfer.from, transfer.to))
        .sum()
}

/// Left-hand side of the movement budget: `sum x[i][j] * |j - i|`.
pub fn movement_used(plan: &MovementPlan) -> u64 {
    plan.transfers()
        .fold(0_u64, |total, transfer| {
            total.saturating_add(
                transfer
                    .count
                    .saturating_mul(OpinionDataset::distance(transfer.from, transfer.to)),
            )
        })
}

pub fn distribution_extremism(dataset: &OpinionDataset, distribution: &[i64]) -> f64 {
    distribution
        .iter()
        .zip(dataset.extremism())
        .map(|(&population, &ext)| population as f64 * ext)
        .sum()
}
