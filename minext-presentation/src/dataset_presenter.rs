use std::fmt::Write as _;

use minext_domain::OpinionDataset;
use minext_i18n as i18n;

use crate::join_values;

pub struct DatasetPresenter;

impl DatasetPresenter {
    pub fn render(dataset: &OpinionDataset) -> String {
        let caps = dataset.caps();
        let mut out = String::with_capacity(256);

        let _ = writeln!(out, "{}", i18n::DATASET_HEADER);
        let _ = writeln!(out, "{}: {}", i18n::TOTAL_PEOPLE, caps.total_population);
        let _ = writeln!(out, "{}: {}", i18n::OPINION_COUNT, dataset.opinion_count());
        let _ = writeln!(
            out,
            "{}: [{}]",
            i18n::INITIAL_DISTRIBUTION,
            join_values(dataset.populations())
        );
        let _ = writeln!(
            out,
            "{}: [{}]",
            i18n::EXTREMISM_LEVELS,
            join_values(dataset.extremism())
        );
        let _ = writeln!(
            out,
            "{}: [{}]",
            i18n::EXTRA_COSTS,
            join_values(dataset.activation_costs())
        );
        let _ = writeln!(out, "{}:", i18n::COST_MATRIX);
        for row in dataset.transfer_costs().rows() {
            let _ = writeln!(out, "  [{}]", join_values(row));
        }
        let _ = writeln!(out, "{}: {}", i18n::MAX_TOTAL_COST, caps.max_cost);
        let _ = write!(out, "{}: {}", i18n::MAX_MOVEMENTS, caps.max_movement);

        out
    }
}
