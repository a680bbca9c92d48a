use std::fmt::Write as _;

use minext_application::SolveReport;
use minext_domain::{SolveMetrics, SolveStatus, Transfer};
use minext_i18n as i18n;

use crate::join_values;

pub struct ReportPresenter;

impl ReportPresenter {
    pub fn render(report: &SolveReport) -> String {
        let mut out = String::with_capacity(512);

        let _ = writeln!(out, "{}", i18n::RESULTS);
        let _ = writeln!(
            out,
            "{}: {}",
            i18n::SOLUTION_STATUS,
            status_label(report.status)
        );
        let _ = writeln!(
            out,
            "{}: {}",
            i18n::MIN_EXTREMISM,
            optional_decimal(report.metrics.extremism_final)
        );

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", i18n::SUGGESTED_MOVES);
        let lines = Self::move_lines(report.plan.transfers());
        if lines.is_empty() {
            let _ = writeln!(out, "  {}", i18n::NO_MOVES);
        }
        for line in lines {
            let _ = writeln!(out, "  {line}");
        }

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}: [{}]",
            i18n::FINAL_DISTRIBUTION,
            join_values(&report.final_distribution)
        );

        let _ = writeln!(out);
        out.push_str(&Self::render_summary(&report.metrics));
        out
    }

    /// One line per non-zero entry, opinions numbered from 1.
    pub fn move_lines(transfers: impl Iterator<Item = Transfer>) -> Vec<String> {
        transfers
            .map(|transfer| {
                if transfer.is_kept() {
                    i18n::keep_people(transfer.count, transfer.from + 1)
                } else {
                    i18n::move_people(transfer.count, transfer.from + 1, transfer.to + 1)
                }
            })
            .collect()
    }

    pub fn render_summary(metrics: &SolveMetrics) -> String {
        let mut out = String::with_capacity(256);
        let _ = writeln!(out, "{}", i18n::SUMMARY);
        let _ = writeln!(
            out,
            "  {}: {:.4}",
            i18n::EXTREMISM_INITIAL,
            metrics.extremism_initial
        );
        let _ = writeln!(
            out,
            "  {}: {}",
            i18n::EXTREMISM_FINAL,
            optional_decimal(metrics.extremism_final)
        );
        let _ = writeln!(out, "  {}: {:.4}", i18n::COST_INITIAL, metrics.cost_initial);
        let _ = writeln!(out, "  {}: {:.4}", i18n::COST_FINAL, metrics.cost_final);
        let _ = writeln!(out, "  {}: {}", i18n::MOVEMENT_CAP, metrics.movement_cap);
        let _ = writeln!(out, "  {}: {}", i18n::MOVEMENT_USED, metrics.movement_used);
        let _ = write!(
            out,
            "  {}: {:.4}",
            i18n::SOLVE_TIME,
            metrics.solve_duration.as_secs_f64()
        );
        out
    }
}

pub fn status_label(status: SolveStatus) -> &'static str {
    match status {
        SolveStatus::Optimal => i18n::STATUS_OPTIMAL,
        SolveStatus::Infeasible => i18n::STATUS_INFEASIBLE,
        SolveStatus::Unbounded => i18n::STATUS_UNBOUNDED,
        SolveStatus::NotSolved => i18n::STATUS_NOT_SOLVED,
        SolveStatus::Error => i18n::STATUS_ERROR,
    }
}

fn optional_decimal(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value:.4}"),
        None => i18n::NOT_AVAILABLE.to_string(),
    }
}
