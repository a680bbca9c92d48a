use minext_application::{ExternalSolveOutcome, ExternalSolveReport, SolverProcessError};
use minext_i18n as i18n;

pub struct ExternalSolvePresenter;

impl ExternalSolvePresenter {
    pub fn render(report: &ExternalSolveReport) -> String {
        let created = report
            .data_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| report.data_path.display().to_string());

        format!(
            "{}\n{}\n{}",
            i18n::model_data_created(created),
            i18n::EXTERNAL_RESULT,
            Self::render_outcome(&report.outcome)
        )
    }

    pub fn render_outcome(outcome: &ExternalSolveOutcome) -> String {
        match outcome {
            ExternalSolveOutcome::Optimal { output } => output.trim_end().to_string(),
            ExternalSolveOutcome::Satisfied { output } => {
                format!("{}\n{}", output.trim_end(), i18n::EXTERNAL_INCOMPLETE)
            }
            ExternalSolveOutcome::Infeasible => i18n::EXTERNAL_INFEASIBLE.to_string(),
            ExternalSolveOutcome::Unbounded => i18n::EXTERNAL_UNBOUNDED.to_string(),
            ExternalSolveOutcome::TimedOut { after } => i18n::solver_timed_out(after.as_secs_f64()),
            ExternalSolveOutcome::ProcessError(SolverProcessError::Spawn { program, message }) => {
                i18n::solver_launch_failed(program, message)
            }
            ExternalSolveOutcome::ProcessError(SolverProcessError::NonZeroExit { .. }) => {
                i18n::EXTERNAL_SOLVER_WARNING.to_string()
            }
            ExternalSolveOutcome::ProcessError(SolverProcessError::Inconclusive { marker }) => {
                i18n::solver_inconclusive(marker)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::{path::PathBuf, time::Duration};

    #[rstest]
    #[case::optimal(
        ExternalSolveOutcome::Optimal { output: "x = 1;\n----------\n".to_string() },
        "x = 1;\n----------".to_string()
    )]
    #[case::infeasible(ExternalSolveOutcome::Infeasible, i18n::EXTERNAL_INFEASIBLE.to_string())]
    #[case::timed_out(
        ExternalSolveOutcome::TimedOut { after: Duration::from_secs(60) },
        i18n::solver_timed_out(60.0)
    )]
    #[case::non_zero_exit(
        ExternalSolveOutcome::ProcessError(SolverProcessError::NonZeroExit { code: Some(1) }),
        i18n::EXTERNAL_SOLVER_WARNING.to_string()
    )]
    fn renders_each_outcome(#[case] outcome: ExternalSolveOutcome, #[case] expected: String) {
        assert_eq!(ExternalSolvePresenter::render_outcome(&outcome), expected);
    }

    #[test]
    fn satisfied_output_is_flagged_incomplete() {
        let text = ExternalSolvePresenter::render_outcome(&ExternalSolveOutcome::Satisfied {
            output: "x = 2;\n----------\n".to_string(),
        });
        assert!(text.starts_with("x = 2;"));
        assert!(text.ends_with(i18n::EXTERNAL_INCOMPLETE));
    }

    #[test]
    fn report_names_the_generated_file() {
        let report = ExternalSolveReport {
            data_path: PathBuf::from("out/DatosProyecto_3.dzn"),
            outcome: ExternalSolveOutcome::Unbounded,
        };
        let text = ExternalSolvePresenter::render(&report);
        assert!(text.starts_with(&i18n::model_data_created("DatosProyecto_3.dzn")));
        assert!(text.ends_with(i18n::EXTERNAL_UNBOUNDED));
    }
}
