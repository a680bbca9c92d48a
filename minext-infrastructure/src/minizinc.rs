use std::{path::Path, process::Stdio, time::Duration};

use minext_application::{ExternalSolveOutcome, ExternalSolver, SolverProcessError};
use tokio::process::Command;

pub const DEFAULT_PROGRAM: &str = "minizinc";
pub const DEFAULT_SOLVER: &str = "Gecode";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Printed by the solver once the search space is exhausted.
pub const COMPLETION_MARKER: &str = "✓ Completed";

const UNSATISFIABLE: &str = "=====UNSATISFIABLE=====";
const UNBOUNDED: &str = "=====UNBOUNDED=====";
const INCONCLUSIVE: [&str; 3] = [
    "=====UNSATorUNBOUNDED=====",
    "=====UNKNOWN=====",
    "=====ERROR=====",
];
const SEARCH_COMPLETE: &str = "==========";

/// Runs the MiniZinc command-line driver under a hard wall-clock timeout.
pub struct MiniZincRunner {
    program: String,
    solver: String,
    timeout: Duration,
}

impl Default for MiniZincRunner {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM, DEFAULT_SOLVER, DEFAULT_TIMEOUT)
    }
}

impl MiniZincRunner {
    pub fn new(program: impl Into<String>, solver: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            solver: solver.into(),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn run_async(&self, model_path: &Path, data_path: &Path) -> ExternalSolveOutcome {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--solver")
            .arg(&self.solver)
            .arg("--search-complete-msg")
            .arg(COMPLETION_MARKER)
            .arg(model_path)
            .arg(data_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        match tokio::time::timeout(self.timeout, cmd.output()).await {
            Ok(Ok(output)) => {
                if !output.status.success() {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    tracing::debug!(stderr = %stderr.trim(), "solver stderr");
                }
                classify_output(
                    output.status.success(),
                    output.status.code(),
                    &String::from_utf8_lossy(&output.stdout),
                )
            }
            Ok(Err(err)) => ExternalSolveOutcome::ProcessError(SolverProcessError::Spawn {
                program: self.program.clone(),
                message: err.to_string(),
            }),
            Err(_) => ExternalSolveOutcome::TimedOut {
                after: self.timeout,
            },
        }
    }
}

impl ExternalSolver for MiniZincRunner {
    fn run(&self, model_path: &Path, data_path: &Path) -> ExternalSolveOutcome {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                return ExternalSolveOutcome::ProcessError(SolverProcessError::Spawn {
                    program: self.program.clone(),
                    message: err.to_string(),
                });
            }
        };
        runtime.block_on(self.run_async(model_path, data_path))
    }
}

/// Maps the solver's exit status and status lines onto an outcome.
pub fn classify_output(success: bool, code: Option<i32>, stdout: &str) -> ExternalSolveOutcome {
    if !success {
        return ExternalSolveOutcome::ProcessError(SolverProcessError::NonZeroExit { code });
    }
    if stdout.contains(UNSATISFIABLE) {
        return ExternalSolveOutcome::Infeasible;
    }
    if stdout.contains(UNBOUNDED) {
        return ExternalSolveOutcome::Unbounded;
    }
    if let Some(marker) = INCONCLUSIVE.iter().find(|marker| stdout.contains(**marker)) {
        return ExternalSolveOutcome::ProcessError(SolverProcessError::Inconclusive {
            marker: (*marker).to_string(),
        });
    }

    let output = stdout.to_string();
    if stdout.contains(COMPLETION_MARKER) || stdout.contains(SEARCH_COMPLETE) {
        ExternalSolveOutcome::Optimal { output }
    } else {
        ExternalSolveOutcome::Satisfied { output }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::completed(true, Some(0), "x = 3;\n----------\n✓ Completed\n", "optimal")]
    #[case::standard_marker(true, Some(0), "x = 3;\n----------\n==========\n", "optimal")]
    #[case::partial(true, Some(0), "x = 3;\n----------\n", "satisfied")]
    #[case::unsat(true, Some(0), "=====UNSATISFIABLE=====\n", "infeasible")]
    #[case::unbounded(true, Some(0), "=====UNBOUNDED=====\n", "unbounded")]
    #[case::unknown(true, Some(0), "=====UNKNOWN=====\n", "process_error")]
    #[case::failed_exit(false, Some(1), "x = 3;\n----------\n✓ Completed\n", "process_error")]
    fn classifies_solver_output(
        #[case] success: bool,
        #[case] code: Option<i32>,
        #[case] stdout: &str,
        #[case] expected: &str,
    ) {
        let label = match classify_output(success, code, stdout) {
            ExternalSolveOutcome::Optimal { .. } => "optimal",
            ExternalSolveOutcome::Satisfied { .. } => "satisfied",
            ExternalSolveOutcome::Infeasible => "infeasible",
            ExternalSolveOutcome::Unbounded => "unbounded",
            ExternalSolveOutcome::TimedOut { .. } => "timed_out",
            ExternalSolveOutcome::ProcessError(_) => "process_error",
        };
        assert_eq!(label, expected);
    }

    #[test]
    fn non_zero_exit_hides_raw_output() {
        let outcome = classify_output(false, Some(2), "secret solver trace");
        assert_eq!(
            outcome,
            ExternalSolveOutcome::ProcessError(SolverProcessError::NonZeroExit { code: Some(2) })
        );
        assert_eq!(outcome.output(), None);
    }

    #[test]
    fn missing_program_is_a_process_error() {
        let runner = MiniZincRunner::new(
            "/nonexistent/minext-test/minizinc",
            DEFAULT_SOLVER,
            Duration::from_secs(5),
        );
        let outcome = runner.run(Path::new("Proyecto.mzn"), Path::new("DatosProyecto_1.dzn"));
        assert!(matches!(
            outcome,
            ExternalSolveOutcome::ProcessError(SolverProcessError::Spawn { .. })
        ));
    }
}
