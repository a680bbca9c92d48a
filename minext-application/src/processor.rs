use std::{fs, io, path::Path, time::Instant};

use crate::{
    error::{DatasetFormatError, FileKind, MinExtError},
    ports::{DatasetParser, PlanSolver},
    session::Session,
};
use minext_domain::{
    MetricsCalculator, MovementPlan, OpinionDataset, ResultInterpreter, SolveMetrics, SolveStatus,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    pub status: SolveStatus,
    pub plan: MovementPlan,
    pub final_distribution: Vec<i64>,
    pub metrics: SolveMetrics,
}

#[derive(Clone, Copy)]
pub struct MinExtProcessor<'a> {
    parser: &'a dyn DatasetParser,
    solver: &'a dyn PlanSolver,
}

impl<'a> MinExtProcessor<'a> {
    pub fn new(parser: &'a dyn DatasetParser, solver: &'a dyn PlanSolver) -> Self {
        Self { parser, solver }
    }

    pub fn parse_dataset(&self, content: &str) -> Result<OpinionDataset, DatasetFormatError> {
        self.parser.parse(content)
    }

    pub fn load_dataset(&self, session: &Session, path: &Path) -> Result<Session, MinExtError> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                MinExtError::MissingFile {
                    kind: FileKind::Dataset,
                    path: path.to_path_buf(),
                }
            } else {
                MinExtError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let dataset = self.parse_dataset(&content)?;
        tracing::info!(
            path = %path.display(),
            n = dataset.total_population(),
            m = dataset.opinion_count(),
            "dataset loaded"
        );
        Ok(session.with_dataset(dataset, path))
    }

    pub fn solve(&self, session: &Session) -> Result<SolveReport, MinExtError> {
        let dataset = session.require_dataset()?;
        Ok(self.solve_dataset(dataset))
    }

    /// One blocking solve. Infeasible and unbounded outcomes still produce a
    /// report, built from an idle plan.
    pub fn solve_dataset(&self, dataset: &OpinionDataset) -> SolveReport {
        let started = Instant::now();
        let solution = self.solver.solve(dataset);
        let elapsed = started.elapsed();

        match solution.status {
            SolveStatus::Optimal => {
                tracing::info!(status = %solution.status, ?elapsed, "solve finished");
            }
            status => tracing::warn!(%status, ?elapsed, "solve finished without a plan"),
        }

        let interpreted = ResultInterpreter::interpret(&solution, dataset);
        let metrics = MetricsCalculator::compute(dataset, &solution, &interpreted.plan, elapsed);

        SolveReport {
            status: solution.status,
            plan: interpreted.plan,
            final_distribution: interpreted.final_distribution,
            metrics,
        }
    }
}
