use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{
    error::{FileKind, MinExtError, SolverProcessError},
    ports::{ExternalSolver, ModelDataWriter},
    session::Session,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalSolveOutcome {
    /// Search completed; the output ends with the completion marker.
    Optimal { output: String },
    /// Solutions were printed but the search was not proven complete.
    Satisfied { output: String },
    Infeasible,
    Unbounded,
    TimedOut { after: Duration },
    ProcessError(SolverProcessError),
}

impl ExternalSolveOutcome {
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Optimal { output } | Self::Satisfied { output } => Some(output),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalSolveReport {
    pub data_path: PathBuf,
    pub outcome: ExternalSolveOutcome,
}

/// Exports the model-data file for a session and hands it, with the
/// constraint model, to an external solver.
pub struct ExternalSolveService<'a> {
    writer: &'a dyn ModelDataWriter,
    solver: &'a dyn ExternalSolver,
    model_path: PathBuf,
    output_dir: PathBuf,
}

impl<'a> ExternalSolveService<'a> {
    pub fn new(
        writer: &'a dyn ModelDataWriter,
        solver: &'a dyn ExternalSolver,
        model_path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            writer,
            solver,
            model_path: model_path.into(),
            output_dir: output_dir.into(),
        }
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    pub fn export(&self, session: &Session) -> Result<PathBuf, MinExtError> {
        let dataset = session.require_dataset()?;
        let data_path = self.output_dir.join(session.model_data_file_name());
        self.writer.write(dataset, &data_path)?;
        tracing::info!(path = %data_path.display(), "model data written");
        Ok(data_path)
    }

    pub fn run(&self, session: &Session) -> Result<ExternalSolveReport, MinExtError> {
        let data_path = self.export(session)?;

        if !self.model_path.is_file() {
            return Err(MinExtError::MissingFile {
                kind: FileKind::Model,
                path: self.model_path.clone(),
            });
        }
        if !data_path.is_file() {
            return Err(MinExtError::MissingFile {
                kind: FileKind::ModelData,
                path: data_path,
            });
        }

        tracing::info!(
            model = %self.model_path.display(),
            data = %data_path.display(),
            "launching external solver"
        );
        let outcome = self.solver.run(&self.model_path, &data_path);
        match &outcome {
            ExternalSolveOutcome::TimedOut { after } => {
                tracing::warn!(?after, "external solver timed out");
            }
            ExternalSolveOutcome::ProcessError(err) => {
                tracing::error!(error = %err, "external solver failed");
            }
            _ => {}
        }

        Ok(ExternalSolveReport { data_path, outcome })
    }
}
