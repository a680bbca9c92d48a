use std::path::Path;

use crate::{
    error::{DatasetFormatError, MinExtError},
    external::ExternalSolveOutcome,
};
use minext_domain::{OpinionDataset, Solution};

pub trait DatasetParser: Send + Sync {
    fn parse(&self, content: &str) -> Result<OpinionDataset, DatasetFormatError>;
}

/// In-process integer solver. Blocking.
pub trait PlanSolver: Send + Sync {
    fn solve(&self, dataset: &OpinionDataset) -> Solution;
}

pub trait ModelDataWriter: Send + Sync {
    fn write(&self, dataset: &OpinionDataset, path: &Path) -> Result<(), MinExtError>;
}

/// Standalone constraint solver run as a child process under a hard timeout.
pub trait ExternalSolver: Send + Sync {
    fn run(&self, model_path: &Path, data_path: &Path) -> ExternalSolveOutcome;
}
