use std::{fmt, io, path::PathBuf};

use minext_domain::DatasetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetFormatError {
    #[error("Syntax error at line {line}: {detail}")]
    Syntax { line: usize, detail: String },
    #[error("Malformed dataset: {detail}")]
    Malformed { detail: String },
    #[error(transparent)]
    Invalid(#[from] DatasetError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Dataset,
    Model,
    ModelData,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dataset => "dataset",
            Self::Model => "constraint model",
            Self::ModelData => "model data",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverProcessError {
    #[error("Failed to launch '{program}': {message}")]
    Spawn { program: String, message: String },
    #[error("Solver exited with a non-zero status ({code:?})")]
    NonZeroExit { code: Option<i32> },
    #[error("Solver finished without a result ({marker})")]
    Inconclusive { marker: String },
}

#[derive(Debug, Error)]
pub enum MinExtError {
    #[error("No dataset has been loaded")]
    NoDataset,
    #[error("The {kind} file was not found: {}", path.display())]
    MissingFile { kind: FileKind, path: PathBuf },
    #[error("Failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    DatasetFormat(#[from] DatasetFormatError),
}
