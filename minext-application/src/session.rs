use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::error::MinExtError;
use minext_domain::OpinionDataset;

const DEFAULT_FILE_NUMBER: u64 = 1;

/// The currently loaded dataset and where it came from.
///
/// Never mutated in place: loading returns a new session.
#[derive(Debug, Clone)]
pub struct Session {
    dataset: Option<Arc<OpinionDataset>>,
    source: Option<PathBuf>,
    file_number: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            dataset: None,
            source: None,
            file_number: DEFAULT_FILE_NUMBER,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dataset(&self, dataset: OpinionDataset, source: impl Into<PathBuf>) -> Self {
        let source = source.into();
        let file_number = file_number_from(&source);
        Self {
            dataset: Some(Arc::new(dataset)),
            source: Some(source),
            file_number,
        }
    }

    pub fn dataset(&self) -> Option<&OpinionDataset> {
        self.dataset.as_deref()
    }

    pub fn require_dataset(&self) -> Result<&OpinionDataset, MinExtError> {
        self.dataset().ok_or(MinExtError::NoDataset)
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn file_number(&self) -> u64 {
        self.file_number
    }

    /// `DatosProyecto_<n>.dzn`, numbered after the loaded file.
    pub fn model_data_file_name(&self) -> String {
        format!("DatosProyecto_{}.dzn", self.file_number)
    }
}

/// First run of ASCII digits in the file name, or 1.
fn file_number_from(path: &Path) -> u64 {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return DEFAULT_FILE_NUMBER;
    };
    let digits: String = name
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(DEFAULT_FILE_NUMBER)
}
