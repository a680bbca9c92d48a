use std::{fs, path::Path};

use minext_application::{MinExtError, ModelDataWriter};
use minext_domain::OpinionDataset;
use minext_parser::{DatasetFile, format_model_data};

/// Writes `.dzn` model-data files for the external constraint solver.
#[derive(Default)]
pub struct DznModelDataWriter;

impl ModelDataWriter for DznModelDataWriter {
    fn write(&self, dataset: &OpinionDataset, path: &Path) -> Result<(), MinExtError> {
        let text = format_model_data(&to_dataset_file(dataset));
        fs::write(path, text).map_err(|source| MinExtError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

pub(crate) fn to_dataset_file(dataset: &OpinionDataset) -> DatasetFile {
    let caps = dataset.caps();
    DatasetFile {
        n: caps.total_population,
        m: dataset.opinion_count(),
        p: dataset.populations().to_vec(),
        ext: dataset.extremism().to_vec(),
        cei: dataset.activation_costs().to_vec(),
        c: dataset
            .transfer_costs()
            .rows()
            .map(<[f64]>::to_vec)
            .collect(),
        ct: caps.max_cost,
        max_m: caps.max_movement,
    }
}
