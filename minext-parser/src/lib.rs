#![warn(clippy::uninlined_format_args)]

mod dataset;
mod i18n;
mod model_data;

pub use dataset::parse_dataset;
pub use model_data::{format_model_data, format_real, parse_model_data};

/// Numeric fields of a dataset, exactly as read from a file.
///
/// Lengths are not cross-checked here; `m` only drives how many cost rows
/// are read.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetFile {
    pub n: u64,
    pub m: usize,
    pub p: Vec<u64>,
    pub ext: Vec<f64>,
    pub cei: Vec<f64>,
    pub c: Vec<Vec<f64>>,
    pub ct: f64,
    pub max_m: u64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("{}", i18n::missing_line(.field, .line))]
    MissingLine { field: &'static str, line: usize },
    #[error("{}", i18n::syntax_error(.line, .field, .detail))]
    SyntaxError {
        line: usize,
        field: &'static str,
        detail: String,
    },
    #[error("{}", i18n::missing_field(.field))]
    MissingField { field: &'static str },
    #[error("{}", i18n::invalid_value(.field, .detail))]
    InvalidValue { field: &'static str, detail: String },
}
