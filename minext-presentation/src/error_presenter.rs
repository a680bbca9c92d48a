use minext_application::{DatasetFormatError, FileKind, MinExtError};
use minext_domain::DatasetError;
use minext_i18n as i18n;

fn file_kind_label(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Dataset => i18n::DATASET_FILE,
        FileKind::Model => i18n::MODEL_FILE,
        FileKind::ModelData => i18n::MODEL_DATA_FILE,
    }
}

pub fn format_error(error: &MinExtError) -> String {
    match error {
        MinExtError::NoDataset => i18n::NO_DATASET.to_string(),
        MinExtError::MissingFile { kind, path } => {
            i18n::missing_file(file_kind_label(*kind), path.display())
        }
        MinExtError::Io { path, source } => {
            format!("{} '{}': {source}", i18n::READ_FAILED, path.display())
        }
        MinExtError::DatasetFormat(err) => format_dataset_error(err),
    }
}

pub fn format_dataset_error(error: &DatasetFormatError) -> String {
    match error {
        DatasetFormatError::Syntax { line, detail } => i18n::dataset_syntax_error(*line, detail),
        DatasetFormatError::Malformed { detail } => i18n::malformed_dataset(detail),
        DatasetFormatError::Invalid(err) => format_validation_error(err),
    }
}

fn format_validation_error(error: &DatasetError) -> String {
    match error {
        DatasetError::NoOpinions => i18n::NO_OPINIONS.to_string(),
        DatasetError::NonPositiveTotal => i18n::NON_POSITIVE_TOTAL.to_string(),
        DatasetError::LengthMismatch {
            field,
            expected,
            found,
        } => i18n::length_mismatch(field, *expected, *found),
        DatasetError::CostRowLength {
            row,
            expected,
            found,
        } => i18n::cost_row_length(*row, *expected, *found),
        DatasetError::NonFinite { field, index } => i18n::non_finite(field, *index),
        DatasetError::PopulationOverflow => i18n::population_overflow(i64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::{io, path::PathBuf};

    #[test]
    fn missing_file_names_kind_and_path() {
        let message = format_error(&MinExtError::MissingFile {
            kind: FileKind::Model,
            path: PathBuf::from("Proyecto.mzn"),
        });
        assert_eq!(message, i18n::missing_file(i18n::MODEL_FILE, "Proyecto.mzn"));
    }

    #[rstest]
    #[case::syntax(
        DatasetFormatError::Syntax { line: 4, detail: "`ct`: expected a real".to_string() },
        i18n::dataset_syntax_error(4, "`ct`: expected a real")
    )]
    #[case::malformed(
        DatasetFormatError::Malformed { detail: "missing `maxM`".to_string() },
        i18n::malformed_dataset("missing `maxM`")
    )]
    #[case::length(
        DatasetFormatError::Invalid(DatasetError::LengthMismatch { field: "p", expected: 2, found: 3 }),
        i18n::length_mismatch("p", 2, 3)
    )]
    #[case::overflow(
        DatasetFormatError::Invalid(DatasetError::PopulationOverflow),
        i18n::population_overflow(i64::MAX)
    )]
    #[case::no_opinions(
        DatasetFormatError::Invalid(DatasetError::NoOpinions),
        i18n::NO_OPINIONS.to_string()
    )]
    fn dataset_errors_use_localized_text(
        #[case] error: DatasetFormatError,
        #[case] expected: String,
    ) {
        assert_eq!(format_error(&MinExtError::DatasetFormat(error)), expected);
    }

    #[test]
    fn io_errors_include_the_source() {
        let message = format_error(&MinExtError::Io {
            path: PathBuf::from("data.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        });
        assert!(message.starts_with(i18n::READ_FAILED));
        assert!(message.ends_with("'data.txt': denied"));
    }

    #[test]
    fn no_dataset_message() {
        assert_eq!(format_error(&MinExtError::NoDataset), i18n::NO_DATASET);
    }
}
