use minext_application::{DatasetFormatError, DatasetParser};
use minext_domain::{DatasetInput, OpinionDataset};
use minext_parser::{DatasetFile, ParseError, parse_dataset};

#[derive(Default)]
pub struct TextDatasetParser;

impl DatasetParser for TextDatasetParser {
    fn parse(&self, content: &str) -> Result<OpinionDataset, DatasetFormatError> {
        let file = parse_dataset(content).map_err(map_parse_error)?;
        Ok(OpinionDataset::try_new(to_dataset_input(file))?)
    }
}

pub(crate) fn to_dataset_input(file: DatasetFile) -> DatasetInput {
    let DatasetFile {
        n,
        m,
        p,
        ext,
        cei,
        c,
        ct,
        max_m,
    } = file;

    DatasetInput {
        total_population: n,
        opinion_count: m,
        populations: p,
        extremism: ext,
        activation_costs: cei,
        transfer_costs: c,
        max_cost: ct,
        max_movement: max_m,
    }
}

fn map_parse_error(err: ParseError) -> DatasetFormatError {
    match &err {
        ParseError::SyntaxError {
            line,
            field,
            detail,
        } => DatasetFormatError::Syntax {
            line: *line,
            detail: format!("`{field}`: {detail}"),
        },
        _ => DatasetFormatError::Malformed {
            detail: err.to_string(),
        },
    }
}
