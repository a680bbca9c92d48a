use nom::{
    IResult, Parser,
    character::complete::{char, space0, u64},
    combinator::map_res,
    multi::separated_list1,
    number::complete::recognize_float,
    sequence::delimited,
};

use crate::{DatasetFile, ParseError, i18n};

pub(crate) fn real(input: &str) -> IResult<&str, f64> {
    map_res(recognize_float, str::parse::<f64>).parse(input)
}

fn separator(input: &str) -> IResult<&str, char> {
    delimited(space0, char(','), space0).parse(input)
}

fn integer_line(input: &str) -> IResult<&str, u64> {
    delimited(space0, u64, space0).parse(input)
}

fn real_line(input: &str) -> IResult<&str, f64> {
    delimited(space0, real, space0).parse(input)
}

fn integer_list(input: &str) -> IResult<&str, Vec<u64>> {
    delimited(space0, separated_list1(separator, u64), space0).parse(input)
}

fn real_list(input: &str) -> IResult<&str, Vec<f64>> {
    delimited(space0, separated_list1(separator, real), space0).parse(input)
}

/// Non-blank lines paired with their 1-based position in the source.
struct DataLines<'a> {
    lines: Vec<(usize, &'a str)>,
    cursor: usize,
}

impl<'a> DataLines<'a> {
    fn new(input: &'a str) -> Self {
        let lines = input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| (idx + 1, line))
            .collect();
        Self { lines, cursor: 0 }
    }

    fn next_with<O>(
        &mut self,
        field: &'static str,
        kind: &'static str,
        parser: fn(&'a str) -> IResult<&'a str, O>,
    ) -> Result<O, ParseError> {
        let Some(&(line, text)) = self.lines.get(self.cursor) else {
            return Err(ParseError::MissingLine {
                field,
                line: self.cursor + 1,
            });
        };
        self.cursor += 1;

        match parser(text) {
            Ok(("", value)) => Ok(value),
            Ok((rest, _)) => Err(ParseError::SyntaxError {
                line,
                field,
                detail: i18n::unparsed_input(rest.trim()),
            }),
            Err(_) => Err(ParseError::SyntaxError {
                line,
                field,
                detail: i18n::expected(kind),
            }),
        }
    }
}

/// Parses the line-oriented dataset format. Blank lines are skipped and
/// anything after `maxM` is ignored.
pub fn parse_dataset(input: &str) -> Result<DatasetFile, ParseError> {
    let mut lines = DataLines::new(input);

    let n = lines.next_with("n", i18n::INTEGER, integer_line)?;
    let m = lines.next_with("m", i18n::INTEGER, integer_line)?;
    let m = usize::try_from(m).map_err(|_| ParseError::InvalidValue {
        field: "m",
        detail: m.to_string(),
    })?;
    let p = lines.next_with("p", i18n::INTEGER_LIST, integer_list)?;
    let ext = lines.next_with("ext", i18n::REAL_LIST, real_list)?;
    let cei = lines.next_with("cei", i18n::REAL_LIST, real_list)?;

    let mut c = Vec::with_capacity(m.min(1024));
    for _ in 0..m {
        c.push(lines.next_with("c", i18n::REAL_LIST, real_list)?);
    }

    let ct = lines.next_with("ct", i18n::REAL, real_line)?;
    let max_m = lines.next_with("maxM", i18n::INTEGER, integer_line)?;

    Ok(DatasetFile {
        n,
        m,
        p,
        ext,
        cei,
        c,
        ct,
        max_m,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SCENARIO: &str = "10\n2\n10,0\n1,0\n0,5\n0,1\n1,0\n100\n10\n";

    #[test]
    fn parses_scenario_file() {
        let file = parse_dataset(SCENARIO).expect("valid dataset");
        assert_eq!(
            file,
            DatasetFile {
                n: 10,
                m: 2,
                p: vec![10, 0],
                ext: vec![1.0, 0.0],
                cei: vec![0.0, 5.0],
                c: vec![vec![0.0, 1.0], vec![1.0, 0.0]],
                ct: 100.0,
                max_m: 10,
            }
        );
    }

    #[test]
    fn skips_blank_lines_and_tolerates_padding() {
        let input = "\n 10 \n\n2\r\n10, 0\n 1.5 ,0.25\n0,5e-1\n\n0,1\n1,0\n  100.0\n10\n\n";
        let file = parse_dataset(input).expect("valid dataset");
        assert_eq!(file.ext, vec![1.5, 0.25]);
        assert_eq!(file.cei, vec![0.0, 0.5]);
        assert_eq!(file.ct, 100.0);
        assert_eq!(file.max_m, 10);
    }

    #[test]
    fn does_not_check_lengths() {
        let file = parse_dataset("10\n2\n10,0,3\n1\n0,5\n0,1\n1,0\n100\n10").expect("parsed");
        assert_eq!(file.p.len(), 3);
        assert_eq!(file.ext.len(), 1);
    }

    #[rstest]
    #[case::negative_population("10\n2\n-1,0\n1,0\n0,5\n0,1\n1,0\n100\n10", 3, "p")]
    #[case::word_in_extremism("10\n2\n10,0\n1,x\n0,5\n0,1\n1,0\n100\n10", 4, "ext")]
    #[case::real_m("10\n2.5\n10,0\n1,0\n0,5\n0,1\n1,0\n100\n10", 2, "m")]
    #[case::real_max_movement("10\n2\n10,0\n1,0\n0,5\n0,1\n1,0\n100\n1.5", 9, "maxM")]
    #[case::line_numbers_count_blank_lines("10\n\n2\n10,0\n1,0\n0,5\n0;1\n1,0\n100\n10", 7, "c")]
    fn reports_syntax_errors_with_line(
        #[case] input: &str,
        #[case] expected_line: usize,
        #[case] expected_field: &str,
    ) {
        match parse_dataset(input) {
            Err(ParseError::SyntaxError { line, field, .. }) => {
                assert_eq!(line, expected_line);
                assert_eq!(field, expected_field);
            }
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[rstest]
    #[case::empty("", "n")]
    #[case::truncated_matrix("10\n3\n1,2,3\n1,1,1\n0,0,0\n0,1,1\n1,0,1", "c")]
    #[case::no_max_movement("10\n2\n10,0\n1,0\n0,5\n0,1\n1,0\n100", "maxM")]
    fn reports_missing_lines(#[case] input: &str, #[case] expected_field: &str) {
        match parse_dataset(input) {
            Err(ParseError::MissingLine { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected missing line, got {other:?}"),
        }
    }
}
