use std::{collections::HashMap, fmt::Write as _};

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_till, take_while1},
    character::complete::{char, multispace1},
    combinator::recognize,
    multi::{many0, separated_list0, separated_list1},
    number::complete::recognize_float,
    sequence::delimited,
};

use crate::{DatasetFile, ParseError, i18n};

/// Real numbers always carry a decimal point or exponent so constraint
/// models that declare `float` parameters accept them. Display output of
/// `f64` is the shortest representation that parses back to the same value.
pub fn format_real(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains(['.', 'e', 'E']) {
        format!("{text}.0")
    } else {
        text
    }
}

fn join<T>(values: &[T], format: impl Fn(&T) -> String) -> String {
    values.iter().map(format).collect::<Vec<_>>().join(",")
}

/// Renders the declarative model-data file consumed by the external solver.
pub fn format_model_data(file: &DatasetFile) -> String {
    let mut out = String::with_capacity(128 + file.m * file.m * 8);
    let _ = writeln!(out, "n = {};", file.n);
    let _ = writeln!(out, "m = {};", file.m);
    let _ = writeln!(out, "p = [{}];", join(&file.p, u64::to_string));
    let _ = writeln!(out, "v = [{}];", join(&file.ext, |v| format_real(*v)));
    let _ = writeln!(out, "ce = [{}];", join(&file.cei, |v| format_real(*v)));
    let rows = file
        .c
        .iter()
        .map(|row| join(row, |v| format_real(*v)))
        .collect::<Vec<_>>()
        .join("|");
    let _ = writeln!(out, "c = [|{rows}|];");
    let _ = writeln!(out, "ct = {};", format_real(file.ct));
    let _ = writeln!(out, "maxM = {};", file.max_m);
    out
}

#[derive(Debug, Clone, PartialEq)]
enum Value<'a> {
    Scalar(&'a str),
    List(Vec<&'a str>),
    Matrix(Vec<Vec<&'a str>>),
}

fn sp(input: &str) -> IResult<&str, &str> {
    fn line_comment(input: &str) -> IResult<&str, &str> {
        recognize((char('%'), take_till(|c| c == '\n'))).parse(input)
    }

    recognize(many0(alt((multispace1, line_comment)))).parse(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(input)
}

fn number(input: &str) -> IResult<&str, &str> {
    recognize_float(input)
}

fn comma(input: &str) -> IResult<&str, char> {
    delimited(sp, char(','), sp).parse(input)
}

fn list(input: &str) -> IResult<&str, Vec<&str>> {
    delimited((char('['), sp), separated_list0(comma, number), (sp, char(']'))).parse(input)
}

// [| a,b | c,d |]
fn matrix(input: &str) -> IResult<&str, Vec<Vec<&str>>> {
    delimited(
        (tag("[|"), sp),
        separated_list1(delimited(sp, char('|'), sp), separated_list1(comma, number)),
        (sp, tag("|]")),
    )
    .parse(input)
}

fn value(input: &str) -> IResult<&str, Value<'_>> {
    alt((
        matrix.map(Value::Matrix),
        list.map(Value::List),
        number.map(Value::Scalar),
    ))
    .parse(input)
}

fn assignment(input: &str) -> IResult<&str, (&str, Value<'_>)> {
    (identifier, sp, char('='), sp, value, sp, char(';'))
        .map(|(name, _, _, _, value, _, _)| (name, value))
        .parse(input)
}

fn line_of(source: &str, rest: &str) -> usize {
    let offset = source.len() - rest.len();
    source[..offset].matches('\n').count() + 1
}

struct Assignments<'a> {
    values: HashMap<&'a str, Value<'a>>,
}

impl<'a> Assignments<'a> {
    fn take(&mut self, field: &'static str) -> Result<Value<'a>, ParseError> {
        self.values
            .remove(field)
            .ok_or(ParseError::MissingField { field })
    }

    fn scalar<T: std::str::FromStr>(
        &mut self,
        field: &'static str,
        kind: &'static str,
    ) -> Result<T, ParseError> {
        match self.take(field)? {
            Value::Scalar(text) => convert(field, kind, text),
            _ => Err(invalid(field, kind)),
        }
    }

    fn list<T: std::str::FromStr>(
        &mut self,
        field: &'static str,
        kind: &'static str,
    ) -> Result<Vec<T>, ParseError> {
        match self.take(field)? {
            Value::List(items) => items
                .into_iter()
                .map(|text| convert(field, kind, text))
                .collect(),
            _ => Err(invalid(field, kind)),
        }
    }

    fn matrix(&mut self, field: &'static str) -> Result<Vec<Vec<f64>>, ParseError> {
        match self.take(field)? {
            Value::Matrix(rows) => rows
                .into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|text| convert(field, i18n::REAL_LIST, text))
                        .collect()
                })
                .collect(),
            _ => Err(invalid(field, i18n::REAL_LIST)),
        }
    }
}

fn convert<T: std::str::FromStr>(
    field: &'static str,
    kind: &'static str,
    text: &str,
) -> Result<T, ParseError> {
    text.parse().map_err(|_| invalid(field, kind))
}

fn invalid(field: &'static str, kind: &'static str) -> ParseError {
    ParseError::InvalidValue {
        field,
        detail: i18n::expected(kind),
    }
}

/// Reads the numeric fields back out of a generated model-data file.
pub fn parse_model_data(input: &str) -> Result<DatasetFile, ParseError> {
    let mut values = HashMap::new();
    let mut rest = input;

    loop {
        if let Ok((after_sp, _)) = sp(rest) {
            rest = after_sp;
        }
        if rest.is_empty() {
            break;
        }
        match assignment(rest) {
            Ok((after, (name, value))) => {
                values.insert(name, value);
                rest = after;
            }
            Err(_) => {
                return Err(ParseError::SyntaxError {
                    line: line_of(input, rest),
                    field: "model data",
                    detail: i18n::unparsed_input(rest.lines().next().unwrap_or(rest).trim()),
                });
            }
        }
    }

    let mut assignments = Assignments { values };
    let n = assignments.scalar("n", i18n::INTEGER)?;
    let m = assignments.scalar("m", i18n::INTEGER)?;
    let p = assignments.list("p", i18n::INTEGER_LIST)?;
    let ext = assignments.list("v", i18n::REAL_LIST)?;
    let cei = assignments.list("ce", i18n::REAL_LIST)?;
    let c = assignments.matrix("c")?;
    let ct = assignments.scalar("ct", i18n::REAL)?;
    let max_m = assignments.scalar("maxM", i18n::INTEGER)?;

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
