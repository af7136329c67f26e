use std::io::{self, BufRead};

use thiserror::Error;

use super::Value;

const COMMENT_PREFIX: char = '#';

/// Column selection and line handling for a single count file.
#[derive(Clone, Debug)]
pub struct Options {
    /// 1-based field index of the gene ID column.
    pub gene_column: usize,
    /// 1-based field index of the count column.
    pub count_column: usize,
    /// Number of leading lines to discard.
    pub skip_lines: usize,
    /// Discard blank lines and lines starting with `#` before applying
    /// `skip_lines`.
    pub skip_comments: bool,
    /// Input field delimiter.
    pub delimiter: String,
    /// Round counts to the nearest integer.
    pub rounding: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            gene_column: 1,
            count_column: 2,
            skip_lines: 0,
            skip_comments: false,
            delimiter: String::from("\t"),
            rounding: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ReadCountsError {
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("rows do not have the same number of fields (expected {expected}, got {actual})")]
    UnevenRows { expected: usize, actual: usize },
    #[error("no column {column} in rows with {width} fields")]
    InvalidColumn { column: usize, width: usize },
    #[error("count value is not numeric: {value}")]
    InvalidValue { value: String },
}

/// Reads gene IDs and counts from a delimited count file.
///
/// Both sequences preserve input order. Column indices in `options` are
/// 1-based and validated against the row width here. An input with no
/// remaining data rows parses to a pair of empty sequences.
pub fn read<R>(
    reader: &mut R,
    options: &Options,
) -> Result<(Vec<String>, Vec<Value>), ReadCountsError>
where
    R: BufRead,
{
    let lines = read_lines(reader)?;
    let lines = trim_blank_lines(&lines);

    let rows: Vec<Vec<&str>> = lines
        .iter()
        .map(String::as_str)
        .filter(|line| !options.skip_comments || !is_comment(line))
        .skip(options.skip_lines)
        .map(|line| line.split(options.delimiter.as_str()).collect())
        .collect();

    let Some(first) = rows.first() else {
        return Ok((Vec::new(), Vec::new()));
    };

    let width = first.len();

    for row in &rows {
        if row.len() != width {
            return Err(ReadCountsError::UnevenRows {
                expected: width,
                actual: row.len(),
            });
        }
    }

    let gene_index = column_index(options.gene_column, width)?;
    let count_index = column_index(options.count_column, width)?;

    let genes = rows.iter().map(|row| row[gene_index].into()).collect();

    let raw_counts: Vec<_> = rows.iter().map(|row| row[count_index]).collect();
    let mut counts = parse_values(&raw_counts)?;

    if options.rounding {
        for count in &mut counts {
            *count = count.round();
        }
    }

    Ok((genes, counts))
}

fn read_lines<R>(reader: &mut R) -> io::Result<Vec<String>>
where
    R: BufRead,
{
    const LINE_FEED: char = '\n';
    const CARRIAGE_RETURN: char = '\r';

    let mut lines = Vec::new();
    let mut line = String::new();

    while reader.read_line(&mut line)? != 0 {
        if line.ends_with(LINE_FEED) {
            line.pop();

            if line.ends_with(CARRIAGE_RETURN) {
                line.pop();
            }
        }

        lines.push(std::mem::take(&mut line));
    }

    Ok(lines)
}

fn trim_blank_lines(mut lines: &[String]) -> &[String] {
    while let [first, rest @ ..] = lines {
        if !first.trim().is_empty() {
            break;
        }

        lines = rest;
    }

    while let [rest @ .., last] = lines {
        if !last.trim().is_empty() {
            break;
        }

        lines = rest;
    }

    lines
}

fn is_comment(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with(COMMENT_PREFIX)
}

/// Converts a 1-based column number to a 0-based index.
fn column_index(column: usize, width: usize) -> Result<usize, ReadCountsError> {
    column
        .checked_sub(1)
        .filter(|i| *i < width)
        .ok_or(ReadCountsError::InvalidColumn { column, width })
}

fn parse_values(raw: &[&str]) -> Result<Vec<Value>, ReadCountsError> {
    let is_float = raw.iter().any(|value| value.contains('.'));

    raw.iter()
        .map(|raw_value| {
            let value = if is_float {
                raw_value.parse().ok().map(Value::Float)
            } else {
                raw_value.parse().ok().map(Value::Integer)
            };

            value.ok_or_else(|| ReadCountsError::InvalidValue {
                value: (*raw_value).into(),
            })
        })
        .collect()
}
