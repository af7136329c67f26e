//! Count matrix assembly.

use std::io::{self, Write};

use thiserror::Error;
use tracing::debug;

use crate::counts::{CountFile, Value};

const DELIMITER: char = '\t';
const GENE_ID_COLUMN_NAME: &str = "gene_id";

#[derive(Debug, Error)]
pub enum WriteMatrixError {
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("gene IDs in {src} are not identical")]
    GeneIdMismatch { src: String },
}

/// Writes the combined count matrix.
///
/// The first file's gene sequence is canonical; every other file's must
/// match it elementwise, in the same order. Rows whose counts sum to zero
/// are suppressed unless `keep_all_genes` is set. Nothing is written until
/// all files validate.
pub fn write_matrix<W>(
    writer: &mut W,
    files: &[CountFile],
    keep_all_genes: bool,
) -> Result<(), WriteMatrixError>
where
    W: Write,
{
    let Some(first) = files.first() else {
        return Ok(());
    };

    for file in &files[1..] {
        if file.genes != first.genes {
            return Err(WriteMatrixError::GeneIdMismatch {
                src: file.name.clone(),
            });
        }
    }

    write_header(writer, files)?;

    let mut suppressed = 0;

    for (i, gene) in first.genes.iter().enumerate() {
        let row: Vec<Value> = files.iter().map(|file| file.counts[i]).collect();

        if !keep_all_genes && row.iter().map(|value| value.as_f64()).sum::<f64>() <= 0.0 {
            suppressed += 1;
            continue;
        }

        write!(writer, "{gene}")?;

        for value in &row {
            write!(writer, "{DELIMITER}{value}")?;
        }

        writeln!(writer)?;
    }

    debug!(suppressed, "suppressed all-zero rows");

    Ok(())
}

fn write_header<W>(writer: &mut W, files: &[CountFile]) -> io::Result<()>
where
    W: Write,
{
    write!(writer, "{GENE_ID_COLUMN_NAME}")?;

    for file in files {
        write!(writer, "{DELIMITER}{}", file.name)?;
    }

    writeln!(writer)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_file(name: &str, genes: &[&str], counts: &[Value]) -> CountFile {
        CountFile {
            name: name.into(),
            genes: genes.iter().map(|gene| (*gene).into()).collect(),
            counts: counts.into(),
        }
    }

    #[test]
    fn test_write_matrix() -> Result<(), WriteMatrixError> {
        let mut buf = Vec::new();

        let files = [
            count_file(
                "fileA",
                &["A", "B", "C"],
                &[Value::Integer(1), Value::Integer(2), Value::Integer(3)],
            ),
            count_file(
                "fileB",
                &["A", "B", "C"],
                &[Value::Integer(0), Value::Integer(0), Value::Integer(5)],
            ),
        ];

        write_matrix(&mut buf, &files, false)?;

        let expected = b"\
gene_id\tfileA\tfileB
A\t1\t0
B\t2\t0
C\t3\t5
";

        assert_eq!(buf, expected);

        Ok(())
    }

    #[test]
    fn test_write_matrix_suppresses_all_zero_rows() -> Result<(), WriteMatrixError> {
        let mut buf = Vec::new();

        let files = [
            count_file("s0", &["A", "B"], &[Value::Integer(1), Value::Integer(0)]),
            count_file("s1", &["A", "B"], &[Value::Integer(0), Value::Integer(0)]),
        ];

        write_matrix(&mut buf, &files, false)?;

        assert_eq!(buf, b"gene_id\ts0\ts1\nA\t1\t0\n");

        Ok(())
    }

    #[test]
    fn test_write_matrix_with_keep_all_genes() -> Result<(), WriteMatrixError> {
        let mut buf = Vec::new();

        let files = [
            count_file("s0", &["A", "B"], &[Value::Integer(1), Value::Integer(0)]),
            count_file("s1", &["A", "B"], &[Value::Integer(0), Value::Integer(0)]),
        ];

        write_matrix(&mut buf, &files, true)?;

        assert_eq!(buf, b"gene_id\ts0\ts1\nA\t1\t0\nB\t0\t0\n");

        Ok(())
    }

    #[test]
    fn test_write_matrix_with_float_counts() -> Result<(), WriteMatrixError> {
        let mut buf = Vec::new();

        let files = [count_file(
            "s0",
            &["A", "B"],
            &[Value::Float(1.5), Value::Float(0.25)],
        )];

        write_matrix(&mut buf, &files, false)?;

        assert_eq!(buf, b"gene_id\ts0\nA\t1.5\nB\t0.25\n");

        Ok(())
    }

    #[test]
    fn test_write_matrix_with_mismatched_gene_ids() {
        let mut buf = Vec::new();

        let files = [
            count_file("s0", &["A", "B"], &[Value::Integer(1), Value::Integer(2)]),
            count_file("s1", &["B", "A"], &[Value::Integer(2), Value::Integer(1)]),
        ];

        let result = write_matrix(&mut buf, &files, false);

        assert!(matches!(
            result,
            Err(WriteMatrixError::GeneIdMismatch { src }) if src == "s1"
        ));

        assert!(buf.is_empty());
    }

    #[test]
    fn test_write_matrix_with_no_files() -> Result<(), WriteMatrixError> {
        let mut buf = Vec::new();
        write_matrix(&mut buf, &[], false)?;
        assert!(buf.is_empty());
        Ok(())
    }
}
