use std::{
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use collate_core::{
    counts::{
        CountFile,
        reader::{self, Options, ReadCountsError},
    },
    matrix::{self, WriteMatrixError},
};
use thiserror::Error;
use tracing::info;

use crate::{cli::Cli, fs};

pub fn merge(cli: Cli) -> Result<(), MergeError> {
    let options = Options {
        gene_column: cli.gene_col,
        count_column: cli.count_col,
        skip_lines: cli.skip_lines,
        skip_comments: cli.skip_comments,
        delimiter: cli.delimiter.clone(),
        rounding: cli.round,
    };

    let sample_count = cli.srcs.len();

    info!(sample_count, "reading samples");

    let mut files = Vec::with_capacity(sample_count);

    for src in &cli.srcs {
        info!(src = ?src, "reading counts");

        let file = read_counts(src, &options)?;

        info!(gene_count = file.genes.len(), "read counts");

        files.push(file);
    }

    let stdout = io::stdout().lock();
    let mut writer = BufWriter::new(stdout);

    matrix::write_matrix(&mut writer, &files, cli.keep_all_genes)?;

    info!("done");

    Ok(())
}

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("failed to open {}", .src.display())]
    Open { src: PathBuf, source: io::Error },
    #[error("invalid counts in {}", .src.display())]
    InvalidCounts {
        src: PathBuf,
        source: ReadCountsError,
    },
    #[error(transparent)]
    WriteMatrix(#[from] WriteMatrixError),
}

fn read_counts(src: &Path, options: &Options) -> Result<CountFile, MergeError> {
    let mut reader = fs::open(src).map_err(|source| MergeError::Open {
        src: src.into(),
        source,
    })?;

    let (genes, counts) =
        reader::read(&mut reader, options).map_err(|source| MergeError::InvalidCounts {
            src: src.into(),
            source,
        })?;

    Ok(CountFile {
        name: src.display().to_string(),
        genes,
        counts,
    })
}
