use std::path::PathBuf;

use clap::Parser;

/// Generate a count matrix from individual count files.
#[derive(Parser)]
#[command(version)]
pub struct Cli {
    /// 1-based field index of the gene ID column.
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub gene_col: usize,

    /// 1-based field index of the count column.
    #[arg(long, value_name = "N", default_value_t = 2)]
    pub count_col: usize,

    /// Number of leading lines to skip in each input.
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub skip_lines: usize,

    /// Skip blank lines and lines starting with `#`.
    #[arg(long)]
    pub skip_comments: bool,

    /// Input field delimiter.
    ///
    /// The output matrix is always tab-delimited.
    #[arg(long, value_name = "DELIM", default_value = "\t")]
    pub delimiter: String,

    /// Round count values to the nearest integer.
    #[arg(long)]
    pub round: bool,

    /// Keep genes whose counts are zero in every input.
    #[arg(long)]
    pub keep_all_genes: bool,

    /// Record program progress in this file.
    #[arg(long, value_name = "LOG_FILE")]
    pub log: Option<PathBuf>,

    /// Input count files, one matrix column each, in order.
    ///
    /// Inputs ending in `.gz` are decompressed while reading.
    #[arg(value_name = "COUNT_FILE", required = true)]
    pub srcs: Vec<PathBuf>,
}
