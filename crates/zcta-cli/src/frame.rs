//! CSV in, CSV out batch lookups for the `frame` subcommand.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::*;
use tracing::info;
use zcta_crosswalk::ZctaResolver;
use zcta_frame::{
    BatchOutcome, DEFAULT_ZCTA_COLUMN, DEFAULT_ZIPS_COLUMN, apply_centroids,
    apply_reverse_crosswalk, apply_zcta_crosswalk, join_list_columns,
};
use zcta_model::{LookupOptions, YearGeneration};

/// Separator used when list columns are flattened for CSV output.
pub const LIST_SEPARATOR: &str = ";";

/// Which lookup to run over the input column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameMode {
    Zcta,
    Zips,
    Centroid,
}

#[derive(Debug, Clone)]
pub struct FrameJob {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub column: String,
    pub mode: FrameMode,
    pub target: Option<String>,
    pub keep_coordinates: bool,
    pub generation: YearGeneration,
    pub options: LookupOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSummary {
    pub outcome: BatchOutcome,
    pub rows: usize,
    pub output: Option<PathBuf>,
}

/// Read every column as text so codes keep their leading zeros.
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("Failed to create CSV reader: {}", path.display()))?
        .finish()
        .with_context(|| format!("Failed to read CSV: {}", path.display()))
}

/// Write `df` as CSV, flattening list columns first.
pub fn write_csv<W: Write>(df: &mut DataFrame, writer: W) -> Result<()> {
    join_list_columns(df, LIST_SEPARATOR).context("Failed to flatten list columns")?;
    CsvWriter::new(writer)
        .include_header(true)
        .finish(df)
        .context("Failed to write CSV")
}

/// Apply the job's lookup to a frame already in memory.
pub fn apply_frame_job(
    df: &mut DataFrame,
    resolver: &ZctaResolver,
    job: &FrameJob,
) -> Result<BatchOutcome> {
    let outcome = match job.mode {
        FrameMode::Zcta => apply_zcta_crosswalk(
            df,
            resolver,
            job.generation,
            &job.column,
            job.target.as_deref().unwrap_or(DEFAULT_ZCTA_COLUMN),
            job.options,
        ),
        FrameMode::Zips => apply_reverse_crosswalk(
            df,
            resolver,
            job.generation,
            &job.column,
            job.target.as_deref().unwrap_or(DEFAULT_ZIPS_COLUMN),
            job.options,
        ),
        FrameMode::Centroid => apply_centroids(
            df,
            resolver,
            job.generation,
            &job.column,
            job.keep_coordinates,
            job.options,
        ),
    };
    outcome.with_context(|| format!("Failed to apply lookup to column {}", job.column))
}

/// Read the input CSV, apply the lookup and write the result.
///
/// Output goes to `job.output` when set, otherwise to stdout.
pub fn run_frame_job(resolver: &ZctaResolver, job: &FrameJob) -> Result<FrameSummary> {
    let mut df = read_csv(&job.input)?;
    let outcome = apply_frame_job(&mut df, resolver, job)?;
    let rows = df.height();

    match &job.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output: {}", path.display()))?;
            write_csv(&mut df, file)?;
            info!(output = %path.display(), rows, "wrote CSV output");
        }
        None => write_csv(&mut df, io::stdout().lock())?,
    }

    Ok(FrameSummary {
        outcome,
        rows,
        output: job.output.clone(),
    })
}
