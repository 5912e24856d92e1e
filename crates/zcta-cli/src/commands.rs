use std::io::{self, IsTerminal};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::ColorChoice;
use comfy_table::Table;
use serde::Serialize;
use tracing::info;
use zcta_cli::frame::{FrameJob, run_frame_job};
use zcta_cli::lookup::{centroid_rows, normalize_rows, zcta_rows, zips_rows};
use zcta_cli::render::{centroid_table, normalize_table, zcta_table, zips_table};
use zcta_crosswalk::ZctaResolver;
use zcta_data::TableStore;
use zcta_frame::BatchOutcome;
use zcta_model::LookupOptions;

use crate::cli::{Cli, FrameArgs, NormalizeArgs, OutputFormatArg, ZctaArgs, ZipsArgs};

pub fn run_zcta(cli: &Cli, args: &ZctaArgs) -> Result<()> {
    let resolver = build_resolver(cli);
    let options = LookupOptions::forward()
        .with_on_miss(args.on_miss())
        .with_diagnostics(cli.diagnostics());
    let rows = zcta_rows(&resolver, &args.codes, args.year.generation(), options)
        .context("ZIP Code crosswalk lookup failed")?;
    print_rows(cli, &rows, zcta_table)
}

pub fn run_zips(cli: &Cli, args: &ZipsArgs) -> Result<()> {
    let resolver = build_resolver(cli);
    let options = LookupOptions::reverse()
        .with_on_miss(args.on_miss())
        .with_diagnostics(cli.diagnostics());
    let rows = zips_rows(&resolver, &args.zctas, args.year.generation(), options)
        .context("reverse ZCTA lookup failed")?;
    print_rows(cli, &rows, zips_table)
}

pub fn run_centroid(cli: &Cli, args: &ZctaArgs) -> Result<()> {
    let resolver = build_resolver(cli);
    let options = LookupOptions::forward()
        .with_on_miss(args.on_miss())
        .with_diagnostics(cli.diagnostics());
    let rows = centroid_rows(&resolver, &args.codes, args.year.generation(), options)
        .context("ZCTA centroid lookup failed")?;
    print_rows(cli, &rows, centroid_table)
}

pub fn run_normalize(cli: &Cli, args: &NormalizeArgs) -> Result<()> {
    let rows = normalize_rows(&args.values);
    print_rows(cli, &rows, normalize_table)
}

pub fn run_frame(cli: &Cli, args: &FrameArgs) -> Result<()> {
    let resolver = build_resolver(cli);
    let job = FrameJob {
        input: args.input.clone(),
        output: args.output.clone(),
        column: args.column.clone(),
        mode: args.mode.into(),
        target: args.target.clone(),
        keep_coordinates: args.keep_coordinates,
        generation: args.year.generation(),
        options: args.options(cli.diagnostics()),
    };
    let summary = run_frame_job(&resolver, &job)?;
    match summary.outcome {
        BatchOutcome::Applied { rows, resolved } => {
            info!(input = %args.input.display(), rows, resolved, "frame lookup complete");
        }
        BatchOutcome::MissingColumn => {
            info!(
                input = %args.input.display(),
                rows = summary.rows,
                "column not found; input written unchanged"
            );
        }
    }
    Ok(())
}

fn build_resolver(cli: &Cli) -> ZctaResolver {
    match &cli.data_dir {
        Some(root) => ZctaResolver::new(Arc::new(TableStore::from_dir(root))),
        None => ZctaResolver::with_default_store(),
    }
}

fn print_rows<R: Serialize>(
    cli: &Cli,
    rows: &[R],
    table: fn(&[R], bool) -> Table,
) -> Result<()> {
    match cli.format {
        OutputFormatArg::Table => {
            println!("{}", table(rows, use_color(cli)));
        }
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(rows).context("serialize lookup results")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn use_color(cli: &Cli) -> bool {
    match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stdout().is_terminal(),
    }
}
