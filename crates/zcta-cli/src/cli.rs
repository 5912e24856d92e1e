//! CLI argument definitions for the ZCTA lookup tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use zcta_cli::frame::FrameMode;
use zcta_model::{Diagnostics, LookupOptions, MissPolicy, YearGeneration};

#[derive(Parser)]
#[command(
    name = "zcta",
    version,
    about = "ZIP Code to ZCTA crosswalks and centroid lookups",
    long_about = "Convert USA ZIP Codes to Census ZIP Code Tabulation Areas (ZCTAs).\n\n\
                  Looks up the ZCTA of a ZIP Code, the ZIP Codes of a ZCTA, or the\n\
                  centroid of a ZIP Code's ZCTA, for the 2010 or 2020 Census tables."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the crosswalk and centroid JSON tables.
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Do not log a diagnostic for every code that cannot be resolved.
    #[arg(long = "quiet-lookups", global = true)]
    pub quiet_lookups: bool,

    /// Output format for single lookups.
    #[arg(long = "format", value_enum, default_value = "table", global = true)]
    pub format: OutputFormatArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

impl Cli {
    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics::from(self.quiet_lookups)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve ZIP Codes to their ZCTA.
    Zcta(ZctaArgs),

    /// List the ZIP Codes that belong to ZCTAs.
    Zips(ZipsArgs),

    /// Resolve ZIP Codes to the centroid of their ZCTA.
    Centroid(ZctaArgs),

    /// Normalize raw values to 5-digit codes without any table lookup.
    Normalize(NormalizeArgs),

    /// Apply a lookup to one column of a CSV file.
    Frame(FrameArgs),
}

#[derive(Args)]
pub struct YearArgs {
    /// Census year of the tables (years before 2020 use the 2010 tables).
    #[arg(long = "year", default_value = "2020")]
    pub year: String,
}

impl YearArgs {
    pub fn generation(&self) -> YearGeneration {
        YearGeneration::resolve(&self.year)
    }
}

#[derive(Args)]
pub struct ZctaArgs {
    /// ZIP Codes to resolve (ZIP+4 and unpadded codes are accepted).
    #[arg(value_name = "CODE", required = true)]
    pub codes: Vec<String>,

    #[command(flatten)]
    pub year: YearArgs,

    /// Return the input code when it is not in the crosswalk.
    #[arg(long = "use-input-on-miss")]
    pub use_input_on_miss: bool,
}

impl ZctaArgs {
    pub fn on_miss(&self) -> MissPolicy {
        if self.use_input_on_miss {
            MissPolicy::UseInput
        } else {
            MissPolicy::Empty
        }
    }
}

#[derive(Args)]
pub struct ZipsArgs {
    /// ZCTAs to expand.
    #[arg(value_name = "ZCTA", required = true)]
    pub zctas: Vec<String>,

    #[command(flatten)]
    pub year: YearArgs,

    /// Return an empty list instead of the ZCTA itself when it is unknown.
    #[arg(long = "no-zcta-on-miss")]
    pub no_zcta_on_miss: bool,
}

impl ZipsArgs {
    pub fn on_miss(&self) -> MissPolicy {
        if self.no_zcta_on_miss {
            MissPolicy::Empty
        } else {
            MissPolicy::UseInput
        }
    }
}

#[derive(Args)]
pub struct NormalizeArgs {
    /// Raw values to normalize.
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,
}

#[derive(Args)]
pub struct FrameArgs {
    /// Input CSV file with a header row.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Column holding the codes to look up.
    #[arg(long = "column", short = 'c')]
    pub column: String,

    /// Lookup to apply to the column.
    #[arg(long = "mode", value_enum, default_value = "zcta")]
    pub mode: FrameModeArg,

    /// Output CSV path (stdout when omitted).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Name of the column to write (zcta or zip_codes by default).
    #[arg(long = "target")]
    pub target: Option<String>,

    /// Also write a combined coordinates column in centroid mode.
    #[arg(long = "keep-coordinates")]
    pub keep_coordinates: bool,

    /// Miss policy: return the input when it cannot be resolved.
    #[arg(long = "use-input-on-miss", conflicts_with = "no_zcta_on_miss")]
    pub use_input_on_miss: bool,

    /// Miss policy for zips mode: return an empty list for unknown ZCTAs.
    #[arg(long = "no-zcta-on-miss")]
    pub no_zcta_on_miss: bool,

    #[command(flatten)]
    pub year: YearArgs,
}

impl FrameArgs {
    /// Options for the selected mode, starting from that mode's default policy.
    pub fn options(&self, diagnostics: Diagnostics) -> LookupOptions {
        let base = match self.mode {
            FrameModeArg::Zips => LookupOptions::reverse(),
            FrameModeArg::Zcta | FrameModeArg::Centroid => LookupOptions::forward(),
        };
        let base = if self.use_input_on_miss {
            base.with_on_miss(MissPolicy::UseInput)
        } else if self.no_zcta_on_miss {
            base.with_on_miss(MissPolicy::Empty)
        } else {
            base
        };
        base.with_diagnostics(diagnostics)
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FrameModeArg {
    Zcta,
    Zips,
    Centroid,
}

impl From<FrameModeArg> for FrameMode {
    fn from(value: FrameModeArg) -> Self {
        match value {
            FrameModeArg::Zcta => Self::Zcta,
            FrameModeArg::Zips => Self::Zips,
            FrameModeArg::Centroid => Self::Centroid,
        }
    }
}

/// Single lookup output choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
