//! CLI argument definitions for docqc.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use docqc_ingest::DeliverableColumn;

#[derive(Parser)]
#[command(
    name = "docqc",
    version,
    about = "Engineering document QC - naming validation and deliverables reconciliation",
    long_about = "Quality checks for engineering document submissions.\n\n\
                  Validates filenames against a tabular naming convention and\n\
                  reconciles submitted files against an expected deliverables list."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Check filenames against a naming convention rule table.
    Naming(NamingArgs),

    /// Compare submitted files with an expected deliverables list.
    Reconcile(ReconcileArgs),

    /// Write a sample naming convention rule table.
    Template(TemplateArgs),
}

#[derive(Args)]
pub struct NamingArgs {
    /// Rule table CSV (header row: parts count in column B, delimiter after the `Delimiter` label).
    #[arg(long = "rules", value_name = "CSV")]
    pub rules: PathBuf,

    #[command(flatten)]
    pub submitted: SubmittedArgs,

    #[command(flatten)]
    pub export: ExportArgs,
}

#[derive(Args)]
pub struct ReconcileArgs {
    /// Expected deliverables list (CSV, or .txt with one name per line).
    #[arg(long = "list", value_name = "FILE")]
    pub list: PathBuf,

    /// Column holding deliverable names: a 0-based index or a header label.
    #[arg(long = "column", value_name = "INDEX|NAME", default_value = "0")]
    pub column: DeliverableColumn,

    /// Treat the first CSV row as data rather than a header.
    #[arg(long = "no-header")]
    pub no_header: bool,

    #[command(flatten)]
    pub submitted: SubmittedArgs,

    #[command(flatten)]
    pub export: ExportArgs,
}

#[derive(Args)]
pub struct TemplateArgs {
    /// Destination CSV for the template.
    #[arg(long = "output", value_name = "CSV", default_value = "naming_template.csv")]
    pub output: PathBuf,

    /// Overwrite the destination if it already exists.
    #[arg(long = "force")]
    pub force: bool,
}

/// Where submitted filenames come from.
#[derive(Args)]
pub struct SubmittedArgs {
    /// Directory holding the submitted files.
    #[arg(long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Descend into subdirectories of --dir.
    #[arg(long = "recursive", requires = "dir")]
    pub recursive: bool,

    /// Include dot-files found in --dir.
    #[arg(long = "include-hidden", requires = "dir")]
    pub include_hidden: bool,

    /// Submitted files (only the file name is used).
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Write the full result to this file.
    #[arg(long = "export", value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Export format (default: from the file extension, else csv).
    #[arg(long = "export-format", value_enum, requires = "export")]
    pub export_format: Option<ExportFormatArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Csv,
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
