use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Utc;
use tracing::{info, info_span};

use docqc_ingest::{
    DeliverableListOptions, DiscoveryOptions, read_cell_grid, read_deliverables, write_cell_grid,
};
use docqc_model::{NamingReport, NamingRuleSet, ReconciliationResult};
use docqc_reconcile::reconcile;
use docqc_report::{ExportFormat, write_naming_report, write_reconciliation_report};
use docqc_validate::{naming_template, parse_rule_table, validate_names};

use docqc_cli::inputs::resolve_submitted;

use crate::cli::{
    ExportArgs, ExportFormatArg, NamingArgs, ReconcileArgs, SubmittedArgs, TemplateArgs,
};

pub struct NamingRun {
    pub rules: NamingRuleSet,
    pub report: NamingReport,
    pub exported: Option<PathBuf>,
}

pub struct ReconcileRun {
    pub result: ReconciliationResult,
    pub exported: Option<PathBuf>,
}

pub fn run_naming(args: &NamingArgs) -> Result<NamingRun> {
    let span = info_span!("naming", rules = %args.rules.display());
    let _guard = span.enter();

    let grid = read_cell_grid(&args.rules).context("read rule table")?;
    let rules = parse_rule_table(&grid)
        .with_context(|| format!("parse rule table {}", args.rules.display()))?;
    info!(
        parts = rules.parts_count(),
        delimiter = %rules.delimiter(),
        "rule table loaded"
    );

    let filenames = submitted_names(&args.submitted)?;
    let report = validate_names(&filenames, &rules);
    info!(
        total = report.total(),
        compliant = report.compliant_count(),
        noncompliant = report.noncompliant_count(),
        "naming validation complete"
    );

    let exported = match export_target(&args.export) {
        Some((path, format)) => {
            write_naming_report(&path, &report, format, Utc::now())?;
            Some(path)
        }
        None => None,
    };
    Ok(NamingRun {
        rules,
        report,
        exported,
    })
}

pub fn run_reconcile(args: &ReconcileArgs) -> Result<ReconcileRun> {
    let span = info_span!("reconcile", list = %args.list.display());
    let _guard = span.enter();

    let options = DeliverableListOptions {
        column: args.column.clone(),
        has_header: !args.no_header,
    };
    let expected = read_deliverables(&args.list, &options).context("read deliverables list")?;
    info!(count = expected.len(), "deliverables list loaded");

    let submitted = submitted_names(&args.submitted)?;
    let result = reconcile(&expected, &submitted);
    info!(
        matched = result.matched_count,
        missing = result.missing_count(),
        extra = result.extra_count(),
        percent_found = result.percent_found,
        "reconciliation complete"
    );

    let exported = match export_target(&args.export) {
        Some((path, format)) => {
            write_reconciliation_report(&path, &result, format, Utc::now())?;
            Some(path)
        }
        None => None,
    };
    Ok(ReconcileRun { result, exported })
}

pub fn run_template(args: &TemplateArgs) -> Result<PathBuf> {
    if args.output.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        );
    }
    write_cell_grid(&args.output, &naming_template()).context("write naming template")?;
    info!(path = %args.output.display(), "naming template written");
    Ok(args.output.clone())
}

fn submitted_names(args: &SubmittedArgs) -> Result<Vec<String>> {
    let options = DiscoveryOptions {
        recursive: args.recursive,
        include_hidden: args.include_hidden,
    };
    resolve_submitted(args.dir.as_deref(), &args.files, &options)
}

fn export_target(args: &ExportArgs) -> Option<(PathBuf, ExportFormat)> {
    let path = args.export.clone()?;
    let format = resolve_export_format(&path, args.export_format);
    Some((path, format))
}

fn resolve_export_format(path: &Path, requested: Option<ExportFormatArg>) -> ExportFormat {
    match requested {
        Some(ExportFormatArg::Csv) => ExportFormat::Csv,
        Some(ExportFormatArg::Json) => ExportFormat::Json,
        None => ExportFormat::from_path(path).unwrap_or_default(),
    }
}
