//! Shared types and file-level entry points for report generation.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use docqc_model::{NamingReport, ReconciliationResult};

use crate::csv_export::{write_naming_csv, write_reconciliation_csv};
use crate::json_export::{naming_envelope, reconciliation_envelope, write_json};

/// Tool identifier recorded in naming reports.
pub const NAMING_TOOL: &str = "naming-validation";

/// Tool identifier recorded in reconciliation reports.
pub const RECONCILIATION_TOOL: &str = "deliverables-reconciliation";

/// Export file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    /// Infer the format from a file extension, if it names one.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("csv") {
            Some(ExportFormat::Csv)
        } else if ext.eq_ignore_ascii_case("json") {
            Some(ExportFormat::Json)
        } else {
            None
        }
    }
}

/// JSON wrapper around exported results.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEnvelope<'a, S, T> {
    pub tool: &'static str,
    pub generated_at: DateTime<Utc>,
    pub summary: S,
    pub results: &'a T,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NamingSummary {
    pub total: usize,
    pub compliant: usize,
    pub noncompliant: usize,
    pub percent_compliant: f64,
}

impl From<&NamingReport> for NamingSummary {
    fn from(report: &NamingReport) -> Self {
        Self {
            total: report.total(),
            compliant: report.compliant_count(),
            noncompliant: report.noncompliant_count(),
            percent_compliant: report.percent_compliant(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationSummary {
    pub matched: usize,
    pub missing: usize,
    pub extra: usize,
    pub total_expected: usize,
    pub total_submitted: usize,
    pub percent_found: f64,
}

impl From<&ReconciliationResult> for ReconciliationSummary {
    fn from(result: &ReconciliationResult) -> Self {
        Self {
            matched: result.matched_count,
            missing: result.missing_count(),
            extra: result.extra_count(),
            total_expected: result.total_expected,
            total_submitted: result.total_submitted,
            percent_found: result.percent_found,
        }
    }
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Write a naming report to `path` in the given format.
pub fn write_naming_report(
    path: &Path,
    report: &NamingReport,
    format: ExportFormat,
    generated_at: DateTime<Utc>,
) -> Result<()> {
    let mut writer = create(path)?;
    match format {
        ExportFormat::Csv => write_naming_csv(&mut writer, report),
        ExportFormat::Json => write_json(&mut writer, &naming_envelope(report, generated_at)),
    }
    .with_context(|| format!("write naming report: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    info!(path = %path.display(), format = ?format, rows = report.total(), "naming report written");
    Ok(())
}

/// Write a reconciliation result to `path` in the given format.
pub fn write_reconciliation_report(
    path: &Path,
    result: &ReconciliationResult,
    format: ExportFormat,
    generated_at: DateTime<Utc>,
) -> Result<()> {
    let mut writer = create(path)?;
    match format {
        ExportFormat::Csv => write_reconciliation_csv(&mut writer, result),
        ExportFormat::Json => write_json(
            &mut writer,
            &reconciliation_envelope(result, generated_at),
        ),
    }
    .with_context(|| format!("write reconciliation report: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    info!(
        path = %path.display(),
        format = ?format,
        rows = result.matches.len(),
        "reconciliation report written"
    );
    Ok(())
}
