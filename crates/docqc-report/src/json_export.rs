//! JSON export.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use docqc_model::{NamingReport, ReconciliationResult};

use crate::common::{
    NAMING_TOOL, NamingSummary, RECONCILIATION_TOOL, ReconciliationSummary, ReportEnvelope,
};

pub fn naming_envelope(
    report: &NamingReport,
    generated_at: DateTime<Utc>,
) -> ReportEnvelope<'_, NamingSummary, NamingReport> {
    ReportEnvelope {
        tool: NAMING_TOOL,
        generated_at,
        summary: NamingSummary::from(report),
        results: report,
    }
}

pub fn reconciliation_envelope(
    result: &ReconciliationResult,
    generated_at: DateTime<Utc>,
) -> ReportEnvelope<'_, ReconciliationSummary, ReconciliationResult> {
    ReportEnvelope {
        tool: RECONCILIATION_TOOL,
        generated_at,
        summary: ReconciliationSummary::from(result),
        results: result,
    }
}

/// Pretty-printed JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(mut writer: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value).context("serialize report")?;
    writer.write_all(b"\n")?;
    Ok(())
}
