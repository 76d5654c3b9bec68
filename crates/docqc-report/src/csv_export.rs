//! CSV export.

use std::io::Write;

use anyhow::Result;
use csv::WriterBuilder;

use docqc_model::{NamingReport, ReconciliationResult};

/// `Ok` / `Wrong`, as shown in naming compliance reports.
pub fn compliance_label(compliant: bool) -> &'static str {
    if compliant { "Ok" } else { "Wrong" }
}

/// Columns: `Filename,Compliance,Details`.
pub fn write_naming_csv<W: Write>(writer: W, report: &NamingReport) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer.write_record(["Filename", "Compliance", "Details"])?;
    for file in &report.files {
        writer.write_record([
            file.filename.as_str(),
            compliance_label(file.result.compliant),
            file.result.message.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Columns: `Deliverable,File,Status`, with tracking-report status labels.
pub fn write_reconciliation_csv<W: Write>(writer: W, result: &ReconciliationResult) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer.write_record(["Deliverable", "File", "Status"])?;
    for entry in &result.matches {
        writer.write_record([
            entry.expected.as_str(),
            entry.submitted.as_deref().unwrap_or(""),
            entry.status.report_label(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
