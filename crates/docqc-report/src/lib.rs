//! docqc report generation library.
//!
//! This crate exports engine results for downstream tools:
//!
//! - **CSV**: one row per file or deliverable, the layout of the tracking reports
//! - **JSON**: the full result wrapped in a [`ReportEnvelope`] with summary counters

mod common;
mod csv_export;
mod json_export;

// Re-export public types and functions
pub use common::{
    ExportFormat, NamingSummary, NAMING_TOOL, RECONCILIATION_TOOL, ReconciliationSummary,
    ReportEnvelope, write_naming_report, write_reconciliation_report,
};
pub use csv_export::{compliance_label, write_naming_csv, write_reconciliation_csv};
pub use json_export::{naming_envelope, reconciliation_envelope, write_json};
