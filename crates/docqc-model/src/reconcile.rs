use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of one reconciliation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Expected deliverable with a submitted file.
    Matched,
    /// Expected deliverable without a submitted file.
    Missing,
    /// Submitted file that is not on the deliverables list.
    ExtraFile,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Matched => "Matched",
            MatchStatus::Missing => "Missing",
            MatchStatus::ExtraFile => "Extra File",
        }
    }

    /// Label used on deliverables tracking reports.
    pub fn report_label(&self) -> &'static str {
        match self {
            MatchStatus::Matched => "Done",
            MatchStatus::Missing => "To Do",
            MatchStatus::ExtraFile => "Not in List",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Deliverable name; empty for `ExtraFile`.
    pub expected: String,
    /// Submitted filename; `None` for `Missing`.
    pub submitted: Option<String>,
    pub status: MatchStatus,
}

impl Match {
    pub fn matched(expected: impl Into<String>, submitted: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            submitted: Some(submitted.into()),
            status: MatchStatus::Matched,
        }
    }

    pub fn missing(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            submitted: None,
            status: MatchStatus::Missing,
        }
    }

    pub fn extra(submitted: impl Into<String>) -> Self {
        Self {
            expected: String::new(),
            submitted: Some(submitted.into()),
            status: MatchStatus::ExtraFile,
        }
    }
}

/// Outcome of one reconciliation run.
///
/// `matches` holds one entry per expected item in input order, followed by one
/// entry per unclaimed submitted file in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    pub matches: Vec<Match>,
    pub matched_count: usize,
    pub total_expected: usize,
    pub total_submitted: usize,
    pub percent_found: f64,
}

impl ReconciliationResult {
    /// Build the result and derive its counters from the entries.
    pub fn from_matches(matches: Vec<Match>, total_expected: usize, total_submitted: usize) -> Self {
        let matched_count = matches
            .iter()
            .filter(|entry| entry.status == MatchStatus::Matched)
            .count();
        let percent_found = if total_expected == 0 {
            0.0
        } else {
            matched_count as f64 / total_expected as f64 * 100.0
        };
        Self {
            matches,
            matched_count,
            total_expected,
            total_submitted,
            percent_found,
        }
    }

    pub fn count(&self, status: MatchStatus) -> usize {
        self.matches
            .iter()
            .filter(|entry| entry.status == status)
            .count()
    }

    /// Expected names that have no submitted file.
    pub fn missing(&self) -> Vec<&str> {
        self.matches
            .iter()
            .filter(|entry| entry.status == MatchStatus::Missing)
            .map(|entry| entry.expected.as_str())
            .collect()
    }

    /// Submitted files that are not on the list.
    pub fn extras(&self) -> Vec<&str> {
        self.matches
            .iter()
            .filter(|entry| entry.status == MatchStatus::ExtraFile)
            .filter_map(|entry| entry.submitted.as_deref())
            .collect()
    }

    pub fn missing_count(&self) -> usize {
        self.count(MatchStatus::Missing)
    }

    pub fn extra_count(&self) -> usize {
        self.count(MatchStatus::ExtraFile)
    }

    pub fn is_complete(&self) -> bool {
        self.missing_count() == 0
    }
}
