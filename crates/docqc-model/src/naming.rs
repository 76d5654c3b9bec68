//! Naming convention rules and validation outcomes.

use serde::{Deserialize, Serialize};

/// Literal marker that turns a rule column into free text.
pub const FREE_TEXT_MARKER: &str = "Description";

/// Minimum length of a free-text segment.
pub const DEFAULT_FREE_TEXT_MIN_LENGTH: usize = 3;

/// Rule for one positional segment of a filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum PartRule {
    /// Segment must have exactly this many characters.
    FixedLength(usize),
    /// Segment must have at least this many characters.
    FreeText(usize),
    /// Segment must equal one of these values (case-sensitive, first-seen order).
    Enum(Vec<String>),
    /// No rule was supplied; nothing in this position can pass.
    Undefined,
}

impl PartRule {
    pub fn free_text() -> Self {
        PartRule::FreeText(DEFAULT_FREE_TEXT_MIN_LENGTH)
    }

    pub fn describe(&self) -> String {
        match self {
            PartRule::FixedLength(length) => format!("exactly {length} characters"),
            PartRule::FreeText(min) => format!("free text, at least {min} characters"),
            PartRule::Enum(allowed) => format!("one of: {}", allowed.join(", ")),
            PartRule::Undefined => "undefined".to_string(),
        }
    }
}

/// Parsed naming convention. Built once per validation session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingRuleSet {
    parts_count: usize,
    delimiter: char,
    part_rules: Vec<PartRule>,
}

impl NamingRuleSet {
    /// Build a rule set, padding missing columns with `Undefined` and dropping
    /// rules beyond `parts_count` so that there is exactly one rule per part.
    pub fn new(parts_count: usize, delimiter: char, mut part_rules: Vec<PartRule>) -> Self {
        part_rules.resize(parts_count, PartRule::Undefined);
        Self {
            parts_count,
            delimiter,
            part_rules,
        }
    }

    pub fn parts_count(&self) -> usize {
        self.parts_count
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn part_rules(&self) -> &[PartRule] {
        &self.part_rules
    }

    pub fn part_rule(&self, index: usize) -> Option<&PartRule> {
        self.part_rules.get(index)
    }
}

/// Outcome of validating one filename. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameValidationResult {
    pub compliant: bool,
    pub delimiter_ok: bool,
    pub parts_count_ok: bool,
    /// Number of segments found after splitting on the delimiter.
    pub parts_found: usize,
    /// Literal segment values that failed their rule, in segment order.
    pub noncompliant_parts: Vec<String>,
    pub message: String,
}

/// Validation outcome for one file of a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileValidation {
    pub filename: String,
    pub result: NameValidationResult,
}

/// Batch of validations in input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamingReport {
    pub files: Vec<FileValidation>,
}

impl NamingReport {
    pub fn total(&self) -> usize {
        self.files.len()
    }

    pub fn compliant_count(&self) -> usize {
        self.files.iter().filter(|file| file.result.compliant).count()
    }

    pub fn noncompliant_count(&self) -> usize {
        self.total() - self.compliant_count()
    }

    /// Share of compliant names, 0 for an empty batch.
    pub fn percent_compliant(&self) -> f64 {
        if self.files.is_empty() {
            0.0
        } else {
            self.compliant_count() as f64 / self.total() as f64 * 100.0
        }
    }

    pub fn all_compliant(&self) -> bool {
        self.files.iter().all(|file| file.result.compliant)
    }
}
