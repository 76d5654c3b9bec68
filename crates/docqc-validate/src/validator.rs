//! Filename validation against a parsed naming convention.

use tracing::debug;

use docqc_common::strip_extension;
use docqc_model::{FileValidation, NameValidationResult, NamingReport, NamingRuleSet, PartRule};

/// Check one segment against its rule. Lengths count Unicode scalar values.
pub fn part_complies(rule: &PartRule, segment: &str) -> bool {
    match rule {
        PartRule::FixedLength(length) => segment.chars().count() == *length,
        PartRule::FreeText(min) => segment.chars().count() >= *min,
        PartRule::Enum(allowed) => allowed.iter().any(|value| value == segment),
        PartRule::Undefined => false,
    }
}

/// Validate one filename (with or without extension).
///
/// Total: every input yields a result; problems are reported, never raised.
pub fn validate_name(filename: &str, rules: &NamingRuleSet) -> NameValidationResult {
    let stem = strip_extension(filename);
    let delimiter = rules.delimiter();

    let actual_delimiters = stem.matches(delimiter).count();
    // A zero-part rule set expects -1 delimiters, which nothing satisfies.
    let delimiter_ok = rules.parts_count().checked_sub(1) == Some(actual_delimiters);

    let segments: Vec<&str> = stem.split(delimiter).collect();
    let parts_count_ok = segments.len() == rules.parts_count();

    let noncompliant_parts: Vec<String> = segments
        .iter()
        .enumerate()
        .filter(|(index, segment)| {
            !rules
                .part_rule(*index)
                .is_some_and(|rule| part_complies(rule, segment))
        })
        .map(|(_, segment)| (*segment).to_string())
        .collect();

    let compliant = delimiter_ok && parts_count_ok && noncompliant_parts.is_empty();
    let message = build_message(
        delimiter_ok,
        parts_count_ok,
        segments.len(),
        &noncompliant_parts,
    );
    NameValidationResult {
        compliant,
        delimiter_ok,
        parts_count_ok,
        parts_found: segments.len(),
        noncompliant_parts,
        message,
    }
}

fn build_message(
    delimiter_ok: bool,
    parts_count_ok: bool,
    parts_found: usize,
    noncompliant_parts: &[String],
) -> String {
    let mut details = Vec::with_capacity(3);
    details.push(if delimiter_ok {
        "Delimiter correct".to_string()
    } else {
        "Delimiter wrong".to_string()
    });
    details.push(if parts_count_ok {
        "Number of parts correct".to_string()
    } else {
        format!("Number of parts wrong ({parts_found})")
    });
    if !noncompliant_parts.is_empty() {
        details.push(format!(
            "Parts not compliant: {}",
            noncompliant_parts.join(", ")
        ));
    }
    details.join("; ").trim_end().to_string()
}

/// Validate a batch of filenames, keeping input order.
pub fn validate_names<I, S>(filenames: I, rules: &NamingRuleSet) -> NamingReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let files: Vec<FileValidation> = filenames
        .into_iter()
        .map(|filename| {
            let filename = filename.as_ref();
            FileValidation {
                filename: filename.to_string(),
                result: validate_name(filename, rules),
            }
        })
        .collect();
    let report = NamingReport { files };
    debug!(
        total = report.total(),
        compliant = report.compliant_count(),
        "validated filenames"
    );
    report
}
