//! Filename helpers shared by the naming validator and the reconciliation matcher.
//!
//! Both engines agree on what the "extension" of a name is: everything from the
//! last `.` onward, unless that `.` is the very first character (so `.gitignore`
//! keeps its name). Only the reconciliation side goes further and builds a
//! normalized comparison key; naming validation compares raw segments.

use unicode_normalization::UnicodeNormalization;

/// Strip a trailing extension from a file name.
///
/// Removes everything from the last `.` onward, unless the `.` is at index 0.
///
/// # Example
/// ```
/// use docqc_common::strip_extension;
///
/// assert_eq!(strip_extension("DWG_001_Plan.dwg"), "DWG_001_Plan");
/// assert_eq!(strip_extension("archive.tar.gz"), "archive.tar");
/// assert_eq!(strip_extension(".hidden"), ".hidden");
/// assert_eq!(strip_extension("no-extension"), "no-extension");
/// ```
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}

/// Collapse every run of whitespace into a single space and trim both ends.
pub fn collapse_whitespace(value: &str) -> String {
    let mut parts = value.split_whitespace();
    let mut collapsed = String::with_capacity(value.len());
    if let Some(first) = parts.next() {
        collapsed.push_str(first);
        for part in parts {
            collapsed.push(' ');
            collapsed.push_str(part);
        }
    }
    collapsed
}

/// Returns true when the value is empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Build the comparison key used to decide whether two names are the same deliverable.
///
/// Steps, in order: strip the extension, trim, lowercase, NFC, collapse whitespace.
/// Two names refer to the same deliverable iff their keys are equal.
///
/// Only the last extension is stripped, so applying this twice to a name with
/// two or more dots (`a.b.c`) strips again. Keys are stable for names with at
/// most one dot.
///
/// # Example
/// ```
/// use docqc_common::normalize_name;
///
/// assert_eq!(normalize_name("  ABC   001 .dwg"), "abc 001");
/// assert_eq!(normalize_name("ABC  1"), normalize_name("abc 1"));
/// ```
pub fn normalize_name(name: &str) -> String {
    let stem = strip_extension(name).trim().to_lowercase();
    let composed: String = stem.nfc().collect();
    collapse_whitespace(&composed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_normalization_strips_one_dot_per_pass() {
        let once = normalize_name("A.B.c");
        assert_eq!(once, "a.b");
        assert_eq!(normalize_name(&once), "a");
        assert_eq!(normalize_name(&normalize_name("Site Plan.pdf")), "site plan");
    }

    #[test]
    fn strips_only_last_extension() {
        assert_eq!(strip_extension("a.b.c"), "a.b");
        assert_eq!(strip_extension("report."), "report");
        assert_eq!(strip_extension(""), "");
        assert_eq!(strip_extension("."), ".");
    }

    #[test]
    fn leading_dot_is_not_an_extension() {
        assert_eq!(strip_extension(".dwg"), ".dwg");
        assert_eq!(strip_extension(".config.json"), ".config");
    }

    #[test]
    fn collapse_whitespace_handles_tabs_and_newlines() {
        assert_eq!(collapse_whitespace("  a \t b\n\nc  "), "a b c");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn normalize_ignores_case_extension_and_spacing() {
        assert_eq!(normalize_name("ABC-001.DWG"), "abc-001");
        assert_eq!(normalize_name("abc-001"), "abc-001");
        assert_eq!(normalize_name("  Floor   Plan.pdf"), "floor plan");
    }

    #[test]
    fn normalize_composes_unicode() {
        // "e" + combining acute vs precomposed "é"
        let decomposed = "Cafe\u{301} Plan.pdf";
        let precomposed = "Caf\u{e9} Plan.dwg";
        assert_eq!(normalize_name(decomposed), normalize_name(precomposed));
        assert_eq!(normalize_name(precomposed), "caf\u{e9} plan");
    }

    #[test]
    fn normalize_strips_before_trimming() {
        // The extension is removed first, so trailing spaces before the dot vanish too.
        assert_eq!(normalize_name("Plan   .pdf"), "plan");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank(" \t "));
        assert!(!is_blank(" a "));
    }
}
