//! Greedy first-match reconciliation.
//!
//! Each expected item, in input order, claims the first still-unclaimed
//! submitted entry whose normalized name equals its own. A claim consumes one
//! occurrence only, so duplicate submissions are kept for later items or end up
//! as extra files. Unclaimed submissions are reported after all expected items,
//! in their original order.
//!
//! Submitted indices are queued per normalized key, which keeps a run linear in
//! the size of both lists while choosing exactly the entry a front-to-back scan
//! would choose.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use docqc_common::{is_blank, normalize_name};
use docqc_model::{Match, ReconciliationResult};

/// Reconcile expected deliverable names against submitted filenames.
///
/// Blank and whitespace-only entries are dropped from both lists first and do
/// not count towards any total.
pub fn reconcile<S, T>(expected: &[S], submitted: &[T]) -> ReconciliationResult
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let expected: Vec<&str> = non_blank(expected);
    let submitted: Vec<&str> = non_blank(submitted);

    let mut pool = SubmittedPool::new(&submitted);
    let mut matches = Vec::with_capacity(expected.len() + submitted.len());
    for item in &expected {
        let entry = match pool.claim(&normalize_name(item)) {
            Some(index) => Match::matched(*item, submitted[index]),
            None => Match::missing(*item),
        };
        matches.push(entry);
    }
    matches.extend(pool.unclaimed().map(|index| Match::extra(submitted[index])));

    let result = ReconciliationResult::from_matches(matches, expected.len(), submitted.len());
    debug!(
        expected = result.total_expected,
        submitted = result.total_submitted,
        matched = result.matched_count,
        missing = result.missing_count(),
        extra = result.extra_count(),
        "reconciled deliverables"
    );
    result
}

fn non_blank<S: AsRef<str>>(values: &[S]) -> Vec<&str> {
    values
        .iter()
        .map(AsRef::as_ref)
        .filter(|value| !is_blank(value))
        .collect()
}

/// Submitted entries still available for claiming, in input order per key.
struct SubmittedPool {
    queues: HashMap<String, VecDeque<usize>>,
    claimed: Vec<bool>,
}

impl SubmittedPool {
    fn new(submitted: &[&str]) -> Self {
        let mut queues: HashMap<String, VecDeque<usize>> = HashMap::new();
        for (index, name) in submitted.iter().enumerate() {
            queues
                .entry(normalize_name(name))
                .or_default()
                .push_back(index);
        }
        Self {
            queues,
            claimed: vec![false; submitted.len()],
        }
    }

    /// Claim the earliest unclaimed entry with this key.
    fn claim(&mut self, key: &str) -> Option<usize> {
        let index = self.queues.get_mut(key)?.pop_front()?;
        self.claimed[index] = true;
        Some(index)
    }

    fn unclaimed(&self) -> impl Iterator<Item = usize> + '_ {
        self.claimed
            .iter()
            .enumerate()
            .filter(|(_, claimed)| !**claimed)
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use docqc_model::MatchStatus;

    use super::*;

    fn statuses(result: &ReconciliationResult) -> Vec<MatchStatus> {
        result.matches.iter().map(|entry| entry.status).collect()
    }

    #[test]
    fn classifies_matched_missing_and_extra() {
        let result = reconcile(&["ABC-001", "ABC-002"], &["abc-001.dwg", "extra.pdf"]);
        assert_eq!(
            result.matches,
            vec![
                Match::matched("ABC-001", "abc-001.dwg"),
                Match::missing("ABC-002"),
                Match::extra("extra.pdf"),
            ]
        );
        assert_eq!(result.matched_count, 1);
        assert_eq!(result.total_expected, 2);
        assert_eq!(result.total_submitted, 2);
        assert!((result.percent_found - 50.0).abs() < 1e-9);
    }

    #[test]
    fn empty_expected_list_reports_only_extras() {
        let result = reconcile::<&str, &str>(&[], &["x.dwg"]);
        assert_eq!(result.matches, vec![Match::extra("x.dwg")]);
        assert_eq!(result.matched_count, 0);
        assert_eq!(result.missing_count(), 0);
        assert_eq!(result.percent_found, 0.0);
    }

    #[test]
    fn duplicate_submission_is_claimed_once() {
        let result = reconcile(&["A"], &["A.dwg", "A.dwg"]);
        assert_eq!(
            statuses(&result),
            vec![MatchStatus::Matched, MatchStatus::ExtraFile]
        );
        assert_eq!(result.matches[1].submitted.as_deref(), Some("A.dwg"));
    }

    #[test]
    fn duplicates_are_claimed_in_submission_order() {
        let result = reconcile(&["Plan", "plan"], &["PLAN.pdf", "plan.dwg", "Plan.dxf"]);
        assert_eq!(
            result.matches,
            vec![
                Match::matched("Plan", "PLAN.pdf"),
                Match::matched("plan", "plan.dwg"),
                Match::extra("Plan.dxf"),
            ]
        );
        assert!((result.percent_found - 100.0).abs() < 1e-9);
    }

    #[test]
    fn extras_keep_original_order() {
        let result = reconcile(&["B"], &["z.pdf", "b.pdf", "a.pdf"]);
        assert_eq!(result.extras(), vec!["z.pdf", "a.pdf"]);
    }

    #[test]
    fn blank_entries_are_ignored() {
        let result = reconcile(&["A", "  ", ""], &["", "a.pdf", "\t"]);
        assert_eq!(result.total_expected, 1);
        assert_eq!(result.total_submitted, 1);
        assert_eq!(result.matches, vec![Match::matched("A", "a.pdf")]);
    }

    #[test]
    fn names_match_across_case_spacing_and_unicode_form() {
        let result = reconcile(
            &["Caf\u{e9}  Floor Plan"],
            &["  CAFE\u{301} floor   plan .PDF"],
        );
        assert_eq!(result.matched_count, 1);
    }

    #[test]
    fn accepts_owned_strings() {
        let expected = vec!["X-1".to_string()];
        let submitted = vec!["x-1.pdf".to_string(), "y.pdf".to_string()];
        let result = reconcile(&expected, &submitted);
        assert_eq!(result.matched_count, 1);
        assert_eq!(result.extra_count(), 1);
    }
}
