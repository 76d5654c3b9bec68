use docqc_reconcile::{MatchStatus, reconcile};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[A-Ca-c]{1,2}( ?[0-2])?(\\.(dwg|pdf))?| ", 0..12)
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn every_entry_is_accounted_for(expected in names(), submitted in names()) {
        let result = reconcile(&expected, &submitted);
        let missing = result.count(MatchStatus::Missing);
        let extra = result.count(MatchStatus::ExtraFile);
        prop_assert_eq!(result.matched_count + missing, result.total_expected);
        prop_assert_eq!(result.matched_count + extra, result.total_submitted);
        prop_assert_eq!(result.matches.len(), result.total_expected + extra);
    }

    #[test]
    fn expected_entries_come_first_in_input_order(expected in names(), submitted in names()) {
        let result = reconcile(&expected, &submitted);
        let listed: Vec<&str> = result
            .matches
            .iter()
            .take(result.total_expected)
            .map(|entry| entry.expected.as_str())
            .collect();
        let non_blank: Vec<&str> = expected
            .iter()
            .map(String::as_str)
            .filter(|name| !name.trim().is_empty())
            .collect();
        prop_assert_eq!(listed, non_blank);
        prop_assert!(result.matches[result.total_expected..]
            .iter()
            .all(|entry| entry.status == MatchStatus::ExtraFile && entry.expected.is_empty()));
    }

    #[test]
    fn reconciliation_is_deterministic(expected in names(), submitted in names()) {
        prop_assert_eq!(reconcile(&expected, &submitted), reconcile(&expected, &submitted));
    }

    #[test]
    fn percentage_stays_in_range(expected in names(), submitted in names()) {
        let result = reconcile(&expected, &submitted);
        prop_assert!((0.0..=100.0).contains(&result.percent_found));
    }
}

#[test]
fn submissions_are_never_claimed_twice() {
    let result = reconcile(&["A", "A", "A"], &["a.dwg", "A.pdf"]);
    assert_eq!(result.matched_count, 2);
    assert_eq!(result.missing(), vec!["A"]);
    assert!(result.extras().is_empty());
}
