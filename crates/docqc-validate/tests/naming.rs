//! End-to-end naming checks: rule table in, validation results out.

use docqc_model::CellValue;
use docqc_validate::{NamingRuleSet, PartRule, parse_rule_table, validate_name, validate_names};
use proptest::prelude::*;

fn text(value: &str) -> CellValue {
    CellValue::from(value)
}

fn project_table() -> Vec<Vec<CellValue>> {
    vec![
        vec![
            text("Number of parts"),
            CellValue::Number(3.0),
            CellValue::Empty,
            text("Delimiter"),
            text("_"),
        ],
        vec![text("PRJ"), text("001"), text("Description")],
        vec![text("TST"), text("002"), CellValue::Empty],
    ]
}

#[test]
fn parsed_table_drives_validation() {
    let rules = parse_rule_table(&project_table()).expect("parse rules");
    assert_eq!(rules.parts_count(), 3);
    assert_eq!(rules.delimiter(), '_');
    assert_eq!(
        rules.part_rules(),
        &[
            PartRule::Enum(vec!["PRJ".to_string(), "TST".to_string()]),
            PartRule::FixedLength(3),
            PartRule::FreeText(3),
        ]
    );

    let report = validate_names(
        [
            "PRJ_123_General Arrangement.pdf",
            "TST_9_Notes.pdf",
            "prj_123_Notes.pdf",
            "DEV_123_Notes.pdf",
            "PRJ-123-Notes.pdf",
        ],
        &rules,
    );
    let compliant: Vec<bool> = report.files.iter().map(|f| f.result.compliant).collect();
    assert_eq!(compliant, vec![true, false, false, false, false]);
    assert_eq!(report.files[1].result.noncompliant_parts, vec!["9"]);
    assert_eq!(report.files[2].result.noncompliant_parts, vec!["prj"]);
    assert_eq!(
        report.files[4].result.message,
        "Delimiter wrong; Number of parts wrong (1); Parts not compliant: PRJ-123-Notes"
    );
}

#[test]
fn fewer_rule_columns_than_parts_never_comply() {
    let mut table = project_table();
    table[0][1] = CellValue::Number(4.0);
    let rules = parse_rule_table(&table).expect("parse rules");
    assert_eq!(rules.part_rules()[3], PartRule::Undefined);

    let result = validate_name("PRJ_001_Plan_A.pdf", &rules);
    assert!(result.delimiter_ok);
    assert!(result.parts_count_ok);
    assert!(!result.compliant);
    assert_eq!(result.noncompliant_parts, vec!["A"]);
}

fn arbitrary_rule() -> impl Strategy<Value = PartRule> {
    prop_oneof![
        (0usize..6).prop_map(PartRule::FixedLength),
        (0usize..6).prop_map(PartRule::FreeText),
        proptest::collection::vec("[A-Z]{1,3}", 0..4).prop_map(PartRule::Enum),
        Just(PartRule::Undefined),
    ]
}

proptest! {
    #[test]
    fn validation_is_total(
        filename in "\\PC{0,40}",
        parts_count in 0usize..5,
        delimiter in prop_oneof![Just('_'), Just('-'), Just('.'), Just(' ')],
        part_rules in proptest::collection::vec(arbitrary_rule(), 0..6),
    ) {
        let rules = NamingRuleSet::new(parts_count, delimiter, part_rules);
        let result = validate_name(&filename, &rules);
        prop_assert_eq!(
            result.compliant,
            result.delimiter_ok && result.parts_count_ok && result.noncompliant_parts.is_empty()
        );
        prop_assert!(result.message.starts_with("Delimiter"));
        prop_assert!(result.noncompliant_parts.len() <= result.parts_found);
    }
}
