//! Rule table parsing.
//!
//! Layout expected by [`parse_rule_table`]:
//!
//! | row | col 0             | col 1 | col 2 | col 3       | col 4 |
//! |-----|-------------------|-------|-------|-------------|-------|
//! | 0   | `Number of parts` | `3`   |       | `Delimiter` | `_`   |
//! | 1.. | part 1 values     | part 2 values | ...         |       |
//!
//! The header row carries the parts count in column 1. The delimiter sits in
//! column 3, or in column 4 when column 3 holds the `Delimiter` label as in the
//! layout above. Every following row lists sample values per part column.
//! What the first value of a column looks like decides the rule for that part:
//!
//! - a number: the segment must have exactly that many characters
//!   (zero-padded codes such as `001` count as their own width),
//! - the literal `Description`: free text of at least three characters,
//! - anything else: the segment must be one of the listed values.

use tracing::debug;

use docqc_model::{CellValue, DocqcError, FREE_TEXT_MARKER, NamingRuleSet, PartRule, Result};

const PARTS_COUNT_COLUMN: usize = 1;
const DELIMITER_COLUMN: usize = 3;
const DELIMITER_LABEL: &str = "Delimiter";

/// Parse a rule table into a [`NamingRuleSet`].
///
/// # Errors
///
/// Returns [`DocqcError::InvalidRuleTable`] when the header row is missing, the
/// parts count is not a positive integer, or the delimiter cell does not hold
/// exactly one character.
pub fn parse_rule_table(table: &[Vec<CellValue>]) -> Result<NamingRuleSet> {
    let Some(header) = table.first() else {
        return Err(DocqcError::invalid_rule_table("table has no header row"));
    };
    let parts_count = parse_parts_count(header.get(PARTS_COUNT_COLUMN))?;
    let delimiter = parse_delimiter(header)?;

    let rows = &table[1..];
    let part_rules: Vec<PartRule> = (0..parts_count)
        .map(|column| column_rule(rows, column))
        .collect();
    debug!(
        parts_count,
        delimiter = %delimiter,
        rule_rows = rows.len(),
        "parsed naming rule table"
    );
    Ok(NamingRuleSet::new(parts_count, delimiter, part_rules))
}

fn parse_parts_count(cell: Option<&CellValue>) -> Result<usize> {
    let cell = cell.unwrap_or(&CellValue::Empty);
    let Some(value) = cell.as_integer() else {
        return Err(DocqcError::invalid_rule_table(format!(
            "parts count (row 1, column 2) is not an integer: {:?}",
            cell.to_string()
        )));
    };
    match usize::try_from(value) {
        Ok(count) if count >= 1 => Ok(count),
        _ => Err(DocqcError::invalid_rule_table(format!(
            "parts count must be at least 1, found {value}"
        ))),
    }
}

/// The delimiter cell: column 3, or the cell after it when column 3 is the label.
fn delimiter_cell(header: &[CellValue]) -> (usize, Option<&CellValue>) {
    match header.get(DELIMITER_COLUMN) {
        Some(CellValue::Text(label)) if label.trim().eq_ignore_ascii_case(DELIMITER_LABEL) => {
            (DELIMITER_COLUMN + 1, header.get(DELIMITER_COLUMN + 1))
        }
        cell => (DELIMITER_COLUMN, cell),
    }
}

fn parse_delimiter(header: &[CellValue]) -> Result<char> {
    let (column, cell) = delimiter_cell(header);
    let raw = match cell {
        Some(CellValue::Text(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };
    // A lone whitespace character is a legitimate delimiter; otherwise ignore padding.
    single_char(&raw)
        .or_else(|| single_char(raw.trim()))
        .ok_or_else(|| {
            DocqcError::invalid_rule_table(format!(
                "delimiter (row 1, column {}) must be exactly one character, found {raw:?}",
                column + 1
            ))
        })
}

fn single_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

fn column_rule(rows: &[Vec<CellValue>], column: usize) -> PartRule {
    let mut first: Option<&CellValue> = None;
    let mut values: Vec<String> = Vec::new();
    for cell in rows.iter().filter_map(|row| row.get(column)) {
        let Some(text) = cell.as_text() else {
            continue;
        };
        if first.is_none() {
            first = Some(cell);
        }
        if !values.contains(&text) {
            values.push(text);
        }
    }
    let Some(first) = first else {
        debug!(column, "no values for part column");
        return PartRule::Undefined;
    };
    if let Some(length) = length_spec(first) {
        return PartRule::FixedLength(length);
    }
    if values[0] == FREE_TEXT_MARKER {
        return PartRule::free_text();
    }
    PartRule::Enum(values)
}

/// Length encoded by a numeric marker cell.
fn length_spec(cell: &CellValue) -> Option<usize> {
    match cell {
        CellValue::Text(text) => {
            let trimmed = text.trim();
            let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            if digits.len() > 1 && digits.starts_with('0') {
                Some(digits.len())
            } else {
                digits.parse::<usize>().ok()
            }
        }
        CellValue::Number(_) => cell
            .as_integer()
            .and_then(|value| usize::try_from(value).ok()),
        CellValue::Empty => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[CellValue]) -> Vec<CellValue> {
        cells.to_vec()
    }

    fn text(value: &str) -> CellValue {
        CellValue::from(value)
    }

    fn header(parts: CellValue, delimiter: &str) -> Vec<CellValue> {
        row(&[
            text("Number of parts"),
            parts,
            CellValue::Empty,
            text("Delimiter"),
            text(delimiter),
        ])
    }

    #[test]
    fn parses_documented_layout() {
        let table = vec![
            header(CellValue::Number(3.0), "_"),
            row(&[text("PRJ"), text("001"), text("Description")]),
            row(&[text("TST"), text("002"), CellValue::Empty]),
        ];
        let rules = parse_rule_table(&table).expect("parse rules");
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
    }

    #[test]
    fn numeric_marker_is_a_length() {
        let table = vec![
            header(text("2"), "-"),
            row(&[CellValue::Number(4.0), text("5")]),
            row(&[text("ABCD"), text("x")]),
        ];
        let rules = parse_rule_table(&table).expect("parse rules");
        assert_eq!(
            rules.part_rules(),
            &[PartRule::FixedLength(4), PartRule::FixedLength(5)]
        );
    }

    #[test]
    fn enum_values_are_distinct_in_first_seen_order() {
        let table = vec![
            header(CellValue::Number(1.0), "_"),
            row(&[text("B")]),
            row(&[CellValue::Empty]),
            row(&[text("A")]),
            row(&[text("B")]),
            row(&[text("C")]),
        ];
        let rules = parse_rule_table(&table).expect("parse rules");
        assert_eq!(
            rules.part_rules(),
            &[PartRule::Enum(vec![
                "B".to_string(),
                "A".to_string(),
                "C".to_string()
            ])]
        );
    }

    #[test]
    fn marker_must_come_first() {
        let table = vec![
            header(CellValue::Number(2.0), "_"),
            row(&[text("X"), text("Description")]),
            row(&[text("Description"), text("12")]),
        ];
        let rules = parse_rule_table(&table).expect("parse rules");
        assert_eq!(
            rules.part_rules(),
            &[
                PartRule::Enum(vec!["X".to_string(), "Description".to_string()]),
                PartRule::FreeText(3),
            ]
        );
    }

    #[test]
    fn missing_columns_are_undefined() {
        let table = vec![
            header(CellValue::Number(3.0), "_"),
            row(&[text("PRJ")]),
        ];
        let rules = parse_rule_table(&table).expect("parse rules");
        assert_eq!(rules.part_rules().len(), 3);
        assert_eq!(rules.part_rules()[1], PartRule::Undefined);
        assert_eq!(rules.part_rules()[2], PartRule::Undefined);
    }

    #[test]
    fn header_only_table_is_all_undefined() {
        let table = vec![header(CellValue::Number(2.0), "_")];
        let rules = parse_rule_table(&table).expect("parse rules");
        assert_eq!(
            rules.part_rules(),
            &[PartRule::Undefined, PartRule::Undefined]
        );
    }

    #[test]
    fn non_integer_values_fall_back_to_enum() {
        let table = vec![
            header(CellValue::Number(2.0), "_"),
            row(&[CellValue::Number(2.5), text("-3")]),
        ];
        let rules = parse_rule_table(&table).expect("parse rules");
        assert_eq!(
            rules.part_rules(),
            &[
                PartRule::Enum(vec!["2.5".to_string()]),
                PartRule::Enum(vec!["-3".to_string()]),
            ]
        );
    }

    #[test]
    fn whitespace_delimiter_is_accepted() {
        let table = vec![header(CellValue::Number(2.0), " ")];
        let rules = parse_rule_table(&table).expect("parse rules");
        assert_eq!(rules.delimiter(), ' ');
    }

    #[test]
    fn delimiter_without_label_is_read_from_column_three() {
        let table = vec![row(&[
            text("Number of parts"),
            CellValue::Number(2.0),
            CellValue::Empty,
            text("-"),
        ])];
        let rules = parse_rule_table(&table).expect("parse rules");
        assert_eq!(rules.delimiter(), '-');
    }

    #[test]
    fn label_without_delimiter_is_rejected() {
        let table = vec![row(&[
            text("Number of parts"),
            CellValue::Number(2.0),
            CellValue::Empty,
            text("delimiter "),
        ])];
        let error = parse_rule_table(&table).expect_err("missing delimiter");
        assert!(error.to_string().contains("column 5"));
    }

    #[test]
    fn signed_length_marker_matches_integer_reading() {
        let plus_five = text("+5");
        assert_eq!(plus_five.as_integer(), Some(5));
        let table = vec![
            header(CellValue::Number(1.0), "_"),
            row(&[plus_five]),
        ];
        let rules = parse_rule_table(&table).expect("parse rules");
        assert_eq!(rules.part_rules(), &[PartRule::FixedLength(5)]);
    }

    #[test]
    fn rejects_empty_table() {
        let error = parse_rule_table(&[]).expect_err("empty table");
        assert!(matches!(error, DocqcError::InvalidRuleTable { .. }));
    }

    #[test]
    fn rejects_non_integer_parts_count() {
        let table = vec![header(text("three"), "_")];
        let error = parse_rule_table(&table).expect_err("bad parts count");
        assert!(error.to_string().contains("not an integer"));

        let short = vec![row(&[text("Number of parts")])];
        assert!(parse_rule_table(&short).is_err());
    }

    #[test]
    fn rejects_non_positive_parts_count() {
        let zero = vec![header(CellValue::Number(0.0), "_")];
        assert!(parse_rule_table(&zero).is_err());
        let negative = vec![header(text("-2"), "_")];
        assert!(parse_rule_table(&negative).is_err());
    }

    #[test]
    fn rejects_bad_delimiter() {
        let long = vec![header(CellValue::Number(2.0), "__")];
        let error = parse_rule_table(&long).expect_err("two-char delimiter");
        assert!(error.to_string().contains("exactly one character"));

        let missing = vec![row(&[text("Number of parts"), CellValue::Number(2.0)])];
        assert!(parse_rule_table(&missing).is_err());
    }
}
