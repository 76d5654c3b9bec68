use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use docqc_model::MatchStatus;

use crate::commands::{NamingRun, ReconcileRun};

pub fn print_naming_summary(run: &NamingRun) {
    let rules = &run.rules;
    println!(
        "Convention: {} parts, delimiter '{}'",
        rules.parts_count(),
        rules.delimiter()
    );
    let mut rule_table = Table::new();
    rule_table.set_header(vec![header_cell("Part"), header_cell("Rule")]);
    apply_table_style(&mut rule_table);
    align_column(&mut rule_table, 0, CellAlignment::Right);
    for (index, rule) in rules.part_rules().iter().enumerate() {
        rule_table.add_row(vec![Cell::new(index + 1), Cell::new(rule.describe())]);
    }
    println!("{rule_table}");

    let report = &run.report;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Compliance"),
        header_cell("Details"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for file in &report.files {
        table.add_row(vec![
            Cell::new(&file.filename),
            compliance_cell(file.result.compliant),
            detail_cell(&file.result.message, file.result.compliant),
        ]);
    }
    println!("{table}");
    println!(
        "{} of {} files compliant ({:.1}%)",
        report.compliant_count(),
        report.total(),
        report.percent_compliant()
    );
    if let Some(path) = &run.exported {
        println!("Report: {}", path.display());
    }
}

pub fn print_reconciliation_summary(run: &ReconcileRun) {
    let result = &run.result;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Deliverable"),
        header_cell("Submitted file"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for entry in &result.matches {
        let expected = if entry.expected.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(&entry.expected)
        };
        let submitted = match &entry.submitted {
            Some(name) => Cell::new(name),
            None => dim_cell("-"),
        };
        table.add_row(vec![expected, submitted, status_cell(entry.status)]);
    }
    println!("{table}");
    println!(
        "Found {} of {} deliverables ({:.1}%), {} missing, {} extra",
        result.matched_count,
        result.total_expected,
        result.percent_found,
        result.missing_count(),
        result.extra_count()
    );
    if let Some(path) = &run.exported {
        println!("Report: {}", path.display());
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() == 3 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(55)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::DarkGrey)
}

fn compliance_cell(compliant: bool) -> Cell {
    if compliant {
        Cell::new("Ok").fg(Color::Green)
    } else {
        Cell::new("Wrong")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn detail_cell(message: &str, compliant: bool) -> Cell {
    if compliant {
        dim_cell(message)
    } else {
        Cell::new(message)
    }
}

fn status_cell(status: MatchStatus) -> Cell {
    let cell = Cell::new(status.as_str());
    match status {
        MatchStatus::Matched => cell.fg(Color::Green),
        MatchStatus::Missing => cell.fg(Color::Red).add_attribute(Attribute::Bold),
        MatchStatus::ExtraFile => cell.fg(Color::Yellow),
    }
}
