//! Default naming convention template.

use docqc_model::{CellGrid, CellValue, FREE_TEXT_MARKER};

/// Starter rule table: three parts separated by `_`, a project code, a
/// three-digit number and a free-text description.
pub fn naming_template() -> CellGrid {
    let text = |value: &str| CellValue::from(value);
    vec![
        vec![
            text("Number of parts"),
            CellValue::Number(3.0),
            CellValue::Empty,
            text("Delimiter"),
            text("_"),
        ],
        vec![text("PRJ"), text("001"), text(FREE_TEXT_MARKER)],
        vec![text("TST"), text("002"), CellValue::Empty],
        vec![text("DEV"), text("003"), CellValue::Empty],
        vec![CellValue::Empty, text("004"), CellValue::Empty],
        vec![CellValue::Empty, text("005"), CellValue::Empty],
    ]
}
