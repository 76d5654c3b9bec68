//! Rule-table CSV loading and writing.
//!
//! A rule table is read without header detection: the first non-blank row is
//! the `Number of parts / Delimiter` header and every later row holds sample
//! values. Cells are typed the way a spreadsheet would type them, so plain
//! numbers become [`CellValue::Number`] while zero-padded codes like `001`
//! stay text.

use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use docqc_model::{CellGrid, CellValue};

use crate::error::{IngestError, Result};

/// Type a raw CSV cell.
pub fn classify_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        return CellValue::Empty;
    }
    if looks_numeric(trimmed) {
        if let Ok(value) = trimmed.parse::<f64>() {
            return CellValue::Number(value);
        }
    }
    CellValue::Text(trimmed.to_string())
}

/// Plain decimal notation without leading zeros (`3`, `-2`, `0.5`, `12.25`).
fn looks_numeric(value: &str) -> bool {
    let unsigned = value.strip_prefix('-').unwrap_or(value);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || (int_part.len() > 1 && int_part.starts_with('0')) {
        return false;
    }
    frac_part.is_none_or(all_digits)
}

/// Read a rule table from any CSV source.
pub fn read_cell_grid_from_reader<R: Read>(reader: R) -> std::result::Result<CellGrid, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut grid = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record?;
        let row: Vec<CellValue> = record.iter().map(classify_cell).collect();
        if row.iter().all(CellValue::is_empty) {
            skipped += 1;
            continue;
        }
        grid.push(row);
    }
    debug!(rows = grid.len(), skipped_blank = skipped, "read cell grid");
    Ok(grid)
}

/// Read a rule table from a CSV file.
pub fn read_cell_grid(path: &Path) -> Result<CellGrid> {
    let file = std::fs::File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_cell_grid_from_reader(file).map_err(|source| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a cell grid as CSV. Rows keep their own length.
pub fn write_cell_grid_to_writer<W: Write>(
    writer: W,
    grid: &[Vec<CellValue>],
) -> std::result::Result<(), csv::Error> {
    let mut writer = WriterBuilder::new().flexible(true).from_writer(writer);
    for row in grid {
        writer.write_record(row.iter().map(ToString::to_string))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a cell grid to a CSV file, replacing any existing file.
pub fn write_cell_grid(path: &Path, grid: &[Vec<CellValue>]) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    write_cell_grid_to_writer(file, grid).map_err(|source| IngestError::CsvWrite {
        path: path.to_path_buf(),
        source,
    })
}
