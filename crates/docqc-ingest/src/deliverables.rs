//! Deliverables list loading.
//!
//! A list is either a CSV export of the project's drawing register (one
//! deliverable per row, in a chosen column, usually below a header row) or a
//! plain text file with one name per line.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use docqc_common::is_blank;

use crate::error::{IngestError, Result};

/// Which CSV column holds the deliverable names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliverableColumn {
    /// Zero-based column index.
    Index(usize),
    /// Header label, matched case-insensitively against the first row.
    Header(String),
}

impl Default for DeliverableColumn {
    fn default() -> Self {
        DeliverableColumn::Index(0)
    }
}

impl FromStr for DeliverableColumn {
    type Err = String;

    /// Digits select a column by index; anything else selects it by header label.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("column must not be empty".to_string());
        }
        Ok(match trimmed.parse::<usize>() {
            Ok(index) => DeliverableColumn::Index(index),
            Err(_) => DeliverableColumn::Header(trimmed.to_string()),
        })
    }
}

/// Options for reading a deliverables list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliverableListOptions {
    pub column: DeliverableColumn,
    /// Skip the first CSV row. Forced on when selecting by header label.
    pub has_header: bool,
}

impl Default for DeliverableListOptions {
    fn default() -> Self {
        Self {
            column: DeliverableColumn::default(),
            has_header: true,
        }
    }
}

/// Read deliverable names from a `.txt` (one per line) or CSV file.
pub fn read_deliverables(path: &Path, options: &DeliverableListOptions) -> Result<Vec<String>> {
    let file = std::fs::File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let is_text = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
    let names = if is_text {
        read_lines(file).map_err(|source| IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        read_deliverables_from_reader(file, options, path)?
    };
    debug!(path = %path.display(), count = names.len(), "read deliverables list");
    Ok(names)
}

fn read_lines<R: Read>(reader: R) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let name = line.trim().trim_matches('\u{feff}');
        if !is_blank(name) {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

/// Read deliverable names from CSV. `origin` names the source in errors.
pub fn read_deliverables_from_reader<R: Read>(
    reader: R,
    options: &DeliverableListOptions,
    origin: &Path,
) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: origin.to_path_buf(),
            source,
        })?;
        rows.push(
            record
                .iter()
                .map(|cell| cell.trim().trim_matches('\u{feff}').to_string())
                .collect(),
        );
    }

    let (column, skip) = match &options.column {
        DeliverableColumn::Index(index) => (*index, usize::from(options.has_header)),
        DeliverableColumn::Header(label) => {
            let header = rows.first().map(Vec::as_slice).unwrap_or_default();
            let Some(index) = header
                .iter()
                .position(|cell| cell.eq_ignore_ascii_case(label.trim()))
            else {
                return Err(IngestError::MissingColumn {
                    column: label.clone(),
                    path: origin.to_path_buf(),
                });
            };
            (index, 1)
        }
    };

    let mut short_rows = 0usize;
    let mut names = Vec::new();
    for row in rows.iter().skip(skip) {
        match row.get(column) {
            Some(value) if !is_blank(value) => names.push(value.clone()),
            Some(_) => {}
            None => short_rows += 1,
        }
    }
    if short_rows > 0 {
        warn!(
            path = %origin.display(),
            column,
            short_rows,
            "rows without the deliverables column were skipped"
        );
    }
    Ok(names)
}
