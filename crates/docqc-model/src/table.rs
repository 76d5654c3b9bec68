#![deny(unsafe_code)]

use std::fmt;

/// A single cell of a rule table as delivered by spreadsheet or CSV ingestion.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
}

/// A rectangular (possibly ragged) grid of cells, row-major.
pub type CellGrid = Vec<Vec<CellValue>>;

impl CellValue {
    /// Returns true for `Empty` and for whitespace-only text.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Number(_) => false,
            CellValue::Text(text) => text.trim().is_empty(),
        }
    }

    /// Integer interpretation of the cell, if it has one.
    ///
    /// Numbers must be whole; text must be an optionally signed run of ASCII digits.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Empty => None,
            CellValue::Number(value) => whole_number(*value),
            CellValue::Text(text) => text.trim().parse::<i64>().ok(),
        }
    }

    /// Text form of a non-empty cell. Whole numbers render without a fractional part.
    pub fn as_text(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(self.to_string())
    }
}

fn whole_number(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15 {
        Some(value as i64)
    } else {
        None
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Number(value) => match whole_number(*value) {
                Some(whole) => write!(f, "{whole}"),
                None => write!(f, "{value}"),
            },
            CellValue::Text(text) => write!(f, "{}", text.trim()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value.to_string())
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}
