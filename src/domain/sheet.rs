// ==========================================
// Medicine Import - Worksheet grid model
// ==========================================
// Responsibility: typed 2D cell grid produced by the file parsers
// Indexing: absolute sheet coordinates (row 0 / column A = 0)
// ==========================================

use serde::Serialize;
use std::fmt;

// ==========================================
// CellValue - single typed cell
// ==========================================
// An absent cell is represented as `None` at the grid level,
// never as an empty `Text`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl CellValue {
    /// Text view of the cell, numbers rendered without a trailing `.0`
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Bool(b) => b.to_string(),
        }
    }

    /// True for text cells holding only whitespace
    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Text(s) if s.trim().is_empty())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

// ==========================================
// SheetGrid - one worksheet
// ==========================================
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetGrid {
    header_row: usize,
    rows: Vec<Vec<Option<CellValue>>>,
}

impl SheetGrid {
    /// Grid whose header is the first row (row index 0)
    pub fn new(rows: Vec<Vec<Option<CellValue>>>) -> Self {
        Self::with_header_row(0, rows)
    }

    /// Grid with an explicit header row; `rows` is indexed from sheet row 0
    pub fn with_header_row(header_row: usize, rows: Vec<Vec<Option<CellValue>>>) -> Self {
        Self { header_row, rows }
    }

    /// Empty worksheet (no header, no data)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set a cell, growing the grid as needed
    pub fn set(&mut self, row: usize, col: usize, value: Option<CellValue>) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize(col + 1, None);
        }
        cells[col] = value;
    }

    pub fn header_row(&self) -> usize {
        self.header_row
    }

    /// Cell at absolute coordinates; `None` when the cell has no value
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row)?.get(col)?.as_ref()
    }

    /// Number of data rows (everything after the header row)
    pub fn data_row_count(&self) -> usize {
        self.rows.len().saturating_sub(self.header_row + 1)
    }

    /// Absolute indexes of the data rows, ascending
    pub fn data_row_indexes(&self) -> std::ops::Range<usize> {
        let first = self.header_row + 1;
        first..self.rows.len().max(first)
    }
}
