// ==========================================
// Medicine Import - file parsers
// ==========================================
// Stage: Loading (file → SheetGrid)
// Supported: Excel/ODS (.xlsx/.xlsm/.xlsb/.xls/.ods) / CSV (.csv)
// ==========================================

use crate::domain::sheet::{CellValue, SheetGrid};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::product_importer_trait::FileParser;
use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::debug;

const EXCEL_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    if !path.is_file() {
        return Err(ImportError::FileReadError(format!(
            "{} is not a regular file",
            path.display()
        )));
    }
    Ok(())
}

/// calamine cell → CellValue (`None` for empty cells)
fn to_cell_value(data: &Data) -> Option<CellValue> {
    match data {
        Data::Empty => None,
        Data::Int(i) => Some(CellValue::Number(*i as f64)),
        Data::Float(f) => Some(CellValue::Number(*f)),
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        Data::String(s) => Some(CellValue::Text(s.clone())),
        // dates, durations and error cells keep their display text
        other => Some(CellValue::Text(other.to_string())),
    }
}

// ==========================================
// Excel Parser
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_to_grid(&self, file_path: &Path, sheet_index: usize) -> ImportResult<SheetGrid> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if !EXCEL_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;
        let sheet_names = workbook.sheet_names();
        let range = workbook
            .worksheet_range_at(sheet_index)
            .ok_or(ImportError::SheetNotFound {
                index: sheet_index,
                available: sheet_names.len(),
            })??;

        // the used range may start below row 1 / right of column A;
        // re-anchor every cell on absolute sheet coordinates
        let Some((start_row, start_col)) = range.start() else {
            debug!(sheet_index, "worksheet is empty");
            return Ok(SheetGrid::empty());
        };
        let (start_row, start_col) = (start_row as usize, start_col as usize);

        let mut grid = SheetGrid::with_header_row(start_row, Vec::new());
        for (row, col, data) in range.used_cells() {
            grid.set(start_row + row, start_col + col, to_cell_value(data));
        }

        debug!(
            sheet = sheet_names.get(sheet_index).map(String::as_str).unwrap_or(""),
            header_row = start_row,
            data_rows = grid.data_row_count(),
            "worksheet loaded"
        );
        Ok(grid)
    }
}

// ==========================================
// CSV Parser
// ==========================================
// A CSV file is a single worksheet; only sheet_index 0 exists.
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_grid(&self, file_path: &Path, sheet_index: usize) -> ImportResult<SheetGrid> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }
        if sheet_index != 0 {
            return Err(ImportError::SheetNotFound {
                index: sheet_index,
                available: 1,
            });
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // rows may differ in length
            .from_reader(file);

        let mut grid: Option<SheetGrid> = None;
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            // blank lines are skipped by the reader; keep rows on their file line
            let row = record
                .position()
                .map(|p| p.line().saturating_sub(1) as usize)
                .unwrap_or(idx);

            let grid = grid.get_or_insert_with(|| SheetGrid::with_header_row(row, Vec::new()));
            for (col, value) in record.iter().enumerate() {
                let cell = if value.trim().is_empty() {
                    None
                } else {
                    Some(CellValue::Text(value.to_string()))
                };
                grid.set(row, col, cell);
            }
        }

        Ok(grid.unwrap_or_default())
    }
}

// ==========================================
// UniversalFileParser (dispatch on extension)
// ==========================================
pub struct UniversalFileParser;

impl FileParser for UniversalFileParser {
    fn parse_to_grid(&self, file_path: &Path, sheet_index: usize) -> ImportResult<SheetGrid> {
        let ext = extension_of(file_path);
        match ext.as_str() {
            "csv" => CsvParser.parse_to_grid(file_path, sheet_index),
            e if EXCEL_EXTENSIONS.contains(&e) => ExcelParser.parse_to_grid(file_path, sheet_index),
            _ => {
                ensure_exists(file_path)?;
                Err(ImportError::UnsupportedFormat(ext))
            }
        }
    }
}
