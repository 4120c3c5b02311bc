// ==========================================
// Medicine Import - importer traits
// ==========================================
// Responsibility: interfaces of the import stages (no implementations)
// ==========================================

use crate::config::ColumnMapping;
use crate::domain::product::{ImportReport, RawRow, RowRejection};
use crate::domain::sheet::{CellValue, SheetGrid};
use crate::importer::error::ImportResult;
use async_trait::async_trait;
use std::path::Path;

// ==========================================
// ProductImporter Trait
// ==========================================
// Implementor: ImportPipeline
#[async_trait]
pub trait ProductImporter: Send {
    /// Run one import: load → iterate → persist → report
    ///
    /// # Returns
    /// - Ok(ImportReport): rows inserted (or "no valid data") plus skipped rows
    /// - Err: file-level or store-level failure, nothing persisted
    async fn run(&mut self) -> ImportResult<ImportReport>;
}

// ==========================================
// FileParser Trait
// ==========================================
// Implementors: ExcelParser, CsvParser, UniversalFileParser
pub trait FileParser: Send + Sync {
    /// Load one worksheet as a typed grid
    ///
    /// # Parameters
    /// - file_path: workbook path
    /// - sheet_index: 0-based worksheet position
    fn parse_to_grid(&self, file_path: &Path, sheet_index: usize) -> ImportResult<SheetGrid>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
pub trait FieldMapper: Send + Sync {
    /// Extract the four logical cells of one data row
    ///
    /// # Parameters
    /// - grid: loaded worksheet
    /// - row_index: absolute 0-based row index
    /// - columns: logical field → column index
    fn map_row(&self, grid: &SheetGrid, row_index: usize, columns: &ColumnMapping) -> RawRow;
}

// ==========================================
// DataCleaner Trait
// ==========================================
pub trait DataCleaner: Send + Sync {
    /// Canonical token form: strip punctuation, trim, `_` between words, uppercase
    fn normalize(&self, text: &str) -> String;
}

// ==========================================
// FieldExtractor Trait
// ==========================================
pub trait FieldExtractor: Send + Sync {
    /// True iff the cell denotes a finite number
    fn is_numeric(&self, value: Option<&CellValue>) -> bool;

    /// Numeric value of a cell that passed `is_numeric`
    fn coerce_price(&self, value: Option<&CellValue>) -> Option<f64>;

    /// First digit run in the cell, `None` when not derivable
    fn extract_rate(&self, value: Option<&CellValue>) -> Option<f64>;
}

// ==========================================
// IdentifierGenerator Trait
// ==========================================
// Implementors: RandomMidGenerator, SequentialMidGenerator
pub trait IdentifierGenerator: Send + Sync {
    /// Next `mid` in [100000, 999999]
    fn generate(&self) -> ImportResult<i64>;
}

// ==========================================
// RowValidator Trait
// ==========================================
pub trait RowValidator: Send + Sync {
    /// Validate a row, collecting every failing reason
    fn check(&self, row: &RawRow) -> Result<(), RowRejection>;

    /// Convenience form of `check`
    fn is_eligible(&self, row: &RawRow) -> bool {
        self.check(row).is_ok()
    }
}
