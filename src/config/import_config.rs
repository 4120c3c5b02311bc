// ==========================================
// Medicine Import - run configuration
// ==========================================
// Responsibility: explicit configuration handed to the pipeline
// (file, worksheet, column mapping, store location, mid strategy)
// ==========================================

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Default input workbook
pub const DEFAULT_FILE_PATH: &str = "test.xls";

/// Default store file name inside the data directory
pub const DEFAULT_DB_FILE: &str = "invoice-system.db";

#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid column reference: {0:?}")]
pub struct InvalidColumn(pub String);

/// Convert spreadsheet column letters into a 0-based index (`A` = 0, `AA` = 26)
pub fn column_index(letters: &str) -> Result<usize, InvalidColumn> {
    let trimmed = letters.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(InvalidColumn(letters.to_string()));
    }

    let mut index: usize = 0;
    for c in trimmed.chars() {
        let digit = (c.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        index = index
            .checked_mul(26)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| InvalidColumn(letters.to_string()))?;
    }
    Ok(index - 1)
}

// ==========================================
// ColumnMapping - logical field → column index
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnMapping {
    pub product_name: usize,
    pub supplier_name: usize,
    pub mrp: usize,
    pub gst_text: usize,
}

impl ColumnMapping {
    /// Build a mapping from column letters
    pub fn from_letters(
        product_name: &str,
        supplier_name: &str,
        mrp: &str,
        gst_text: &str,
    ) -> Result<Self, InvalidColumn> {
        Ok(Self {
            product_name: column_index(product_name)?,
            supplier_name: column_index(supplier_name)?,
            mrp: column_index(mrp)?,
            gst_text: column_index(gst_text)?,
        })
    }
}

impl Default for ColumnMapping {
    /// Purchase-register template: B = product, J = supplier, L = MRP, R = GST
    fn default() -> Self {
        Self {
            product_name: 1,
            supplier_name: 9,
            mrp: 11,
            gst_text: 17,
        }
    }
}

// ==========================================
// MidStrategy - how `mid` values are issued
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MidStrategy {
    /// Uniform random 6-digit value per record
    #[default]
    Random,
    /// Counter continuing after the store's current maximum mid
    Sequential,
}

// ==========================================
// ImportConfig
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportConfig {
    pub file_path: PathBuf,
    pub sheet_index: usize,
    pub columns: ColumnMapping,
    pub store_path: String,
    pub mid_strategy: MidStrategy,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_PATH, default_db_path())
    }
}

impl ImportConfig {
    pub fn new(file_path: impl Into<PathBuf>, store_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            sheet_index: 0,
            columns: ColumnMapping::default(),
            store_path: store_path.into(),
            mid_strategy: MidStrategy::default(),
        }
    }

    pub fn with_sheet_index(mut self, sheet_index: usize) -> Self {
        self.sheet_index = sheet_index;
        self
    }

    pub fn with_columns(mut self, columns: ColumnMapping) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_mid_strategy(mut self, mid_strategy: MidStrategy) -> Self {
        self.mid_strategy = mid_strategy;
        self
    }
}

/// Default store location: `<data dir>/invoice-system/invoice-system.db`,
/// falling back to the working directory.
pub fn default_db_path() -> String {
    let mut path = PathBuf::from(".");

    if let Some(data_dir) = dirs::data_dir() {
        path = data_dir.join("invoice-system");
        if let Err(e) = std::fs::create_dir_all(&path) {
            tracing::warn!(error = %e, dir = %path.display(), "cannot create data directory, using working directory");
            path = PathBuf::from(".");
        }
    }

    path.join(DEFAULT_DB_FILE).to_string_lossy().to_string()
}
