// ==========================================
// Medicine Import - importer error types
// ==========================================
// Tooling: thiserror derive
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// Importer error type
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== Store connection =====
    #[error("store connection failed: {0}")]
    ConnectionError(String),

    // ===== File errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (expected .xlsx/.xls/.xlsm/.xlsb/.ods/.csv)")]
    UnsupportedFormat(String),

    #[error("file read failed: {0}")]
    FileReadError(String),

    #[error("excel parse failed: {0}")]
    ExcelParseError(String),

    #[error("csv parse failed: {0}")]
    CsvParseError(String),

    #[error("worksheet #{index} not found ({available} sheet(s) in workbook)")]
    SheetNotFound { index: usize, available: usize },

    // ===== Row errors (non-fatal) =====
    #[error("row {row} is not eligible for import: {reason}")]
    RowIneligible { row: usize, reason: String },

    // ===== Persistence =====
    #[error("bulk insert failed, batch discarded: {0}")]
    PersistError(String),

    // ===== Identifiers =====
    #[error("mid range exhausted: next value {0} exceeds 999999")]
    IdentifierExhausted(i64),

    // ===== General =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImportError {
    /// Whether the error only concerns a single row
    pub fn is_row_level(&self) -> bool {
        matches!(self, ImportError::RowIneligible { .. })
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        match err {
            calamine::Error::Io(e) => ImportError::FileReadError(e.to_string()),
            other => ImportError::ExcelParseError(other.to_string()),
        }
    }
}

impl From<RepositoryError> for ImportError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DatabaseConnectionError(msg) => ImportError::ConnectionError(msg),
            other => ImportError::PersistError(other.to_string()),
        }
    }
}

/// Result type alias
pub type ImportResult<T> = Result<T, ImportError>;
