// ==========================================
// Medicine Import - core library
// ==========================================
// Stack: Rust + calamine/csv + SQLite
// Role: one-shot batch import of the medicine catalogue
// ==========================================

// Domain - entities and grid
pub mod domain;

// Repository - document store access
pub mod repository;

// Importer - parsing, cleaning, validation, pipeline
pub mod importer;

// Configuration
pub mod config;

// SQLite connection setup
pub mod db;

// Logging
pub mod logging;

// ==========================================
// Re-exports
// ==========================================

pub use config::{ColumnMapping, ImportConfig, MidStrategy};
pub use domain::{CellValue, ImportOutcome, ImportRecord, ImportReport, RawRow, SheetGrid};
pub use importer::{ImportError, ImportPipeline, ImportResult, PipelineState, ProductImporter};
pub use repository::{ProductRepository, SqliteProductRepository};

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "Medicine Import";
