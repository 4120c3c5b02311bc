// ==========================================
// Medicine Import - importer layer
// ==========================================
// Responsibility: spreadsheet rows → medicine documents
// Supported: Excel / ODS / CSV
// ==========================================

pub mod data_cleaner;
pub mod error;
pub mod field_extractor;
pub mod field_mapper;
pub mod file_parser;
pub mod id_generator;
pub mod product_importer_impl;
pub mod product_importer_trait;
pub mod row_validator;

// Core types
pub use data_cleaner::{normalize, DataCleaner as DataCleanerImpl};
pub use error::{ImportError, ImportResult};
pub use field_extractor::{extract_rate, is_numeric, FieldExtractor as FieldExtractorImpl};
pub use field_mapper::FieldMapper as FieldMapperImpl;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use id_generator::{RandomMidGenerator, SequentialMidGenerator, MID_MAX, MID_MIN};
pub use product_importer_impl::{ImportPipeline, PipelineState, TransformedBatch};
pub use row_validator::RowValidator as RowValidatorImpl;

// Trait interfaces
pub use product_importer_trait::{
    DataCleaner, FieldExtractor, FieldMapper, FileParser, IdentifierGenerator, ProductImporter,
    RowValidator,
};
