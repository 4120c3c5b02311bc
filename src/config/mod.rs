// ==========================================
// Medicine Import - configuration layer
// ==========================================
// Responsibility: run configuration built in code and passed to the
// pipeline explicitly (no config file, no global state)
// ==========================================

pub mod import_config;

pub use import_config::{
    column_index, default_db_path, ColumnMapping, ImportConfig, InvalidColumn, MidStrategy,
};
