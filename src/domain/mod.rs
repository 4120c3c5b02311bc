// ==========================================
// Medicine Import - domain model
// ==========================================
// Responsibility: grid, raw row, import record, run report
// Rule: no data access, no pipeline logic
// ==========================================

pub mod product;
pub mod sheet;

pub use product::{ImportOutcome, ImportRecord, ImportReport, RawRow, RejectReason, RowRejection};
pub use sheet::{CellValue, SheetGrid};
