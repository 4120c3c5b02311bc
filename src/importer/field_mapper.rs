// ==========================================
// Medicine Import - field mapper
// ==========================================
// Responsibility: grid row → RawRow through the column mapping
// ==========================================

use crate::config::ColumnMapping;
use crate::domain::product::RawRow;
use crate::domain::sheet::SheetGrid;
use crate::importer::product_importer_trait::FieldMapper as FieldMapperTrait;

pub struct FieldMapper;

impl FieldMapperTrait for FieldMapper {
    fn map_row(&self, grid: &SheetGrid, row_index: usize, columns: &ColumnMapping) -> RawRow {
        RawRow {
            row_number: row_index + 1,
            product_name: grid.cell(row_index, columns.product_name).cloned(),
            mrp: grid.cell(row_index, columns.mrp).cloned(),
            supplier_name: grid.cell(row_index, columns.supplier_name).cloned(),
            gst_text: grid.cell(row_index, columns.gst_text).cloned(),
        }
    }
}
