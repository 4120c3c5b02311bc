// ==========================================
// Medicine Import - row validator
// ==========================================
// Responsibility: decide whether a raw row may become an ImportRecord
// Rules:
// - product name present, non-empty (also after normalization)
// - price numeric, finite, >= 0
// - supplier name present, non-empty (also after normalization)
// ==========================================

use crate::domain::product::{RawRow, RejectReason, RowRejection};
use crate::domain::sheet::CellValue;
use crate::importer::data_cleaner::normalize;
use crate::importer::field_extractor::FieldExtractor;
use crate::importer::product_importer_trait::{
    FieldExtractor as FieldExtractorTrait, RowValidator as RowValidatorTrait,
};

pub struct RowValidator {
    extractor: Box<dyn FieldExtractorTrait>,
}

impl RowValidator {
    pub fn new(extractor: Box<dyn FieldExtractorTrait>) -> Self {
        Self { extractor }
    }

    /// Name cell usable as canonical text
    fn has_name(value: Option<&CellValue>) -> bool {
        match value {
            None => false,
            Some(cell) if cell.is_blank() => false,
            Some(cell) => !normalize(&cell.as_text()).is_empty(),
        }
    }
}

impl Default for RowValidator {
    fn default() -> Self {
        Self::new(Box::new(FieldExtractor))
    }
}

impl RowValidatorTrait for RowValidator {
    fn check(&self, row: &RawRow) -> Result<(), RowRejection> {
        let mut reasons = Vec::new();

        if !Self::has_name(row.product_name.as_ref()) {
            reasons.push(RejectReason::MissingProductName);
        }

        let mrp = row.mrp.as_ref();
        if !self.extractor.is_numeric(mrp) {
            reasons.push(RejectReason::NonNumericPrice);
        } else if self.extractor.coerce_price(mrp).is_some_and(|p| p < 0.0) {
            reasons.push(RejectReason::NegativePrice);
        }

        if !Self::has_name(row.supplier_name.as_ref()) {
            reasons.push(RejectReason::MissingSupplierName);
        }

        if reasons.is_empty() {
            Ok(())
        } else {
            Err(RowRejection {
                row_number: row.row_number,
                reasons,
                raw: row.clone(),
            })
        }
    }
}
