// ==========================================
// Medicine Import - field extractor
// ==========================================
// Responsibility: typed values from raw cells
// - is_numeric:   gate before price coercion (finite numbers only)
// - extract_rate: first digit run of a tax label ("GST 18%" → 18)
// ==========================================

use crate::domain::sheet::CellValue;
use crate::importer::product_importer_trait::FieldExtractor as FieldExtractorTrait;
use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("valid digit regex"));

pub struct FieldExtractor;

impl FieldExtractorTrait for FieldExtractor {
    fn is_numeric(&self, value: Option<&CellValue>) -> bool {
        is_numeric(value)
    }

    fn coerce_price(&self, value: Option<&CellValue>) -> Option<f64> {
        to_finite_number(value)
    }

    fn extract_rate(&self, value: Option<&CellValue>) -> Option<f64> {
        extract_rate(value)
    }
}

/// Finite numeric value of a cell; text is trimmed and parsed
fn to_finite_number(value: Option<&CellValue>) -> Option<f64> {
    let number = match value? {
        CellValue::Number(n) => *n,
        CellValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        CellValue::Bool(_) => return None,
    };

    number.is_finite().then_some(number)
}

/// True iff the value converts to a finite number
pub fn is_numeric(value: Option<&CellValue>) -> bool {
    to_finite_number(value).is_some()
}

/// First contiguous digit run as a number, `None` when absent
///
/// Numeric cells go through their text form, so `2.5` typed in a workbook
/// and `"2.5"` read from CSV both yield `2`.
pub fn extract_rate(value: Option<&CellValue>) -> Option<f64> {
    let text = match value? {
        CellValue::Bool(_) => return None,
        cell => cell.as_text(),
    };

    DIGIT_RUN
        .find(&text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|rate| rate.is_finite())
}
