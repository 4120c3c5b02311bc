// ==========================================
// Medicine Import - Product domain model
// ==========================================
// Responsibility: raw row / import record / run report
// Store alignment: medicine_managements collection
// ==========================================

use crate::domain::sheet::CellValue;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

// ==========================================
// RawRow - one spreadsheet line after the header
// ==========================================
// Lives only for one iteration of the pipeline, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawRow {
    pub row_number: usize,                 // 1-based spreadsheet row number
    pub product_name: Option<CellValue>,   // product / medicine name
    pub mrp: Option<CellValue>,            // MRP, used as price
    pub supplier_name: Option<CellValue>,  // supplier
    pub gst_text: Option<CellValue>,       // tax-rate label, e.g. "GST 18%"
}

// ==========================================
// ImportRecord - persisted document
// ==========================================
// Invariants: medicine_name / supplier_name non-empty, price finite and >= 0,
// mid within [100000, 999999]. `sgst = None` is stored as null, not 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRecord {
    pub medicine_name: String,
    pub price: f64,
    pub supplier_name: String,
    pub sgst: Option<f64>,
    pub mid: i64,
}

// ==========================================
// RejectReason / RowRejection - per-row diagnostics
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectReason {
    MissingProductName,
    NonNumericPrice,
    NegativePrice,
    MissingSupplierName,
    /// passed validation but a field could not be converted
    Unconvertible,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            RejectReason::MissingProductName => "product name missing or empty",
            RejectReason::NonNumericPrice => "price missing or not numeric",
            RejectReason::NegativePrice => "price is negative",
            RejectReason::MissingSupplierName => "supplier name missing or empty",
            RejectReason::Unconvertible => "field value could not be converted",
        };
        f.write_str(msg)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowRejection {
    pub row_number: usize,
    pub reasons: Vec<RejectReason>,
    pub raw: RawRow,
}

impl RowRejection {
    /// Reasons joined for a single log line
    pub fn reason_text(&self) -> String {
        self.reasons
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

// ==========================================
// ImportOutcome / ImportReport - run result
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "count", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImportOutcome {
    Inserted(usize),
    NoValidData,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub run_id: String,
    pub file_path: String,
    pub total_rows: usize,
    pub inserted: usize,
    pub skipped: Vec<RowRejection>,
    pub outcome: ImportOutcome,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u128,
}

impl ImportReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_record_serializes_camel_case_with_null_sgst() {
        let record = ImportRecord {
            medicine_name: "PARACETAMOL_500MG".to_string(),
            price: 12.5,
            supplier_name: "ACME_PHARMA".to_string(),
            sgst: None,
            mid: 123456,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["medicineName"], "PARACETAMOL_500MG");
        assert_eq!(json["supplierName"], "ACME_PHARMA");
        assert_eq!(json["price"], 12.5);
        assert!(json["sgst"].is_null());
        assert_eq!(json["mid"], 123456);
    }

    #[test]
    fn test_rejection_reason_text() {
        let rejection = RowRejection {
            row_number: 4,
            reasons: vec![RejectReason::MissingProductName, RejectReason::NonNumericPrice],
            raw: RawRow::default(),
        };
        assert_eq!(
            rejection.reason_text(),
            "product name missing or empty; price missing or not numeric"
        );
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(ImportOutcome::Inserted(3)).unwrap();
        assert_eq!(json["kind"], "INSERTED");
        assert_eq!(json["count"], 3);

        let json = serde_json::to_value(ImportOutcome::NoValidData).unwrap();
        assert_eq!(json["kind"], "NO_VALID_DATA");
    }

    #[test]
    fn test_report_serializes_for_run_log() {
        let report = ImportReport {
            run_id: "run-1".to_string(),
            file_path: "test.xls".to_string(),
            total_rows: 2,
            inserted: 1,
            skipped: vec![RowRejection {
                row_number: 3,
                reasons: vec![RejectReason::Unconvertible],
                raw: RawRow {
                    row_number: 3,
                    mrp: Some(CellValue::Number(2.5)),
                    ..RawRow::default()
                },
            }],
            outcome: ImportOutcome::Inserted(1),
            started_at: Utc::now(),
            elapsed_ms: 7,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["skipped"][0]["reasons"][0], "UNCONVERTIBLE");
        assert_eq!(json["skipped"][0]["raw"]["mrp"], 2.5);
        assert_eq!(json["outcome"]["kind"], "INSERTED");
        assert_eq!(report.total_rows, report.inserted + report.skipped_count());
    }
}
