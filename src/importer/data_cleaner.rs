// ==========================================
// Medicine Import - text normalizer
// ==========================================
// Responsibility: free text → canonical token (PARACETAMOL_500MG)
// Rules: drop non [A-Za-z0-9 whitespace] / TRIM / whitespace runs → "_" / UPPER
// ==========================================

use crate::importer::product_importer_trait::DataCleaner as DataCleanerTrait;
use once_cell::sync::Lazy;
use regex::Regex;

static SPECIAL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("valid special-char regex"));

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

pub struct DataCleaner;

impl DataCleanerTrait for DataCleaner {
    fn normalize(&self, text: &str) -> String {
        normalize(text)
    }
}

/// Free-function form of the normalizer
pub fn normalize(text: &str) -> String {
    let stripped = SPECIAL_CHARS.replace_all(text, "");
    WHITESPACE_RUN
        .replace_all(stripped.trim(), "_")
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize("Paracetamol  500mg!"), "PARACETAMOL_500MG");
        assert_eq!(normalize("  crocin advance "), "CROCIN_ADVANCE");
    }

    #[test]
    fn test_normalize_punctuation_between_words() {
        assert_eq!(normalize("Dr. Reddy's Labs (P) Ltd."), "DR_REDDYS_LABS_P_LTD");
        assert_eq!(normalize("A - B"), "A_B");
    }

    #[test]
    fn test_normalize_tabs_and_newlines() {
        assert_eq!(normalize("Vitamin\tD3\n 60K"), "VITAMIN_D3_60K");
    }

    #[test]
    fn test_normalize_empty_and_symbols_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!! ???"), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_normalize_output_alphabet() {
        let inputs = ["Azithral-500 (Tab)", "  x@y#z  ", "Cough  Syrup 100 ml.", "été 5%"];
        for input in inputs {
            let out = normalize(input);
            assert!(out
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'));
            assert!(!out.starts_with('_'));
            assert!(!out.ends_with('_'));
            assert!(!out.contains("__"));
        }
    }

    #[test]
    fn test_trait_delegates() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.normalize("dolo 650"), "DOLO_650");
    }
}
