// ==========================================
// Test helpers
// ==========================================
// Responsibility: temporary stores and spreadsheet fixtures
// Default template columns: B = product, J = supplier, L = MRP, R = GST
// ==========================================

#![allow(dead_code)]

use medicine_import::CellValue;
use rust_xlsxwriter::Workbook;
use std::error::Error;
use std::io::Write;
use std::path::Path;
use tempfile::{Builder, NamedTempFile, TempDir};

pub const COL_PRODUCT: usize = 1;
pub const COL_SUPPLIER: usize = 9;
pub const COL_MRP: usize = 11;
pub const COL_GST: usize = 17;

/// One data row of the default template
#[derive(Debug, Clone, Default)]
pub struct TemplateRow {
    pub product_name: Option<CellValue>,
    pub mrp: Option<CellValue>,
    pub supplier_name: Option<CellValue>,
    pub gst_text: Option<CellValue>,
}

impl TemplateRow {
    pub fn new(product_name: &str, mrp: f64, supplier_name: &str, gst_text: &str) -> Self {
        Self {
            product_name: Some(product_name.into()),
            mrp: Some(CellValue::Number(mrp)),
            supplier_name: Some(supplier_name.into()),
            gst_text: Some(gst_text.into()),
        }
    }

    pub fn with_mrp(mut self, mrp: Option<CellValue>) -> Self {
        self.mrp = mrp;
        self
    }

    pub fn with_product_name(mut self, product_name: Option<CellValue>) -> Self {
        self.product_name = product_name;
        self
    }

    pub fn with_supplier_name(mut self, supplier_name: Option<CellValue>) -> Self {
        self.supplier_name = supplier_name;
        self
    }

    pub fn with_gst(mut self, gst_text: Option<CellValue>) -> Self {
        self.gst_text = gst_text;
        self
    }

    fn cells(&self) -> [(usize, &Option<CellValue>); 4] {
        [
            (COL_PRODUCT, &self.product_name),
            (COL_SUPPLIER, &self.supplier_name),
            (COL_MRP, &self.mrp),
            (COL_GST, &self.gst_text),
        ]
    }
}

/// Five rows, the second with price "N/A" and the fourth without a product name
pub fn mixed_rows() -> Vec<TemplateRow> {
    vec![
        TemplateRow::new("Paracetamol 500mg", 12.5, "Acme Pharma", "GST 12%"),
        TemplateRow::new("Azithral 250", 0.0, "Alembic", "GST 12%").with_mrp(Some("N/A".into())),
        TemplateRow::new("Dolo-650", 30.0, "Micro Labs", "5%"),
        TemplateRow::new("", 45.0, "Cipla", "GST 18%").with_product_name(None),
        TemplateRow::new("Cetirizine 10 mg", 18.75, "Dr. Reddy's", "GST 12% (IGST 0%)"),
    ]
}

/// Temporary store file; keep the handle alive for the duration of the test
pub fn create_test_store() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = Builder::new().suffix(".db").tempfile()?;
    let db_path = temp_file
        .path()
        .to_str()
        .ok_or("temp path is not valid UTF-8")?
        .to_string();
    Ok((temp_file, db_path))
}

/// Write an .xlsx workbook with a header row and the given data rows on the
/// first worksheet; `extra_sheets` adds further (empty) worksheets
pub fn write_template_xlsx(
    dir: &TempDir,
    name: &str,
    rows: &[TemplateRow],
    extra_sheets: usize,
) -> Result<std::path::PathBuf, Box<dyn Error>> {
    let path = dir.path().join(name);
    let mut workbook = Workbook::new();

    {
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, COL_PRODUCT as u16, "Product Name")?;
        sheet.write_string(0, COL_SUPPLIER as u16, "Supplier")?;
        sheet.write_string(0, COL_MRP as u16, "MRP")?;
        sheet.write_string(0, COL_GST as u16, "GST")?;

        for (i, row) in rows.iter().enumerate() {
            let r = (i + 1) as u32;
            for (col, cell) in row.cells() {
                let col = col as u16;
                match cell {
                    Some(CellValue::Number(n)) => {
                        sheet.write_number(r, col, *n)?;
                    }
                    Some(CellValue::Text(s)) => {
                        sheet.write_string(r, col, s.as_str())?;
                    }
                    Some(CellValue::Bool(b)) => {
                        sheet.write_boolean(r, col, *b)?;
                    }
                    None => {}
                }
            }
        }
    }

    for _ in 0..extra_sheets {
        workbook.add_worksheet();
    }

    workbook.save(&path)?;
    Ok(path)
}

/// Write the same template as CSV (18 columns, A..R)
pub fn write_template_csv(
    dir: &TempDir,
    name: &str,
    rows: &[TemplateRow],
) -> Result<std::path::PathBuf, Box<dyn Error>> {
    let path = dir.path().join(name);
    let mut writer = csv::Writer::from_path(&path)?;

    let mut header = vec![String::new(); COL_GST + 1];
    header[COL_PRODUCT] = "Product Name".to_string();
    header[COL_SUPPLIER] = "Supplier".to_string();
    header[COL_MRP] = "MRP".to_string();
    header[COL_GST] = "GST".to_string();
    writer.write_record(&header)?;

    for row in rows {
        let mut record = vec![String::new(); COL_GST + 1];
        for (col, cell) in row.cells() {
            if let Some(cell) = cell {
                record[col] = cell.as_text();
            }
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(path)
}

/// Write raw bytes to a file with the given name
pub fn write_raw(dir: &TempDir, name: &str, content: &str) -> Result<std::path::PathBuf, Box<dyn Error>> {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

pub fn path_str(path: &Path) -> String {
    path.display().to_string()
}
