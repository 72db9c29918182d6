//! XLSX sink backed by `rust_xlsxwriter`.
//!
//! Writes a fresh workbook with one "Comparison" sheet. The writer is
//! one-way; anyone maintaining a formula-laden comparison template can
//! paste this sheet in, or use the CSV sink instead.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;

use crate::error::Result;

use super::layout::column_index;
use super::sink::{CellValue, CellWrite, ComparisonSink};

/// Comparison sink that saves an `.xlsx` workbook on [`finish`].
///
/// [`finish`]: ComparisonSink::finish
pub struct XlsxSink {
    workbook: Workbook,
    path: PathBuf,
}

impl XlsxSink {
    /// Create a sink that will save to `path`.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let mut workbook = Workbook::new();
        workbook.add_worksheet().set_name("Comparison")?;
        Ok(Self {
            workbook,
            path: path.as_ref().to_path_buf(),
        })
    }
}

impl ComparisonSink for XlsxSink {
    fn write_cell(&mut self, write: &CellWrite) -> Result<()> {
        let col = column_index(&write.column)?;
        // Planned rows are 1-based sheet rows; the writer is 0-based.
        let row = write.row.saturating_sub(1);

        let worksheet = self.workbook.worksheet_from_index(0)?;
        match &write.value {
            CellValue::Text(text) => {
                worksheet.write_string(row, col, text.as_str())?;
            }
            CellValue::Number(number) => {
                worksheet.write_number(row, col, *number)?;
            }
            CellValue::Blank => {}
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.workbook.save(&self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{SheetLayout, plan_writes, write_comparison};
    use crate::reconcile::CanonicalGroup;
    use tempfile::tempdir;

    #[test]
    fn writes_and_saves_a_workbook() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("comparison.xlsx");

        let groups = vec![CanonicalGroup {
            baseline_index: 0,
            description: "Gasket Set".to_string(),
            quantity: Some(4.0),
            unit_of_measure: "SET".to_string(),
            prices: vec![Some(12.5), None],
        }];
        let layout = SheetLayout::default();

        let mut sink = XlsxSink::new(&path).unwrap();
        write_comparison(&mut sink, &groups, &layout).unwrap();

        assert!(path.exists());
        // Non-empty zip container.
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
        // Sanity: the plan the sink consumed had an explicit blank.
        assert!(
            plan_writes(&groups, &layout)
                .iter()
                .any(|w| w.value == CellValue::Blank)
        );
    }
}
