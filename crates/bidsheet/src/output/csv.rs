//! CSV sink: the comparison as a dense grid.
//!
//! Cell positions are preserved, so the CSV lines up with the XLSX
//! output column-for-column. Untouched cells and explicit blanks both
//! come out as empty fields; the CSV is for diffing and piping, not
//! for distinguishing the two.

use std::path::{Path, PathBuf};

use crate::error::Result;

use super::layout::column_index;
use super::sink::{CellValue, CellWrite, ComparisonSink};

/// Comparison sink that saves a `.csv` grid on [`finish`].
///
/// [`finish`]: ComparisonSink::finish
pub struct CsvSink {
    grid: Vec<Vec<String>>,
    path: PathBuf,
}

impl CsvSink {
    /// Create a sink that will save to `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            grid: Vec::new(),
            path: path.as_ref().to_path_buf(),
        }
    }

    fn set(&mut self, row: usize, col: usize, value: String) {
        if self.grid.len() <= row {
            self.grid.resize(row + 1, Vec::new());
        }
        let cells = &mut self.grid[row];
        if cells.len() <= col {
            cells.resize(col + 1, String::new());
        }
        cells[col] = value;
    }
}

impl ComparisonSink for CsvSink {
    fn write_cell(&mut self, write: &CellWrite) -> Result<()> {
        let col = column_index(&write.column)? as usize;
        let row = write.row.saturating_sub(1) as usize;

        let value = match &write.value {
            CellValue::Text(text) => text.clone(),
            CellValue::Number(number) => number.to_string(),
            CellValue::Blank => String::new(),
        };
        self.set(row, col, value);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let width = self.grid.iter().map(Vec::len).max().unwrap_or(0);
        let mut writer = csv::Writer::from_path(&self.path)?;
        for cells in &self.grid {
            let mut record: Vec<&str> = cells.iter().map(String::as_str).collect();
            record.resize(width, "");
            writer.write_record(&record)?;
        }
        writer.flush().map_err(|e| crate::error::BidsheetError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{SheetLayout, write_comparison};
    use crate::reconcile::CanonicalGroup;
    use tempfile::tempdir;

    #[test]
    fn writes_a_dense_grid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("comparison.csv");

        let groups = vec![
            CanonicalGroup {
                baseline_index: 0,
                description: "Gasket Set".to_string(),
                quantity: Some(4.0),
                unit_of_measure: "SET".to_string(),
                prices: vec![Some(12.5), Some(11.0)],
            },
            CanonicalGroup {
                baseline_index: 1,
                description: "Hex Bolt M8".to_string(),
                quantity: None,
                unit_of_measure: "EA".to_string(),
                prices: vec![None, None],
            },
        ];
        let layout = SheetLayout::default();

        let mut sink = CsvSink::new(&path);
        write_comparison(&mut sink, &groups, &layout).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        // Data starts on sheet row 7 -> line index 6.
        assert!(lines.len() >= 8);
        let first = lines[6];
        assert!(first.contains("Gasket Set"));
        assert!(first.contains("12.5"));
        assert!(first.contains("11"));
        let second = lines[7];
        assert!(second.contains("Hex Bolt M8"));
    }
}
