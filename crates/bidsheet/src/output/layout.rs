//! Sheet layout configuration.
//!
//! Mirrors the shape of the comparison template this pipeline was built
//! around: a description column, a quantity column, one price column
//! per vendor, and a first data row below the template header block.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{BidsheetError, Result};

/// Where comparison cells land in the output sheet.
///
/// Vendor order matters: the n-th vendor entry receives price slot n,
/// so the mapping is kept insertion-ordered. Loadable from a JSON file;
/// omitted fields fall back to the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetLayout {
    /// Column for item descriptions.
    #[serde(default = "default_description_column")]
    pub description_column: String,

    /// Column for quantities.
    #[serde(default = "default_quantity_column")]
    pub quantity_column: String,

    /// Ordered vendor label -> price column assignment.
    #[serde(default = "default_vendor_columns")]
    pub vendor_columns: IndexMap<String, String>,

    /// 1-based sheet row of the first data row.
    #[serde(default = "default_data_start_row")]
    pub data_start_row: u32,
}

fn default_description_column() -> String {
    "C".to_string()
}

fn default_quantity_column() -> String {
    "D".to_string()
}

fn default_vendor_columns() -> IndexMap<String, String> {
    IndexMap::from([
        ("A".to_string(), "I".to_string()),
        ("B".to_string(), "L".to_string()),
        ("C".to_string(), "N".to_string()),
    ])
}

fn default_data_start_row() -> u32 {
    7
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            description_column: default_description_column(),
            quantity_column: default_quantity_column(),
            vendor_columns: default_vendor_columns(),
            data_start_row: default_data_start_row(),
        }
    }
}

impl SheetLayout {
    /// Load a layout from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| BidsheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let layout: Self = serde_json::from_reader(BufReader::new(file))?;
        layout.validate()?;
        Ok(layout)
    }

    /// Validate column identifiers and the start row.
    ///
    /// Rejected here, at configuration time, so sinks can assume every
    /// column resolves and every row is at least 1.
    pub fn validate(&self) -> Result<()> {
        if self.data_start_row < 1 {
            return Err(BidsheetError::Layout(
                "data_start_row must be at least 1".to_string(),
            ));
        }
        column_index(&self.description_column)?;
        column_index(&self.quantity_column)?;
        for (vendor, column) in &self.vendor_columns {
            column_index(column).map_err(|_| {
                BidsheetError::Layout(format!(
                    "vendor '{vendor}' has invalid column id '{column}'"
                ))
            })?;
        }
        Ok(())
    }
}

/// Convert an A1-style column id ("A", "C", "AA") to a 0-based index.
pub fn column_index(column: &str) -> Result<u16> {
    let column = column.trim();
    if column.is_empty() || !column.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(BidsheetError::Layout(format!(
            "invalid column id '{column}'"
        )));
    }

    let mut index: u32 = 0;
    for c in column.chars() {
        let digit = (c.to_ascii_uppercase() as u32) - ('A' as u32) + 1;
        index = index * 26 + digit;
        if index > u16::MAX as u32 {
            return Err(BidsheetError::Layout(format!(
                "column id '{column}' is out of range"
            )));
        }
    }
    Ok((index - 1) as u16)
}
