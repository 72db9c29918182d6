//! Line-item records extracted from quote documents.

use serde::{Deserialize, Serialize};

/// Unit-of-measure sentinel used when a document does not state one.
pub const DEFAULT_UOM: &str = "EA";

/// One line item as extracted from a single document.
///
/// Records are created once at the extraction boundary, consumed by the
/// reconciliation engine, and never mutated afterwards. The description
/// is kept verbatim; the similarity scorer normalizes on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Free-form item description, verbatim from the document.
    pub description: String,
    /// Quantity, when the document states one.
    pub quantity: Option<f64>,
    /// Unit of measure code ("EA", "SET", ...).
    pub unit_of_measure: String,
    /// Price per unit, when shown.
    pub unit_price: Option<f64>,
}

impl ItemRecord {
    /// Create a record with the default unit of measure and no numbers.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            quantity: None,
            unit_of_measure: DEFAULT_UOM.to_string(),
            unit_price: None,
        }
    }
}

/// The extracted line items of one source document, in document order.
///
/// The first document in a comparison is the baseline: it decides which
/// descriptions become output rows and which vendor occupies price
/// slot 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentItems {
    /// Vendor label for this document (defaults to the file stem).
    pub vendor: String,
    /// Extracted records, in extraction order.
    pub items: Vec<ItemRecord>,
}

impl DocumentItems {
    /// Create a document item list.
    pub fn new(vendor: impl Into<String>, items: Vec<ItemRecord>) -> Self {
        Self {
            vendor: vendor.into(),
            items,
        }
    }
}
