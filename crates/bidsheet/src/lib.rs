//! Bidsheet: vendor quote comparison for procurement analysts.
//!
//! Bidsheet ingests RFQ/quotation documents, extracts their line items
//! through an external text-understanding service, reconciles items
//! that are phrased differently across vendors, and plans a per-vendor
//! price comparison sheet.
//!
//! # Core Principles
//!
//! - **Baseline-anchored**: the first document decides the output rows;
//!   every other document is matched against it, never merged into it
//! - **Tolerant at the boundary**: extraction output is coerced once,
//!   at the edge; the engine only ever sees well-formed records
//! - **Diagnostics are data**: match events and unmatched items are
//!   returned, not logged
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use bidsheet::{Bidsheet, MockExtractor};
//!
//! let pipeline = Bidsheet::new().with_extractor(MockExtractor::new());
//! let result = pipeline.compare(&[
//!     PathBuf::from("rfq.txt"),
//!     PathBuf::from("vendor-a.txt"),
//! ]).unwrap();
//!
//! println!("Rows: {}", result.groups.len());
//! println!("Unmatched: {}", result.summary.unmatched_items);
//! ```

pub mod error;
pub mod extract;
pub mod input;
pub mod item;
pub mod output;
pub mod reconcile;
pub mod similarity;

mod bidsheet;

pub use crate::bidsheet::{
    Bidsheet, BidsheetConfig, ComparisonResult, ComparisonSummary, DocumentSummary,
};
pub use error::{BidsheetError, Result};
pub use extract::{
    AnthropicExtractor, ExtractorConfig, ItemExtractor, MockExtractor, OpenAiExtractor, RawItem,
};
pub use input::{SourceMetadata, load_document, vendor_label};
pub use item::{DEFAULT_UOM, DocumentItems, ItemRecord};
pub use output::{
    CellValue, CellWrite, ComparisonSink, CsvSink, SheetLayout, XlsxSink, plan_writes,
    write_comparison,
};
pub use reconcile::{
    CanonicalGroup, DEFAULT_THRESHOLD, MatchEvent, ReconcileOutcome, Reconciler, UnmatchedItem,
};
pub use similarity::token_sort_score;
