//! Main Bidsheet struct and public API.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BidsheetError, Result};
use crate::extract::{ItemExtractor, RawItem};
use crate::input::{self, SourceMetadata};
use crate::item::DocumentItems;
use crate::output::SheetLayout;
use crate::reconcile::{
    CanonicalGroup, DEFAULT_THRESHOLD, MatchEvent, ReconcileOutcome, Reconciler, UnmatchedItem,
};

/// Configuration for a comparison run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidsheetConfig {
    /// Similarity acceptance threshold, 0-100.
    pub threshold: u8,
    /// Output sheet layout.
    pub layout: SheetLayout,
}

impl Default for BidsheetConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            layout: SheetLayout::default(),
        }
    }
}

impl BidsheetConfig {
    /// Validate the whole configuration up front.
    pub fn validate(&self) -> Result<()> {
        if self.threshold > 100 {
            return Err(BidsheetError::InvalidThreshold(self.threshold));
        }
        self.layout.validate()
    }
}

/// Per-document extraction accounting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Vendor label (file stem).
    pub vendor: String,
    /// Records the extraction service returned.
    pub extracted: usize,
    /// Records that survived coercion.
    pub kept: usize,
    /// Records dropped for lacking a usable description.
    pub dropped: usize,
}

/// Summary of a comparison run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// Number of input documents.
    pub documents: usize,
    /// Baseline items, which is also the output row count.
    pub baseline_items: usize,
    /// Secondary price slots that found an acceptable match.
    pub matched_slots: usize,
    /// Secondary price slots left empty.
    pub empty_slots: usize,
    /// Matched share of secondary price slots (1.0 when there are
    /// none).
    pub match_rate: f64,
    /// Secondary items with no counterpart in the baseline.
    pub unmatched_items: usize,
    /// Human-readable assessment.
    pub recommendation: String,
}

/// Result of comparing a set of quote documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Provenance of each input document, in supply order.
    pub sources: Vec<SourceMetadata>,
    /// Extraction accounting per document, in supply order.
    pub documents: Vec<DocumentSummary>,
    /// One reconciled group per baseline item.
    pub groups: Vec<CanonicalGroup>,
    /// Secondary items that matched no baseline item.
    pub unmatched: Vec<UnmatchedItem>,
    /// Accepted match pairings.
    pub events: Vec<MatchEvent>,
    /// Run summary.
    pub summary: ComparisonSummary,
    /// When the comparison was performed.
    pub compared_at: DateTime<Utc>,
}

impl ComparisonResult {
    /// Save the comparison report to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    BidsheetError::Persistence(format!(
                        "Failed to create directory '{}': {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        let file = File::create(path).map_err(|e| {
            BidsheetError::Persistence(format!("Failed to create file '{}': {e}", path.display()))
        })?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self).map_err(|e| {
            BidsheetError::Persistence(format!("Failed to serialize comparison report: {e}"))
        })
    }

    /// Load a comparison report from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            BidsheetError::Persistence(format!("Failed to open file '{}': {e}", path.display()))
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            BidsheetError::Persistence(format!("Failed to parse comparison report: {e}"))
        })
    }
}

/// The comparison pipeline: load documents, extract items, reconcile,
/// summarize.
pub struct Bidsheet {
    config: BidsheetConfig,
    extractor: Option<Arc<dyn ItemExtractor>>,
}

impl Bidsheet {
    /// Create a pipeline with default configuration.
    pub fn new() -> Self {
        Self::with_config(BidsheetConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: BidsheetConfig) -> Self {
        Self {
            config,
            extractor: None,
        }
    }

    /// Set the extraction provider.
    pub fn with_extractor(mut self, extractor: impl ItemExtractor + 'static) -> Self {
        self.extractor = Some(Arc::new(extractor));
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &BidsheetConfig {
        &self.config
    }

    /// Compare a set of quote documents. The first is the baseline.
    ///
    /// Extraction runs per document in supply order; a contract
    /// violation rejects the run immediately rather than continuing
    /// with a partial document.
    pub fn compare(&self, paths: &[PathBuf]) -> Result<ComparisonResult> {
        self.config.validate()?;
        let extractor = self.extractor.as_ref().ok_or_else(|| {
            BidsheetError::Config("no extraction provider configured".to_string())
        })?;

        let mut sources = Vec::with_capacity(paths.len());
        let mut documents = Vec::with_capacity(paths.len());
        let mut lists = Vec::with_capacity(paths.len());

        for path in paths {
            let (text, metadata) = input::load_document(path)?;
            let raw = extractor.extract_items(&text)?;
            let extracted = raw.len();

            let items: Vec<_> = raw.into_iter().filter_map(RawItem::into_record).collect();
            let kept = items.len();

            let vendor = input::vendor_label(path);
            documents.push(DocumentSummary {
                vendor: vendor.clone(),
                extracted,
                kept,
                dropped: extracted - kept,
            });
            lists.push(DocumentItems::new(vendor, items));
            sources.push(metadata);
        }

        let reconciler = Reconciler::new(self.config.threshold)?;
        let outcome = reconciler.reconcile(&lists);
        let summary = summarize(&lists, &outcome);

        Ok(ComparisonResult {
            sources,
            documents,
            groups: outcome.groups,
            unmatched: outcome.unmatched,
            events: outcome.events,
            summary,
            compared_at: Utc::now(),
        })
    }
}

impl Default for Bidsheet {
    fn default() -> Self {
        Self::new()
    }
}

fn summarize(lists: &[DocumentItems], outcome: &ReconcileOutcome) -> ComparisonSummary {
    let documents = lists.len();
    let baseline_items = lists.first().map_or(0, |l| l.items.len());
    let secondary_slots = outcome.groups.len() * documents.saturating_sub(1);
    let matched_slots = outcome.events.len();
    let empty_slots = secondary_slots - matched_slots;
    let match_rate = if secondary_slots == 0 {
        1.0
    } else {
        matched_slots as f64 / secondary_slots as f64
    };
    let unmatched_items = outcome.unmatched.len();

    let recommendation = if documents <= 1 {
        "Single document: one row per item, nothing to reconcile against.".to_string()
    } else if match_rate >= 0.9 && unmatched_items == 0 {
        "Coverage is good. The comparison is ready to use.".to_string()
    } else if match_rate >= 0.6 {
        format!(
            "Review the {empty_slots} empty price slots and {unmatched_items} unmatched items; some line items may need manual pairing."
        )
    } else {
        "Low match coverage. Consider a lower threshold or check that the documents quote the same request.".to_string()
    };

    ComparisonSummary {
        documents,
        baseline_items,
        matched_slots,
        empty_slots,
        match_rate,
        unmatched_items,
        recommendation,
    }
}
