//! Cross-document line-item reconciliation.
//!
//! Given one item list per document, the engine pairs every baseline
//! item (first document) with at most one item from each of the other
//! documents, using [`token_sort_score`] under an acceptance threshold.
//! The result is one canonical row per baseline item, with a price slot
//! per document, plus a report of secondary items that matched nothing.
//!
//! Matching is baseline-anchored, not a global bipartite optimum: each
//! baseline item greedily takes the best-scoring candidate from each
//! secondary document, and a secondary item may serve several baseline
//! items. Every accepted pairing is recorded as a [`MatchEvent`] so
//! callers can surface repeated candidate use without the engine
//! logging anything itself.

use serde::{Deserialize, Serialize};

use crate::error::{BidsheetError, Result};
use crate::item::{DocumentItems, ItemRecord};
use crate::similarity::token_sort_score;

/// Default acceptance threshold: strict enough to keep unrelated parts
/// apart, loose enough to survive vendor rephrasing.
pub const DEFAULT_THRESHOLD: u8 = 75;

/// One reconciled output row, anchored on a baseline item.
///
/// Groups are keyed by baseline index, so two baseline items with the
/// same raw description produce two distinct rows instead of silently
/// overwriting each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalGroup {
    /// Position of the anchoring item in the baseline document.
    pub baseline_index: usize,
    /// Baseline description, verbatim (not normalized).
    pub description: String,
    /// Baseline quantity.
    pub quantity: Option<f64>,
    /// Baseline unit of measure.
    pub unit_of_measure: String,
    /// One price slot per input document. Slot 0 is the baseline item's
    /// own price; slot i holds the matched price from document i, or
    /// `None` when no candidate reached the threshold.
    pub prices: Vec<Option<f64>>,
}

/// An accepted pairing between a baseline item and a secondary-document
/// candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEvent {
    /// Index of the baseline item the candidate was matched to.
    pub baseline_index: usize,
    /// Index of the secondary document the candidate came from.
    pub document_index: usize,
    /// The winning candidate's description, verbatim.
    pub matched_description: String,
    /// The winning similarity score.
    pub score: u8,
}

/// A secondary-document item with no baseline item scoring at or above
/// the threshold against it. Informational only; never becomes a row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnmatchedItem {
    /// Index of the document the item came from (1-based slot order;
    /// the baseline is document 0 and never appears here).
    pub document_index: usize,
    /// The unmatched record.
    pub item: ItemRecord,
}

/// Everything the engine produces for one reconciliation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReconcileOutcome {
    /// One group per baseline item, in baseline order.
    pub groups: Vec<CanonicalGroup>,
    /// Secondary items that matched no baseline item.
    pub unmatched: Vec<UnmatchedItem>,
    /// Accepted pairings, in processing order.
    pub events: Vec<MatchEvent>,
}

/// The reconciliation engine. Pure computation over in-memory lists;
/// re-entrant, no interior state across calls.
#[derive(Debug, Clone)]
pub struct Reconciler {
    threshold: u8,
}

impl Reconciler {
    /// Create an engine with the given acceptance threshold.
    ///
    /// The threshold is validated here, at configuration time; a value
    /// above 100 is rejected with [`BidsheetError::InvalidThreshold`].
    pub fn new(threshold: u8) -> Result<Self> {
        if threshold > 100 {
            return Err(BidsheetError::InvalidThreshold(threshold));
        }
        Ok(Self { threshold })
    }

    /// The configured acceptance threshold.
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Reconcile one item list per document into canonical groups.
    ///
    /// The first list is the baseline. An empty input slice and an
    /// empty baseline both degrade to an empty outcome rather than an
    /// error; with a single document every group has exactly one price
    /// slot and nothing can be unmatched.
    pub fn reconcile(&self, documents: &[DocumentItems]) -> ReconcileOutcome {
        let Some((baseline, rest)) = documents.split_first() else {
            return ReconcileOutcome::default();
        };

        let mut groups = Vec::with_capacity(baseline.items.len());
        let mut events = Vec::new();

        for (baseline_index, base) in baseline.items.iter().enumerate() {
            let mut prices = vec![None; documents.len()];
            prices[0] = base.unit_price;

            for (offset, doc) in rest.iter().enumerate() {
                let document_index = offset + 1;
                if let Some((candidate, score)) = self.best_candidate(base, doc) {
                    prices[document_index] = candidate.unit_price;
                    events.push(MatchEvent {
                        baseline_index,
                        document_index,
                        matched_description: candidate.description.clone(),
                        score,
                    });
                }
            }

            groups.push(CanonicalGroup {
                baseline_index,
                description: base.description.clone(),
                quantity: base.quantity,
                unit_of_measure: base.unit_of_measure.clone(),
                prices,
            });
        }

        let unmatched = self.find_unmatched(baseline, rest);

        ReconcileOutcome {
            groups,
            unmatched,
            events,
        }
    }

    /// Best-scoring acceptable candidate for one baseline item in one
    /// secondary document.
    ///
    /// A candidate replaces the running best only when its score is
    /// strictly greater, so the earliest of equal-scoring candidates
    /// wins. Acceptance additionally requires the score to reach the
    /// threshold; with nothing acceptable the slot stays empty.
    fn best_candidate<'d>(
        &self,
        base: &ItemRecord,
        doc: &'d DocumentItems,
    ) -> Option<(&'d ItemRecord, u8)> {
        let mut best: Option<(&ItemRecord, u8)> = None;
        for item in &doc.items {
            let score = token_sort_score(&base.description, &item.description);
            let running = best.map_or(0, |(_, s)| s);
            if score > running && score >= self.threshold {
                best = Some((item, score));
            }
        }
        best
    }

    /// The secondary-to-baseline pass: an item is unmatched when no
    /// baseline item reaches the threshold against it.
    ///
    /// This is a deliberate full re-scan, independent of the forward
    /// pass: both directions must clear the threshold for an item to
    /// count as matched from its own document's perspective.
    fn find_unmatched(&self, baseline: &DocumentItems, rest: &[DocumentItems]) -> Vec<UnmatchedItem> {
        let mut unmatched = Vec::new();
        for (offset, doc) in rest.iter().enumerate() {
            let document_index = offset + 1;
            for item in &doc.items {
                let covered = baseline.items.iter().any(|base| {
                    token_sort_score(&base.description, &item.description) >= self.threshold
                });
                if !covered {
                    unmatched.push(UnmatchedItem {
                        document_index,
                        item: item.clone(),
                    });
                }
            }
        }
        unmatched
    }
}

impl Default for Reconciler {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}
