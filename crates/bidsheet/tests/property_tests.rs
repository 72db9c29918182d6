//! Property-based tests for the similarity scorer and the
//! reconciliation engine.
//!
//! These use proptest to generate random inputs and verify that the
//! core invariants hold under all conditions:
//!
//! 1. **No panics**: scorer and engine never crash on any input
//! 2. **Determinism**: same input always produces same output
//! 3. **Symmetry**: the scorer is direction-independent
//! 4. **Monotonicity**: raising the threshold never adds matches

use proptest::prelude::*;

use bidsheet::{DocumentItems, ItemRecord, Reconciler, token_sort_score};

// =============================================================================
// Test Strategies
// =============================================================================

/// Arbitrary printable text, including punctuation and whitespace.
fn printable() -> impl Strategy<Value = String> {
    "[ -~]{0,40}"
}

/// Description-like tokens (what normalization reduces text to).
fn token() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,8}"
}

/// A list of description-like strings.
fn descriptions(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z0-9 .\\-]{1,30}", 0..max)
}

fn doc(vendor: &str, descs: Vec<String>) -> DocumentItems {
    let items = descs
        .into_iter()
        .enumerate()
        .map(|(i, d)| ItemRecord {
            description: d,
            quantity: Some(i as f64),
            unit_of_measure: "EA".to_string(),
            unit_price: Some(i as f64 + 0.5),
        })
        .collect();
    DocumentItems::new(vendor, items)
}

// =============================================================================
// Scorer Properties
// =============================================================================

proptest! {
    #[test]
    fn scorer_never_panics_and_stays_in_range(a in printable(), b in printable()) {
        let score = token_sort_score(&a, &b);
        prop_assert!(score <= 100);
    }

    #[test]
    fn scorer_is_symmetric(a in printable(), b in printable()) {
        prop_assert_eq!(token_sort_score(&a, &b), token_sort_score(&b, &a));
    }

    #[test]
    fn scorer_is_deterministic(a in printable(), b in printable()) {
        prop_assert_eq!(token_sort_score(&a, &b), token_sort_score(&a, &b));
    }

    #[test]
    fn scorer_identity_is_100(a in printable()) {
        prop_assert_eq!(token_sort_score(&a, &a), 100);
    }

    #[test]
    fn scorer_ignores_token_order(
        tokens in prop::collection::vec(token(), 1..8).prop_shuffle()
    ) {
        let forward = tokens.join(" ");
        let mut reversed = tokens.clone();
        reversed.reverse();
        let backward = reversed.join(" ");
        prop_assert_eq!(token_sort_score(&forward, &backward), 100);
    }

    #[test]
    fn scorer_ignores_case_and_padding(a in "[a-z0-9 ]{1,30}") {
        let padded = format!("  {}  ", a.to_uppercase());
        prop_assert_eq!(token_sort_score(&a, &padded), 100);
    }
}

// =============================================================================
// Engine Properties
// =============================================================================

proptest! {
    #[test]
    fn group_count_equals_baseline_count(
        baseline in descriptions(6),
        secondary in descriptions(6),
        threshold in 0u8..=100
    ) {
        let docs = vec![doc("rfq", baseline.clone()), doc("vendor", secondary)];
        let outcome = Reconciler::new(threshold).unwrap().reconcile(&docs);
        prop_assert_eq!(outcome.groups.len(), baseline.len());
        for (i, group) in outcome.groups.iter().enumerate() {
            prop_assert_eq!(group.baseline_index, i);
            prop_assert_eq!(group.prices.len(), 2);
        }
    }

    #[test]
    fn raising_threshold_never_adds_matches(
        baseline in descriptions(5),
        secondary in descriptions(5),
        t1 in 0u8..=100,
        t2 in 0u8..=100
    ) {
        let (low, high) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        let docs = vec![doc("rfq", baseline), doc("vendor", secondary)];

        let at_low = Reconciler::new(low).unwrap().reconcile(&docs);
        let at_high = Reconciler::new(high).unwrap().reconcile(&docs);

        prop_assert!(at_high.events.len() <= at_low.events.len());
        // Unmatched moves the other way.
        prop_assert!(at_high.unmatched.len() >= at_low.unmatched.len());
    }

    #[test]
    fn engine_is_deterministic(
        baseline in descriptions(5),
        secondary in descriptions(5),
        threshold in 0u8..=100
    ) {
        let docs = vec![doc("rfq", baseline), doc("vendor", secondary)];
        let reconciler = Reconciler::new(threshold).unwrap();

        let first = reconciler.reconcile(&docs);
        let second = reconciler.reconcile(&docs);

        prop_assert_eq!(first.groups.len(), second.groups.len());
        prop_assert_eq!(first.events.len(), second.events.len());
        prop_assert_eq!(first.unmatched.len(), second.unmatched.len());
        for (a, b) in first.groups.iter().zip(second.groups.iter()) {
            prop_assert_eq!(&a.prices, &b.prices);
        }
    }

    #[test]
    fn slot_zero_always_holds_the_baseline_price(
        baseline in descriptions(5),
        secondary in descriptions(5)
    ) {
        let docs = vec![doc("rfq", baseline), doc("vendor", secondary)];
        let outcome = Reconciler::default().reconcile(&docs);
        for group in &outcome.groups {
            prop_assert_eq!(
                group.prices[0],
                docs[0].items[group.baseline_index].unit_price
            );
        }
    }

    #[test]
    fn unmatched_items_all_come_from_secondary_documents(
        baseline in descriptions(4),
        a in descriptions(4),
        b in descriptions(4),
        threshold in 0u8..=100
    ) {
        let docs = vec![doc("rfq", baseline), doc("va", a), doc("vb", b)];
        let outcome = Reconciler::new(threshold).unwrap().reconcile(&docs);
        for unmatched in &outcome.unmatched {
            prop_assert!(unmatched.document_index >= 1);
            prop_assert!(unmatched.document_index < docs.len());
        }
    }
}

// =============================================================================
// Tie-Break Determinism
// =============================================================================

proptest! {
    #[test]
    fn first_of_equal_candidates_wins(desc in "[a-z]{3,10} [a-z]{3,10}") {
        // Two candidates with the same token multiset tie at 100; the
        // earlier one must be selected no matter what the tokens are.
        let tokens: Vec<&str> = desc.split(' ').collect();
        let swapped = format!("{} {}", tokens[1], tokens[0]);

        let docs = vec![
            doc("rfq", vec![desc.clone()]),
            DocumentItems::new(
                "vendor",
                vec![
                    ItemRecord {
                        description: swapped,
                        quantity: None,
                        unit_of_measure: "EA".to_string(),
                        unit_price: Some(1.0),
                    },
                    ItemRecord {
                        description: desc.clone(),
                        quantity: None,
                        unit_of_measure: "EA".to_string(),
                        unit_price: Some(2.0),
                    },
                ],
            ),
        ];

        let outcome = Reconciler::default().reconcile(&docs);
        prop_assert_eq!(outcome.groups[0].prices[1], Some(1.0));
    }
}
