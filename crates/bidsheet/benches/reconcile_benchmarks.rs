//! Reconciliation engine performance benchmarks.
//!
//! Measures scorer throughput and end-to-end reconciliation over
//! synthetic vendor catalogs.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use bidsheet::{DocumentItems, ItemRecord, Reconciler, token_sort_score};

/// Generate a realistic parts catalog.
fn generate_catalog(items: usize, vendor_noise: bool) -> Vec<ItemRecord> {
    let families = [
        "Bearing SKF", "Hex Bolt M", "Flat Washer M", "Motor Coupling",
        "Gasket Set", "Shaft Seal", "V-Belt B", "Grease Cartridge",
    ];
    let uoms = ["EA", "SET", "PK"];

    (0..items)
        .map(|i| {
            let family = families[i % families.len()];
            let description = if vendor_noise {
                // Vendors reorder tokens and bolt on suffixes.
                format!("{} {} x{} pcs", i, family, (i % 9) + 1)
            } else {
                format!("{}x {} {}", (i % 9) + 1, family, i)
            };
            ItemRecord {
                description,
                quantity: Some(((i % 50) + 1) as f64),
                unit_of_measure: uoms[i % uoms.len()].to_string(),
                unit_price: Some(((i % 200) as f64) * 0.75 + 1.0),
            }
        })
        .collect()
}

fn bench_scorer(c: &mut Criterion) {
    let mut group = c.benchmark_group("scorer");

    let pairs = [
        ("identical", "10x Bearing SKF-6205", "10x Bearing SKF-6205"),
        ("reordered", "10x Bearing SKF-6205", "Bearing SKF 6205 x10 pcs"),
        ("disjoint", "Motor Coupling 1.5in", "Gasket Set"),
    ];

    for (name, a, b) in pairs {
        group.bench_function(name, |bencher| {
            bencher.iter(|| token_sort_score(black_box(a), black_box(b)))
        });
    }
    group.finish();
}

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile");

    for size in [10, 50, 200] {
        let docs = vec![
            DocumentItems::new("rfq", generate_catalog(size, false)),
            DocumentItems::new("vendor-a", generate_catalog(size, true)),
            DocumentItems::new("vendor-b", generate_catalog(size, true)),
        ];
        let reconciler = Reconciler::default();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("three_documents", size), &docs, |b, docs| {
            b.iter(|| reconciler.reconcile(black_box(docs)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scorer, bench_reconcile);
criterion_main!(benches);
