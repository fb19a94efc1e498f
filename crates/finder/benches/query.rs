//! Benchmarks for café queries
//!
//! Run with: cargo bench --package finder

use catalog::{CafeCatalog, DietaryTag, Seating};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use finder::{query, FilterConfig, SortKey};

fn bench_query_no_filters(c: &mut Criterion) {
    let catalog = CafeCatalog::sample();
    let config = FilterConfig::new().with_sort(SortKey::Rating);

    c.bench_function("query_no_filters", |b| {
        b.iter(|| {
            let results = query(black_box(catalog.cafes()), black_box(&config));
            black_box(results.len())
        })
    });
}

fn bench_query_all_filters(c: &mut Criterion) {
    let catalog = CafeCatalog::sample();
    let config = FilterConfig::new()
        .toggle_dietary(DietaryTag::Vegetarian)
        .toggle_dietary(DietaryTag::GlutenFree)
        .toggle_seating(Seating::OpenTables)
        .toggle_seating(Seating::Couches)
        .with_outlets_only(true)
        .within_km(5.0)
        .with_sort(SortKey::Study);

    c.bench_function("query_all_filters", |b| {
        b.iter(|| {
            let results = query(black_box(catalog.cafes()), black_box(&config));
            black_box(results.len())
        })
    });
}

criterion_group!(benches, bench_query_no_filters, bench_query_all_filters);
criterion_main!(benches);
