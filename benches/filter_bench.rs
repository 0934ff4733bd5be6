//! Benchmarks for list filtering
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use echo::catalog::{seed, Expert};
use echo::filter::{apply, ExpertFacets, FilterState, Selection};

/// Repeat the seeded directory until it holds `count` experts
fn create_test_experts(count: usize) -> Vec<Expert> {
    let base = seed::experts();
    (0..count)
        .map(|i| {
            let mut expert = base[i % base.len()].clone();
            expert.id = i as u32;
            expert
        })
        .collect()
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    for size in [5, 500, 50_000] {
        let experts = create_test_experts(size);
        let state = FilterState::new(ExpertFacets::default()).query("anxiety");

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("substring_{}", size), |b| {
            b.iter(|| apply(black_box(&experts), black_box(&state)))
        });
    }

    group.finish();
}

fn bench_facets(c: &mut Criterion) {
    let mut group = c.benchmark_group("facets");
    let experts = create_test_experts(50_000);
    group.throughput(Throughput::Elements(experts.len() as u64));

    let state = FilterState::new(ExpertFacets {
        specialty: Selection::only("ADHD"),
        location: Selection::only("Seattle, WA"),
    });
    group.bench_function("specialty_and_location", |b| {
        b.iter(|| apply(black_box(&experts), black_box(&state)))
    });

    let state = state.query("dr.");
    group.bench_function("facets_and_query", |b| {
        b.iter(|| apply(black_box(&experts), black_box(&state)))
    });

    group.finish();
}

criterion_group!(benches, bench_query, bench_facets);
criterion_main!(benches);
