//! Benchmarks comparing the cycle finders and the component scan.
#![allow(clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use cyclefind_bench::{complete_digraph_with_loops, generate_digraph, generate_ungraph, SizeTier};
use cyclefind_core::{
    count_sccs, JohnsonSimpleCycles, PatonCycleBase, PatonSimpleCycles, SimpleCycles,
    SzwarcfiterLauerSimpleCycles, TarjanSimpleCycles, TiernanSimpleCycles,
};

/// The four directed counters on the complete graph with self-loops —
/// dense, cycle-heavy, the classic head-to-head workload.
fn bench_directed_complete(c: &mut Criterion) {
    let mut group = c.benchmark_group("directed_complete");
    for n in [7u32, 8] {
        let g = complete_digraph_with_loops(n);

        group.bench_function(BenchmarkId::new("tiernan", n), |b| {
            let finder = TiernanSimpleCycles::with_graph(&g);
            b.iter(|| finder.count_simple_cycles().expect("bound"));
        });
        group.bench_function(BenchmarkId::new("tarjan", n), |b| {
            let finder = TarjanSimpleCycles::with_graph(&g);
            b.iter(|| finder.count_simple_cycles().expect("bound"));
        });
        group.bench_function(BenchmarkId::new("johnson", n), |b| {
            let finder = JohnsonSimpleCycles::with_graph(&g);
            b.iter(|| finder.count_simple_cycles().expect("bound"));
        });
        group.bench_function(BenchmarkId::new("szwarcfiter_lauer", n), |b| {
            let finder = SzwarcfiterLauerSimpleCycles::with_graph(&g);
            b.iter(|| finder.count_simple_cycles().expect("bound"));
        });
    }
    group.finish();
}

/// The four directed counters on sparse random graphs, where the cycle
/// population is small and per-edge overhead dominates.
fn bench_directed_sparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("directed_sparse");
    for (name, tier) in [("S", SizeTier::Small), ("M", SizeTier::Medium)] {
        let g = generate_digraph(&tier.config(42));

        group.bench_function(BenchmarkId::new("tiernan", name), |b| {
            let finder = TiernanSimpleCycles::with_graph(&g);
            b.iter(|| finder.count_simple_cycles().expect("bound"));
        });
        group.bench_function(BenchmarkId::new("tarjan", name), |b| {
            let finder = TarjanSimpleCycles::with_graph(&g);
            b.iter(|| finder.count_simple_cycles().expect("bound"));
        });
        group.bench_function(BenchmarkId::new("johnson", name), |b| {
            let finder = JohnsonSimpleCycles::with_graph(&g);
            b.iter(|| finder.count_simple_cycles().expect("bound"));
        });
        group.bench_function(BenchmarkId::new("szwarcfiter_lauer", name), |b| {
            let finder = SzwarcfiterLauerSimpleCycles::with_graph(&g);
            b.iter(|| finder.count_simple_cycles().expect("bound"));
        });
    }
    group.finish();
}

/// The component scan across size tiers.
fn bench_sccs(c: &mut Criterion) {
    let mut group = c.benchmark_group("sccs");
    for (name, tier) in [
        ("S", SizeTier::Small),
        ("M", SizeTier::Medium),
        ("L", SizeTier::Large),
    ] {
        let g = generate_digraph(&tier.config(42));
        group.bench_function(BenchmarkId::new("count", name), |b| {
            b.iter(|| count_sccs(&g));
        });
    }
    group.finish();
}

/// The Paton variants on random undirected graphs; output size is linear
/// in the edge count, so these tolerate higher density.
fn bench_undirected(c: &mut Criterion) {
    let mut group = c.benchmark_group("undirected");
    for (name, tier) in [("S", SizeTier::Small), ("M", SizeTier::Medium)] {
        let mut config = tier.config(42);
        config.edge_probability *= 4.0;
        let g = generate_ungraph(&config);

        group.bench_function(BenchmarkId::new("paton_simple", name), |b| {
            let finder = PatonSimpleCycles::with_graph(&g);
            b.iter(|| finder.count_simple_cycles().expect("bound"));
        });
        group.bench_function(BenchmarkId::new("paton_base", name), |b| {
            let finder = PatonCycleBase::with_graph(&g);
            b.iter(|| finder.count_cycle_base().expect("bound"));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_directed_complete,
    bench_directed_sparse,
    bench_sccs,
    bench_undirected
);
criterion_main!(benches);
