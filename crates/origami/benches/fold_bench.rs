//! Criterion benchmarks for repeated folds of the unit square.
//! Focus sizes: k folds in {1, 2, 4, 6} along random lines.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use origami::api::{fold_line, square, FoldCfg, FoldOptions, FoldReplay, Graph};
use origami::rand::draw_fold_sequence;

fn fold_all(mut graph: Graph, k: usize, seed: u64) -> Graph {
    let cfg = FoldCfg::default();
    for (line, assignment) in draw_fold_sequence(k, 0.15, FoldReplay::new(seed, k as u64)) {
        match fold_line(&graph, line, &FoldOptions::new(assignment), &cfg) {
            Ok(folded) => graph = folded.graph,
            Err(_) => break,
        }
    }
    graph
}

fn bench_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold");
    for &k in &[1usize, 2, 4, 6] {
        group.bench_with_input(BenchmarkId::new("fold_line_sequence", k), &k, |b, &k| {
            b.iter_batched(
                square,
                |g| {
                    let _g = fold_all(g, k, 11);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fold);
criterion_main!(benches);
