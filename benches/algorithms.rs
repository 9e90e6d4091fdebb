//! Benchmarks for the dense graph analyses
//!
//! Every engine scans full matrix rows, so these track the cubic Floyd
//! run and the quadratic Dijkstra/Prim runs as the node count grows.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use densegraph::graph::Graph;

/// Build a ring with a few deterministic chords per node.
fn create_graph(nodes: usize, chords: usize) -> Graph<usize> {
    let mut graph = Graph::new(nodes);
    for i in 0..nodes {
        graph.add_node(i).unwrap();
    }

    for i in 0..nodes {
        graph.add_edge(&i, &((i + 1) % nodes), 1.0).unwrap();
        for c in 1..=chords {
            let target = (i * 7 + c * 13) % nodes;
            let weight = ((i + c) % 9 + 1) as f64;
            graph.add_edge(&i, &target, weight).unwrap();
        }
    }
    graph
}

fn bench_floyd(c: &mut Criterion) {
    let mut group = c.benchmark_group("floyd");

    for size in [16, 64, 128].iter() {
        let graph = create_graph(*size, 3);

        group.bench_with_input(BenchmarkId::new("nodes", size), size, |b, _| {
            b.iter(|| black_box(graph.floyd()));
        });
    }

    group.finish();
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");

    for size in [16, 64, 128, 256].iter() {
        let graph = create_graph(*size, 3);

        group.bench_with_input(BenchmarkId::new("nodes", size), size, |b, _| {
            b.iter(|| black_box(graph.dijkstra(&0).unwrap()));
        });
    }

    group.finish();
}

fn bench_prim(c: &mut Criterion) {
    let mut group = c.benchmark_group("prim");

    for size in [16, 64, 128].iter() {
        let mut graph = create_graph(*size, 3);
        graph.make_bidirectional();

        group.bench_with_input(BenchmarkId::new("nodes", size), size, |b, _| {
            b.iter(|| black_box(graph.prim(&0).unwrap()));
        });
    }

    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for size in [64, 256, 512].iter() {
        let graph = create_graph(*size, 3);

        group.bench_with_input(BenchmarkId::new("depth_first", size), size, |b, _| {
            b.iter(|| black_box(graph.traverse_depth_first(&0).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("breadth_first", size), size, |b, _| {
            b.iter(|| black_box(graph.traverse_breadth_first(&0).unwrap()));
        });
    }

    group.finish();
}

/// Connectivity runs Floyd twice and Dijkstra once per node.
fn bench_connectivity(c: &mut Criterion) {
    let mut group = c.benchmark_group("connectivity");

    for size in [16, 64].iter() {
        let graph = create_graph(*size, 2);

        group.bench_with_input(BenchmarkId::new("nodes", size), size, |b, _| {
            b.iter(|| black_box(graph.connectivity()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_floyd,
    bench_dijkstra,
    bench_prim,
    bench_traversal,
    bench_connectivity
);
criterion_main!(benches);
