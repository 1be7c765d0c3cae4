//! 图算法基准测试

use adjgraph::algorithm::{Dijkstra, Kruskal, Traversal};
use adjgraph::config::GraphConfig;
use adjgraph::graph::Graph;
use adjgraph::import::{generate_matrix, generate_symmetric_matrix};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

// 约 1/4 的单元为 0（无边）
const BOUNDARY: i64 = 4;

fn directed_graph(n: usize) -> Graph<usize> {
    let mut rng = StdRng::seed_from_u64(n as u64);
    let matrix = generate_matrix(n, BOUNDARY, &mut rng).unwrap();
    Graph::from_matrix(&matrix, GraphConfig::directed_weighted()).unwrap()
}

fn undirected_graph(n: usize) -> Graph<usize> {
    let mut rng = StdRng::seed_from_u64(n as u64);
    let matrix = generate_symmetric_matrix(n, BOUNDARY, &mut rng).unwrap();
    Graph::from_matrix(&matrix, GraphConfig::undirected_weighted()).unwrap()
}

fn benchmark_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for size in [50, 200, 500] {
        let graph = directed_graph(size);

        group.bench_with_input(BenchmarkId::new("bfs", size), &graph, |b, g| {
            b.iter(|| Traversal::new(g).bfs(black_box(&0)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("dfs", size), &graph, |b, g| {
            b.iter(|| Traversal::new(g).dfs())
        });
    }

    group.finish();
}

fn benchmark_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");

    for size in [50, 200, 500] {
        let graph = directed_graph(size);

        group.bench_with_input(BenchmarkId::new("linear_scan", size), &graph, |b, g| {
            b.iter(|| Dijkstra::new(g).run(black_box(&0)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("heap", size), &graph, |b, g| {
            b.iter(|| Dijkstra::new(g).run_with_heap(black_box(&0)).unwrap())
        });
    }

    group.finish();
}

fn benchmark_kruskal(c: &mut Criterion) {
    let mut group = c.benchmark_group("kruskal");

    for size in [50, 200, 500] {
        let graph = undirected_graph(size);

        group.bench_with_input(BenchmarkId::new("mst", size), &graph, |b, g| {
            b.iter(|| Kruskal::new(g).run().unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_traversal,
    benchmark_dijkstra,
    benchmark_kruskal
);
criterion_main!(benches);
