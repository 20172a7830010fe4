use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skein::Multigraph;

fn bench_multigraph_build(c: &mut Criterion) {
    let size = 10_000;

    c.bench_function("multigraph_build_chain", |b| {
        b.iter(|| {
            let mut graph = Multigraph::with_capacity(size as usize);
            // Chain: 0-1-...-N
            for i in 0..size - 1 {
                graph.add_edge(i, i + 1);
            }
            black_box(graph)
        });
    });

    c.bench_function("multigraph_build_tree", |b| {
        b.iter(|| {
            let mut graph = Multigraph::with_capacity(size as usize);
            // Tree-like structure
            for i in 1..size {
                graph.add_edge(i / 2, i);
            }
            black_box(graph)
        });
    });

    c.bench_function("multigraph_build_parallel_edges", |b| {
        b.iter(|| {
            let mut graph = Multigraph::with_capacity(64);
            // Hammer a handful of node pairs with duplicate edges.
            for i in 0..size {
                graph.add_edge(i % 8, (i + 1) % 8);
            }
            black_box(graph)
        });
    });
}

fn bench_multigraph_queries(c: &mut Criterion) {
    let size = 10_000;

    let mut graph = Multigraph::with_capacity(size as usize);
    for i in 1..size {
        graph.add_edge(i / 2, i);
    }

    c.bench_function("multigraph_degrees", |b| {
        b.iter(|| black_box(graph.degrees()));
    });

    c.bench_function("multigraph_neighbor_scan", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for id in graph.nodes() {
                total += graph.neighbors(id).unwrap().len();
            }
            black_box(total)
        });
    });

    c.bench_function("multigraph_to_csr", |b| {
        b.iter(|| black_box(graph.to_csr()));
    });

    let csr = graph.to_csr();
    c.bench_function("csr_neighbor_scan", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for id in csr.nodes() {
                total += csr.neighbors(id).unwrap().len();
            }
            black_box(total)
        });
    });
}

criterion_group!(benches, bench_multigraph_build, bench_multigraph_queries);
criterion_main!(benches);
