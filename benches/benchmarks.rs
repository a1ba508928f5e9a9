//! Criterion benchmarks for label-graph.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use label_graph::{DirectedGraph, UndirectedGraph};

/// Random edge list over `node_count` labels, without self-loops.
fn random_edges(node_count: u32, edges_per_node: u32) -> Vec<(u32, u32)> {
    let mut rng = rand::thread_rng();
    let mut edges = Vec::with_capacity((node_count * edges_per_node) as usize);
    for u in 0..node_count {
        for _ in 0..edges_per_node {
            let v = rng.gen_range(0..node_count);
            if v != u {
                edges.push((u, v));
            }
        }
    }
    edges
}

fn bench_add_edges(c: &mut Criterion) {
    let edges = random_edges(10_000, 5);

    c.bench_function("undirected_add_50k_edges", |b| {
        b.iter(|| {
            let graph: UndirectedGraph<u32> = edges.iter().copied().collect();
            black_box(graph.edge_count())
        })
    });

    c.bench_function("directed_add_50k_edges", |b| {
        b.iter(|| {
            let graph: DirectedGraph<u32> = edges.iter().copied().collect();
            black_box(graph.edge_count())
        })
    });
}

fn bench_edge_queries(c: &mut Criterion) {
    let edges = random_edges(10_000, 5);
    let undirected: UndirectedGraph<u32> = edges.iter().copied().collect();
    let directed: DirectedGraph<u32> = edges.iter().copied().collect();
    let probes = random_edges(1_000, 1);

    c.bench_function("undirected_contains_1k", |b| {
        b.iter(|| {
            let view = undirected.edges();
            probes.iter().filter(|(u, v)| view.contains(u, v)).count()
        })
    });

    c.bench_function("directed_predecessors_1k", |b| {
        b.iter(|| {
            probes
                .iter()
                .filter_map(|(u, _)| directed.predecessors(u).ok())
                .map(|p| p.len())
                .sum::<usize>()
        })
    });
}

fn bench_edge_iteration(c: &mut Criterion) {
    let edges = random_edges(10_000, 5);
    let undirected: UndirectedGraph<u32> = edges.iter().copied().collect();
    let directed: DirectedGraph<u32> = edges.iter().copied().collect();

    c.bench_function("undirected_iterate_edges", |b| {
        b.iter(|| black_box(undirected.edges().iter().count()))
    });

    c.bench_function("directed_iterate_edges", |b| {
        b.iter(|| black_box(directed.edges().iter().count()))
    });
}

fn bench_remove_nodes(c: &mut Criterion) {
    let edges = random_edges(2_000, 5);
    let directed: DirectedGraph<u32> = edges.iter().copied().collect();

    c.bench_function("directed_remove_500_nodes", |b| {
        b.iter(|| {
            let mut graph = directed.clone();
            for label in 0..500 {
                let _ = graph.remove_node(&label);
            }
            black_box(graph.edge_count())
        })
    });
}

criterion_group!(
    benches,
    bench_add_edges,
    bench_edge_queries,
    bench_edge_iteration,
    bench_remove_nodes
);
criterion_main!(benches);
