//! Benchmarks for importer tree resolution and chain search
//!
//! Uses a layered graph where every module in one layer is imported by
//! every module in the next, so the work grows as `width ^ depth`.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use bundle_why::graph::{
    find_chains, resolve, trim, AdjacencyMap, ChunkMap, ImporterRecord, ImporterSet, ModuleGraph,
};
use regex::Regex;

fn module(layer: usize, i: usize) -> String {
    format!("./src/layer-{}/mod-{}.js", layer, i)
}

/// Create a layered graph with `layers` layers of `width` modules each
fn create_layered_graph(layers: usize, width: usize) -> ModuleGraph {
    let mut adjacency = AdjacencyMap::new();
    let mut chunks = ChunkMap::new();

    for layer in 0..layers {
        let chunk_name = format!("{}.chunk.js", layer % 4);
        for i in 0..width {
            let name = module(layer, i);
            chunks.insert(name.clone(), chunk_name.clone());

            if layer + 1 == layers {
                continue;
            }
            let importers: ImporterSet = (0..width)
                .map(|j| {
                    let importer = module(layer + 1, j);
                    let record = ImporterRecord {
                        name: importer.clone(),
                        user_request: Some(format!("./mod-{}", i)),
                        chunk_name: chunk_name.clone(),
                    };
                    (importer, record)
                })
                .collect();
            adjacency.insert(name, importers);
        }
    }

    ModuleGraph::from_parts(adjacency, chunks)
}

/// Benchmark resolving the importer tree at increasing depths
fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let graph = create_layered_graph(8, 3);
    let root = module(0, 0);

    for depth in [2, 4, 6].iter() {
        group.bench_with_input(BenchmarkId::new("depth", depth), depth, |b, &depth| {
            b.iter(|| black_box(resolve(&root, depth, &graph, None)));
        });
    }

    group.finish();
}

/// Benchmark trimming a resolved tree
fn bench_trim(c: &mut Criterion) {
    let mut group = c.benchmark_group("trim");
    let graph = create_layered_graph(8, 3);
    let pattern = Regex::new("layer-3").unwrap();

    for depth in [4, 6].iter() {
        let tree = resolve(&module(0, 0), *depth, &graph, None);

        group.bench_with_input(BenchmarkId::new("depth", depth), &tree, |b, tree| {
            b.iter(|| {
                let mut tree = tree.clone();
                trim(&mut tree, Some(&pattern), graph.chunks());
                black_box(tree)
            });
        });
    }

    group.finish();
}

/// Benchmark enumerating every chain between the first and last layer
fn bench_find_chains(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_chains");

    for layers in [4, 6, 8].iter() {
        let graph = create_layered_graph(*layers, 3);
        let from = module(0, 0);
        let to = module(layers - 1, 0);

        group.bench_with_input(BenchmarkId::new("layers", layers), layers, |b, _| {
            b.iter(|| black_box(find_chains(&from, &to, 20, &graph)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_trim, bench_find_chains);
criterion_main!(benches);
