//! Traversal and synthesis benchmarks.
//!
//! Measures how the property walk scales with model width and nesting, and
//! what the parallel top-level split buys on wide models.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quick_asserts::{AssertionSynthesizer, PropertyTraverser, TypeId, TypeStore};

/// Root with `width` properties, each a chain of `depth` nested classes
/// ending in a class with a list of scalars and a few primitives.
fn wide_deep_model(width: usize, depth: usize) -> (TypeStore, TypeId) {
    let mut store = TypeStore::new();
    let scores = store.list_of(TypeId::INT32);
    let root = store.declare_class("Root");
    for w in 0..width {
        let mut current = store.class(
            &format!("Leaf{w}"),
            &[
                ("Id", TypeId::INT64),
                ("Name", TypeId::STRING),
                ("Created", TypeId::DATE_TIME),
                ("Scores", scores),
            ],
        );
        for d in 0..depth {
            current = store.class(
                &format!("Level{w}_{d}"),
                &[("Child", current), ("Active", TypeId::BOOLEAN)],
            );
        }
        store.add_property(root, &format!("Branch{w}"), current);
    }
    (store, root)
}

/// A self-referential tree node sampled through a list.
fn recursive_model() -> (TypeStore, TypeId) {
    let mut store = TypeStore::new();
    let node = store.declare_class("Node");
    let children = store.list_of(node);
    let meta = store.class("Meta", &[("Owner", TypeId::STRING), ("Parent", node)]);
    store.add_property(node, "Id", TypeId::INT32);
    store.add_property(node, "Children", children);
    store.add_property(node, "Meta", meta);
    (store, node)
}

fn bench_traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse");
    for &(width, depth) in &[(4, 2), (16, 4), (64, 8)] {
        let (store, root) = wide_deep_model(width, depth);
        group.throughput(Throughput::Elements(width as u64));
        group.bench_with_input(
            BenchmarkId::new("sequential", format!("{width}x{depth}")),
            &root,
            |b, &root| {
                let traverser = PropertyTraverser::new(&store);
                b.iter(|| black_box(traverser.traverse(root, "model")))
            },
        );
        group.bench_with_input(
            BenchmarkId::new("parallel", format!("{width}x{depth}")),
            &root,
            |b, &root| {
                let traverser = PropertyTraverser::new(&store);
                b.iter(|| black_box(traverser.traverse_parallel(root, "model")))
            },
        );
    }
    group.finish();
}

fn bench_recursive(c: &mut Criterion) {
    let (store, root) = recursive_model();
    c.bench_function("traverse_recursive", |b| {
        let traverser = PropertyTraverser::new(&store);
        b.iter(|| black_box(traverser.traverse(root, "tree")))
    });
}

fn bench_synthesize(c: &mut Criterion) {
    let (store, root) = wide_deep_model(64, 4);
    let traversal = quick_asserts::traverse(&store, root, "model");
    let synthesizer = AssertionSynthesizer::new(2026);
    c.bench_function("synthesize_wide", |b| {
        b.iter(|| black_box(synthesizer.synthesize(&traversal.properties)))
    });
}

criterion_group!(benches, bench_traverse, bench_recursive, bench_synthesize);
criterion_main!(benches);
