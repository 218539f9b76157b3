//! Property tests: traversal of random (often cyclic) type graphs terminates,
//! is deterministic, and produces well-formed paths.

use proptest::prelude::*;
use qa_common::{NoteKind, RecursionLimit};
use qa_solver::{AccessPath, PrimitiveKind, PropertyTraverser, TypeId, TypeStore, traverse};
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Type of one generated property. Indices refer to generated classes.
#[derive(Clone, Debug)]
enum Shape {
    Scalar(usize),
    Object(usize),
    List(usize),
    Map(usize),
    Array(usize),
}

const SCALARS: [TypeId; 5] = [
    TypeId::INT32,
    TypeId::STRING,
    TypeId::BOOLEAN,
    TypeId::DATE_TIME,
    TypeId::DOUBLE,
];

fn arb_shape(classes: usize) -> impl Strategy<Value = Shape> {
    prop_oneof![
        (0..SCALARS.len()).prop_map(Shape::Scalar),
        (0..classes).prop_map(Shape::Object),
        (0..classes).prop_map(Shape::List),
        (0..classes).prop_map(Shape::Map),
        (0..classes).prop_map(Shape::Array),
    ]
}

/// Up to four classes with up to three properties each.
fn arb_graph() -> impl Strategy<Value = Vec<Vec<Shape>>> {
    (1usize..=4).prop_flat_map(|classes| {
        prop::collection::vec(prop::collection::vec(arb_shape(classes), 0..=3), classes)
    })
}

/// Build the graph; the first class is the root.
fn build(graph: &[Vec<Shape>]) -> (TypeStore, TypeId) {
    let mut store = TypeStore::new();
    let ids: Vec<TypeId> = (0..graph.len())
        .map(|i| store.declare_class(&format!("T{i}")))
        .collect();
    for (&owner, properties) in ids.iter().zip(graph) {
        for (i, shape) in properties.iter().enumerate() {
            let type_id = match *shape {
                Shape::Scalar(k) => SCALARS[k],
                Shape::Object(t) => ids[t],
                Shape::List(t) => store.list_of(ids[t]),
                Shape::Map(t) => store.dictionary_of(TypeId::STRING, ids[t]),
                Shape::Array(t) => store.array_of(ids[t]),
            };
            store.add_property(owner, &format!("P{i}"), type_id);
        }
    }
    (store, ids[0])
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Two traversals of the same graph are identical.
    #[test]
    fn traversal_is_deterministic(graph in arb_graph()) {
        let (store, root) = build(&graph);
        let first = traverse(&store, root, "model");
        let second = traverse(&store, root, "model");
        prop_assert_eq!(first, second);
    }

    /// Every leaf path starts at the root, parses back, and appears once.
    #[test]
    fn leaf_paths_are_well_formed_and_unique(graph in arb_graph()) {
        let (store, root) = build(&graph);
        let traversal = traverse(&store, root, "model");
        let mut seen = HashSet::new();
        for property in &traversal.properties {
            let name = property.name();
            prop_assert_eq!(property.path.root_name(), "model");
            let parsed = AccessPath::parse(&name);
            prop_assert_eq!(parsed.as_ref(), Ok(&property.path));
            prop_assert!(seen.insert(name.clone()), "duplicate path {}", name);
        }
    }

    /// Count accessors are always integers.
    #[test]
    fn counts_are_integers(graph in arb_graph()) {
        let (store, root) = build(&graph);
        let traversal = traverse(&store, root, "model");
        for property in &traversal.properties {
            let name = property.name();
            if name.ends_with(".Count") || name.ends_with(".Count()") {
                prop_assert_eq!(property.kind, PrimitiveKind::Integer);
            }
        }
    }

    /// Splitting top-level properties across threads does not change output.
    #[test]
    fn parallel_matches_sequential(graph in arb_graph()) {
        let (store, root) = build(&graph);
        let traverser = PropertyTraverser::new(&store);
        let sequential = traverser.traverse(root, "model").unwrap();
        let parallel = traverser.traverse_parallel(root, "model").unwrap();
        // Per-branch budgets legitimately diverge once a budget runs out.
        if !sequential.has_note(NoteKind::RecursionLimitExceeded(RecursionLimit::Budget)) {
            prop_assert_eq!(sequential, parallel);
        }
    }
}
