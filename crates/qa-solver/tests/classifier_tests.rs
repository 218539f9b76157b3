//! Classification rules as seen through the public API.

use qa_solver::type_classifier::{MAP_CONTAINERS, SEQUENCE_CONTAINERS};
use qa_solver::{PrimitiveKind, TypeClassification, TypeId, TypeStore, classify_type};

#[test]
fn test_scalars_with_literals() {
    let store = TypeStore::new();
    let cases = [
        (TypeId::STRING, PrimitiveKind::String),
        (TypeId::INT16, PrimitiveKind::Integer),
        (TypeId::INT32, PrimitiveKind::Integer),
        (TypeId::INT64, PrimitiveKind::Integer),
        (TypeId::DATE_TIME, PrimitiveKind::DateTime),
        (TypeId::BOOLEAN, PrimitiveKind::Boolean),
    ];
    for (type_id, kind) in cases {
        assert_eq!(
            classify_type(&store, type_id),
            TypeClassification::Primitive(kind),
            "type {type_id:?}"
        );
    }
}

#[test]
fn test_other_intrinsics_are_unknown_primitives() {
    let mut store = TypeStore::new();
    let time_span = store.intrinsic("TimeSpan");
    for type_id in [
        TypeId::OBJECT,
        TypeId::DOUBLE,
        TypeId::DECIMAL,
        TypeId::GUID,
        TypeId::CHAR,
        TypeId::BYTE,
        TypeId::SINGLE,
        time_span,
    ] {
        assert_eq!(
            classify_type(&store, type_id),
            TypeClassification::Primitive(PrimitiveKind::Unknown),
            "type {type_id:?}"
        );
    }
}

#[test]
fn test_every_sequence_container_name() {
    let mut store = TypeStore::new();
    for name in SEQUENCE_CONTAINERS {
        let id = store.generic(name, &[TypeId::INT32]);
        assert_eq!(
            classify_type(&store, id),
            TypeClassification::Sequence {
                element: TypeId::INT32
            },
            "{name}"
        );
    }
}

#[test]
fn test_every_map_container_name() {
    let mut store = TypeStore::new();
    for name in MAP_CONTAINERS {
        let id = store.generic(name, &[TypeId::STRING, TypeId::BOOLEAN]);
        assert_eq!(
            classify_type(&store, id),
            TypeClassification::Map {
                key: TypeId::STRING,
                value: TypeId::BOOLEAN,
            },
            "{name}"
        );
    }
}

#[test]
fn test_container_arity_must_match() {
    let mut store = TypeStore::new();
    let two_arg_list = store.generic("List", &[TypeId::INT32, TypeId::INT32]);
    let one_arg_map = store.generic("Dictionary", &[TypeId::INT32]);
    let unknown_generic = store.generic("Lazy", &[TypeId::INT32]);
    for id in [two_arg_list, one_arg_map, unknown_generic] {
        assert_eq!(classify_type(&store, id), TypeClassification::UserObject);
    }
}

#[test]
fn test_arrays_report_their_element() {
    let mut store = TypeStore::new();
    let item = store.declare_class("Item");
    let items = store.array_of(item);
    assert_eq!(
        classify_type(&store, items),
        TypeClassification::Array {
            element: Some(item)
        }
    );
}

#[test]
fn test_enums_classify_by_base() {
    let mut store = TypeStore::new();
    let color = store.enumeration("Color");
    assert_eq!(classify_type(&store, color), TypeClassification::Enum);
}

#[test]
fn test_user_types_and_structs_are_objects() {
    let mut store = TypeStore::new();
    let class = store.declare_class("Customer");
    let point = store.declare_struct("Point");
    // User types shadowing scalar names are still scalars by name.
    let string_lookalike = store.declare_class("String");
    assert_eq!(classify_type(&store, class), TypeClassification::UserObject);
    assert_eq!(classify_type(&store, point), TypeClassification::UserObject);
    assert_eq!(
        classify_type(&store, string_lookalike),
        TypeClassification::Primitive(PrimitiveKind::String)
    );
}

#[test]
fn test_unknown_id_is_unresolved() {
    let store = TypeStore::new();
    assert_eq!(
        classify_type(&store, TypeId(123_456)),
        TypeClassification::Unresolved
    );
}
