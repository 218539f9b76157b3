//! Type Classification
//!
//! Every type reached during traversal is classified exactly once into a
//! closed set of categories, and the traverser dispatches on the result with
//! an exhaustive `match`. All name-based recognition lives here.
//!
//! # Rules, in priority order
//!
//! 1. Generic sequence containers (`List<T>`, ...) and map containers
//!    (`Dictionary<K, V>`, ...), recognised by simple name and arity
//! 2. Arrays (base type `Array`, or flagged as an array by the host)
//! 3. Enums (base type `Enum`)
//! 4. Scalars with a dedicated literal (`String`, `Int16/32/64`, `DateTime`,
//!    `Boolean`)
//! 5. Other host intrinsics (`Double`, `Guid`, `Object`, ...) as
//!    `Primitive(Unknown)`
//! 6. Everything else is a user object and gets expanded

use crate::db::TypeDatabase;
use crate::reflected::PrimitiveKind;
use crate::types::TypeId;

/// Generic containers whose single type argument is the element type.
/// All of them expose a `Count` property.
pub const SEQUENCE_CONTAINERS: &[&str] = &[
    "List",
    "IList",
    "ICollection",
    "IReadOnlyList",
    "IReadOnlyCollection",
    "Collection",
    "ObservableCollection",
    "ReadOnlyCollection",
    "HashSet",
    "SortedSet",
    "LinkedList",
    "Queue",
    "Stack",
];

/// Generic containers with `<TKey, TValue>` arguments.
pub const MAP_CONTAINERS: &[&str] = &[
    "Dictionary",
    "IDictionary",
    "IReadOnlyDictionary",
    "SortedDictionary",
    "SortedList",
    "ConcurrentDictionary",
    "ReadOnlyDictionary",
];

const ARRAY_BASE: &str = "Array";
const ENUM_BASE: &str = "Enum";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeClassification {
    /// Scalar leaf.
    Primitive(PrimitiveKind),
    /// Leaf asserted through its underlying integer.
    Enum,
    /// `T[]`. The host may fail to report the element type.
    Array { element: Option<TypeId> },
    /// List-like container with a `Count` property.
    Sequence { element: TypeId },
    /// Dictionary-like container; only the value type is ever inspected.
    Map { key: TypeId, value: TypeId },
    /// Expanded through its own public properties.
    UserObject,
    /// The host could not resolve the id.
    Unresolved,
}

/// Classify a type into its traversal category.
pub fn classify_type(db: &dyn TypeDatabase, type_id: TypeId) -> TypeClassification {
    let Some(data) = db.lookup(type_id) else {
        return TypeClassification::Unresolved;
    };
    let name = db.resolve_atom(data.name);

    match data.type_arguments.as_slice() {
        [element] if SEQUENCE_CONTAINERS.contains(&name) => {
            return TypeClassification::Sequence { element: *element };
        }
        [key, value] if MAP_CONTAINERS.contains(&name) => {
            return TypeClassification::Map {
                key: *key,
                value: *value,
            };
        }
        _ => {}
    }

    let base_name = db.base_type_name(type_id);
    if data.is_array() || base_name == Some(ARRAY_BASE) {
        return TypeClassification::Array {
            element: data.element_type,
        };
    }
    if base_name == Some(ENUM_BASE) {
        return TypeClassification::Enum;
    }
    if let Some(kind) = PrimitiveKind::from_type_name(name) {
        return TypeClassification::Primitive(kind);
    }
    if data.is_intrinsic() {
        return TypeClassification::Primitive(PrimitiveKind::Unknown);
    }
    TypeClassification::UserObject
}
