//! In-memory type store.
//!
//! `TypeStore` is the reference [`TypeDatabase`]: hosts (and tests) describe
//! their types through it. Built-in types occupy the fixed ids declared on
//! [`TypeId`]; constructed generics and arrays are interned so that
//! `List<Int32>` always maps to the same id.

use crate::db::TypeDatabase;
use crate::types::{PropertyInfo, TypeData, TypeFlags, TypeId};
use qa_common::{Atom, Interner};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::trace;

pub const LIST: &str = "List";
pub const DICTIONARY: &str = "Dictionary";

#[derive(Clone, Debug)]
pub struct TypeStore {
    names: Interner,
    types: Vec<TypeData>,
    /// (generic name, type arguments) -> constructed type
    generics: FxHashMap<(Atom, SmallVec<[TypeId; 2]>), TypeId>,
    /// element type -> array type
    arrays: FxHashMap<TypeId, TypeId>,
}

impl TypeStore {
    pub fn new() -> Self {
        let mut store = TypeStore {
            names: Interner::new(),
            types: Vec::with_capacity(64),
            generics: FxHashMap::default(),
            arrays: FxHashMap::default(),
        };
        store.register_builtins();
        store
    }

    fn register_builtins(&mut self) {
        let builtins: [(TypeId, &str, Option<TypeId>); TypeId::FIRST_USER as usize] = [
            (TypeId::OBJECT, "Object", None),
            (TypeId::VALUE_TYPE, "ValueType", Some(TypeId::OBJECT)),
            (TypeId::ARRAY, "Array", Some(TypeId::OBJECT)),
            (TypeId::ENUM, "Enum", Some(TypeId::VALUE_TYPE)),
            (TypeId::STRING, "String", Some(TypeId::OBJECT)),
            (TypeId::INT16, "Int16", Some(TypeId::VALUE_TYPE)),
            (TypeId::INT32, "Int32", Some(TypeId::VALUE_TYPE)),
            (TypeId::INT64, "Int64", Some(TypeId::VALUE_TYPE)),
            (TypeId::DATE_TIME, "DateTime", Some(TypeId::VALUE_TYPE)),
            (TypeId::BOOLEAN, "Boolean", Some(TypeId::VALUE_TYPE)),
            (TypeId::DOUBLE, "Double", Some(TypeId::VALUE_TYPE)),
            (TypeId::DECIMAL, "Decimal", Some(TypeId::VALUE_TYPE)),
            (TypeId::GUID, "Guid", Some(TypeId::VALUE_TYPE)),
            (TypeId::CHAR, "Char", Some(TypeId::VALUE_TYPE)),
            (TypeId::BYTE, "Byte", Some(TypeId::VALUE_TYPE)),
            (TypeId::SINGLE, "Single", Some(TypeId::VALUE_TYPE)),
        ];
        for (id, name, base) in builtins {
            debug_assert_eq!(id.0 as usize, self.types.len());
            let mut data = TypeData::named(self.names.intern(name), base);
            data.flags |= TypeFlags::INTRINSIC;
            self.types.push(data);
        }
    }

    fn push(&mut self, data: TypeData) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(data);
        id
    }

    /// Number of registered types, built-ins included.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    /// Declare a class deriving from `Object` with no properties yet.
    ///
    /// Declaring first and filling in properties later is how self- and
    /// mutually-referential types are built.
    pub fn declare_class(&mut self, name: &str) -> TypeId {
        self.derive_class(name, TypeId::OBJECT)
    }

    pub fn derive_class(&mut self, name: &str, base: TypeId) -> TypeId {
        let name = self.names.intern(name);
        let id = self.push(TypeData::named(name, Some(base)));
        trace!(type_id = id.0, base = base.0, "declared class");
        id
    }

    /// Declare a user struct (base `ValueType`).
    pub fn declare_struct(&mut self, name: &str) -> TypeId {
        self.derive_class(name, TypeId::VALUE_TYPE)
    }

    /// Declare and populate a class in one step.
    pub fn class(&mut self, name: &str, properties: &[(&str, TypeId)]) -> TypeId {
        let id = self.declare_class(name);
        for &(prop_name, type_id) in properties {
            self.add_property(id, prop_name, type_id);
        }
        id
    }

    pub fn enumeration(&mut self, name: &str) -> TypeId {
        self.derive_class(name, TypeId::ENUM)
    }

    /// Register an extra built-in scalar (e.g. `TimeSpan`, `Uri`).
    pub fn intrinsic(&mut self, name: &str) -> TypeId {
        let name = self.names.intern(name);
        let mut data = TypeData::named(name, Some(TypeId::VALUE_TYPE));
        data.flags |= TypeFlags::INTRINSIC;
        self.push(data)
    }

    /// Append a public readable instance property.
    pub fn add_property(&mut self, owner: TypeId, name: &str, type_id: TypeId) {
        let name = self.names.intern(name);
        self.push_property(owner, PropertyInfo::public(name, type_id));
    }

    /// Append an arbitrary property. Unknown owners are ignored.
    pub fn push_property(&mut self, owner: TypeId, property: PropertyInfo) {
        if let Some(data) = self.types.get_mut(owner.0 as usize) {
            data.properties.push(property);
        }
    }

    /// Build a property descriptor without attaching it.
    pub fn property(&mut self, name: &str, type_id: TypeId) -> PropertyInfo {
        PropertyInfo::public(self.names.intern(name), type_id)
    }

    // =========================================================================
    // Constructed types
    // =========================================================================

    /// Constructed generic type, interned by name and arguments.
    pub fn generic(&mut self, name: &str, arguments: &[TypeId]) -> TypeId {
        let name = self.names.intern(name);
        let key: SmallVec<[TypeId; 2]> = arguments.iter().copied().collect();
        if let Some(&id) = self.generics.get(&(name, key.clone())) {
            return id;
        }
        let mut data = TypeData::named(name, Some(TypeId::OBJECT));
        data.flags |= TypeFlags::GENERIC;
        data.type_arguments = key.clone();
        let id = self.push(data);
        self.generics.insert((name, key), id);
        id
    }

    pub fn list_of(&mut self, element: TypeId) -> TypeId {
        self.generic(LIST, &[element])
    }

    pub fn dictionary_of(&mut self, key: TypeId, value: TypeId) -> TypeId {
        self.generic(DICTIONARY, &[key, value])
    }

    /// `element[]`. Array types have no simple name, as in most semantic models.
    pub fn array_of(&mut self, element: TypeId) -> TypeId {
        if let Some(&id) = self.arrays.get(&element) {
            return id;
        }
        let mut data = TypeData::named(Atom::NONE, Some(TypeId::ARRAY));
        data.flags |= TypeFlags::ARRAY;
        data.element_type = Some(element);
        let id = self.push(data);
        self.arrays.insert(element, id);
        id
    }
}

impl Default for TypeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeDatabase for TypeStore {
    fn lookup(&self, type_id: TypeId) -> Option<&TypeData> {
        self.types.get(type_id.0 as usize)
    }

    fn resolve_atom(&self, atom: Atom) -> &str {
        self.names.resolve(atom)
    }
}
