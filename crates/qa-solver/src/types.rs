//! Host type model.
//!
//! A `TypeId` is an opaque handle into the host's type system. The data behind
//! it mirrors what a semantic model exposes for a named type: simple name,
//! base type, array element, generic type arguments and declared properties.

use bitflags::bitflags;
use qa_common::Atom;
use serde::Serialize;
use smallvec::SmallVec;

/// Handle to a type owned by a [`TypeDatabase`](crate::TypeDatabase).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TypeId(pub u32);

impl TypeId {
    // Roots of the hierarchy
    pub const OBJECT: TypeId = TypeId(0);
    pub const VALUE_TYPE: TypeId = TypeId(1);
    pub const ARRAY: TypeId = TypeId(2);
    pub const ENUM: TypeId = TypeId(3);

    // Scalars with a dedicated literal
    pub const STRING: TypeId = TypeId(4);
    pub const INT16: TypeId = TypeId(5);
    pub const INT32: TypeId = TypeId(6);
    pub const INT64: TypeId = TypeId(7);
    pub const DATE_TIME: TypeId = TypeId(8);
    pub const BOOLEAN: TypeId = TypeId(9);

    // Scalars without one
    pub const DOUBLE: TypeId = TypeId(10);
    pub const DECIMAL: TypeId = TypeId(11);
    pub const GUID: TypeId = TypeId(12);
    pub const CHAR: TypeId = TypeId(13);
    pub const BYTE: TypeId = TypeId(14);
    pub const SINGLE: TypeId = TypeId(15);

    /// First id handed out for host-declared types.
    pub const FIRST_USER: u32 = 16;
}

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TypeFlags: u8 {
        /// `T[]`; the element type is in `TypeData::element_type`.
        const ARRAY = 1 << 0;
        /// Built-in scalar with no properties worth asserting on.
        const INTRINSIC = 1 << 1;
        /// Constructed generic type (`List<T>`, `Dictionary<K, V>`).
        const GENERIC = 1 << 2;
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Visibility {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
}

/// A property declared on exactly one type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertyInfo {
    pub name: Atom,
    pub type_id: TypeId,
    pub visibility: Visibility,
    /// Has an accessible getter.
    pub readable: bool,
    pub is_static: bool,
    /// `this[...]` indexers surface as properties in most semantic models.
    pub is_indexer: bool,
}

impl PropertyInfo {
    /// Public, readable instance property.
    pub fn public(name: Atom, type_id: TypeId) -> Self {
        Self {
            name,
            type_id,
            visibility: Visibility::Public,
            readable: true,
            is_static: false,
            is_indexer: false,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn write_only(mut self) -> Self {
        self.readable = false;
        self
    }

    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn as_indexer(mut self) -> Self {
        self.is_indexer = true;
        self
    }

    /// Whether an assertion can read this property from an instance.
    #[inline]
    pub fn is_assertable(&self) -> bool {
        self.visibility == Visibility::Public && self.readable && !self.is_static && !self.is_indexer
    }
}

/// Everything the traverser reads about one type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeData {
    /// Simple name without namespace or type arguments (`List`, not
    /// `System.Collections.Generic.List<Int32>`).
    pub name: Atom,
    /// Direct base type; `None` only for `Object` and interfaces.
    pub base: Option<TypeId>,
    pub flags: TypeFlags,
    /// Generic type arguments in declaration order.
    pub type_arguments: SmallVec<[TypeId; 2]>,
    pub element_type: Option<TypeId>,
    /// Declared properties in declaration order.
    pub properties: Vec<PropertyInfo>,
}

impl TypeData {
    pub fn named(name: Atom, base: Option<TypeId>) -> Self {
        Self {
            name,
            base,
            flags: TypeFlags::empty(),
            type_arguments: SmallVec::new(),
            element_type: None,
            properties: Vec::new(),
        }
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        self.flags.contains(TypeFlags::ARRAY)
    }

    #[inline]
    pub fn is_intrinsic(&self) -> bool {
        self.flags.contains(TypeFlags::INTRINSIC)
    }

    #[inline]
    pub fn is_generic(&self) -> bool {
        self.flags.contains(TypeFlags::GENERIC)
    }
}
