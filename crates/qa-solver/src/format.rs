//! Display names for types, used in notes and logs.

use crate::db::TypeDatabase;
use crate::types::TypeId;

/// Type arguments nested deeper than this print as `...`.
const MAX_FORMAT_DEPTH: u32 = 6;

/// Prints types in C# syntax: `List<Int32>`, `Item[]`,
/// `Dictionary<String, Item>`.
pub struct TypeFormatter<'a> {
    db: &'a dyn TypeDatabase,
}

impl<'a> TypeFormatter<'a> {
    pub fn new(db: &'a dyn TypeDatabase) -> Self {
        Self { db }
    }

    pub fn format(&self, type_id: TypeId) -> String {
        let mut out = String::new();
        self.write_type(&mut out, type_id, 0);
        out
    }

    fn write_type(&self, out: &mut String, type_id: TypeId, depth: u32) {
        if depth > MAX_FORMAT_DEPTH {
            out.push_str("...");
            return;
        }
        let Some(data) = self.db.lookup(type_id) else {
            out.push_str("<unresolved>");
            return;
        };

        if data.is_array() {
            match data.element_type {
                Some(element) => self.write_type(out, element, depth + 1),
                None => out.push('?'),
            }
            out.push_str("[]");
            return;
        }

        out.push_str(self.db.resolve_atom(data.name));
        if !data.type_arguments.is_empty() {
            out.push('<');
            for (i, &arg) in data.type_arguments.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                self.write_type(out, arg, depth + 1);
            }
            out.push('>');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TypeStore;

    #[test]
    fn formats_constructed_types() {
        let mut store = TypeStore::new();
        let item = store.declare_class("Item");
        let list = store.list_of(item);
        let map = store.dictionary_of(TypeId::STRING, list);
        let array = store.array_of(TypeId::INT32);
        let formatter = TypeFormatter::new(&store);
        assert_eq!(formatter.format(list), "List<Item>");
        assert_eq!(formatter.format(map), "Dictionary<String, List<Item>>");
        assert_eq!(formatter.format(array), "Int32[]");
        assert_eq!(formatter.format(TypeId(4_000)), "<unresolved>");
    }
}
