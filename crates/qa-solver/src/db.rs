//! Read-only view of the host's type system.

use crate::types::{TypeData, TypeId};
use qa_common::Atom;

/// The traverser only ever reads types through this trait.
///
/// Implementations must be `Sync` so independent top-level properties can be
/// expanded in parallel.
pub trait TypeDatabase: Sync {
    /// `None` when the host cannot resolve the id.
    fn lookup(&self, type_id: TypeId) -> Option<&TypeData>;

    fn resolve_atom(&self, atom: Atom) -> &str;

    /// Simple name of a type, or `""` when unresolved.
    fn type_name(&self, type_id: TypeId) -> &str {
        self.lookup(type_id)
            .map(|data| self.resolve_atom(data.name))
            .unwrap_or("")
    }

    /// Simple name of the direct base type, if any.
    fn base_type_name(&self, type_id: TypeId) -> Option<&str> {
        let base = self.lookup(type_id)?.base?;
        self.lookup(base).map(|data| self.resolve_atom(data.name))
    }
}
