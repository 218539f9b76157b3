//! Property graph traversal.
//!
//! Walks the public readable properties reachable from a declared variable's
//! type and records one [`ReflectedProperty`] per assertable leaf:
//!
//! | Category | Emitted |
//! |----------|---------|
//! | Primitive / Enum | the property itself |
//! | Sequence | `.Count`, then the first and last element |
//! | Array | `.Count()`, then the first and last element |
//! | Map | `.Count`, then the first and last entry's value |
//! | UserObject | nothing itself; its properties are expanded |
//!
//! Sampled elements that are user objects are expanded twice, once below
//! `FirstOrDefault()` and once below `LastOrDefault()`. Every expansion runs
//! in its own [`TraversalContext`], and types already expanded on the current
//! path are skipped, so the walk terminates on self-referential graphs.

use crate::context::TraversalContext;
use crate::db::TypeDatabase;
use crate::format::TypeFormatter;
use crate::path::{AccessPath, AccessorSuffix, COUNT, is_identifier};
use crate::recursion::{ExpansionBudget, RecursionProfile, RecursionResult};
use crate::reflected::{PrimitiveKind, ReflectedProperty};
use crate::type_classifier::{TypeClassification, classify_type};
use crate::types::{PropertyInfo, TypeId};
use indexmap::IndexMap;
use qa_common::{Atom, CancellationToken, NoteKind, RecursionLimit, Result, TraversalNote};
use rayon::prelude::*;
use rustc_hash::{FxBuildHasher, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, span, trace};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TraversalOptions {
    pub profile: RecursionProfile,
    /// Also enumerate properties declared on base types.
    pub include_inherited: bool,
}

/// Output of one traversal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Traversal {
    /// Leaves in emission order.
    pub properties: Vec<ReflectedProperty>,
    pub notes: Vec<TraversalNote>,
}

impl Traversal {
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Dotted names of all leaves, in order.
    pub fn names(&self) -> Vec<String> {
        self.properties.iter().map(ReflectedProperty::name).collect()
    }

    pub fn has_note(&self, kind: NoteKind) -> bool {
        self.notes.iter().any(|note| note.kind == kind)
    }

    fn append(&mut self, other: Traversal) {
        self.properties.extend(other.properties);
        self.notes.extend(other.notes);
    }
}

pub struct PropertyTraverser<'a> {
    db: &'a dyn TypeDatabase,
    options: TraversalOptions,
    cancellation: CancellationToken,
}

impl<'a> PropertyTraverser<'a> {
    pub fn new(db: &'a dyn TypeDatabase) -> Self {
        Self {
            db,
            options: TraversalOptions::default(),
            cancellation: CancellationToken::none(),
        }
    }

    pub fn with_options(mut self, options: TraversalOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn options(&self) -> TraversalOptions {
        self.options
    }

    /// Enumerate the assertable leaves reachable from `root`.
    ///
    /// A user-object root is expanded property by property, polling the
    /// cancellation token before each one. Any other root is treated as a
    /// single value at the path `root_name`. A `root_name` that is not an
    /// identifier yields no properties and an `UnresolvedType` note.
    pub fn traverse(&self, root: TypeId, root_name: &str) -> Result<Traversal> {
        let _span = span!(Level::DEBUG, "traverse", root = root_name).entered();
        let mut walker = Walker::new(self.db, self.options);
        let root_path = AccessPath::root(root_name);

        match self.classify_root(root, root_name) {
            TypeClassification::Unresolved => {
                walker.note(NoteKind::UnresolvedType, &root_path, root);
            }
            TypeClassification::UserObject => {
                let ctx = TraversalContext::root(root, root_path);
                for property in walker.assertable_properties(root) {
                    self.cancellation.check()?;
                    walker.visit_property(&ctx, property);
                }
            }
            classification => {
                self.cancellation.check()?;
                let ctx = TraversalContext::root(root, root_path.clone());
                walker.visit_classified(&ctx, root_path, root, classification);
            }
        }

        let traversal = walker.finish();
        debug!(
            properties = traversal.properties.len(),
            notes = traversal.notes.len(),
            "traversal complete"
        );
        Ok(traversal)
    }

    /// Like [`traverse`](Self::traverse), with top-level properties expanded
    /// on the rayon pool.
    ///
    /// Each branch owns its context chain and budget. Results are
    /// concatenated in declaration order, so the output matches `traverse`
    /// unless a budget limit triggers.
    pub fn traverse_parallel(&self, root: TypeId, root_name: &str) -> Result<Traversal> {
        if self.classify_root(root, root_name) != TypeClassification::UserObject {
            return self.traverse(root, root_name);
        }
        let _span = span!(Level::DEBUG, "traverse_parallel", root = root_name).entered();
        let root_path = AccessPath::root(root_name);
        let properties = Walker::new(self.db, self.options).assertable_properties(root);

        let branches = properties
            .par_iter()
            .map(|property| {
                self.cancellation.check()?;
                let mut walker = Walker::new(self.db, self.options);
                let ctx = TraversalContext::root(root, root_path.clone());
                walker.visit_property(&ctx, property);
                Ok(walker.finish())
            })
            .collect::<Result<Vec<Traversal>>>()?;

        let mut merged = Traversal::default();
        for branch in branches {
            merged.append(branch);
        }
        debug!(
            properties = merged.properties.len(),
            branches = properties.len(),
            "parallel traversal complete"
        );
        Ok(merged)
    }

    /// Paths are only well-formed below an identifier root.
    fn classify_root(&self, root: TypeId, root_name: &str) -> TypeClassification {
        if !is_identifier(root_name) {
            debug!(root = root_name, "root is not an identifier");
            return TypeClassification::Unresolved;
        }
        classify_type(self.db, root)
    }
}

/// Traverse with default options and no cancellation.
pub fn traverse(db: &dyn TypeDatabase, root: TypeId, root_name: &str) -> Traversal {
    PropertyTraverser::new(db)
        .traverse(root, root_name)
        .unwrap_or_default()
}

// =============================================================================
// Walker
// =============================================================================

/// Mutable state of one traversal branch: output buffers and the budget.
/// Everything path-related lives in the contexts.
struct Walker<'a> {
    db: &'a dyn TypeDatabase,
    options: TraversalOptions,
    budget: ExpansionBudget,
    properties: Vec<ReflectedProperty>,
    notes: Vec<TraversalNote>,
    budget_noted: bool,
}

impl<'a> Walker<'a> {
    fn new(db: &'a dyn TypeDatabase, options: TraversalOptions) -> Self {
        Self {
            db,
            options,
            budget: ExpansionBudget::with_profile(options.profile),
            properties: Vec::new(),
            notes: Vec::new(),
            budget_noted: false,
        }
    }

    fn finish(self) -> Traversal {
        Traversal {
            properties: self.properties,
            notes: self.notes,
        }
    }

    fn visit_property(&mut self, ctx: &TraversalContext<'_>, property: &PropertyInfo) {
        let path = ctx.path().member(self.db.resolve_atom(property.name));
        let classification = classify_type(self.db, property.type_id);
        self.visit_classified(ctx, path, property.type_id, classification);
    }

    /// Handle a value of `type_id` found at `path`.
    fn visit_classified(
        &mut self,
        ctx: &TraversalContext<'_>,
        path: AccessPath,
        type_id: TypeId,
        classification: TypeClassification,
    ) {
        match classification {
            TypeClassification::Unresolved => {
                self.note(NoteKind::UnresolvedType, &path, type_id);
            }
            TypeClassification::Primitive(kind) => {
                if kind == PrimitiveKind::Unknown {
                    self.note(NoteKind::UnclassifiablePrimitive, &path, type_id);
                }
                self.emit(path, kind, type_id);
            }
            TypeClassification::Enum => self.emit(path, PrimitiveKind::Enum, type_id),
            TypeClassification::Sequence { element } => {
                self.emit(path.member(COUNT), PrimitiveKind::Integer, type_id);
                self.sample(ctx, &path, element, AccessorSuffix::ELEMENTS);
            }
            TypeClassification::Array { element } => {
                self.emit(path.invoke(COUNT), PrimitiveKind::Integer, type_id);
                match element {
                    Some(element) => self.sample(ctx, &path, element, AccessorSuffix::ELEMENTS),
                    None => self.note(NoteKind::UnresolvedType, &path, type_id),
                }
            }
            TypeClassification::Map { value, .. } => {
                self.emit(path.member(COUNT), PrimitiveKind::Integer, type_id);
                self.sample(ctx, &path, value, AccessorSuffix::ENTRY_VALUES);
            }
            TypeClassification::UserObject => self.expand(ctx, type_id, path),
        }
    }

    /// Visit the first and last element (or entry value) of a container.
    fn sample(
        &mut self,
        ctx: &TraversalContext<'_>,
        container: &AccessPath,
        element: TypeId,
        suffixes: [AccessorSuffix; 2],
    ) {
        let classification = classify_type(self.db, element);
        if classification == TypeClassification::Unresolved {
            self.note(NoteKind::UnresolvedType, container, element);
            return;
        }
        for suffix in suffixes {
            self.visit_classified(ctx, container.sampled(suffix), element, classification);
        }
    }

    /// Expand a user object's properties below `path`.
    fn expand(&mut self, ctx: &TraversalContext<'_>, type_id: TypeId, path: AccessPath) {
        match ctx.try_enter(type_id, self.options.profile, &mut self.budget) {
            RecursionResult::Entered => {
                let child = ctx.child(type_id, path);
                trace!(path = %child.path(), depth = child.depth(), "expanding");
                for property in self.assertable_properties(type_id) {
                    self.visit_property(&child, property);
                }
            }
            denied => {
                if let Some(limit) = denied.limit() {
                    self.note_limit(limit, &path, type_id);
                }
            }
        }
    }

    /// Public readable instance properties of `type_id`, in declaration
    /// order.
    ///
    /// With `include_inherited`, base-type properties come first (base-most
    /// first) and a derived property replaces a base property of the same
    /// name at the base property's position.
    fn assertable_properties(&self, type_id: TypeId) -> Vec<&'a PropertyInfo> {
        let db = self.db;
        let Some(data) = db.lookup(type_id) else {
            return Vec::new();
        };
        if !self.options.include_inherited {
            return data
                .properties
                .iter()
                .filter(|p| p.is_assertable())
                .collect();
        }

        let mut chain = vec![data];
        let mut seen = FxHashSet::default();
        seen.insert(type_id);
        let mut base = data.base;
        while let Some(base_id) = base {
            if !seen.insert(base_id) {
                break;
            }
            let Some(base_data) = db.lookup(base_id) else {
                break;
            };
            // Object, ValueType and other framework roots
            if base_data.is_intrinsic() || base_data.base.is_none() {
                break;
            }
            chain.push(base_data);
            base = base_data.base;
        }

        let mut merged: IndexMap<Atom, &'a PropertyInfo, FxBuildHasher> = IndexMap::default();
        for declaring in chain.iter().rev() {
            for property in declaring.properties.iter().filter(|p| p.is_assertable()) {
                merged.insert(property.name, property);
            }
        }
        merged.into_values().collect()
    }

    fn emit(&mut self, path: AccessPath, kind: PrimitiveKind, type_id: TypeId) {
        if !self.budget.may_emit(self.properties.len()) {
            self.note_limit(RecursionLimit::Budget, &path, type_id);
            return;
        }
        trace!(path = %path, kind = kind.as_str(), "leaf");
        self.properties.push(ReflectedProperty::new(path, kind));
    }

    /// Budget notes are recorded once per branch; cycle and depth notes at
    /// every place they occur.
    fn note_limit(&mut self, limit: RecursionLimit, path: &AccessPath, type_id: TypeId) {
        if limit == RecursionLimit::Budget {
            if self.budget_noted {
                return;
            }
            self.budget_noted = true;
        }
        self.note(NoteKind::RecursionLimitExceeded(limit), path, type_id);
    }

    fn note(&mut self, kind: NoteKind, path: &AccessPath, type_id: TypeId) {
        let type_name = TypeFormatter::new(self.db).format(type_id);
        let note = TraversalNote::new(kind, path.to_string(), type_name);
        debug!(code = kind.code(), "{note}");
        self.notes.push(note);
    }
}

#[cfg(test)]
#[path = "tests/traverse_tests.rs"]
mod tests;
