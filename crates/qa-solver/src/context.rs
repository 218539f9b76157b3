//! Per-frame traversal context.
//!
//! Each object expansion gets its own `TraversalContext` that borrows its
//! parent frame. The path prefix (including any `FirstOrDefault()` sample it
//! ends in) is a value of the frame, so a branch can never leak state into
//! its siblings, and the parent chain doubles as the set of types on the
//! active recursion path.

use crate::path::AccessPath;
use crate::recursion::{ExpansionBudget, RecursionProfile, RecursionResult};
use crate::types::TypeId;

#[derive(Debug)]
pub struct TraversalContext<'p> {
    /// Path to the object being expanded; member paths extend it.
    path: AccessPath,
    type_id: TypeId,
    /// 0 for the root.
    depth: u32,
    parent: Option<&'p TraversalContext<'p>>,
}

impl<'p> TraversalContext<'p> {
    pub fn root(type_id: TypeId, path: AccessPath) -> TraversalContext<'static> {
        TraversalContext {
            path,
            type_id,
            depth: 0,
            parent: None,
        }
    }

    /// Frame for expanding `type_id` at `path`.
    pub fn child<'c>(&'c self, type_id: TypeId, path: AccessPath) -> TraversalContext<'c> {
        TraversalContext {
            path,
            type_id,
            depth: self.depth + 1,
            parent: Some(self),
        }
    }

    pub fn path(&self) -> &AccessPath {
        &self.path
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// This frame followed by every enclosing frame up to the root.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }

    /// Whether `type_id` is being expanded by this frame or an enclosing one.
    pub fn is_on_path(&self, type_id: TypeId) -> bool {
        self.ancestors().any(|ctx| ctx.type_id == type_id)
    }

    /// Decide whether `type_id` may be expanded below this frame.
    ///
    /// The budget is only charged when the expansion is allowed.
    pub fn try_enter(
        &self,
        type_id: TypeId,
        profile: RecursionProfile,
        budget: &mut ExpansionBudget,
    ) -> RecursionResult {
        if self.is_on_path(type_id) {
            return RecursionResult::Cycle;
        }
        if self.depth + 1 > profile.max_depth() {
            return RecursionResult::DepthExceeded;
        }
        if budget.is_exhausted() || !budget.try_expand() {
            return RecursionResult::BudgetExceeded;
        }
        RecursionResult::Entered
    }
}

/// Iterator over a frame and its enclosing frames.
pub struct Ancestors<'a> {
    next: Option<&'a TraversalContext<'a>>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a TraversalContext<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let ctx = self.next?;
        self.next = ctx.parent;
        Some(ctx)
    }
}
