//! Errors, traversal notes and the code-fix diagnostic descriptor.
//!
//! Generation is best-effort: irregular type shapes become [`TraversalNote`]s
//! and never abort a run. The only errors that reach the caller are
//! cancellation, a declaration the fix does not apply to, and bad options.

use serde::Serialize;
use std::fmt;

pub type Result<T> = std::result::Result<T, QuickAssertsError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuickAssertsError {
    /// The caller cancelled the run before the output was delivered.
    #[error("assertion generation was cancelled")]
    Cancelled,

    /// The declaration is not a candidate for generated assertions.
    #[error("cannot create assertions here: {reason}")]
    NotApplicable { reason: String },

    /// Fix options could not be parsed.
    #[error("invalid quick-asserts options: {message}")]
    Config { message: String },
}

// =============================================================================
// Traversal notes
// =============================================================================

/// Which recursion bound stopped a branch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RecursionLimit {
    /// The type is already being expanded further up the current path.
    Cycle,
    /// Nesting went past the profile's depth.
    Depth,
    /// The traversal spent its expansion or output budget.
    Budget,
}

/// Non-fatal finding recorded while walking a type graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NoteKind {
    /// The host could not resolve a type; nothing was emitted for it.
    UnresolvedType,
    /// A branch was cut short.
    RecursionLimitExceeded(RecursionLimit),
    /// A scalar with no dedicated literal; asserted against `null`.
    UnclassifiablePrimitive,
}

impl NoteKind {
    /// Stable code for logs and tooling.
    pub const fn code(self) -> u32 {
        match self {
            NoteKind::UnresolvedType => 1001,
            NoteKind::RecursionLimitExceeded(RecursionLimit::Cycle) => 1002,
            NoteKind::RecursionLimitExceeded(RecursionLimit::Depth) => 1003,
            NoteKind::RecursionLimitExceeded(RecursionLimit::Budget) => 1004,
            NoteKind::UnclassifiablePrimitive => 1005,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            NoteKind::UnresolvedType => "Type could not be resolved",
            NoteKind::RecursionLimitExceeded(RecursionLimit::Cycle) => {
                "Type is already expanded on this path"
            }
            NoteKind::RecursionLimitExceeded(RecursionLimit::Depth) => {
                "Maximum traversal depth reached"
            }
            NoteKind::RecursionLimitExceeded(RecursionLimit::Budget) => {
                "Traversal budget exhausted"
            }
            NoteKind::UnclassifiablePrimitive => "No literal is known for this type; using null",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraversalNote {
    pub kind: NoteKind,
    /// Access path at which the note was raised.
    pub path: String,
    /// Display name of the type involved.
    pub type_name: String,
}

impl TraversalNote {
    pub fn new(kind: NoteKind, path: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            type_name: type_name.into(),
        }
    }
}

impl fmt::Display for TraversalNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "QA{}: {} ({} at {})",
            self.kind.code(),
            self.kind.message(),
            self.type_name,
            self.path
        )
    }
}

// =============================================================================
// Diagnostic descriptor
// =============================================================================

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticSeverity {
    /// Not shown in the editor; only surfaces the code fix.
    Hidden,
    Info,
    Warning,
    Error,
}

/// Static description of the diagnostic a host registers for the fix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub category: &'static str,
    pub severity: DiagnosticSeverity,
    pub enabled_by_default: bool,
}

impl DiagnosticDescriptor {
    pub const QUICK_ASSERTS: DiagnosticDescriptor = DiagnosticDescriptor {
        id: "QuickAsserts",
        title: "Can create assertions",
        message: "Create assertions",
        category: "Naming",
        severity: DiagnosticSeverity::Hidden,
        enabled_by_default: true,
    };
}
