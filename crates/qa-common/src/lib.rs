//! Common types and utilities for quick-asserts.
//!
//! This crate provides foundational types used across all quick-asserts crates:
//! - String interning for type and member names (`Atom`, `Interner`)
//! - Traversal limits and thresholds
//! - Cooperative cancellation (`CancellationToken`)
//! - The error type and non-fatal traversal notes

// String interning for type and member names
pub mod interner;
pub use interner::{Atom, Interner};

// Centralized limits and thresholds
pub mod limits;

// Cooperative cancellation between top-level property visits
pub mod cancellation;
pub use cancellation::CancellationToken;

// Errors, notes and the code-fix diagnostic descriptor
pub mod diagnostics;
pub use diagnostics::{
    DiagnosticDescriptor, DiagnosticSeverity, NoteKind, QuickAssertsError, RecursionLimit, Result,
    TraversalNote,
};
