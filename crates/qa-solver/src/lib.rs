//! Type Model and Property Traversal
//!
//! This crate answers one question: which values reachable from a variable
//! can be compared against a literal in an assertion?
//!
//! - **`TypeDatabase`**: read-only view of the host's semantic model
//! - **`TypeStore`**: interned in-memory implementation of that view
//! - **Classification**: every type lands in exactly one category
//! - **Traversal**: depth-first walk producing [`ReflectedProperty`] leaves
//!   with cycle, depth and budget limits
mod context;
mod db;
mod format;
pub mod path;
pub mod recursion;
mod reflected;
pub mod store;
mod traverse;
pub mod type_classifier;
pub mod types;

pub use context::{Ancestors, TraversalContext};
pub use db::TypeDatabase;
pub use format::TypeFormatter;
pub use path::{AccessPath, AccessorSuffix, PathParseError, PathSegment};
pub use recursion::{ExpansionBudget, RecursionProfile, RecursionResult};
pub use reflected::{PrimitiveKind, ReflectedProperty};
pub use store::TypeStore;
pub use traverse::{PropertyTraverser, Traversal, TraversalOptions, traverse};
pub use type_classifier::{TypeClassification, classify_type};
pub use types::{PropertyInfo, TypeData, TypeFlags, TypeId, Visibility};
