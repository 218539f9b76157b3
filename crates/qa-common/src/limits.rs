//! Centralized limits and thresholds for type-graph traversal.
//!
//! Type graphs can be self-referential (`Node { Next: Node }`) and every
//! sampled collection member doubles the work below it (`FirstOrDefault()`
//! and `LastOrDefault()` are both expanded). These limits bound both effects.
//!
//! # Traverser recursion limits
//!
//! The traverser picks its limits through
//! [`qa_solver::recursion::RecursionProfile`] rather than reading these
//! constants directly; the profiles are the single place the pairs are chosen.

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum nesting depth of user-object expansion.
///
/// Cycles are caught by the on-path check before this limit is reached. The
/// depth limit only matters for very deep acyclic graphs, e.g. generated DTO
/// hierarchies.
///
/// # C# example
///
/// ```csharp
/// class Level0 { public Level1 Next { get; set; } }
/// class Level1 { public Level2 Next { get; set; } }
/// // ... 32+ distinct levels ...
/// ```
pub const MAX_TRAVERSAL_DEPTH: u32 = 32;

/// Depth used by the shallow profile, enough for typical request/response
/// models without exploring framework internals.
pub const SHALLOW_TRAVERSAL_DEPTH: u32 = 8;

// =============================================================================
// Operation Counts
// =============================================================================

/// Maximum number of type expansions in one traversal.
///
/// Every collection of user objects expands its element type twice. A chain
/// of nested collections therefore grows as 2^n:
///
/// ```csharp
/// class Order { public List<Line> Lines { get; set; } }
/// class Line { public List<Tax> Taxes { get; set; } }
/// class Tax { public List<Rate> Rates { get; set; } }
/// ```
///
/// Once the budget is spent the remaining branches emit nothing.
pub const MAX_TRAVERSAL_EXPANSIONS: u32 = 10_000;

/// Maximum number of leaf records a single traversal may emit.
pub const MAX_EMITTED_PROPERTIES: usize = 5_000;
