//! quick-asserts
//!
//! Generates `Assert.AreEqual(expected, actual)` statements for every public
//! property reachable from a variable declared in a test method. The work is
//! split across the workspace crates:
//!
//! - `qa-common`: interner, limits, cancellation, errors and notes
//! - `qa-solver`: type model, classification and property traversal
//! - `qa-emitter`: assertion synthesis and C# printing
//! - `qa-fix`: trigger, options and code-fix assembly
//!
//! ```ignore
//! let mut store = TypeStore::new();
//! let order = store.class("Order", &[("Id", TypeId::INT32)]);
//! let site = DeclarationSite::new("OrderTests.cs", "order", order)
//!     .in_method(MethodInfo::new("Builds_order", ["TestMethod"]));
//! let fix = AssertionFix::new(&store, &SystemClock).code_fix(&site)?;
//! ```

pub mod tracing_config;

pub use qa_common as common;
pub use qa_emitter as emitter;
pub use qa_fix as fix;
pub use qa_solver as solver;

pub use qa_common::{CancellationToken, NoteKind, QuickAssertsError, Result, TraversalNote};
pub use qa_emitter::{
    AssertionStatement, AssertionStyle, AssertionSynthesizer, Clock, FixedClock, SystemClock,
};
pub use qa_fix::{
    AssertionFix, AssertionSink, CodeFixInfo, DeclarationSite, FixOptions, InsertionPoint,
    MethodInfo, check_trigger,
};
pub use qa_solver::{
    AccessPath, PrimitiveKind, PropertyTraverser, ReflectedProperty, Traversal, TraversalOptions,
    TypeDatabase, TypeId, TypeStore, traverse,
};
pub use tracing_config::init_tracing;

/// Traverse `root` and synthesize its assertions in one call.
///
/// No trigger check and no sink; the statements come back in order.
pub fn assertions_for(
    db: &dyn TypeDatabase,
    root: TypeId,
    identifier: &str,
    clock: &dyn Clock,
) -> Vec<AssertionStatement> {
    let traversal = traverse(db, root, identifier);
    AssertionSynthesizer::from_clock(clock).synthesize(&traversal.properties)
}
