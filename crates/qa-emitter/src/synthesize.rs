//! Assertion synthesis.
//!
//! Turns traversal leaves into `Assert.AreEqual(expected, actual)` statements.
//! `expected` is a placeholder literal chosen by the leaf's kind, `actual` is
//! the leaf's access path as a member-access chain:
//!
//! | Kind | Expected |
//! |------|----------|
//! | Integer, Enum | `0` |
//! | DateTime | `new DateTime(<year>, 1, 1)` |
//! | Boolean | `false` |
//! | String | `""` |
//! | Unknown | `null` |

use crate::clock::Clock;
use crate::ir::IRNode;
use crate::ir_printer::IRPrinter;
use qa_solver::{AccessPath, PathSegment, PrimitiveKind, ReflectedProperty};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, span};

pub const MSTEST_ASSERT_EQUAL: &str = "Assert.AreEqual";
pub const XUNIT_ASSERT_EQUAL: &str = "Assert.Equal";

const DATE_TIME: &str = "DateTime";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArgumentOrder {
    /// `Assert.AreEqual(expected, actual)`
    #[default]
    ExpectedFirst,
    /// `assert(actual, expected)` style frameworks
    ActualFirst,
}

/// Which method the generated statements call, and how arguments are laid
/// out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssertionStyle {
    /// Dotted callee, e.g. `Assert.AreEqual`.
    pub target: String,
    pub argument_order: ArgumentOrder,
}

impl AssertionStyle {
    pub fn mstest() -> Self {
        Self {
            target: MSTEST_ASSERT_EQUAL.to_string(),
            argument_order: ArgumentOrder::ExpectedFirst,
        }
    }

    pub fn xunit() -> Self {
        Self {
            target: XUNIT_ASSERT_EQUAL.to_string(),
            argument_order: ArgumentOrder::ExpectedFirst,
        }
    }

    fn arguments(&self, expected: IRNode, actual: IRNode) -> Vec<IRNode> {
        match self.argument_order {
            ArgumentOrder::ExpectedFirst => vec![expected, actual],
            ArgumentOrder::ActualFirst => vec![actual, expected],
        }
    }
}

impl Default for AssertionStyle {
    fn default() -> Self {
        Self::mstest()
    }
}

/// One generated assertion, still in IR form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssertionStatement {
    pub path: AccessPath,
    pub kind: PrimitiveKind,
    pub node: IRNode,
}

impl AssertionStatement {
    pub fn to_source(&self) -> String {
        IRPrinter::emit_to_string(&self.node)
    }
}

pub struct AssertionSynthesizer {
    style: AssertionStyle,
    reference_year: i32,
}

impl AssertionSynthesizer {
    /// Synthesizer whose `DateTime` placeholders use `reference_year`.
    pub fn new(reference_year: i32) -> Self {
        Self {
            style: AssertionStyle::default(),
            reference_year,
        }
    }

    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self::new(clock.current_year())
    }

    pub fn with_style(mut self, style: AssertionStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &AssertionStyle {
        &self.style
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Placeholder the user replaces with the real expected value.
    pub fn expected_literal(&self, kind: PrimitiveKind) -> IRNode {
        match kind {
            PrimitiveKind::Integer | PrimitiveKind::Enum => IRNode::number("0"),
            PrimitiveKind::DateTime => IRNode::new_expr(
                IRNode::id(DATE_TIME),
                vec![
                    IRNode::number(self.reference_year.to_string()),
                    IRNode::number("1"),
                    IRNode::number("1"),
                ],
            ),
            PrimitiveKind::Boolean => IRNode::bool(false),
            PrimitiveKind::String => IRNode::string(""),
            PrimitiveKind::Unknown => IRNode::null(),
        }
    }

    pub fn assertion(&self, property: &ReflectedProperty) -> AssertionStatement {
        let arguments = self.style.arguments(
            self.expected_literal(property.kind),
            actual_expression(&property.path),
        );
        let call = IRNode::call(IRNode::dotted(&self.style.target), arguments);
        AssertionStatement {
            path: property.path.clone(),
            kind: property.kind,
            node: IRNode::expr_stmt(call),
        }
    }

    /// One statement per leaf, in input order.
    pub fn synthesize(&self, properties: &[ReflectedProperty]) -> Vec<AssertionStatement> {
        let _span = span!(Level::DEBUG, "synthesize", count = properties.len()).entered();
        let statements: Vec<_> = properties.iter().map(|p| self.assertion(p)).collect();
        debug!(
            statements = statements.len(),
            target = %self.style.target,
            "synthesized assertions"
        );
        statements
    }
}

/// `actual` side of an assertion: the root identifier followed by member
/// accesses, with invocation segments turned into calls.
pub fn actual_expression(path: &AccessPath) -> IRNode {
    let mut segments = path.segments().iter();
    let root = match segments.next() {
        Some(first) => IRNode::id(first.name()),
        None => IRNode::id(""),
    };
    segments.fold(root, |object, segment| match segment {
        PathSegment::Member(name) => IRNode::prop(object, name.as_str()),
        PathSegment::Invocation(name) => IRNode::call(IRNode::prop(object, name.as_str()), vec![]),
    })
}

/// Render statements one per line at `indent_level`.
pub fn render_statements(statements: &[AssertionStatement], indent: &str, indent_level: u32) -> String {
    let mut printer = IRPrinter::with_indent(indent);
    printer.set_indent_level(indent_level);
    printer.emit_statements(statements.iter().map(|s| &s.node));
    printer.take_output()
}

#[cfg(test)]
#[path = "tests/synthesize_tests.rs"]
mod tests;
