//! Statement IR for generated assertions
//!
//! The synthesizer builds `IRNode` trees instead of strings and
//! [`IRPrinter`](crate::ir_printer::IRPrinter) turns them into C# source.
//! Only the constructs an assertion statement needs are represented:
//! literals, identifiers, member access, calls and object creation.

/// Intermediate representation of a C# expression or statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IRNode {
    // =========================================================================
    // Literals
    // =========================================================================
    /// Numeric literal: `0`, `2026`
    NumericLiteral(String),

    /// String literal: `""`, `"name"`
    StringLiteral(String),

    /// Boolean literal: `true`, `false`
    BooleanLiteral(bool),

    /// `null`
    NullLiteral,

    // =========================================================================
    // Expressions
    // =========================================================================
    /// Identifier: `model`, `Assert`
    Identifier(String),

    /// Member access: `object.property`
    PropertyAccess { object: Box<Self>, property: String },

    /// Invocation: `callee(args)`
    CallExpr {
        callee: Box<Self>,
        arguments: Vec<Self>,
    },

    /// Object creation: `new Callee(args)`
    NewExpr {
        callee: Box<Self>,
        arguments: Vec<Self>,
    },

    // =========================================================================
    // Statements
    // =========================================================================
    /// `expr;`
    ExpressionStatement(Box<Self>),
}

// =========================================================================
// Builder helpers for IR construction
// =========================================================================

impl IRNode {
    /// Create an identifier node
    pub fn id(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// Create a string literal
    pub fn string(s: impl Into<String>) -> Self {
        Self::StringLiteral(s.into())
    }

    /// Create a numeric literal
    pub fn number(n: impl Into<String>) -> Self {
        Self::NumericLiteral(n.into())
    }

    pub const fn bool(value: bool) -> Self {
        Self::BooleanLiteral(value)
    }

    pub const fn null() -> Self {
        Self::NullLiteral
    }

    /// Create a call expression
    pub fn call(callee: Self, args: Vec<Self>) -> Self {
        Self::CallExpr {
            callee: Box::new(callee),
            arguments: args,
        }
    }

    /// Create a property access
    pub fn prop(object: Self, property: impl Into<String>) -> Self {
        Self::PropertyAccess {
            object: Box::new(object),
            property: property.into(),
        }
    }

    /// Create a new expression: `new Constructor(args)`
    pub fn new_expr(callee: Self, args: Vec<Self>) -> Self {
        Self::NewExpr {
            callee: Box::new(callee),
            arguments: args,
        }
    }

    /// Create an expression statement
    pub fn expr_stmt(expr: Self) -> Self {
        Self::ExpressionStatement(Box::new(expr))
    }

    /// Left-associated member chain from a dotted name: `a.b.c` becomes
    /// `(a.b).c`. Empty parts are skipped.
    pub fn dotted(name: &str) -> Self {
        let mut parts = name.split('.').filter(|part| !part.is_empty());
        let first = parts.next().unwrap_or_default();
        parts.fold(Self::id(first), Self::prop)
    }

    pub const fn is_statement(&self) -> bool {
        matches!(self, Self::ExpressionStatement(_))
    }
}
