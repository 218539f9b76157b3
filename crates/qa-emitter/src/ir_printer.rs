//! IR printer: renders [`IRNode`] trees as C# source.

use crate::ir::IRNode;
use std::fmt::Write as _;

/// Default indent unit, matching the usual C# formatter setting.
pub const DEFAULT_INDENT: &str = "    ";

pub struct IRPrinter<'a> {
    output: String,
    indent_level: u32,
    indent_str: &'a str,
}

impl<'a> IRPrinter<'a> {
    pub fn new() -> Self {
        Self::with_indent(DEFAULT_INDENT)
    }

    pub fn with_indent(indent_str: &'a str) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_str,
        }
    }

    /// Render a single node with no indentation.
    pub fn emit_to_string(node: &IRNode) -> String {
        let mut printer = IRPrinter::new();
        printer.emit(node);
        printer.take_output()
    }

    pub const fn set_indent_level(&mut self, level: u32) {
        self.indent_level = level;
    }

    pub fn emit(&mut self, node: &IRNode) {
        self.emit_node(node);
    }

    /// One statement per line, each at the current indent level.
    pub fn emit_statements<'n>(&mut self, statements: impl IntoIterator<Item = &'n IRNode>) {
        for statement in statements {
            self.write_indent();
            self.emit_node(statement);
            self.write_line();
        }
    }

    pub fn get_output(&self) -> &str {
        &self.output
    }

    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    fn emit_node(&mut self, node: &IRNode) {
        match node {
            IRNode::NumericLiteral(n) => self.write(n),
            IRNode::StringLiteral(s) => {
                self.write("\"");
                self.write_escaped(s);
                self.write("\"");
            }
            IRNode::BooleanLiteral(b) => self.write(if *b { "true" } else { "false" }),
            IRNode::NullLiteral => self.write("null"),
            IRNode::Identifier(name) => self.write(name),
            IRNode::PropertyAccess { object, property } => {
                self.emit_node(object);
                self.write(".");
                self.write(property);
            }
            IRNode::CallExpr { callee, arguments } => {
                self.emit_node(callee);
                self.emit_arguments(arguments);
            }
            IRNode::NewExpr { callee, arguments } => {
                self.write("new ");
                self.emit_node(callee);
                self.emit_arguments(arguments);
            }
            IRNode::ExpressionStatement(expr) => {
                self.emit_node(expr);
                self.write(";");
            }
        }
    }

    fn emit_arguments(&mut self, arguments: &[IRNode]) {
        self.write("(");
        for (i, arg) in arguments.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_node(arg);
        }
        self.write(")");
    }

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// C# regular string literal escapes.
    fn write_escaped(&mut self, s: &str) {
        for c in s.chars() {
            match c {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\0' => self.output.push_str("\\0"),
                c if (c as u32) < 0x20 || c == '\x7F' => {
                    let _ = write!(self.output, "\\u{:04X}", c as u32);
                }
                _ => self.output.push(c),
            }
        }
    }

    fn write_line(&mut self) {
        self.output.push('\n');
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(self.indent_str);
        }
    }
}

impl Default for IRPrinter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/ir_printer_tests.rs"]
mod tests;
